//! Handler types and dependencies

use tutorcore::DialogueController;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub controller: DialogueController,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(controller: DialogueController) -> Self {
        Self { controller }
    }
}
