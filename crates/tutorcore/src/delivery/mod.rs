//! Document delivery
//!
//! Resolves a [`DocumentDescriptor`] to a file and streams it to the chat
//! through the [`ChatGateway`]. Every failure ends as a short notice in the
//! chat; nothing propagates to the caller.

pub mod remote;

use std::path::{Path, PathBuf};

use reqwest::Client;
use url::Url;

use crate::catalog::DocumentDescriptor;
use crate::core::error::AppResult;
use crate::gateway::{ChatGateway, ChatKey, Reply};

/// Local file is missing
pub const NOT_FOUND_NOTICE: &str = "⚠️ Файл не знайдено.";
/// Descriptor has neither path nor URL
pub const INVALID_CONFIGURATION_NOTICE: &str = "Невірна конфігурація файлу.";
/// Anything else went wrong
pub const SEND_FAILED_NOTICE: &str = "Не вдалося надіслати PDF.";

/// Result of a single delivery, after the user has been notified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent { file_name: String },
    NotFound,
    InvalidDescriptor,
    Failed,
}

/// Delivers local and remote documents
#[derive(Debug, Clone)]
pub struct DocumentDelivery {
    client: Client,
    base_dir: PathBuf,
    scratch_dir: PathBuf,
}

impl DocumentDelivery {
    /// Creates a delivery routine with the default download client
    ///
    /// # Arguments
    /// * `base_dir` - Directory relative document paths resolve against
    /// * `scratch_dir` - Where remote documents are staged, created on demand
    pub fn new(base_dir: impl Into<PathBuf>, scratch_dir: impl Into<PathBuf>) -> AppResult<Self> {
        Ok(Self::with_client(remote::build_client()?, base_dir, scratch_dir))
    }

    pub fn with_client(client: Client, base_dir: impl Into<PathBuf>, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base_dir: base_dir.into(),
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Absolute paths are kept, relative ones are joined onto the base dir
    pub fn resolve_local(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Sends the document described by `descriptor` to `chat`
    ///
    /// # Arguments
    /// * `gateway` - Gateway of the requesting chat
    /// * `chat` - Requesting chat
    /// * `descriptor` - Local path or remote URL of the document
    /// * `fallback_filename` - Used when the path or URL yields no filename
    pub async fn deliver(
        &self,
        gateway: &dyn ChatGateway,
        chat: ChatKey,
        descriptor: &DocumentDescriptor,
        fallback_filename: &str,
    ) -> DeliveryOutcome {
        let result = match descriptor {
            DocumentDescriptor::LocalPath(path) => self.deliver_local(gateway, chat, path, fallback_filename).await,
            DocumentDescriptor::RemoteUrl(url) => self.deliver_remote(gateway, chat, url, fallback_filename).await,
            DocumentDescriptor::Unconfigured => self.reject_unconfigured(gateway, chat, fallback_filename).await,
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Failed to deliver {} to chat {}: {}", fallback_filename, chat, e);
                if let Err(e) = gateway.reply(chat, Reply::text(SEND_FAILED_NOTICE)).await {
                    log::error!("Failed to notify chat {} about failed delivery: {}", chat, e);
                }
                DeliveryOutcome::Failed
            }
        }
    }

    async fn deliver_local(
        &self,
        gateway: &dyn ChatGateway,
        chat: ChatKey,
        path: &Path,
        fallback_filename: &str,
    ) -> AppResult<DeliveryOutcome> {
        let path = self.resolve_local(path);

        if !tokio::fs::try_exists(&path).await? {
            log::warn!("Document not found for chat {}: {}", chat, path.display());
            gateway.reply(chat, Reply::text(NOT_FOUND_NOTICE)).await?;
            return Ok(DeliveryOutcome::NotFound);
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback_filename.to_string());

        let file = tokio::fs::File::open(&path).await?;
        gateway.send_document(chat, file, file_name.clone()).await?;

        log::info!("Sent {} to chat {}", path.display(), chat);
        Ok(DeliveryOutcome::Sent { file_name })
    }

    async fn deliver_remote(
        &self,
        gateway: &dyn ChatGateway,
        chat: ChatKey,
        raw_url: &str,
        fallback_filename: &str,
    ) -> AppResult<DeliveryOutcome> {
        let url = Url::parse(raw_url)?;
        let file_name = remote::filename_from_url(&url).unwrap_or_else(|| fallback_filename.to_string());

        let staged = remote::download_to_scratch(&self.client, &url, &self.scratch_dir, &file_name).await?;

        let sent = Self::send_staged(gateway, chat, &staged, &file_name).await;
        remote::remove_best_effort(&staged).await;
        sent?;

        log::info!("Sent {} to chat {}", url, chat);
        Ok(DeliveryOutcome::Sent { file_name })
    }

    async fn send_staged(gateway: &dyn ChatGateway, chat: ChatKey, staged: &Path, file_name: &str) -> AppResult<()> {
        let file = tokio::fs::File::open(staged).await?;
        gateway.send_document(chat, file, file_name.to_string()).await
    }

    async fn reject_unconfigured(
        &self,
        gateway: &dyn ChatGateway,
        chat: ChatKey,
        fallback_filename: &str,
    ) -> AppResult<DeliveryOutcome> {
        log::warn!("Document {} has neither path nor url configured", fallback_filename);
        gateway.reply(chat, Reply::text(INVALID_CONFIGURATION_NOTICE)).await?;
        Ok(DeliveryOutcome::InvalidDescriptor)
    }
}
