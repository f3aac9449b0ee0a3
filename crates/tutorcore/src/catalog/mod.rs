//! Topic catalog: the fixed, ordered list of topics the bot offers
//!
//! Each topic carries a theory and a practice document. Lookups are linear
//! scans where the first match wins; duplicate titles or keys are reported by
//! [`TopicCatalog::duplicates`] but never rejected.

mod builtin;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::core::error::AppResult;

/// Button label for the theory document
pub const THEORY_LABEL: &str = "Теорія";
/// Button label for the practice document
pub const PRACTICE_LABEL: &str = "Практика";

/// Which of a topic's two documents is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    Theory,
    Practice,
}

impl DocumentKind {
    /// User-facing button label
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Theory => THEORY_LABEL,
            DocumentKind::Practice => PRACTICE_LABEL,
        }
    }

    /// Parses an exact button label
    pub fn from_label(text: &str) -> Option<Self> {
        match text {
            THEORY_LABEL => Some(DocumentKind::Theory),
            PRACTICE_LABEL => Some(DocumentKind::Practice),
            _ => None,
        }
    }
}

/// Where a document lives
///
/// Stored on disk as `{"path": "..."}` or `{"url": "..."}`. An entry with
/// neither deserializes to `Unconfigured`; with both, the path wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor", into = "RawDescriptor")]
pub enum DocumentDescriptor {
    /// Filesystem path, relative ones resolve against the base directory
    LocalPath(PathBuf),
    /// HTTP(S) URL fetched on demand
    RemoteUrl(String),
    /// Neither path nor URL was configured
    Unconfigured,
}

impl DocumentDescriptor {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        DocumentDescriptor::LocalPath(path.into())
    }

    pub fn remote(url: impl Into<String>) -> Self {
        DocumentDescriptor::RemoteUrl(url.into())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl From<RawDescriptor> for DocumentDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        match (non_empty(raw.path), non_empty(raw.url)) {
            (Some(path), _) => DocumentDescriptor::LocalPath(PathBuf::from(path)),
            (None, Some(url)) => DocumentDescriptor::RemoteUrl(url),
            (None, None) => DocumentDescriptor::Unconfigured,
        }
    }
}

impl From<DocumentDescriptor> for RawDescriptor {
    fn from(descriptor: DocumentDescriptor) -> Self {
        match descriptor {
            DocumentDescriptor::LocalPath(path) => RawDescriptor {
                path: Some(path.to_string_lossy().into_owned()),
                url: None,
            },
            DocumentDescriptor::RemoteUrl(url) => RawDescriptor { path: None, url: Some(url) },
            DocumentDescriptor::Unconfigured => RawDescriptor::default(),
        }
    }
}

/// The two documents attached to a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFiles {
    pub theory: DocumentDescriptor,
    pub practice: DocumentDescriptor,
}

impl TopicFiles {
    pub fn get(&self, kind: DocumentKind) -> &DocumentDescriptor {
        match kind {
            DocumentKind::Theory => &self.theory,
            DocumentKind::Practice => &self.practice,
        }
    }
}

/// A topic as shown in the main menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Stable identifier stored in the navigation state
    pub key: String,
    /// Button label, matched exactly against inbound text
    pub title: String,
    pub files: TopicFiles,
}

impl TopicRecord {
    /// Filename used when neither the path nor the URL yields one,
    /// e.g. `arrays_practice.pdf`
    pub fn fallback_filename(&self, kind: DocumentKind) -> String {
        format!(
            "{}_{}.{}",
            self.key,
            kind,
            crate::core::config::dialogue::DEFAULT_FILE_EXTENSION
        )
    }
}

/// Duplicate titles and keys found in a catalog
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Duplicates {
    pub titles: Vec<String>,
    pub keys: Vec<String>,
}

impl Duplicates {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.keys.is_empty()
    }
}

/// Immutable, ordered topic list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicCatalog {
    topics: Vec<TopicRecord>,
}

impl TopicCatalog {
    pub fn new(topics: Vec<TopicRecord>) -> Self {
        Self { topics }
    }

    /// Catalog compiled into the binary
    pub fn builtin() -> Self {
        Self::new(builtin::topics())
    }

    /// Parses a JSON array of topic records
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON catalog file
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs_err::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&TopicRecord> {
        self.topics.iter().find(|t| t.title == title)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&TopicRecord> {
        self.topics.iter().find(|t| t.key == key)
    }

    /// Topic titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.title.as_str())
    }

    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Titles and keys that occur more than once, each reported once
    pub fn duplicates(&self) -> Duplicates {
        fn repeated<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();
            let mut out = Vec::new();
            for value in values {
                if !seen.insert(value) && reported.insert(value) {
                    out.push(value.to_string());
                }
            }
            out
        }

        Duplicates {
            titles: repeated(self.topics.iter().map(|t| t.title.as_str())),
            keys: repeated(self.topics.iter().map(|t| t.key.as_str())),
        }
    }
}
