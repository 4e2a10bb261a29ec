//! Capability declarations the host queries when wiring a repository in.

use serde::{Deserialize, Serialize};

/// How a picked file can be handed back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// The host stores only the external URL.
    Reference,
    /// The host downloads its own copy of the file.
    DownloadedCopy,
}

/// Broad category of files a repository serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    WebImage,
    WebVideo,
}

/// What a repository supports, declared once at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryCapabilities {
    pub return_types: Vec<ReturnType>,
    pub file_categories: Vec<FileCategory>,
    pub requires_login: bool,
    /// Static attribution image shown on the search screen, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_logo: Option<String>,
}
