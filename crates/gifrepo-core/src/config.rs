//! Repository configuration: API key, content rating, page size.
//!
//! The host's admin form writes these values; the adapter only ever reads
//! them. `load` mirrors how the host hands the stored values over as JSON,
//! but a config can also be built directly and injected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Page sizes the admin form offers for `page_size`.
pub const PAGE_SIZES: [u32; 6] = [25, 50, 100, 250, 500, 1000];

/// Content-maturity filter applied to API queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    /// No filter; serialized as the empty string the API expects.
    #[default]
    #[serde(rename = "")]
    Any,
    Y,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "PG")]
    Pg,
    R,
    G,
}

impl Rating {
    /// Every rating, in the order the admin form lists them.
    pub fn all() -> [Rating; 6] {
        [
            Rating::Any,
            Rating::Y,
            Rating::Pg13,
            Rating::Pg,
            Rating::R,
            Rating::G,
        ]
    }

    /// Value of the `rating` query parameter; empty means "any".
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Rating::Any => "",
            Rating::Y => "Y",
            Rating::Pg13 => "PG-13",
            Rating::Pg => "PG",
            Rating::R => "R",
            Rating::G => "G",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

/// Stored plugin configuration, read at request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Giphy API key, issued per application.
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub rating: Rating,
    /// Items requested per API call.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    25
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            rating: Rating::Any,
            page_size: default_page_size(),
        }
    }
}

impl RepositoryConfig {
    pub fn new(api_key: impl Into<String>, rating: Rating, page_size: u32) -> Self {
        Self {
            api_key: api_key.into(),
            rating,
            page_size,
        }
    }

    /// Load config from a JSON file, or return defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => {
                    info!(path = %path.display(), "repository config loaded");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "bad config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Check the stored values are usable before issuing any API call.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config("api_key is not set".into()));
        }
        if !PAGE_SIZES.contains(&self.page_size) {
            return Err(Error::Config(format!(
                "page_size {} is not one of {:?}",
                self.page_size, PAGE_SIZES
            )));
        }
        Ok(())
    }
}
