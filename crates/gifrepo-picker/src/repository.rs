//! The repository surface the host wires in: the `ListingProvider` contract
//! and its Giphy-backed implementation.

use gifrepo_core::{
    FileCategory, RepositoryCapabilities, RepositoryConfig, ReturnType,
};
use gifrepo_giphy::{GifSource, GiphyClient};
use tracing::warn;

use crate::format::{format_files, format_folders};
use crate::types::{AllowedExtensions, Listing};

/// Host-side extension point: anything that can serve picker listings.
///
/// Object-safe so the host can hold `Box<dyn ListingProvider>` per plugin.
pub trait ListingProvider {
    /// List a path: empty means browse (the trending feed), otherwise drill
    /// into the item the path names. `page` arrives as the raw string the
    /// picker sends.
    fn list(&self, path: &str, page: &str) -> Listing;

    /// Search by keyword. Results are always the folder view; the user
    /// drills into a result to reach selectable files.
    fn search(&self, text: &str, page: &str) -> Listing;
}

/// Giphy-backed repository plugin, generic over the fetch source.
pub struct GiphyRepository<S: GifSource = GiphyClient> {
    client: S,
    allowed: AllowedExtensions,
}

impl GiphyRepository {
    pub fn new(config: RepositoryConfig, allowed: AllowedExtensions) -> Self {
        Self {
            client: GiphyClient::new(config),
            allowed,
        }
    }

    /// What this plugin supports, declared once at registration.
    pub fn capabilities() -> RepositoryCapabilities {
        RepositoryCapabilities {
            return_types: vec![ReturnType::Reference, ReturnType::DownloadedCopy],
            file_categories: vec![FileCategory::WebImage, FileCategory::WebVideo],
            requires_login: false,
            attribution_logo: Some("pix/Poweredby_100px-Black_VertLogo.png".to_string()),
        }
    }
}

impl<S: GifSource> GiphyRepository<S> {
    /// Wire in an alternative fetch source.
    pub fn with_source(client: S, allowed: AllowedExtensions) -> Self {
        Self { client, allowed }
    }
}

impl<S: GifSource> ListingProvider for GiphyRepository<S> {
    fn list(&self, path: &str, page: &str) -> Listing {
        let page = parse_page(page);
        if path.is_empty() {
            match self.client.fetch(None, None, page, 0) {
                Ok(resp) => format_folders(&resp),
                Err(e) => {
                    warn!(error = %e, "trending fetch failed, returning empty listing");
                    Listing::empty_folders()
                }
            }
        } else {
            match self.client.fetch(Some(path), None, page, 0) {
                Ok(resp) => format_files(&resp, &self.allowed),
                Err(e) => {
                    warn!(error = %e, id = path, "item fetch failed, returning empty listing");
                    Listing::empty_files()
                }
            }
        }
    }

    fn search(&self, text: &str, page: &str) -> Listing {
        let page = parse_page(page);
        match self.client.fetch(None, Some(text), page, 0) {
            Ok(resp) => format_folders(&resp),
            Err(e) => {
                warn!(error = %e, query = text, "search fetch failed, returning empty listing");
                Listing::empty_folders()
            }
        }
    }
}

/// The picker sends the page as a string; anything unparsable means "first".
fn parse_page(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
