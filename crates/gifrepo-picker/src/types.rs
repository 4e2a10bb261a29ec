//! Listing envelopes and entries — the shapes the host file picker renders.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::lang;

/// Extensions the host allows for the current picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedExtensions {
    /// The `"*"` sentinel the host sends when anything goes.
    Any,
    /// Concrete dotted extensions, e.g. `".gif"`.
    Only(BTreeSet<String>),
}

impl AllowedExtensions {
    /// Dotted extensions the wildcard stands for.
    pub const WILDCARD: [&'static str; 3] = [".gif", ".mp4", ".webp"];

    pub fn from_list<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowedExtensions::Only(
            extensions
                .into_iter()
                .map(|e| e.into().to_ascii_lowercase())
                .collect(),
        )
    }

    /// Whether a dotted, lowercased extension passes the filter.
    pub fn allows(&self, dotted: &str) -> bool {
        match self {
            AllowedExtensions::Any => Self::WILDCARD.contains(&dotted),
            AllowedExtensions::Only(set) => set.contains(dotted),
        }
    }
}

/// One segment of the file-view breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

impl Breadcrumb {
    /// The root crumb: the repository itself.
    pub fn root() -> Self {
        Self {
            name: lang::string("pluginname").to_string(),
            path: String::new(),
        }
    }
}

/// One browse/search result; the host drills in via `path`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderEntry {
    pub title: String,
    pub shorttitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Always empty; the host loads contents lazily through `dynload`.
    pub children: Vec<FolderEntry>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// One selectable file rendition of a single item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub title: String,
    pub shorttitle: String,
    pub source: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}

/// Browse/search envelope: metadata-only folders the host expands lazily.
#[derive(Debug, Clone, Serialize)]
pub struct FolderListing {
    pub nologin: bool,
    pub dynload: bool,
    pub page: u64,
    pub pages: u64,
    pub list: Vec<FolderEntry>,
}

/// Drill-in envelope: the selectable files of one item.
#[derive(Debug, Clone, Serialize)]
pub struct FileListing {
    pub path: Vec<Breadcrumb>,
    pub nologin: bool,
    pub dynload: bool,
    pub page: u64,
    pub pages: u64,
    pub list: Vec<FileEntry>,
}

/// What `list`/`search` hand back to the host picker.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Listing {
    Folders(FolderListing),
    Files(FileListing),
}

impl Listing {
    /// Empty folder view, used when a browse/search fetch fails.
    pub fn empty_folders() -> Self {
        Listing::Folders(FolderListing {
            nologin: true,
            dynload: true,
            page: 1,
            pages: 0,
            list: Vec::new(),
        })
    }

    /// Empty file view, used when an item fetch fails.
    pub fn empty_files() -> Self {
        Listing::Files(FileListing {
            path: vec![Breadcrumb::root()],
            nologin: true,
            dynload: false,
            page: 1,
            pages: 1,
            list: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_allows_only_known_extensions() {
        let any = AllowedExtensions::Any;
        assert!(any.allows(".gif"));
        assert!(any.allows(".mp4"));
        assert!(any.allows(".webp"));
        assert!(!any.allows(".png"));
    }

    #[test]
    fn test_explicit_set() {
        let only = AllowedExtensions::from_list([".GIF"]);
        assert!(only.allows(".gif"));
        assert!(!only.allows(".mp4"));
    }

    #[test]
    fn test_empty_listings() {
        match Listing::empty_folders() {
            Listing::Folders(folders) => {
                assert!(folders.dynload);
                assert!(folders.list.is_empty());
            }
            Listing::Files(_) => panic!("expected folder view"),
        }
        match Listing::empty_files() {
            Listing::Files(files) => {
                assert!(!files.dynload);
                assert!(files.list.is_empty());
                assert_eq!(files.path.len(), 1);
                assert_eq!(files.path[0].name, "Giphy");
            }
            Listing::Folders(_) => panic!("expected file view"),
        }
    }
}
