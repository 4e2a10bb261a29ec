//! GifRepo Picker — the file-picker surface of the Giphy repository plugin:
//! folder/file formatting, the listing entry points the host calls, admin
//! settings-form descriptors and UI strings.

pub mod format;
pub mod lang;
pub mod repository;
pub mod settings;
pub mod types;

pub use format::{format_files, format_folders};
pub use repository::{GiphyRepository, ListingProvider};
pub use types::{
    AllowedExtensions, Breadcrumb, FileEntry, FileListing, FolderEntry, FolderListing, Listing,
};
