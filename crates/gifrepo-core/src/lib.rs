//! GifRepo Core — shared plugin infrastructure: errors, configuration,
//! capability declarations.

pub mod capabilities;
pub mod config;
pub mod error;

pub use capabilities::{FileCategory, RepositoryCapabilities, ReturnType};
pub use config::{Rating, RepositoryConfig, PAGE_SIZES};
pub use error::{Error, Result};
