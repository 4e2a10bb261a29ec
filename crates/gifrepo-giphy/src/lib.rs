//! GifRepo Giphy — typed client for the Giphy GIF API.

pub mod fetch;
pub mod models;

pub use fetch::{GifSource, GiphyClient, QueryMode};
pub use models::{
    Envelope, ImageVariant, Item, NormalizedResponse, Pagination, SourceField, User,
};
