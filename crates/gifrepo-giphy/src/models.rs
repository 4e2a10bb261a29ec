//! Giphy API payload types and the normalized response handed to formatters.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Top-level JSON envelope returned by every Giphy endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub meta: Meta,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub pagination: RawPagination,
}

/// API status block. `status` mirrors the HTTP status of the call.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub status: u16,
    #[serde(default)]
    pub msg: String,
}

/// Single-id endpoints return one object under `data`, list endpoints an
/// array. Both parse into the same variant-tagged shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Data {
    Many(Vec<Item>),
    One(Box<Item>),
}

impl Default for Data {
    fn default() -> Self {
        Data::Many(Vec::new())
    }
}

impl Data {
    /// Flatten into a uniform item sequence.
    pub fn into_items(self) -> Vec<Item> {
        match self {
            Data::Many(items) => items,
            Data::One(item) => vec![*item],
        }
    }
}

/// Pagination block as the API sends it. Absent on single-id responses.
#[derive(Debug, Default, Deserialize)]
pub struct RawPagination {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub count: u64,
}

/// One media object, with its named format renditions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    /// "YYYY-MM-DD HH:MM:SS" in the API's time zone.
    #[serde(default)]
    pub import_datetime: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub images: BTreeMap<String, ImageVariant>,
}

impl Item {
    /// Display title, falling back to the slug when the title is empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.slug
        } else {
            &self.title
        }
    }

    /// Look up a format rendition by name.
    pub fn image(&self, format: &str) -> Option<&ImageVariant> {
        self.images.get(format)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub display_name: String,
}

/// One rendition of an item. Not every rendition carries every field, so
/// everything is optional and guarded at the point of use.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageVariant {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub mp4: Option<String>,
    #[serde(default)]
    pub webp: Option<String>,
    #[serde(default, deserialize_with = "u64_from_string")]
    pub width: Option<u64>,
    #[serde(default, deserialize_with = "u64_from_string")]
    pub height: Option<u64>,
    #[serde(default, deserialize_with = "u64_from_string")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "u64_from_string")]
    pub mp4_size: Option<u64>,
    #[serde(default, deserialize_with = "u64_from_string")]
    pub webp_size: Option<u64>,
}

impl ImageVariant {
    /// Non-empty URL for one of the three deliverable fields.
    pub fn source(&self, field: SourceField) -> Option<&str> {
        let url = match field {
            SourceField::Url => self.url.as_deref(),
            SourceField::Mp4 => self.mp4.as_deref(),
            SourceField::Webp => self.webp.as_deref(),
        };
        url.filter(|u| !u.is_empty())
    }

    /// Byte size paired with a source field: `size` for `url`,
    /// `{field}_size` otherwise.
    pub fn source_size(&self, field: SourceField) -> Option<u64> {
        match field {
            SourceField::Url => self.size,
            SourceField::Mp4 => self.mp4_size,
            SourceField::Webp => self.webp_size,
        }
    }
}

/// The three deliverable URL fields a rendition may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceField {
    Url,
    Mp4,
    Webp,
}

impl SourceField {
    pub const ALL: [SourceField; 3] = [SourceField::Url, SourceField::Mp4, SourceField::Webp];

    /// JSON field name on the rendition.
    pub fn name(&self) -> &'static str {
        match self {
            SourceField::Url => "url",
            SourceField::Mp4 => "mp4",
            SourceField::Webp => "webp",
        }
    }
}

/// Uniform response shape: `data` is always a sequence and pagination always
/// carries page/pages/pagesize, whichever endpoint was queried.
#[derive(Debug, Clone)]
pub struct NormalizedResponse {
    pub data: Vec<Item>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub pages: u64,
    pub pagesize: u64,
    /// Item id for single-id fetches, `None` for list fetches.
    pub path: Option<String>,
}

/// Giphy delivers numeric fields as JSON strings ("width": "200"); accept
/// both and drop anything unparsable.
fn u64_from_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.trim().parse().ok(),
    })
}
