//! Folder and file formatters: reshape a normalized API response into the
//! envelopes the host picker renders.

use chrono::NaiveDateTime;
use gifrepo_giphy::{Item, NormalizedResponse, SourceField};

use crate::types::{
    AllowedExtensions, Breadcrumb, FileEntry, FileListing, FolderEntry, FolderListing, Listing,
};

/// Format used for thumbnails in both views, and its still counterpart.
const THUMB: &str = "fixed_height_small";
const THUMB_STILL: &str = "fixed_height_small_still";
/// Format whose byte size stands for the whole item in folder view.
const ORIGINAL: &str = "original";

/// Render browse/search results as lazily-expanded folders, one per item.
/// No extension filtering happens here; folder view is metadata only.
pub fn format_folders(resp: &NormalizedResponse) -> Listing {
    let list = resp.data.iter().map(folder_entry).collect();
    Listing::Folders(FolderListing {
        nologin: true,
        dynload: true,
        page: resp.pagination.page,
        pages: resp.pagination.pages,
        list,
    })
}

fn folder_entry(item: &Item) -> FolderEntry {
    FolderEntry {
        title: item.display_title().to_string(),
        shorttitle: item.slug.clone(),
        date: parse_import_datetime(&item.import_datetime),
        thumbnail: item.image(THUMB).and_then(|v| v.url.clone()),
        icon: item.image(THUMB_STILL).and_then(|v| v.url.clone()),
        children: Vec::new(),
        path: item.id.clone(),
        size: item.image(ORIGINAL).and_then(|v| v.size),
    }
}

/// Render an item's renditions as selectable files, one entry per
/// (format, source-field) pair that passes the extension filter.
pub fn format_files(resp: &NormalizedResponse, allowed: &AllowedExtensions) -> Listing {
    let mut list = Vec::new();
    let mut last_item: Option<&Item> = None;

    for item in &resp.data {
        last_item = Some(item);
        let date = parse_import_datetime(&item.import_datetime);
        let author = item.user.as_ref().map(|u| u.display_name.clone());

        for (format, variant) in &item.images {
            // Still formats thumbnail with the still rendition, animated
            // formats with the animated one.
            let thumb_format = if format.contains("_still") {
                THUMB_STILL
            } else {
                THUMB
            };
            let thumb = item.image(thumb_format);
            let display_format = format.replace('_', " ");

            for field in SourceField::ALL {
                let Some(url) = variant.source(field) else {
                    continue;
                };
                let Some(extension) = url_extension(url) else {
                    continue;
                };
                if !allowed.allows(&format!(".{extension}")) {
                    continue;
                }

                let size = variant.source_size(field);
                list.push(FileEntry {
                    title: format!("{}.{}", item.display_title(), extension),
                    shorttitle: format!(
                        "{}@{}x{}px {} - {}",
                        extension.to_uppercase(),
                        variant.width.unwrap_or(0),
                        variant.height.unwrap_or(0),
                        display_size(size.unwrap_or(0)),
                        display_format,
                    ),
                    source: url.to_string(),
                    url: url.to_string(),
                    size,
                    thumbnail: thumb.and_then(|v| v.url.clone()),
                    thumbnail_width: thumb.and_then(|v| v.width),
                    thumbnail_height: thumb.and_then(|v| v.height),
                    icon: thumb.and_then(|v| v.url.clone()),
                    author: author.clone(),
                    image_width: variant.width,
                    image_height: variant.height,
                    date,
                });
            }
        }
    }

    // The breadcrumb reflects the last item walked. Callers always pass a
    // single-item response here, so in practice that is the selected item.
    // The crumb carries the raw title, with no slug fallback.
    let mut path = vec![Breadcrumb::root()];
    if let Some(item) = last_item {
        path.push(Breadcrumb {
            name: item.title.clone(),
            path: item.id.clone(),
        });
    }

    Listing::Files(FileListing {
        path,
        nologin: true,
        dynload: false,
        page: resp.pagination.page,
        pages: resp.pagination.pages,
        list,
    })
}

/// Parse the API's `import_datetime` ("2017-01-01 12:00:00", taken as UTC)
/// into epoch seconds. Malformed or missing values yield `None`.
fn parse_import_datetime(raw: &str) -> Option<i64> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc().timestamp())
}

/// Lowercased extension of the path portion of a URL, ignoring query and
/// fragment. `None` when the last path segment has no dot.
fn url_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (stem, extension) = segment.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

/// Human-readable byte size for the file-view short title.
pub fn display_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1}GB", b / GB)
    } else if b >= MB {
        format!("{:.1}MB", b / MB)
    } else if b >= KB {
        format!("{:.1}KB", b / KB)
    } else {
        format!("{bytes}B")
    }
}
