//! English strings for the plugin UI surface: picker labels and the admin
//! settings form.

use gifrepo_core::Rating;

/// Look up a UI string by key; unknown keys fall back to the key itself.
pub fn string(key: &'static str) -> &'static str {
    match key {
        "configplugin" => "Configuration for Giphy repository",
        "pluginname" => "Giphy",
        "pluginname_help" => "Animated files from Giphy",
        "api_key" => "API Key",
        "rating" => "Rating",
        "any" => "Any",
        "ratingY" => "Youth - Mostly illustrated content",
        "ratingPG-13" => "PG-13 - Parents Strongly Cautioned",
        "ratingPG" => "PG - Parental Guidance Suggested",
        "ratingR" => "R - Restricted",
        "ratingG" => "G - General Audiences",
        "page_size" => "Images per API request",
        _ => key,
    }
}

/// Label for a rating choice in the settings form.
pub fn rating_label(rating: Rating) -> &'static str {
    let key = match rating {
        Rating::Any => "any",
        Rating::Y => "ratingY",
        Rating::Pg13 => "ratingPG-13",
        Rating::Pg => "ratingPG",
        Rating::R => "ratingR",
        Rating::G => "ratingG",
    };
    string(key)
}
