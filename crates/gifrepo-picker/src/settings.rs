//! Admin settings-form descriptors: the fields the host renders to configure
//! this plugin, and the option keys its settings storage persists.

use gifrepo_core::{Rating, PAGE_SIZES};
use serde::Serialize;

use crate::lang;

/// Option keys persisted by the host's settings storage.
pub fn option_names() -> [&'static str; 3] {
    ["api_key", "rating", "page_size"]
}

/// One field of the admin settings form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub control: Control,
}

/// How the host should render a field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Control {
    /// Free-form text input.
    Text { size: u32 },
    /// Fixed choice list of (value, label) pairs.
    Select { options: Vec<(String, String)> },
}

/// Build the settings form for this plugin.
pub fn config_form() -> Vec<FieldSpec> {
    let ratings = Rating::all()
        .iter()
        .map(|r| {
            (
                r.as_query_value().to_string(),
                lang::rating_label(*r).to_string(),
            )
        })
        .collect();

    let page_sizes = PAGE_SIZES
        .iter()
        .map(|n| (n.to_string(), n.to_string()))
        .collect();

    vec![
        FieldSpec {
            name: "api_key",
            label: lang::string("api_key"),
            required: true,
            control: Control::Text { size: 32 },
        },
        FieldSpec {
            name: "rating",
            label: lang::string("rating"),
            required: false,
            control: Control::Select { options: ratings },
        },
        FieldSpec {
            name: "page_size",
            label: lang::string("page_size"),
            required: true,
            control: Control::Select {
                options: page_sizes,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_covers_persisted_options() {
        let names: Vec<_> = config_form().iter().map(|f| f.name).collect();
        assert_eq!(names, option_names());
    }

    #[test]
    fn test_rating_select_offers_any_first() {
        let form = config_form();
        let rating = form.iter().find(|f| f.name == "rating").unwrap();
        let Control::Select { options } = &rating.control else {
            panic!("rating must be a select");
        };
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], ("".to_string(), "Any".to_string()));
        assert!(options.iter().any(|(v, _)| v == "PG-13"));
    }

    #[test]
    fn test_page_size_choices() {
        let form = config_form();
        let page_size = form.iter().find(|f| f.name == "page_size").unwrap();
        let Control::Select { options } = &page_size.control else {
            panic!("page_size must be a select");
        };
        assert_eq!(options.first().unwrap().0, "25");
        assert_eq!(options.last().unwrap().0, "1000");
    }
}
