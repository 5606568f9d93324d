use serde::{Deserialize, Serialize};

pub const SITE_NAME: &str = "HowTo Ninja";

/// Branding suffix appended to every tutorial page title.
const TITLE_SUFFIX: &str = "HowTo Ninja - Learn Any Skill";

/// Meta descriptions longer than this are cut to 152 characters plus "...".
const DESCRIPTION_LIMIT: usize = 155;

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/1200x630";

/// The head-metadata bundle for one tutorial page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagBundle {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub image: String,
}

/// 1200x630 card image URL for a tutorial title.
pub fn placeholder_image(title: &str) -> String {
    format!("{}?text={}", PLACEHOLDER_IMAGE_BASE, urlencoding::encode(title))
}

/// Derive the meta-tag bundle for a tutorial page.
///
/// The page title carries the site branding suffix; the description is
/// clamped to 155 characters. The open-graph mirror keeps the raw title
/// and description.
pub fn meta_tags(title: &str, description: &str, url: &str) -> MetaTagBundle {
    let clamped = if description.chars().count() > DESCRIPTION_LIMIT {
        let mut d: String = description.chars().take(DESCRIPTION_LIMIT - 3).collect();
        d.push_str("...");
        d
    } else {
        description.to_string()
    };

    MetaTagBundle {
        title: format!("{} | {}", title, TITLE_SUFFIX),
        description: clamped,
        canonical: url.to_string(),
        open_graph: OpenGraph {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            site_name: SITE_NAME.to_string(),
            og_type: "article".to_string(),
            image: placeholder_image(title),
        },
    }
}
