use serde::{Deserialize, Serialize};

/// One skill in the built-in library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalogEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl SkillCatalogEntry {
    pub fn new(
        id: &str,
        title: &str,
        category: &str,
        description: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Terminal glyph for a category badge.
pub fn category_glyph(category: &str) -> &'static str {
    match category {
        "Cooking" => "🍳",
        "Tech" => "💻",
        "Life Skills" => "💡",
        "DIY" => "🔨",
        "Survival" => "🧭",
        "Wellness" => "💚",
        "Photography" => "📷",
        "Business" => "💼",
        "Learning" => "💡",
        "Gardening" => "🔧",
        "Communication" => "💬",
        "Automotive" => "🚗",
        "Organization" => "📁",
        _ => "💡",
    }
}
