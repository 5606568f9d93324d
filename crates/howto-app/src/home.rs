//! Static display data for the home screen: category tiles, trending
//! skills, and recently learned skills. Selecting any of them dispatches
//! a plain search for the associated query.

pub const HERO_HEADLINE: &str = "Master Any Skill in Minutes";
pub const HERO_TAGLINE: &str =
    "AI-powered micro-lessons that teach you exactly what you need to know, when you need to know it.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTile {
    pub name: &'static str,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingSkill {
    pub title: &'static str,
    pub category: &'static str,
}

pub const CATEGORY_TILES: [CategoryTile; 6] = [
    CategoryTile { name: "Cooking", glyph: "🍳" },
    CategoryTile { name: "Tech", glyph: "💻" },
    CategoryTile { name: "Life Hacks", glyph: "💡" },
    CategoryTile { name: "DIY", glyph: "🔨" },
    CategoryTile { name: "Survival", glyph: "🧭" },
    CategoryTile { name: "Health", glyph: "❤️" },
];

pub const TRENDING_SKILLS: [TrendingSkill; 6] = [
    TrendingSkill { title: "How to tie a tie", category: "Life Hacks" },
    TrendingSkill { title: "How to cook perfect rice", category: "Cooking" },
    TrendingSkill { title: "How to speed up your computer", category: "Tech" },
    TrendingSkill { title: "How to remove stains from clothes", category: "Life Hacks" },
    TrendingSkill { title: "How to change a tire", category: "Survival" },
    TrendingSkill { title: "How to fold a fitted sheet", category: "Life Hacks" },
];

pub const RECENT_SKILLS: [&str; 4] = [
    "How to make coffee",
    "How to meditate",
    "How to backup photos",
    "How to plant seeds",
];

/// The search a category tile dispatches when selected.
pub fn category_query(category: &str) -> String {
    format!("{category} skills")
}
