use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty label attached to every generated tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All difficulty labels, in ascending order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single generated tutorial, created fresh per query and immutable
/// once returned. The markup is either backend output or the built-in
/// fallback template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorialContent {
    /// Tutorial body as HTML-shaped markup (h1/p/h2/ol/ul sections).
    pub content: String,
    /// Human-readable duration, e.g. "10-15 minutes".
    pub estimated_time: String,
    pub difficulty: Difficulty,
}

impl TutorialContent {
    pub fn new(
        content: impl Into<String>,
        estimated_time: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            content: content.into(),
            estimated_time: estimated_time.into(),
            difficulty,
        }
    }
}

/// One entry in the user's saved-skills list. Records are append-only
/// and never deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSkillRecord {
    /// The query as the user entered it, not the slug.
    pub query: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedSkillRecord {
    pub fn new(query: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            content: content.into(),
            saved_at: Utc::now(),
        }
    }
}
