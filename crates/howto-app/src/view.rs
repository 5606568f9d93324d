use howto_core::TutorialContent;

/// The four screens the application can show. Exactly one is active at
/// a time and only [`crate::App`] transitions between them.
///
/// A tutorial page cannot exist without content: `Skill` owns its
/// `TutorialContent`, so there is no reachable state where the skill
/// screen renders with nothing behind it.
#[derive(Debug, Clone)]
pub enum View {
    Home,
    /// Generation is in flight for this query.
    Loading { query: String },
    /// A generated tutorial is on screen.
    Skill {
        query: String,
        content: TutorialContent,
    },
    Library,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Loading { .. } => "loading",
            View::Skill { .. } => "skill",
            View::Library => "library",
        }
    }

    pub fn is_skill(&self) -> bool {
        matches!(self, View::Skill { .. })
    }
}
