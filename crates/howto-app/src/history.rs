/// One navigation entry. `skill` holds the original query string, not
/// the slug, so popping the entry can replay generation for it. Entries
/// without a query are root (home) entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub skill: Option<String>,
    pub title: String,
    pub url: String,
}

impl HistoryEntry {
    pub fn root(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            skill: None,
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn skill(
        query: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            skill: Some(query.into()),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Navigation journal with a cursor, shaped like browser session
/// history: pushing while the cursor sits mid-journal drops the forward
/// tail. The journal is never empty; it is seeded with a root entry and
/// `current` always points at a valid entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Journal seeded with a root entry for the given title and URL.
    pub fn new(root: HistoryEntry) -> Self {
        Self {
            entries: vec![root],
            cursor: 0,
        }
    }

    /// The entry the cursor sits on.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Append after the cursor, dropping any forward entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back. Returns the entry now current, or `None`
    /// when already at the oldest entry.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step the cursor forward. Returns the entry now current, or
    /// `None` when already at the newest entry.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal() -> History {
        History::new(HistoryEntry::root("Home", "https://example.com"))
    }

    #[test]
    fn starts_at_the_root() {
        let history = journal();
        assert_eq!(history.len(), 1);
        assert!(history.current().skill.is_none());
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_advances_the_cursor() {
        let mut history = journal();
        history.push(HistoryEntry::skill("tie a tie", "How to Tie a Tie", "https://example.com/how-to-tie-a-tie"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().skill.as_deref(), Some("tie a tie"));
        assert!(history.can_go_back());
    }

    #[test]
    fn back_and_forward_walk_the_journal() {
        let mut history = journal();
        history.push(HistoryEntry::skill("a", "A", "https://example.com/a"));
        history.push(HistoryEntry::skill("b", "B", "https://example.com/b"));

        let entry = history.back().unwrap();
        assert_eq!(entry.skill.as_deref(), Some("a"));
        assert!(history.can_go_forward());

        let entry = history.forward().unwrap();
        assert_eq!(entry.skill.as_deref(), Some("b"));
        assert!(!history.can_go_forward());
    }

    #[test]
    fn back_stops_at_the_root() {
        let mut history = journal();
        history.push(HistoryEntry::skill("a", "A", "https://example.com/a"));
        assert!(history.back().is_some());
        assert!(history.back().is_none());
        assert_eq!(history.current().title, "Home");
    }

    #[test]
    fn push_mid_journal_drops_the_forward_tail() {
        let mut history = journal();
        history.push(HistoryEntry::skill("a", "A", "https://example.com/a"));
        history.push(HistoryEntry::skill("b", "B", "https://example.com/b"));
        history.back();

        history.push(HistoryEntry::skill("c", "C", "https://example.com/c"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().skill.as_deref(), Some("c"));
        assert!(!history.can_go_forward());
        // "b" is gone.
        assert!(history.entries().iter().all(|e| e.skill.as_deref() != Some("b")));
    }
}
