use crate::entry::SkillCatalogEntry;

/// Category filter values, headed by the "All" sentinel.
pub const CATEGORIES: [&str; 13] = [
    "All",
    "Life Skills",
    "Cooking",
    "Learning",
    "DIY",
    "Wellness",
    "Tech",
    "Business",
    "Gardening",
    "Communication",
    "Automotive",
    "Organization",
    "Photography",
];

/// The built-in skill library.
///
/// Entries are seeded at construction and never created or destroyed at
/// runtime. Insertion order is the display order; filtering returns
/// borrowed views in that same order.
pub struct SkillCatalog {
    entries: Vec<SkillCatalogEntry>,
}

impl SkillCatalog {
    /// The stock twelve-entry library.
    pub fn builtin() -> Self {
        let entries = vec![
            SkillCatalogEntry::new(
                "1",
                "Tie a Perfect Windsor Knot",
                "Life Skills",
                "Master the classic Windsor knot for formal occasions and professional settings.",
                &["fashion", "professional", "formal"],
            ),
            SkillCatalogEntry::new(
                "2",
                "Cook Perfect Rice Every Time",
                "Cooking",
                "Learn the foolproof method for fluffy, perfectly cooked rice without a rice cooker.",
                &["cooking", "basics", "kitchen"],
            ),
            SkillCatalogEntry::new(
                "3",
                "Speed Read Like a Pro",
                "Learning",
                "Double your reading speed while maintaining comprehension using proven techniques.",
                &["productivity", "learning", "skills"],
            ),
            SkillCatalogEntry::new(
                "4",
                "Fix a Leaky Faucet",
                "DIY",
                "Save money by fixing common faucet problems yourself with basic tools.",
                &["home", "repair", "plumbing"],
            ),
            SkillCatalogEntry::new(
                "5",
                "Meditate for Inner Peace",
                "Wellness",
                "Start your meditation journey with simple breathing techniques for stress relief.",
                &["mindfulness", "stress", "mental health"],
            ),
            SkillCatalogEntry::new(
                "6",
                "Create Strong Passwords",
                "Tech",
                "Protect your digital life with unbreakable passwords and security best practices.",
                &["security", "privacy", "digital"],
            ),
            SkillCatalogEntry::new(
                "7",
                "Negotiate Like a Boss",
                "Business",
                "Master negotiation tactics used by top executives and business leaders.",
                &["business", "communication", "leadership"],
            ),
            SkillCatalogEntry::new(
                "8",
                "Grow Herbs Indoors",
                "Gardening",
                "Create your own indoor herb garden with minimal space and equipment.",
                &["gardening", "plants", "sustainable"],
            ),
            SkillCatalogEntry::new(
                "9",
                "Master Public Speaking",
                "Communication",
                "Overcome fear and deliver compelling presentations that captivate any audience.",
                &["speaking", "confidence", "presentation"],
            ),
            SkillCatalogEntry::new(
                "10",
                "Change a Car Tire",
                "Automotive",
                "Essential roadside skill every driver should know for emergency situations.",
                &["automotive", "emergency", "safety"],
            ),
            SkillCatalogEntry::new(
                "11",
                "Fold Clothes Like Marie Kondo",
                "Organization",
                "Maximize closet space with the KonMari folding method for perfect organization.",
                &["organization", "lifestyle", "efficiency"],
            ),
            SkillCatalogEntry::new(
                "12",
                "Take Professional Photos",
                "Photography",
                "Capture stunning photos with any camera using composition and lighting techniques.",
                &["photography", "creative", "visual"],
            ),
        ];
        Self { entries }
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[SkillCatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&SkillCatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring filter over title, description, and
    /// tags, intersected with an exact category match. The "All"
    /// sentinel disables the category test; an empty search term
    /// matches everything. Results keep library order.
    pub fn filter(&self, search: &str, category: &str) -> Vec<&SkillCatalogEntry> {
        let needle = search.to_lowercase();
        self.entries
            .iter()
            .filter(|skill| {
                let matches_search = skill.title.to_lowercase().contains(&needle)
                    || skill.description.to_lowercase().contains(&needle)
                    || skill.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
                let matches_category = category == "All" || skill.category == category;
                matches_search && matches_category
            })
            .collect()
    }

    /// The category filter values, "All" first.
    pub fn categories(&self) -> &'static [&'static str] {
        &CATEGORIES
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
