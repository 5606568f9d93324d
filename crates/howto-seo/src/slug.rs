use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"));

/// Build a URL slug from a tutorial title or query.
///
/// Lowercases, drops a leading "how to ", collapses every run of
/// non-alphanumeric characters into a single hyphen, and trims hyphens
/// from both ends: "How to Tie a Tie" becomes "tie-a-tie".
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = lowered.strip_prefix("how to ").unwrap_or(&lowered);
    NON_ALNUM
        .replace_all(stripped, "-")
        .trim_matches('-')
        .to_string()
}
