use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static CODE_FENCES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```html|```").expect("fence regex is valid"));

static H1: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("h1 selector is valid"));
static P: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("p selector is valid"));
static OL_LI: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ol li").expect("ol li selector is valid"));

/// The pieces of a tutorial pulled back out of its markup: the heading,
/// the opening paragraph, and the ordered instruction steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialOutline {
    pub title: Option<String>,
    pub introduction: Option<String>,
    pub steps: Vec<String>,
}

/// Strip markdown code fences that generation backends sometimes wrap
/// around the markup.
pub fn clean_markup(content: &str) -> String {
    CODE_FENCES.replace_all(content, "").trim().to_string()
}

/// Parse tutorial markup into its outline: first `h1`, first `p`, and
/// every `ol li` in document order. Absent pieces come back as `None`
/// or an empty step list.
pub fn extract_outline(markup: &str) -> TutorialOutline {
    let fragment = Html::parse_fragment(markup);

    let title = fragment
        .select(&H1)
        .next()
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty());
    let introduction = fragment
        .select(&P)
        .next()
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty());
    let steps = fragment
        .select(&OL_LI)
        .map(|el| element_text(&el))
        .collect();

    TutorialOutline {
        title,
        introduction,
        steps,
    }
}

fn element_text(el: &scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
