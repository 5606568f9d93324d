//! Terminal rendering for the browse and learn commands: the home
//! screen, generated tutorials, library listings, and the generation
//! spinner.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use scraper::{ElementRef, Html};

use howto_app::home::{
    CATEGORY_TILES, HERO_HEADLINE, HERO_TAGLINE, RECENT_SKILLS, TRENDING_SKILLS, category_query,
};
use howto_app::{App, View};
use howto_catalog::SkillCatalog;
use howto_catalog::entry::category_glyph;
use howto_core::SavedSkillRecord;
use howto_seo::clean_markup;

/// Spinner shown while a tutorial is generated.
pub(super) fn loading_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("AI Ninja at work... crafting your personalized skill guide");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Render whatever screen the controller settled on.
pub(super) fn print_view(app: &App) {
    match app.view() {
        View::Home => print_home(),
        View::Library => print_library("", "All"),
        View::Skill { .. } => print_skill(app),
        // Transient; the controller never hands control back mid-load.
        View::Loading { .. } => {}
    }
}

pub(super) fn print_home() {
    println!("{}", style(HERO_HEADLINE).bold());
    println!("{}", style(HERO_TAGLINE).dim());
    println!();
    println!("📚 {}", style("Browse by category").bold());
    for tile in CATEGORY_TILES {
        println!(
            "   {} {:<12} {}",
            tile.glyph,
            tile.name,
            style(format!("→ {}", category_query(tile.name))).dim()
        );
    }
    println!();
    println!("🔥 {}", style("Trending now").bold());
    for skill in TRENDING_SKILLS {
        println!(
            "   • {} {}",
            skill.title,
            style(format!("({})", skill.category)).dim()
        );
    }
    println!();
    println!("🕐 {}", style("Recently learned").bold());
    for skill in RECENT_SKILLS {
        println!("   • {skill}");
    }
}

/// The skill page: sink metadata header, time and difficulty badges,
/// then the tutorial body.
pub(super) fn print_skill(app: &App) {
    let View::Skill { content, .. } = app.view() else {
        return;
    };

    let rule = style("─".repeat(62)).dim();
    println!("{rule}");
    if let Some(title) = app.sink().title() {
        println!("📄 {}", style(title).dim());
    }
    println!(
        "🔗 {}",
        style(&app.history().current().url).dim().underlined()
    );
    println!(
        "⏱  {} · {}",
        content.estimated_time,
        style(content.difficulty.as_str()).yellow()
    );
    println!();
    println!("{}", markup_to_terminal(&content.content));
    println!("{rule}");
}

pub(super) fn print_library(search: &str, category: &str) {
    let catalog = SkillCatalog::builtin();
    let entries = catalog.filter(search, category);

    if entries.is_empty() {
        println!("No library skills match your filter.");
        println!("   Try a broader search term or the category 'All'.");
        return;
    }

    println!(
        "📚 {} ({} skills)",
        style("Skill Library").bold(),
        entries.len()
    );
    println!();
    for entry in entries {
        println!(
            "   {} {} {}",
            category_glyph(&entry.category),
            style(&entry.title).cyan().bold(),
            style(format!("({})", entry.category)).dim()
        );
        println!("      {}", entry.description);
        println!(
            "      {}",
            style(format!("tags: {}", entry.tags.join(", "))).dim()
        );
        println!();
    }
    println!("   Type a title to generate its full guide.");
}

pub(super) fn print_saved(records: &[SavedSkillRecord]) {
    if records.is_empty() {
        println!("No saved skills yet. Open a guide and use /save.");
        return;
    }
    println!("💾 {} ({})", style("Saved Skills").bold(), records.len());
    for (i, record) in records.iter().enumerate() {
        println!(
            "   {}. {} {}",
            i + 1,
            style(&record.query).cyan(),
            style(format!(
                "saved {}",
                record.saved_at.format("%Y-%m-%d %H:%M UTC")
            ))
            .dim()
        );
    }
}

/// Convert tutorial markup into an indented, styled terminal block.
/// Understands the fixed h1/p/h2/ol/ul layout the generator and the
/// fallback template emit; unknown elements are skipped.
fn markup_to_terminal(markup: &str) -> String {
    let cleaned = clean_markup(markup);
    let fragment = Html::parse_fragment(&cleaned);
    let mut out = String::new();

    for node in fragment.root_element().children() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        match el.value().name() {
            "h1" => {
                out.push_str(&format!(
                    "{}\n\n",
                    style(element_text(&el)).bold().underlined()
                ));
            }
            "h2" => {
                out.push_str(&format!("{}\n", style(element_text(&el)).cyan().bold()));
            }
            "p" => {
                out.push_str(&format!("{}\n\n", element_text(&el)));
            }
            "ol" => {
                let mut step = 0usize;
                for li in el.children().filter_map(ElementRef::wrap) {
                    if li.value().name() != "li" {
                        continue;
                    }
                    step += 1;
                    out.push_str(&format!(
                        " {} {}\n",
                        style(format!("{step}.")).green().bold(),
                        element_text(&li)
                    ));
                }
                out.push('\n');
            }
            "ul" => {
                for li in el.children().filter_map(ElementRef::wrap) {
                    if li.value().name() != "li" {
                        continue;
                    }
                    out.push_str(&format!(" {} {}\n", style("•").green(), element_text(&li)));
                }
                out.push('\n');
            }
            _ => {}
        }
    }

    out.trim_end().to_string()
}

/// Descendant text with whitespace collapsed, so inline markup
/// (`<strong>`, line breaks inside elements) flattens cleanly.
fn element_text(el: &ElementRef<'_>) -> String {
    let raw = el.text().collect::<String>();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
