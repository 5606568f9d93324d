use rand::seq::IndexedRandom;
use tracing::{debug, error, info, warn};

use howto_config::HowToConfig;
use howto_core::{HowToError, Result, SavedSkillRecord, TutorialContent};
use howto_gen::TutorialService;
use howto_seo::{clean_markup, extract_outline, meta_tags, slugify, structured_data, SITE_NAME};
use howto_store::SavedSkillStore;

use crate::clipboard::Clipboard;
use crate::history::{History, HistoryEntry};
use crate::share::{ShareOutcome, ShareRequest, ShareTarget};
use crate::sink::MetadataSink;
use crate::view::View;

/// Queries the surprise-me navigation draws from.
pub const RANDOM_SKILLS: [&str; 8] = [
    "tie a bow tie",
    "make paper airplane",
    "whistle loudly",
    "solve a rubiks cube",
    "make origami crane",
    "juggle 3 balls",
    "do a cartwheel",
    "make perfect pancakes",
];

/// High-level navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Categories,
    Random,
}

/// The view state controller. Owns the active [`View`], the navigation
/// [`History`], and every port the screens touch: the generation
/// service, the saved-skills store, the page-metadata sink, and the
/// share/clipboard pair.
///
/// All methods take `&mut self`; events are handled one at a time and
/// the only suspension point is the generation await inside
/// [`App::search`]. A search issued while another is conceptually in
/// flight simply supersedes it.
pub struct App {
    config: HowToConfig,
    service: TutorialService,
    store: SavedSkillStore,
    sink: Box<dyn MetadataSink>,
    clipboard: Box<dyn Clipboard>,
    share_target: Option<Box<dyn ShareTarget>>,
    base_url: String,
    view: View,
    active_query: Option<String>,
    history: History,
}

impl App {
    pub fn new(
        config: HowToConfig,
        service: TutorialService,
        store: SavedSkillStore,
        mut sink: Box<dyn MetadataSink>,
        clipboard: Box<dyn Clipboard>,
    ) -> Result<Self> {
        let base_url = config.site.base_url.trim_end_matches('/').to_string();

        // Initial page metadata: the default title, and the default
        // description only when the sink has none yet.
        sink.set_title(&config.site.default_title)?;
        if sink.description().is_none() {
            sink.set_description(&config.site.default_description)?;
        }

        let history = History::new(HistoryEntry::root(
            config.site.default_title.clone(),
            base_url.clone(),
        ));

        info!(
            backend = service.backend_name().unwrap_or("none"),
            "view controller ready"
        );

        Ok(Self {
            config,
            service,
            store,
            sink,
            clipboard,
            share_target: None,
            base_url,
            view: View::Home,
            active_query: None,
            history,
        })
    }

    /// Install a native share capability. Without one, sharing always
    /// takes the clipboard fallback.
    pub fn with_share_target(mut self, target: Box<dyn ShareTarget>) -> Self {
        self.share_target = Some(target);
        self
    }

    // ── State access ───────────────────────────────────────────

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn sink(&self) -> &dyn MetadataSink {
        self.sink.as_ref()
    }

    pub fn store(&self) -> &SavedSkillStore {
        &self.store
    }

    /// The query behind the current or most recent tutorial, if the
    /// user has not navigated home since.
    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    // ── Events ─────────────────────────────────────────────────

    /// Generate a tutorial and show it. Generation itself always
    /// settles with content; any error in the surrounding presentation
    /// work (metadata sink, serialization) resolves to `Home` and
    /// discards the in-flight query.
    pub async fn search(&mut self, query: &str) {
        info!(query, "searching");
        self.active_query = Some(query.to_string());

        // Loading replaces whatever page was up, taking its
        // structured data with it.
        if let Err(e) = self.sink.clear_structured_data() {
            warn!(error = %e, "failed to clear structured data");
        }
        self.view = View::Loading {
            query: query.to_string(),
        };

        let content = self.service.generate(query).await;

        if let Err(e) = self.enter_skill(query, content) {
            error!(error = %e, query, "failed to present tutorial, returning home");
            self.active_query = None;
            self.view = View::Home;
        }
    }

    /// Jump to a top-level section. `Random` draws from
    /// [`RANDOM_SKILLS`] and runs the ordinary search path.
    pub async fn navigate(&mut self, section: Section) -> Result<()> {
        match section {
            Section::Home => {
                self.sink.clear_structured_data()?;
                self.view = View::Home;
                self.active_query = None;
                self.sink.set_title(&self.config.site.default_title)?;
                self.history.push(HistoryEntry::root(
                    self.config.site.default_title.clone(),
                    self.base_url.clone(),
                ));
            }
            Section::Categories => {
                self.sink.clear_structured_data()?;
                self.view = View::Library;
            }
            Section::Random => {
                let skill = RANDOM_SKILLS
                    .choose(&mut rand::rng())
                    .copied()
                    .unwrap_or(RANDOM_SKILLS[0]);
                self.search(&format!("How to {skill}")).await;
            }
        }
        Ok(())
    }

    /// Step back through history. An entry carrying a query replays it
    /// through the full generation path; the root entry returns home.
    /// Returns `false` when already at the oldest entry.
    pub async fn back(&mut self) -> bool {
        let skill = match self.history.back() {
            Some(entry) => entry.skill.clone(),
            None => return false,
        };
        debug!(?skill, "history back");
        self.pop_to(skill).await;
        true
    }

    /// Step forward through history. Same replay semantics as
    /// [`App::back`]. Returns `false` when already at the newest entry.
    pub async fn forward(&mut self) -> bool {
        let skill = match self.history.forward() {
            Some(entry) => entry.skill.clone(),
            None => return false,
        };
        debug!(?skill, "history forward");
        self.pop_to(skill).await;
        true
    }

    /// Share the current page. Prefers the native target when one is
    /// installed and a tutorial query is active; otherwise, or on
    /// native failure, copies the page URL to the clipboard.
    pub fn share(&mut self) -> Result<ShareOutcome> {
        let url = self.history.current().url.clone();

        if let (Some(target), Some(query)) =
            (self.share_target.as_mut(), self.active_query.as_deref())
        {
            let request = ShareRequest {
                title: format!("How to {query} - {SITE_NAME}"),
                text: format!("Learn how to {query} with this step-by-step guide!"),
                url: url.clone(),
            };
            match target.share(&request) {
                Ok(()) => return Ok(ShareOutcome::Shared),
                Err(e) => warn!(error = %e, "native share failed, copying link instead"),
            }
        }

        self.clipboard.set_text(&url)?;
        Ok(ShareOutcome::CopiedToClipboard)
    }

    /// Append the open tutorial to the saved-skills list.
    pub fn save(&self) -> Result<()> {
        let View::Skill { query, content } = &self.view else {
            return Err(HowToError::Store("no tutorial is open to save".into()));
        };
        self.store
            .save(SavedSkillRecord::new(query.clone(), content.content.clone()))
    }

    // ── Internals ──────────────────────────────────────────────

    /// Entry-into-skill side effects: outline, slug, meta tags,
    /// structured data, history push, then the view switch.
    fn enter_skill(&mut self, query: &str, content: TutorialContent) -> Result<()> {
        let markup = clean_markup(&content.content);
        let outline = extract_outline(&markup);

        let title = outline.title.clone().unwrap_or_else(|| query.to_string());
        let description = outline
            .introduction
            .clone()
            .unwrap_or_else(|| format!("Learn {query} with step-by-step instructions"));
        let slug = slugify(query);
        let url = format!("{}/how-to-{}", self.base_url, slug);

        let meta = meta_tags(&title, &description, &url);
        self.sink.set_title(&meta.title)?;
        self.sink.set_description(&meta.description)?;

        let data = structured_data(&outline, &content.estimated_time, &url);
        self.sink.set_structured_data(&data.to_json_ld()?)?;

        self.history.push(HistoryEntry::skill(query, title, url));
        self.view = View::Skill {
            query: query.to_string(),
            content,
        };
        Ok(())
    }

    /// Land on a popped history entry: replay its query, or return
    /// home when it has none.
    async fn pop_to(&mut self, skill: Option<String>) {
        match skill {
            Some(query) => self.search(&query).await,
            None => {
                if let Err(e) = self.sink.clear_structured_data() {
                    warn!(error = %e, "failed to clear structured data");
                }
                self.active_query = None;
                self.view = View::Home;
            }
        }
    }
}
