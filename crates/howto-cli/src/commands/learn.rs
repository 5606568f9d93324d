use howto_app::{App, MemorySink, NoopClipboard, View};
use howto_config::HowToConfig;
use howto_seo::slugify;
use howto_store::SavedSkillStore;

use super::render;

pub(super) async fn cmd_learn(
    config: HowToConfig,
    query: String,
    save: bool,
    json: bool,
) -> howto_core::Result<()> {
    let query = query.trim().to_string();
    if query.is_empty() {
        eprintln!("❌ Nothing to learn. Try: howto learn tie a tie");
        return Ok(());
    }

    let service = super::tutorial_service(&config);
    if !service.has_backend() {
        super::offline_notice();
    }

    let store = SavedSkillStore::open(config.store.resolve_path());
    let mut app = App::new(
        config,
        service,
        store,
        Box::new(MemorySink::new()),
        Box::new(NoopClipboard),
    )?;

    let spinner = render::loading_spinner();
    app.search(&query).await;
    spinner.finish_and_clear();

    let View::Skill { content, .. } = app.view() else {
        return Err(howto_core::HowToError::Page(
            "tutorial could not be presented, see log for details".into(),
        ));
    };
    let content = content.clone();

    if json {
        let structured = app
            .sink()
            .structured_data()
            .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).ok());
        let bundle = serde_json::json!({
            "query": query,
            "slug": slugify(&query),
            "url": app.history().current().url,
            "title": app.sink().title(),
            "description": app.sink().description(),
            "estimated_time": content.estimated_time,
            "difficulty": content.difficulty,
            "content": content.content,
            "structured_data": structured,
        });
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        render::print_skill(&app);
    }

    if save {
        app.save()?;
        let message = format!("✅ Saved to {}", app.store().path().display());
        if json {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }

    Ok(())
}
