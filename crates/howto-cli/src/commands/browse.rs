use std::io::Write;

use console::style;
use tracing::warn;

use howto_app::{
    App, Clipboard, MemorySink, NoopClipboard, Section, ShareOutcome, SystemClipboard,
};
use howto_config::HowToConfig;
use howto_store::SavedSkillStore;

use super::render;

pub(super) async fn cmd_browse(config: HowToConfig) -> howto_core::Result<()> {
    let service = super::tutorial_service(&config);
    if !service.has_backend() {
        super::offline_notice();
    }

    let store = SavedSkillStore::open(config.store.resolve_path());
    let clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
        Ok(c) => Box::new(c),
        Err(e) => {
            warn!(error = %e, "system clipboard unavailable, share links will not be copied");
            Box::new(NoopClipboard)
        }
    };

    let mut app = App::new(config, service, store, Box::new(MemorySink::new()), clipboard)?;

    println!("🥷 {}", style("HowTo Ninja").bold().cyan());
    println!("   Type what you want to learn, e.g. \"how to tie a tie\"");
    println!(
        "   Commands: /home /library [term] /random /back /forward /save /saved /share /exit"
    );
    println!();
    render::print_home();

    // Interactive loop reading from stdin
    let stdin = tokio::io::stdin();
    let reader = tokio::io::BufReader::new(stdin);
    use tokio::io::AsyncBufReadExt;
    let mut lines = reader.lines();

    loop {
        eprint!("{} ", style("howto>").cyan());
        std::io::stderr().flush().ok();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break, // EOF
            Err(_) => break,
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" || trimmed == "/exit" {
            println!("👋 Goodbye!");
            break;
        }

        if let Some(command) = trimmed.strip_prefix('/') {
            dispatch_command(&mut app, command).await;
        } else {
            run_search(&mut app, trimmed).await;
        }
        println!();
    }

    Ok(())
}

async fn run_search(app: &mut App, query: &str) {
    let spinner = render::loading_spinner();
    app.search(query).await;
    spinner.finish_and_clear();
    render::print_view(app);
}

async fn dispatch_command(app: &mut App, command: &str) {
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "home" => {
            if let Err(e) = app.navigate(Section::Home).await {
                eprintln!("{}", style(format!("❌ {e}")).red());
                return;
            }
            render::print_home();
        }
        "library" => {
            if let Err(e) = app.navigate(Section::Categories).await {
                eprintln!("{}", style(format!("❌ {e}")).red());
                return;
            }
            render::print_library(rest, "All");
        }
        "random" => {
            let spinner = render::loading_spinner();
            let result = app.navigate(Section::Random).await;
            spinner.finish_and_clear();
            if let Err(e) = result {
                eprintln!("{}", style(format!("❌ {e}")).red());
                return;
            }
            render::print_view(app);
        }
        "back" => {
            if !app.history().can_go_back() {
                println!("Nothing further back.");
                return;
            }
            let spinner = render::loading_spinner();
            app.back().await;
            spinner.finish_and_clear();
            render::print_view(app);
        }
        "forward" => {
            if !app.history().can_go_forward() {
                println!("Nothing further forward.");
                return;
            }
            let spinner = render::loading_spinner();
            app.forward().await;
            spinner.finish_and_clear();
            render::print_view(app);
        }
        "save" => match app.save() {
            Ok(()) => println!("✅ Saved to {}", app.store().path().display()),
            Err(e) => eprintln!("{}", style(format!("❌ {e}")).red()),
        },
        "saved" => match app.store().list() {
            Ok(records) => render::print_saved(&records),
            Err(e) => eprintln!("{}", style(format!("❌ {e}")).red()),
        },
        "share" => match app.share() {
            Ok(ShareOutcome::Shared) => println!("✅ Shared."),
            Ok(ShareOutcome::CopiedToClipboard) => {
                println!(
                    "📋 Link copied to clipboard: {}",
                    app.history().current().url
                );
            }
            Err(e) => eprintln!("{}", style(format!("❌ {e}")).red()),
        },
        other => {
            println!("Unknown command '/{other}'.");
            println!(
                "   Commands: /home /library [term] /random /back /forward /save /saved /share /exit"
            );
        }
    }
}
