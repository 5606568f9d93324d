use std::path::PathBuf;

use dialoguer::{Confirm, theme::ColorfulTheme};

/// Write a starter howto.toml with commented defaults.
pub(super) fn cmd_init(local: bool, force: bool) -> howto_core::Result<()> {
    let dir = if local {
        std::env::current_dir()?
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".howto")
    };

    std::fs::create_dir_all(&dir)?;
    let config_path = dir.join("howto.toml");

    if config_path.exists() {
        if !force {
            println!("⚠️  {} already exists", config_path.display());
            println!("   Pass --force to replace it with a fresh template.");
            return Ok(());
        }
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !overwrite {
            println!("   Init cancelled.");
            return Ok(());
        }
    }

    let minimal = r#"# 🥷 HowTo Ninja Configuration

[site]
base_url = "https://howtoninja.com"
# default_title = "HowTo Ninja - Learn Any Skill in Minutes"

[generator]
model = "gpt-4o-mini"
# base_url = "https://api.openai.com/v1"   # any chat-completions endpoint works
# max_tokens = 1200
# temperature = 0.7

[store]
# path = "saved_skills.json"   # default: ~/.howto/saved_skills.json

[services]
# openai_api_key = "sk-..."   # or env: OPENAI_API_KEY

[logging]
level = "info"
# format = "pretty"   # pretty, json, compact
"#;

    std::fs::write(&config_path, minimal)?;
    println!("✅ Created {}", config_path.display());
    println!("   Add your OpenAI key under [services], then run: howto browse");
    println!("   No key? Everything still works with the built-in template.");

    Ok(())
}
