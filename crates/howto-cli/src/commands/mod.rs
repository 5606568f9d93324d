use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;
use std::sync::Arc;

use howto_config::{ConfigLoader, HowToConfig};
use howto_gen::{OpenAiBackend, TutorialService};

mod browse;
mod learn;
mod library;
mod render;
mod setup;

/// 🥷 HowTo Ninja — AI-powered step-by-step guides for any skill
#[derive(Parser)]
#[command(name = "howto", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to howto.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse skills interactively (search, navigate, save, share)
    Browse,
    /// Generate a tutorial for one query and print it
    Learn {
        /// What to learn, e.g. "tie a tie" (quotes optional)
        #[arg(required = true)]
        query: Vec<String>,

        /// Append the tutorial to the saved-skills list
        #[arg(long)]
        save: bool,

        /// Output the full page bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the built-in skill library
    Library {
        /// Filter by a search term (matches title, description, tags)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filter by category, e.g. Cooking, DIY ("All" lists everything)
        #[arg(long, default_value = "All")]
        category: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List saved skills, oldest first
    Saved {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a starter howto.toml
    Init {
        /// Create in current directory instead of ~/.howto/
        #[arg(long)]
        local: bool,

        /// Replace an existing config (asks for confirmation)
        #[arg(long)]
        force: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> howto_core::Result<()> {
        // Load config first so we can use it for log level and format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(&config.logging.level)
        };

        // Initialize tracing with the configured format
        if config.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
                )
                .json()
                .with_target(true)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
                )
                .with_target(false)
                .init();
        }

        match self.command {
            Commands::Browse => browse::cmd_browse(config).await,
            Commands::Learn { query, save, json } => {
                learn::cmd_learn(config, query.join(" "), save, json).await
            }
            Commands::Library {
                search,
                category,
                json,
            } => library::cmd_library(&search, &category, json),
            Commands::Saved { json } => library::cmd_saved(config, json),
            Commands::Config { json } => Self::cmd_config(config, json),
            Commands::Init { local, force } => setup::cmd_init(local, force),
            Commands::Completions { shell } => Self::cmd_completions(shell),
        }
    }

    fn cmd_config(config: HowToConfig, json: bool) -> howto_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| howto_core::HowToError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_completions(shell: Shell) -> howto_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "howto", &mut std::io::stdout());
        Ok(())
    }
}

/// Build the generation service from config: a live OpenAI-compatible
/// backend when a usable key is present, the offline template otherwise.
fn tutorial_service(config: &HowToConfig) -> TutorialService {
    match config.services.usable_openai_key() {
        Some(key) => {
            let backend = OpenAiBackend::new(key.to_string())
                .with_base_url(config.generator.base_url.clone())
                .with_model(config.generator.model.clone())
                .with_limits(config.generator.max_tokens, config.generator.temperature);
            TutorialService::new(Arc::new(backend))
        }
        None => TutorialService::offline(),
    }
}

/// Printed when generation is about to run without a usable API key.
fn offline_notice() {
    eprintln!("⚠️  No OpenAI API key found. Tutorials use the built-in template.");
    eprintln!("   Add to [services] in howto.toml:  openai_api_key = \"sk-...\"");
    eprintln!("   Or set env var: export OPENAI_API_KEY=sk-...");
    eprintln!();
}
