//! `revolvectl`: drive the revolve carousels and site helpers from a terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use revolve_config::{ConfigLoad, ConfigLoader, ConfigWarnings};
use revolve_core::CarouselKey;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod links;
mod preferences;
mod sample;
mod simulate;

#[derive(Parser)]
#[command(
    name = "revolvectl",
    about = "Drive the site carousels and helpers from the command line"
)]
struct Cli {
    /// TOML configuration file (defaults to revolve.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dotenv file loaded before reading REVOLVE_* variables
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run carousels on a live clock and log every frame
    Simulate {
        /// How long to run before shutting down
        #[arg(long, default_value_t = 12_000)]
        duration_ms: u64,
        #[arg(long, value_enum, default_value = "all")]
        carousel: CarouselArg,
    },
    /// Inspect or change stored cookie preferences
    Preferences {
        /// Preference file (overrides preferences_path from config)
        #[arg(long)]
        path: Option<PathBuf>,
        #[command(subcommand)]
        action: PreferencesAction,
    },
    /// Build outbound links
    Link {
        #[command(subcommand)]
        target: LinkTarget,
    },
}

#[derive(Subcommand)]
enum PreferencesAction {
    /// Print the stored preferences
    Show,
    /// Save preferences; unspecified categories keep their current value
    Set {
        #[arg(long)]
        performance: Option<bool>,
        #[arg(long)]
        functionality: Option<bool>,
        #[arg(long)]
        marketing: Option<bool>,
    },
}

#[derive(Subcommand)]
enum LinkTarget {
    /// WhatsApp click-to-chat link
    Whatsapp {
        #[arg(long, default_value = revolve_site::links::CONSULTATION_PHONE)]
        phone: String,
        #[arg(long, default_value = revolve_site::links::CONSULTATION_MESSAGE)]
        message: String,
    },
    /// Social profile link (`#` for unknown platforms)
    Social { platform: String },
    /// Permalink to a section of a page
    Permalink { page_url: String, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CarouselArg {
    Destinations,
    Partners,
    Testimonials,
    All,
}

impl CarouselArg {
    fn keys(self) -> Vec<CarouselKey> {
        match self {
            Self::Destinations => vec![CarouselKey::Destinations],
            Self::Partners => vec![CarouselKey::Partners],
            Self::Testimonials => vec![CarouselKey::Testimonials],
            Self::All => vec![
                CarouselKey::Destinations,
                CarouselKey::Partners,
                CarouselKey::Testimonials,
            ],
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded environment overrides from .env");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "using configuration file");
    }
    log_warnings(&warnings);

    match cli.command {
        Command::Simulate {
            duration_ms,
            carousel,
        } => simulate::run(&config, &carousel.keys(), duration_ms).await,
        Command::Preferences { path, action } => {
            let path = path.unwrap_or_else(|| config.preferences_path.clone());
            match action {
                PreferencesAction::Show => preferences::show(&path),
                PreferencesAction::Set {
                    performance,
                    functionality,
                    marketing,
                } => preferences::set(
                    &path,
                    preferences::Choices {
                        performance,
                        functionality,
                        marketing,
                    },
                ),
            }
        }
        Command::Link { target } => match target {
            LinkTarget::Whatsapp { phone, message } => {
                links::whatsapp(&phone, &message)
            }
            LinkTarget::Social { platform } => links::social(&platform),
            LinkTarget::Permalink { page_url, id } => {
                links::permalink(&page_url, &id)
            }
        },
    }
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}
