#![forbid(unsafe_code)]

mod config;
mod constants;
mod controller;
mod font;
mod gui;
mod persistence;
mod preview;
mod transfer;

use clap::Parser;
use std::path::PathBuf;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use controller::ThemeController;
use font::{FontLoader, FontconfigSource};
use persistence::{FileStore, KeyValueStore, MemoryStore, Persistence};

/// Live visual theme editor with a product-card preview
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// trace, debug, info, warn or error (falls back to LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,

    /// Directory holding the persisted theme
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Start from the default theme, ignoring the persisted one
    #[arg(long)]
    fresh: bool,

    /// Keep the theme in memory only
    #[arg(long, conflicts_with = "data_dir")]
    ephemeral: bool,
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .map(|level| parse_level(&level))
        .unwrap_or(TraceLevel::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let store: Box<dyn KeyValueStore> = if cli.ephemeral {
        info!("Using in-memory theme storage");
        Box::new(MemoryStore::default())
    } else {
        let dir = cli.data_dir.clone().unwrap_or_else(FileStore::default_dir);
        info!(dir = %dir.display(), "Using theme storage directory");
        Box::new(FileStore::new(dir))
    };

    let fonts = FontLoader::new(Box::new(FontconfigSource));
    let controller = ThemeController::start(Persistence::new(store), fonts, cli.fresh);

    gui::run_gui(controller)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_level("warn"), TraceLevel::WARN);
        assert_eq!(parse_level("verbose"), TraceLevel::INFO);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["theme-studio", "--fresh", "--data-dir", "/tmp/themes"]);
        assert!(cli.fresh);
        assert!(!cli.ephemeral);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/themes")));

        assert!(Cli::try_parse_from(["theme-studio", "--ephemeral", "--data-dir", "/tmp"]).is_err());
    }
}
