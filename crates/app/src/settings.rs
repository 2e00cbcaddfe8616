//! Handles settings for the application.
//!
//! Sources, lowest priority first: `settings.toml` (or the file given with
//! `--config`), `FINANCE__*` environment variables, command-line flags.
//!
//! ```toml
//! [app]
//! level = "info"
//!
//! [storage]
//! json = "./data"
//! ```
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Parser)]
#[command(name = "finance", about = "Personal finance ledger")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Store users and wallets as JSON under this directory.
    #[arg(long, conflicts_with = "memory")]
    pub data_dir: Option<String>,
    /// Keep everything in memory; nothing is written to disk.
    #[arg(long)]
    pub memory: bool,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    Memory,
    Json(String),
}

impl Default for Storage {
    fn default() -> Self {
        Storage::Json(DEFAULT_DATA_DIR.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub storage: Storage,
}

impl Settings {
    pub fn new(args: &Args) -> Result<Self, ConfigError> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(args.config.is_some()))
            .add_source(Environment::with_prefix("FINANCE").separator("__"))
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        settings.apply_overrides(args);
        Ok(settings)
    }

    fn apply_overrides(&mut self, args: &Args) {
        if let Some(level) = &args.level {
            self.app.level = level.clone();
        }
        if args.memory {
            self.storage = Storage::Memory;
        } else if let Some(dir) = &args.data_dir {
            self.storage = Storage::Json(dir.clone());
        }
    }
}
