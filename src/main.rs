#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use clinic_core::logging::LoggingBuilder;
use clinic_core::{FieldValidator, LandingConfig};
use dioxus::desktop::{Config, WindowBuilder};

/// Page configuration, set once at startup
static CONFIG: OnceLock<LandingConfig> = OnceLock::new();

/// Field validator compiled from the configured rules
static VALIDATOR: OnceLock<FieldValidator> = OnceLock::new();

/// Get the page configuration (loaded at startup, defaults otherwise)
pub fn landing_config() -> &'static LandingConfig {
    CONFIG.get_or_init(LandingConfig::default)
}

/// Get the compiled field validator, if startup got that far
pub fn field_validator() -> Option<&'static FieldValidator> {
    VALIDATOR.get()
}

/// МедЦентр - clinic landing page
#[derive(Parser, Debug)]
#[command(name = "clinic-desktop")]
#[command(about = "Clinic landing page with online appointment booking")]
struct Args {
    /// JSON config file (defaults to <config dir>/clinic-landing/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    LoggingBuilder::new(config.log_level.clone()).init();
    tracing::info!(
        latency_ms = config.submission.latency_ms,
        "Starting clinic landing page"
    );

    let validator =
        FieldValidator::new(&config.validation).context("invalid validation rules")?;
    if VALIDATOR.set(validator).is_err() || CONFIG.set(config).is_err() {
        anyhow::bail!("configuration initialized twice");
    }

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("МедЦентр")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}

/// Explicit path must load; the default location is optional.
fn load_config(path: Option<&Path>) -> anyhow::Result<LandingConfig> {
    if let Some(path) = path {
        return LandingConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    let default_path = dirs::config_dir().map(|dir| dir.join("clinic-landing").join("config.json"));
    match default_path {
        Some(path) if path.exists() => LandingConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        _ => Ok(LandingConfig::default()),
    }
}
