#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use casadeoro_core::{Section, SiteConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global site config, set once from the command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site config (loaded at startup, or defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().copied().unwrap_or_default()
}

/// Casa De Oro - Investment Pitch
#[derive(Parser, Debug)]
#[command(name = "casadeoro-desktop")]
#[command(about = "Casa De Oro - Modern Mexican Steakhouse & Lounge investment pitch")]
struct Args {
    /// JSON config file (defaults to <config dir>/casadeoro/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels (overrides config)
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels (overrides config)
    #[arg(long)]
    height: Option<f64>,

    /// Section to open at, by anchor id (e.g. `location` or `#location`)
    #[arg(short, long)]
    section: Option<Section>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,casadeoro=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut config =
        SiteConfig::load_or_default(args.config.as_deref()).with_window_size(args.width, args.height);
    if let Some(section) = args.section {
        config.start_section = Some(section);
    }

    // Store config globally
    let _ = SITE_CONFIG.set(config);

    tracing::info!(
        threshold = config.scroll_threshold,
        clearance = config.header_clearance,
        "Starting Casa De Oro ({}x{})",
        config.window_width,
        config.window_height
    );

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Casa De Oro")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_flag_accepts_anchor_forms() {
        let args = Args::try_parse_from(["casadeoro-desktop", "--section", "#financials"]).unwrap();
        assert_eq!(args.section, Some(Section::Financials));

        let args = Args::try_parse_from(["casadeoro-desktop", "-s", "vision"]).unwrap();
        assert_eq!(args.section, Some(Section::Vision));
    }

    #[test]
    fn unknown_section_flag_is_rejected() {
        let err = Args::try_parse_from(["casadeoro-desktop", "--section", "pricing"]).unwrap_err();
        assert!(err.to_string().contains("Unknown section"));
    }

    #[test]
    fn infinite_width_keeps_config_width() {
        let args = Args::try_parse_from(["casadeoro-desktop", "--width", "inf", "--height", "720"]).unwrap();
        let config = SiteConfig::default().with_window_size(args.width, args.height);
        assert_eq!(config.window_width, SiteConfig::default().window_width);
        assert_eq!(config.window_height, 720.0);
    }
}
