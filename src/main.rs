//! LinkLens - a terminal client for LinkedIn profile analysis
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use linklens_app::config;

/// Analyze a LinkedIn profile and build a personal-branding plan from your resume
#[derive(Parser, Debug)]
#[command(name = "linklens", version)]
#[command(about = "Terminal client for LinkedIn profile analysis", long_about = None)]
struct Args {
    /// LinkedIn profile URL to analyze on startup
    #[arg(value_name = "URL")]
    profile_url: Option<String>,

    /// Backend base URL (overrides LINKLENS_BACKEND_URL and the config file)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging goes to a file; a failure here should not stop the app
    if let Err(e) = linklens_core::logging::init() {
        eprintln!("Warning: could not initialize logging: {e}");
    }

    let settings = config::load_config(args.config.as_deref(), args.backend_url.as_deref())?;
    tracing::info!(
        "Backend {} (timeout {}s, url check {})",
        settings.backend.base_url,
        settings.backend.timeout_secs,
        settings.behavior.validate_url
    );

    if let Err(e) = linklens_tui::run(settings, args.profile_url).await {
        eprintln!(
            "See {} for details",
            linklens_core::logging::get_current_log_file().display()
        );
        return Err(e.into());
    }
    Ok(())
}
