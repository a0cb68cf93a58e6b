//! gitexplain - explain GitHub-hosted source files in the browser
//!
//! Long-running web application: the user pastes a GitHub file URL, the
//! server fetches the raw content and asks a generative model to explain it.

use anyhow::Result;
use gitexplain::cli::Cli;
use gitexplain::config::AppConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // File values first, then CLI/env overrides on top
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    // The credential is required at startup; there is no degraded mode.
    if config.llm.api_key.is_empty() {
        anyhow::bail!("no API key configured: set GEMINI_API_KEY or pass --api-key");
    }

    gitexplain::web::run(config).await
}
