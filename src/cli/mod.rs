//! CLI interface using clap
//!
//! gitexplain is a single long-running server, so there are no subcommands;
//! the flags configure the listen address and the generative-model backend.

use crate::config::AppConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// gitexplain - explain GitHub-hosted source files in the browser
#[derive(Parser, Debug)]
#[command(name = "gitexplain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to serve the web UI on
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Generative model used for explanations
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the generative-text API
    #[arg(long)]
    pub endpoint: Option<String>,

    /// API key for the generative-text service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply CLI flags on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(ref model) = self.model {
            config.llm.model = model.clone();
        }
        if let Some(ref endpoint) = self.endpoint {
            config.llm.endpoint = endpoint.clone();
        }
        if let Some(ref api_key) = self.api_key {
            config.llm.api_key = api_key.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["gitexplain", "--model", "gemini-2.0-flash", "--verbose"]);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert!(cli.verbose);
        assert!(cli.bind.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "gitexplain",
            "--bind",
            "0.0.0.0:9000",
            "--api-key",
            "test-key",
        ]);

        let mut config = AppConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.llm.api_key, "test-key");
        // Untouched fields keep their defaults
        assert_eq!(config.llm.model, "gemini-2.0-flash");
    }
}
