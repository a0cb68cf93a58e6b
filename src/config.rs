//! Application configuration
//!
//! Built once at process start from an optional TOML file plus CLI/env
//! overrides, then shared immutably with the request handlers. The API
//! credential lives here and is never read from the environment after
//! startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

/// Top-level configuration for the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the web UI listens on
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    /// Generative-model configuration
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Configuration for the generative-text service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name; fixed for the process lifetime
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; empty means unconfigured, which is fatal at startup
    #[serde(default)]
    pub api_key: String,

    /// Maximum tokens for the generated explanation
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: usize,

    /// Temperature for generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_bind() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080)
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_max_output_tokens() -> usize {
    2048
}

fn default_temperature() -> f32 {
    0.3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            llm: LlmConfig::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: String::new(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, or return defaults when no
    /// file was given. A path that cannot be read or parsed is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file: {}", path.display()))?;
                let config: AppConfig = toml::from_str(&content)
                    .with_context(|| format!("failed to parse config file: {}", path.display()))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
