//! Command-line and environment configuration.

use clap::Args;
use zeroize::Zeroizing;

use crate::store::StoreConfig;

/// Log output format.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Document store connection settings.
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Document store base URL
    #[arg(long, env = "STORE_URL")]
    pub store_url: String,

    /// Session token of the signed-in user
    #[arg(long, env = "STORE_TOKEN", hide_env_values = true)]
    pub store_token: String,
}

impl StoreArgs {
    /// Connection settings for [`crate::store::StoreClient`].
    #[must_use]
    pub fn into_config(self) -> StoreConfig {
        StoreConfig {
            base_url: self.store_url,
            token: Zeroizing::new(self.store_token),
        }
    }
}
