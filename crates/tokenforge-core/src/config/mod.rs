//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file overlaid with `TOKENFORGE__`-prefixed environment
//! variables. Each sub-module represents a logical configuration section.

pub mod app;
pub mod logging;
pub mod tokens;

use serde::{Deserialize, Serialize};

pub use self::app::{AppInfoConfig, CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::tokens::TokensConfig;

use crate::error::AppError;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Keys whose environment values are comma-separated lists.
const LIST_KEYS: [&str; 3] = [
    "server.cors.allowed_origins",
    "server.cors.allowed_methods",
    "server.cors.allowed_headers",
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Application metadata shown on the welcome route and the form page.
    #[serde(default)]
    pub app: AppInfoConfig,
    /// Token generation limits.
    #[serde(default)]
    pub tokens: TokensConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; a missing file yields the built-in defaults.
    /// Environment variables such as `TOKENFORGE__SERVER__PORT=9000` override
    /// file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &str, environment: config::Environment) -> Result<Self, AppError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!(path, "Configuration loaded");
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.tokens.validate()?;

        if self.server.max_body_bytes == 0 {
            return Err(AppError::configuration(
                "server.max_body_bytes must be greater than zero",
            ));
        }

        Ok(())
    }

    /// `host:port` string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `TOKENFORGE__SECTION__KEY` environment source.
///
/// CORS lists are written comma-separated, e.g.
/// `TOKENFORGE__SERVER__CORS__ALLOWED_ORIGINS=https://a.example,https://b.example`.
fn environment() -> config::Environment {
    LIST_KEYS.iter().fold(
        config::Environment::with_prefix("TOKENFORGE")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}
