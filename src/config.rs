// Configuration module
// Loads server settings from config.toml / environment variables and captures
// the Telegram destination credentials once at startup. Configuration is
// immutable for the lifetime of the process.

use serde::Deserialize;
use std::net::SocketAddr;

use crate::telegram::TelegramClient;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: u64,
}

/// Destination credentials for forwarding submissions.
///
/// Both values must be present and non-empty for forwarding to be enabled;
/// otherwise submissions are accepted without an outbound call.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    /// Overlay the well-known environment variables on top of file values.
    /// Empty environment values are ignored, matching the absent case.
    fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
            if !token.is_empty() {
                self.bot_token = Some(token);
            }
        }
        if let Ok(chat_id) = std::env::var("TELEGRAM_CHAT_ID") {
            if !chat_id.is_empty() {
                self.chat_id = Some(chat_id);
            }
        }
    }

    /// Returns the credential pair only when both halves are usable
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token, chat_id))
            }
            _ => None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            // Double underscore separates nesting levels, so
            // RELAY_SERVER__PORT reaches server.port; try_parsing converts
            // the string values into the typed fields.
            .add_source(
                config::Environment::with_prefix("RELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.max_body_size", 65_536)? // 64KB, plenty for a form
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.telegram.apply_env();
        Ok(cfg)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

pub struct AppState {
    pub config: Config,
    /// Present only when both credentials are configured
    pub telegram: Option<TelegramClient>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let telegram = config
            .telegram
            .credentials()
            .map(|(token, chat_id)| TelegramClient::new(token, chat_id));

        Self {
            config: config.clone(),
            telegram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_both_present() {
        let cfg = TelegramConfig {
            bot_token: Some("123:abc".to_string()),
            chat_id: Some("42".to_string()),
        };
        assert_eq!(cfg.credentials(), Some(("123:abc", "42")));
    }

    #[test]
    fn test_credentials_missing_token() {
        let cfg = TelegramConfig {
            bot_token: None,
            chat_id: Some("42".to_string()),
        };
        assert_eq!(cfg.credentials(), None);
    }

    #[test]
    fn test_credentials_missing_chat_id() {
        let cfg = TelegramConfig {
            bot_token: Some("123:abc".to_string()),
            chat_id: None,
        };
        assert_eq!(cfg.credentials(), None);
    }

    #[test]
    fn test_credentials_empty_string_counts_as_absent() {
        let cfg = TelegramConfig {
            bot_token: Some(String::new()),
            chat_id: Some("42".to_string()),
        };
        assert_eq!(cfg.credentials(), None);
    }

    #[test]
    fn test_env_override_reaches_nested_key() {
        std::env::set_var("RELAY_SERVER__PORT", "9999");
        let cfg = Config::load().unwrap();
        std::env::remove_var("RELAY_SERVER__PORT");
        assert_eq!(cfg.server.port, 9999);
    }

    #[test]
    fn test_state_without_credentials_has_no_client() {
        let cfg = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                max_body_size: 65_536,
            },
            telegram: TelegramConfig::default(),
        };
        let state = AppState::new(&cfg);
        assert!(state.telegram.is_none());
    }
}
