/*
 * Responsibility
 * - Load settings from the environment (PORT, APP_ENV, CORS, Basic realm, ...)
 * - Validate them (fail at startup rather than on the first request)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::services::auth::BasicCredentialSplit;
use crate::services::auth::basic::DEFAULT_REALM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,

    pub basic_auth_realm: String,
    pub basic_credential_split: BasicCredentialSplit,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let request_timeout_seconds: u64 = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(s) => s
                .trim()
                .parse()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        let basic_auth_realm = lookup("BASIC_AUTH_REALM").unwrap_or_else(|| DEFAULT_REALM.to_string());
        // Realm goes inside a quoted-string in the challenge header.
        if basic_auth_realm
            .chars()
            .any(|c| c == '"' || c == '\\' || c.is_control())
        {
            return Err(ConfigError::Invalid("BASIC_AUTH_REALM"));
        }

        let basic_credential_split = match lookup("BASIC_AUTH_STRICT_SPLIT")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("false") | Some("0") => BasicCredentialSplit::FirstColon,
            Some("true") | Some("1") => BasicCredentialSplit::Strict,
            Some(_) => return Err(ConfigError::Invalid("BASIC_AUTH_STRICT_SPLIT")),
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            request_timeout: Duration::from_secs(request_timeout_seconds),
            basic_auth_realm,
            basic_credential_split,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.basic_auth_realm, "My realm");
        assert_eq!(config.basic_credential_split, BasicCredentialSplit::FirstColon);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("BASIC_AUTH_REALM", "staff"),
            ("BASIC_AUTH_STRICT_SPLIT", "true"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            ["https://a.example", "https://b.example"]
        );
        assert_eq!(config.basic_auth_realm, "staff");
        assert_eq!(config.basic_credential_split, BasicCredentialSplit::Strict);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            load(&[("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            load(&[("BASIC_AUTH_REALM", "a\"b")]).unwrap_err(),
            ConfigError::Invalid("BASIC_AUTH_REALM")
        );
        assert_eq!(
            load(&[("BASIC_AUTH_STRICT_SPLIT", "maybe")]).unwrap_err(),
            ConfigError::Invalid("BASIC_AUTH_STRICT_SPLIT")
        );
        assert_eq!(
            load(&[("REQUEST_TIMEOUT_SECONDS", "0")]).unwrap_err(),
            ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")
        );
    }
}
