use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Errors raised while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Deployment mode. Only [`AppEnvironment::Development`] exposes fault
/// details in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    Development,
    Test,
    #[default]
    Production,
}

impl AppEnvironment {
    /// Whether 500 responses may carry the underlying error text.
    pub fn exposes_diagnostics(self) -> bool {
        matches!(self, AppEnvironment::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Test => "test",
            AppEnvironment::Production => "production",
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnvironment::Development),
            "test" => Ok(AppEnvironment::Test),
            "production" | "prod" => Ok(AppEnvironment::Production),
            other => Err(format!(
                "unknown environment '{other}', expected development, test or production"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Deployment mode from `APP_ENV` (default: production).
    pub environment: AppEnvironment,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Optional JSON file replacing the builtin onboarding catalog.
    pub onboarding_catalog_path: Option<PathBuf>,
    /// PostgreSQL URL; the in-memory profile store is used when unset.
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `APP_ENV`                 | `production`            |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `ONBOARDING_CATALOG_PATH` | builtin catalog         |
    /// | `DATABASE_URL`            | in-memory store         |
    ///
    /// See [`JwtConfig::from_lookup`] for the `JWT_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = parse_or("PORT", get("PORT"), 3000)?;

        let environment = match get("APP_ENV") {
            Some(raw) => raw
                .parse()
                .map_err(|reason| ConfigError::Invalid { key: "APP_ENV", reason })?,
            None => AppEnvironment::default(),
        };

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                // Credentialed CORS cannot use a wildcard origin.
                if origin == "*" {
                    return Err(ConfigError::Invalid {
                        key: "CORS_ORIGINS",
                        reason: "wildcard '*' is not allowed, list explicit origins".into(),
                    });
                }
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    reason: format!("'{origin}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 =
            parse_or("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 30)?;

        let jwt = JwtConfig::from_lookup(&get)?;

        Ok(Self {
            host,
            port,
            environment,
            cors_origins,
            request_timeout_secs,
            jwt,
            onboarding_catalog_path: get("ONBOARDING_CATALOG_PATH").map(PathBuf::from),
            database_url: get("DATABASE_URL"),
        })
    }
}

/// Parse `raw` as `T`, falling back to `default` when absent.
pub(crate) fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = load(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.cors_origins, vec![HeaderValue::from_static("http://localhost:5173")]);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.onboarding_catalog_path.is_none());
        assert!(config.database_url.is_none());
    }

    #[test]
    fn missing_secret_fails() {
        assert_matches!(load(&[]), Err(ConfigError::Missing("JWT_SECRET")));
    }

    #[test]
    fn development_environment_is_recognised() {
        let config = load(&[("JWT_SECRET", "s"), ("APP_ENV", "Development")]).unwrap();
        assert_eq!(config.environment, AppEnvironment::Development);
        assert!(config.environment.exposes_diagnostics());
    }

    #[test]
    fn only_development_exposes_diagnostics() {
        assert!(!AppEnvironment::Production.exposes_diagnostics());
        assert!(!AppEnvironment::Test.exposes_diagnostics());
    }

    #[test]
    fn unknown_environment_fails() {
        let result = load(&[("JWT_SECRET", "s"), ("APP_ENV", "staging")]);
        assert_matches!(result, Err(ConfigError::Invalid { key: "APP_ENV", .. }));
    }

    #[test]
    fn invalid_port_fails() {
        let result = load(&[("JWT_SECRET", "s"), ("PORT", "http")]);
        assert_matches!(result, Err(ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("JWT_SECRET", "s"),
            ("CORS_ORIGINS", "https://a.app, https://b.app,,"),
        ])
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec![
                HeaderValue::from_static("https://a.app"),
                HeaderValue::from_static("https://b.app"),
            ]
        );
    }

    #[test]
    fn wildcard_cors_origin_fails() {
        for raw in ["*", "https://a.app, *"] {
            let result = load(&[("JWT_SECRET", "s"), ("CORS_ORIGINS", raw)]);
            assert_matches!(result, Err(ConfigError::Invalid { key: "CORS_ORIGINS", .. }));
        }
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = load(&[("JWT_SECRET", "s"), ("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn optional_paths_are_read() {
        let config = load(&[
            ("JWT_SECRET", "s"),
            ("ONBOARDING_CATALOG_PATH", "/etc/reloomate/onboarding.json"),
            ("DATABASE_URL", "postgres://localhost/reloomate"),
        ])
        .unwrap();
        assert_eq!(
            config.onboarding_catalog_path,
            Some(PathBuf::from("/etc/reloomate/onboarding.json"))
        );
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/reloomate"));
    }
}
