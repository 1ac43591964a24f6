//! Server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Shortest accepted HS256 signing secret, in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Longest token lifetime accepted from `JWT_EXPIRATION_DAYS` (ten years).
pub const MAX_JWT_EXPIRATION_DAYS: i64 = 3650;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                name: "LOG_FORMAT".to_string(),
                reason: format!("expected 'pretty' or 'json', got '{}'", other),
            }),
        }
    }
}

/// Bearer token settings.
#[derive(Clone)]
pub struct JwtConfig {
    /// HS256 signing secret.
    pub secret: String,
    /// Value of the `iss` claim, checked on every request.
    pub issuer: String,
    /// Value of the `aud` claim, checked on every request.
    pub audience: String,
    /// Token lifetime in days.
    pub expiration_days: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Bearer token settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `JWT_SECRET`: HS256 signing secret, at least 32 characters
    ///
    /// Optional:
    /// - `JWT_ISSUER`: Token issuer (default: "fieldnotes")
    /// - `JWT_AUDIENCE`: Token audience (default: "fieldnotes-client")
    /// - `JWT_EXPIRATION_DAYS`: Token lifetime (default: 7)
    /// - `PORT`: Server port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "pretty" or "json" (default: "pretty")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret =
            lookup("JWT_SECRET").ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::InvalidValue {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} characters", MIN_JWT_SECRET_LENGTH),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "fieldnotes".to_string());
        let audience = lookup("JWT_AUDIENCE").unwrap_or_else(|| "fieldnotes-client".to_string());

        let expiration_days = match lookup("JWT_EXPIRATION_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| (1..=MAX_JWT_EXPIRATION_DAYS).contains(days))
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "JWT_EXPIRATION_DAYS".to_string(),
                    reason: format!(
                        "expected a whole number of days between 1 and {}, got '{}'",
                        MAX_JWT_EXPIRATION_DAYS, raw
                    ),
                })?,
            None => 7,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("'{}' is not a valid port", raw),
            })?,
            None => 3000,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string());

        Ok(Self {
            port,
            log_level,
            log_format,
            cors_allowed_origins,
            jwt: JwtConfig {
                secret,
                issuer,
                audience,
                expiration_days,
            },
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.jwt.issuer, "fieldnotes");
        assert_eq!(config.jwt.audience, "fieldnotes-client");
        assert_eq!(config.jwt.expiration_days, 7);
    }

    #[test]
    fn test_secret_required_and_long_enough() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingEnvVar(name)) if name == "JWT_SECRET"));
        assert!(matches!(
            load(&[("JWT_SECRET", "short")]),
            Err(ConfigError::InvalidValue { name, .. }) if name == "JWT_SECRET"
        ));
    }

    #[test]
    fn test_expiration_days_must_be_in_range() {
        for bad in ["0", "-2", "soon", "3651", "100000000"] {
            let result = load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_DAYS", bad)]);
            assert!(result.is_err(), "accepted {}", bad);
        }
        let config = load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_DAYS", "30")]).unwrap();
        assert_eq!(config.jwt.expiration_days, 30);
        let config = load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_DAYS", "3650")]).unwrap();
        assert_eq!(config.jwt.expiration_days, MAX_JWT_EXPIRATION_DAYS);
    }

    #[test]
    fn test_log_format_parsing() {
        let config = load(&[("JWT_SECRET", SECRET), ("LOG_FORMAT", "JSON")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(load(&[("JWT_SECRET", SECRET), ("LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(load(&[("JWT_SECRET", SECRET), ("PORT", "http")]).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(SECRET));
        assert!(debug.contains("<redacted>"));
    }
}
