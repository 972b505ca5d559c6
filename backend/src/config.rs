//! Service configuration, read once at startup.
//!
//! Values come from the process environment (with `.env` support via
//! dotenvy): `PORT` for the listening port and `APP_ENV` for the deployment
//! environment. The resulting [`Config`] is passed explicitly to the server;
//! nothing else in the crate reads environment variables.

use std::str::FromStr;

use crate::error::ConfigError;

/// Deployment environment.
///
/// Controls how much error detail reaches clients: production responses
/// suppress non-operational detail, development responses include it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnv(other.to_string())),
        }
    }
}

/// Immutable service configuration.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Listening port for the HTTP server.
    pub port: u16,
    /// Deployment environment.
    pub env: Environment,
}

/// Default listening port when PORT is unset.
pub const DEFAULT_PORT: u16 = 8088;

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Loads a `.env` file if present, then reads `PORT` (default 8088) and
    /// `APP_ENV` (default development). Unparseable values are errors rather
    /// than silent fallbacks.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let env = match std::env::var("APP_ENV") {
            Ok(raw) => raw.parse::<Environment>()?,
            Err(_) => Environment::Development,
        };

        Ok(Self { port, env })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            env: Environment::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" test ".parse::<Environment>().unwrap(), Environment::Test);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_flags() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
        assert!(Environment::Development.is_development());
        assert_eq!(Environment::Test.name(), "test");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8088);
        assert_eq!(config.env, Environment::Development);
    }
}
