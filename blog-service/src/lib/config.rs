use std::env;

use auth::TokenSettings;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::security::models::PublicRoute;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub validity_seconds: i64,
}

impl JwtConfig {
    /// Signing parameters handed to the token service at startup.
    pub fn token_settings(&self) -> TokenSettings {
        TokenSettings::new(self.secret.as_bytes().to_vec(), self.validity_seconds)
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("validity_seconds", &self.validity_seconds)
            .finish()
    }
}

/// Routes that skip token inspection entirely.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_public_routes")]
    pub public_routes: Vec<PublicRoute>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            public_routes: default_public_routes(),
        }
    }
}

fn default_public_routes() -> Vec<PublicRoute> {
    vec![PublicRoute::new("GET", "/tags")]
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__VALIDITY_SECONDS=3600 overrides jwt.validity_seconds
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(source: &str) -> Config {
        ConfigBuilder::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_apply_when_sections_are_omitted() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/blog"

            [server]
            http_port = 8080

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"
            validity_seconds = 60
            "#,
        );

        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.auth.public_routes.len(), 1);
        assert!(config.auth.public_routes[0].matches("GET", "/tags"));
        assert_eq!(config.jwt.token_settings().validity().num_seconds(), 60);
    }

    #[test]
    fn test_public_routes_are_configurable() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/blog"

            [server]
            http_port = 8080

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"
            validity_seconds = 60

            [[auth.public_routes]]
            method = "GET"
            path_prefix = "/profiles/"
            "#,
        );

        assert_eq!(config.auth.public_routes.len(), 1);
        assert!(config.auth.public_routes[0].matches("GET", "/profiles/jake"));
        assert!(!config.auth.public_routes[0].matches("GET", "/tags"));
    }

    #[test]
    fn test_jwt_debug_redacts_secret() {
        let jwt = JwtConfig {
            secret: "super-secret".to_string(),
            validity_seconds: 60,
        };

        assert!(!format!("{:?}", jwt).contains("super-secret"));
    }
}
