//! API configuration
//!
//! Sources, later overriding earlier: built-in defaults, an optional
//! `config/api.{toml,yaml,json}` file, then `API_`-prefixed environment
//! variables with `__` separating nested keys (`API_CORS__ALLOWED_ORIGINS`).

use axum::http::{HeaderValue, Method};
use serde::Deserialize;

/// Which data access adapter backs the customer service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStore {
    /// PostgreSQL through `infra_db`
    #[default]
    Postgres,
    /// In-process list, starts with the two demo customers
    Memory,
}

/// Cross-origin settings for `/api/**`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Comma-separated origins, `*` for any
    #[serde(rename = "allowed-origins", alias = "allowed_origins")]
    pub allowed_origins: String,
    /// Comma-separated HTTP methods
    #[serde(rename = "allowed-methods", alias = "allowed_methods")]
    pub allowed_methods: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_string(),
            allowed_methods: "GET,POST,PUT,DELETE".to_string(),
        }
    }
}

impl CorsConfig {
    /// True when any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        split_list(&self.allowed_origins).any(|o| o == "*")
    }

    /// Parsed origins; entries that are not valid header values are dropped
    pub fn origins(&self) -> Vec<HeaderValue> {
        split_list(&self.allowed_origins)
            .filter(|o| *o != "*")
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect()
    }

    /// Parsed methods; unknown tokens are dropped
    pub fn methods(&self) -> Vec<Method> {
        split_list(&self.allowed_methods)
            .filter_map(|m| Method::from_bytes(m.to_ascii_uppercase().as_bytes()).ok())
            .collect()
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Data access adapter selected at startup
    pub customer_store: CustomerStore,
    /// Insert one generated customer at startup
    pub seed_demo_data: bool,
    /// Cross-origin settings
    pub cors: CorsConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/customer".to_string(),
            log_level: "info".to_string(),
            customer_store: CustomerStore::Postgres,
            seed_demo_data: false,
            cors: CorsConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the optional file and the environment
    ///
    /// `DATABASE_URL` is honoured when `API_DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let legacy_url = match std::env::var("API_DATABASE_URL") {
            Ok(_) => None,
            Err(_) => std::env::var("DATABASE_URL").ok(),
        };

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/api").required(false))
            .add_source(
                config::Environment::with_prefix("API")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("database_url", legacy_url)?;

        Self::from_builder(builder)
    }

    /// Deserializes a prepared builder, filling gaps from [`Default`]
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> ApiConfig {
        ApiConfig::from_builder(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.customer_store, CustomerStore::Postgres);
        assert!(!config.seed_demo_data);
        assert!(config.cors.allows_any_origin());
        assert_eq!(
            config.cors.methods(),
            vec![Method::GET, Method::POST, Method::PUT, Method::DELETE]
        );
    }

    #[test]
    fn test_file_overrides() {
        let config = from_toml(
            r#"
            port = 9090
            customer_store = "memory"
            seed_demo_data = true

            [cors]
            allowed-origins = "http://localhost:3000, http://localhost:5173"
            allowed-methods = "get,post"
            "#,
        );

        assert_eq!(config.port, 9090);
        assert_eq!(config.customer_store, CustomerStore::Memory);
        assert!(config.seed_demo_data);
        assert!(!config.cors.allows_any_origin());
        assert_eq!(config.cors.origins().len(), 2);
        assert_eq!(config.cors.methods(), vec![Method::GET, Method::POST]);
    }

    #[test]
    fn test_unknown_store_is_rejected() {
        let result = ApiConfig::from_builder(
            config::Config::builder()
                .add_source(File::from_str(r#"customer_store = "redis""#, FileFormat::Toml)),
        );
        assert!(result.is_err());
    }
}
