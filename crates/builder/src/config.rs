//! Builder configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_ADMIN_TOKEN` - Admin API access token with `write_content`
//!   scope. This is the single source for the token: there is no cookie,
//!   session, or fallback chain.
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version (default: 2026-01)

use secrecy::SecretString;
use thiserror::Error;

use pagesmith_core::ShopDomain;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the admin token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: ShopDomain,
    /// Shopify API version (e.g., 2026-01)
    pub api_version: String,
    /// Admin API access token (server-side only)
    pub admin_token: SecretString,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("admin_token", &"[REDACTED]")
            .finish()
    }
}

impl ShopifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store = get_required_env("SHOPIFY_STORE")?;
        if !store.contains('.') {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPIFY_STORE".to_owned(),
                format!("expected a domain like my-store.myshopify.com, got {store:?}"),
            ));
        }

        Ok(Self {
            store: ShopDomain::new(store),
            api_version: get_env_or_default("SHOPIFY_API_VERSION", "2026-01"),
            admin_token: SecretString::from(get_required_env("SHOPIFY_ADMIN_TOKEN")?),
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
