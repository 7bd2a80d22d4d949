//! # OAuth 1.0a REST Client
//!
//! An async Rust client for REST APIs authenticated with one-legged
//! OAuth 1.0a: requests are signed with the consumer key and secret only
//! (HMAC-SHA1, no token), and the OAuth parameters travel in the query
//! string rather than in an `Authorization` header.
//!
//! ## Features
//!
//! - Bit-exact signature base string and HMAC-SHA1 signing
//! - Signs exactly the query string that is transmitted
//! - JSON payloads, decoded JSON responses
//! - Fixed transport policy: 60 s timeout, 10 redirects, HTTP/1.1
//! - Typed errors separating transport failures from malformed responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oauth1_rest_client::config::{ApiConfig, Scheme};
//! use oauth1_rest_client::rest::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("ck_key", "cs_secret", "shop.example.com", Scheme::Https)?
//!         .with_api_path("wp-json/wc/v3");
//!     let client = ApiClient::new(config)?;
//!     let order = client.get_order(42).await?;
//!     println!("Order: {}", order);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::{ApiConfig, Scheme};
pub use error::ClientError;
pub use rest::ApiClient;
pub use types::common::{HttpMethod, OrderStatus};

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
