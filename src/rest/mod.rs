//! Signed REST API client.
//!
//! [`ApiClient::sign_and_dispatch`] is the one pipeline every request goes
//! through: collect parameters, sign, append the OAuth query string, send
//! the JSON payload and decode the JSON answer. The endpoint callers on
//! [`ApiClient`] (products, orders, credentials) only fix the path, method
//! and payload.
//!
//! ```rust,no_run
//! use oauth1_rest_client::rest::{ApiClient, OrderListRequest};
//! use oauth1_rest_client::types::OrderStatus;
//!
//! async fn pending(client: &ApiClient) -> oauth1_rest_client::Result<usize> {
//!     let request = OrderListRequest::with_status(OrderStatus::Pending);
//!     let orders = client.list_orders(Some(&request)).await?;
//!     Ok(orders.as_array().map(Vec::len).unwrap_or(0))
//! }
//! ```

mod client;
mod dispatcher;
pub mod endpoints;
mod resources;
mod types;

pub use client::{ApiClient, ApiClientBuilder, SignedRequest};
pub use dispatcher::{RequestDispatcher, decode_body, default_user_agent};
pub use types::*;
