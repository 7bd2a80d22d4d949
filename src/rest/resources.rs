//! Endpoint callers.
//!
//! Each method is a fixed (path, method, payload) triple passed through
//! [`ApiClient::sign_and_dispatch`]. Responses are returned as decoded JSON;
//! their shape belongs to the API, not to this crate.

use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::rest::ApiClient;
use crate::rest::endpoints;
use crate::rest::types::{DeleteRequest, OrderListRequest, OrderStatusUpdate, ProductListRequest};
use crate::types::{EmptyPayload, HttpMethod, NO_QUERY, OrderStatus};

impl ApiClient {
    /// List products.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use oauth1_rest_client::config::{ApiConfig, Scheme};
    /// use oauth1_rest_client::rest::{ApiClient, ProductListRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = ApiConfig::from_env()?;
    ///     let client = ApiClient::new(config)?;
    ///
    ///     let request = ProductListRequest { per_page: Some(10), ..Default::default() };
    ///     let products = client.list_products(Some(&request)).await?;
    ///     for product in products.as_array().into_iter().flatten() {
    ///         println!("{}", product["name"]);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list_products(
        &self,
        request: Option<&ProductListRequest>,
    ) -> Result<Value, ClientError> {
        match request {
            Some(req) => {
                self.sign_and_dispatch(endpoints::PRODUCTS, HttpMethod::Get, req, &EmptyPayload {})
                    .await
            }
            None => {
                self.sign_and_dispatch(endpoints::PRODUCTS, HttpMethod::Get, NO_QUERY, &EmptyPayload {})
                    .await
            }
        }
    }

    /// Get a single product.
    pub async fn get_product(&self, id: u64) -> Result<Value, ClientError> {
        self.sign_and_dispatch(&endpoints::product(id), HttpMethod::Get, NO_QUERY, &EmptyPayload {})
            .await
    }

    /// List orders, optionally filtered.
    pub async fn list_orders(&self, request: Option<&OrderListRequest>) -> Result<Value, ClientError> {
        match request {
            Some(req) => {
                self.sign_and_dispatch(endpoints::ORDERS, HttpMethod::Get, req, &EmptyPayload {})
                    .await
            }
            None => {
                self.sign_and_dispatch(endpoints::ORDERS, HttpMethod::Get, NO_QUERY, &EmptyPayload {})
                    .await
            }
        }
    }

    /// Get a single order.
    pub async fn get_order(&self, id: u64) -> Result<Value, ClientError> {
        self.sign_and_dispatch(&endpoints::order(id), HttpMethod::Get, NO_QUERY, &EmptyPayload {})
            .await
    }

    /// Create an order from an API-specific payload.
    pub async fn create_order<P>(&self, order: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.sign_and_dispatch(endpoints::ORDERS, HttpMethod::Post, NO_QUERY, order)
            .await
    }

    /// Update fields of an order.
    pub async fn update_order<P>(&self, id: u64, changes: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.sign_and_dispatch(&endpoints::order(id), HttpMethod::Put, NO_QUERY, changes)
            .await
    }

    /// Mark an order as completed.
    pub async fn complete_order(&self, id: u64) -> Result<Value, ClientError> {
        let update = OrderStatusUpdate {
            status: OrderStatus::Completed,
        };
        self.update_order(id, &update).await
    }

    /// Delete an order. With `force` it is removed instead of trashed.
    pub async fn delete_order(&self, id: u64, force: bool) -> Result<Value, ClientError> {
        let request = DeleteRequest {
            force: force.then_some(true),
        };
        self.sign_and_dispatch(&endpoints::order(id), HttpMethod::Delete, &request, &EmptyPayload {})
            .await
    }

    /// Fetch the credentials record of the authenticated consumer.
    pub async fn get_credentials(&self) -> Result<Value, ClientError> {
        self.sign_and_dispatch(endpoints::CREDENTIALS, HttpMethod::Get, NO_QUERY, &EmptyPayload {})
            .await
    }
}
