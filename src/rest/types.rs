//! Request types for the endpoint callers.
//!
//! These serialize to query parameters, which are signed together with the
//! OAuth parameters. Unset fields are left out.

use serde::Serialize;

use crate::types::OrderStatus;

/// Request for the product list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductListRequest {
    /// Page of the collection, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to a category ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    /// Restrict to a SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// Request for the order list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderListRequest {
    /// Restrict to a status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Restrict to a customer ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
    /// Only orders created after this ISO 8601 date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Only orders created before this ISO 8601 date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Free text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Page of the collection, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl OrderListRequest {
    /// Filter orders by status.
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Select a page.
    pub fn page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }
}

/// Body of a status change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrderStatusUpdate {
    /// New status.
    pub status: OrderStatus,
}

/// Query of a delete call.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DeleteRequest {
    /// Delete permanently instead of moving to the trash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}
