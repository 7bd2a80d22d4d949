//! REST API endpoint paths, relative to the configured base URL.

/// Product collection.
pub const PRODUCTS: &str = "products";

/// Order collection.
pub const ORDERS: &str = "orders";

/// API credentials of the authenticated consumer.
pub const CREDENTIALS: &str = "credentials";

/// A single product.
pub fn product(id: u64) -> String {
    format!("{PRODUCTS}/{id}")
}

/// A single order.
pub fn order(id: u64) -> String {
    format!("{ORDERS}/{id}")
}
