//! Common types used across the client library.

pub mod common;

pub use common::*;
