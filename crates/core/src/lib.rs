//! Shared domain types for the CTMS backend.
//!
//! This crate has no internal dependencies so it can be used from the
//! repository layer, the API layer, and any future CLI tooling.

pub mod error;
pub mod pagination;
pub mod types;
