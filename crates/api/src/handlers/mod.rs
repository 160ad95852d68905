//! Axum handlers. Thin wrappers that extract request data, call the
//! matching service, and wrap the result in the response envelope.

pub mod health;
pub mod sport;
pub mod tenant;
pub mod tenant_sports;

use serde::Deserialize;

fn default_true() -> bool {
    true
}

/// Query parameters for DELETE endpoints. `soft_delete=false` switches to a
/// permanent delete.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default = "default_true")]
    pub soft_delete: bool,
}
