//! Entity models and request/response DTOs.

pub mod mapping;
pub mod sport;
pub mod sport_config;
pub mod tenant;

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// a missing key stays `None`, `null` becomes `Some(None)`, and a value
/// becomes `Some(Some(v))`. Update SQL uses the outer option as the
/// "field was provided" flag.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Business codes (tenant_code, sport_code) allow alphanumerics and
/// underscores only. Case is normalized to uppercase by the service layer.
pub(crate) fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(ValidationError::new("code_charset")
            .with_message("code must be alphanumeric or contain underscores".into()))
    }
}
