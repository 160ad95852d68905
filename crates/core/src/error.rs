use crate::types::DbId;

/// Domain-level failure taxonomy.
///
/// Repositories never produce these; they report absence as a normal value.
/// The service layer is the sole place that converts absence into `NotFound`
/// or a duplicate check into `Conflict`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{entity} with code '{code}' not found")]
    NotFoundByCode { entity: &'static str, code: String },

    #[error("Conflict: {0}")]
    Conflict(String),
}
