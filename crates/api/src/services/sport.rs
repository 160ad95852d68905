use ctms_core::error::CoreError;
use ctms_core::pagination::Page;
use ctms_core::types::DbId;
use ctms_db::models::sport::{CreateSport, Sport, SportListQuery, UpdateSport};
use ctms_db::repositories::SportRepo;
use ctms_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Sport business logic, mirroring the tenant rules: uppercase codes,
/// duplicate checks, soft-delete visibility.
pub struct SportService;

impl SportService {
    pub async fn create(pool: &DbPool, mut input: CreateSport) -> AppResult<Sport> {
        input
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        input.sport_code = input.sport_code.to_uppercase();

        if SportRepo::find_by_code(pool, &input.sport_code)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "Sport with code '{}' already exists",
                input.sport_code
            ))
            .into());
        }

        let sport = SportRepo::create(pool, &input).await?;
        tracing::info!(sport_id = sport.id, code = %sport.sport_code, "sport created");
        Ok(sport)
    }

    /// Fetch a sport by ID. Soft-deleted sports read as not found.
    pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Sport> {
        SportRepo::find_by_id(pool, id)
            .await?
            .filter(|s| !s.is_deleted)
            .ok_or_else(|| CoreError::NotFound { entity: "Sport", id }.into())
    }

    /// Fetch a sport by code. Soft-deleted sports read as not found.
    pub async fn get_by_code(pool: &DbPool, code: &str) -> AppResult<Sport> {
        SportRepo::find_by_code(pool, code)
            .await?
            .filter(|s| !s.is_deleted)
            .ok_or_else(|| {
                CoreError::NotFoundByCode {
                    entity: "Sport",
                    code: code.to_string(),
                }
                .into()
            })
    }

    pub async fn list(pool: &DbPool, query: SportListQuery) -> AppResult<Page<Sport>> {
        Ok(SportRepo::list(pool, &query).await?)
    }

    pub async fn update(pool: &DbPool, id: DbId, mut input: UpdateSport) -> AppResult<Sport> {
        input
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let current = Self::get(pool, id).await?;

        if let Some(code) = &mut input.sport_code {
            *code = code.to_uppercase();
            if *code != current.sport_code {
                if let Some(existing) = SportRepo::find_by_code(pool, code).await? {
                    if existing.id != id {
                        return Err(CoreError::Conflict(format!(
                            "Sport with code '{code}' already exists"
                        ))
                        .into());
                    }
                }
            }
        }

        SportRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Sport", id }.into())
    }

    /// Delete a sport. Soft delete (the default) marks the row and returns
    /// its final state; hard delete removes it and returns the last-seen row.
    pub async fn delete(pool: &DbPool, id: DbId, soft: bool) -> AppResult<Sport> {
        let sport = Self::get(pool, id).await?;

        if soft {
            SportRepo::soft_delete(pool, id).await?;
            SportRepo::find_by_id(pool, id)
                .await?
                .ok_or_else(|| CoreError::NotFound { entity: "Sport", id }.into())
        } else {
            SportRepo::hard_delete(pool, id).await?;
            Ok(sport)
        }
    }
}
