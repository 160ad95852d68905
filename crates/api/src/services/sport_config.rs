use ctms_core::error::CoreError;
use ctms_core::types::DbId;
use ctms_db::models::sport_config::{CreateSportConfig, SportConfig, UpdateSportConfig};
use ctms_db::repositories::SportConfigRepo;
use ctms_db::DbPool;

use crate::error::AppResult;

use super::SportService;

/// Per-sport configuration logic. Every operation first checks that the
/// parent sport exists and is not soft-deleted.
pub struct SportConfigService;

impl SportConfigService {
    pub async fn create(
        pool: &DbPool,
        sport_id: DbId,
        input: CreateSportConfig,
    ) -> AppResult<SportConfig> {
        SportService::get(pool, sport_id).await?;
        Ok(SportConfigRepo::create(pool, sport_id, &input).await?)
    }

    pub async fn list(pool: &DbPool, sport_id: DbId) -> AppResult<Vec<SportConfig>> {
        SportService::get(pool, sport_id).await?;
        Ok(SportConfigRepo::list_by_sport(pool, sport_id).await?)
    }

    /// Update a config under a sport. The config must belong to the sport
    /// in the URL.
    pub async fn update(
        pool: &DbPool,
        sport_id: DbId,
        config_id: DbId,
        input: UpdateSportConfig,
    ) -> AppResult<SportConfig> {
        SportService::get(pool, sport_id).await?;

        let config = SportConfigRepo::find_by_id(pool, config_id)
            .await?
            .filter(|c| c.sport_id == sport_id)
            .ok_or(CoreError::NotFound {
                entity: "SportConfig",
                id: config_id,
            })?;

        SportConfigRepo::update(pool, config.id, &input)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "SportConfig",
                    id: config_id,
                }
                .into()
            })
    }

    /// Remove a config under a sport. Configs carry no `is_deleted` flag,
    /// so removal is permanent.
    pub async fn delete(pool: &DbPool, sport_id: DbId, config_id: DbId) -> AppResult<SportConfig> {
        SportService::get(pool, sport_id).await?;

        let config = SportConfigRepo::find_by_id(pool, config_id)
            .await?
            .filter(|c| c.sport_id == sport_id)
            .ok_or(CoreError::NotFound {
                entity: "SportConfig",
                id: config_id,
            })?;

        SportConfigRepo::hard_delete(pool, config.id).await?;
        Ok(config)
    }
}
