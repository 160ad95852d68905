use ctms_core::error::CoreError;
use ctms_core::types::DbId;
use ctms_db::models::mapping::{
    BulkRegisterSports, CreateTenantSportMapping, MappingListQuery, MappingStatus,
    TenantSportMapping, UpdateTenantSportMapping,
};
use ctms_db::repositories::{MappingRepo, SportRepo};
use ctms_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::TenantService;

/// Actor recorded on mapping rows when the request does not name one.
const SYSTEM_USER_ID: DbId = 1;

/// Tenant-sport registration logic. Bulk registration validates the whole
/// batch up front with set-based queries, then inserts all rows in a single
/// statement so a failure leaves nothing behind.
pub struct MappingService;

impl MappingService {
    /// Register a batch of sports for a tenant.
    ///
    /// Fails the whole batch if the tenant is missing, any sport is missing
    /// or soft-deleted, or any sport already has an active mapping for this
    /// tenant.
    pub async fn register_sports(
        pool: &DbPool,
        tenant_id: DbId,
        request: BulkRegisterSports,
    ) -> AppResult<Vec<TenantSportMapping>> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        TenantService::get(pool, tenant_id).await?;

        let mut sport_ids: Vec<DbId> = request.sports.iter().map(|s| s.sport_id).collect();
        sport_ids.sort_unstable();
        sport_ids.dedup();
        if sport_ids.len() != request.sports.len() {
            return Err(AppError::BadRequest(
                "Duplicate sport ids in request".into(),
            ));
        }

        let existing = SportRepo::count_existing(pool, &sport_ids).await?;
        if existing != sport_ids.len() as i64 {
            return Err(AppError::NotFound(
                "One or more sports not found or have been deleted".into(),
            ));
        }

        let already_registered =
            MappingRepo::count_active_for_sports(pool, tenant_id, &sport_ids).await?;
        if already_registered > 0 {
            return Err(CoreError::Conflict(
                "One or more sports are already registered for this tenant".into(),
            )
            .into());
        }

        let created_by = request.created_by.unwrap_or(SYSTEM_USER_ID);
        let rows: Vec<CreateTenantSportMapping> = request
            .sports
            .iter()
            .map(|item| CreateTenantSportMapping {
                tenant_id,
                sport_id: item.sport_id,
                status: MappingStatus::Active,
                created_by: Some(created_by),
                description: item.description.clone(),
            })
            .collect();

        let created = MappingRepo::bulk_create(pool, &rows).await?;
        tracing::info!(tenant_id, count = created.len(), "sports registered for tenant");
        Ok(created)
    }

    /// List a tenant's mappings, optionally filtered by status.
    pub async fn list_for_tenant(
        pool: &DbPool,
        tenant_id: DbId,
        query: MappingListQuery,
    ) -> AppResult<Vec<TenantSportMapping>> {
        TenantService::get(pool, tenant_id).await?;
        Ok(MappingRepo::list_by_tenant(pool, tenant_id, query.status).await?)
    }

    /// Update the mapping for a (tenant, sport) pair. Setting the status to
    /// inactive unregisters the sport while keeping the row.
    pub async fn update_for_tenant(
        pool: &DbPool,
        tenant_id: DbId,
        sport_id: DbId,
        input: UpdateTenantSportMapping,
    ) -> AppResult<TenantSportMapping> {
        let mapping = MappingRepo::find_by_tenant_and_sport(pool, tenant_id, sport_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Mapping for tenant {tenant_id} and sport {sport_id} not found"
                ))
            })?;

        MappingRepo::update(pool, mapping.id, &input)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "TenantSportMapping",
                    id: mapping.id,
                }
                .into()
            })
    }
}
