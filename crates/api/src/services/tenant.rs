use ctms_core::error::CoreError;
use ctms_core::pagination::Page;
use ctms_core::types::DbId;
use ctms_db::models::tenant::{CreateTenant, Tenant, TenantListQuery, UpdateTenant};
use ctms_db::repositories::TenantRepo;
use ctms_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Tenant business logic: code normalization, duplicate checks, and
/// soft-delete visibility rules.
pub struct TenantService;

impl TenantService {
    /// Create a tenant. The code is uppercased before the duplicate check
    /// so `abc` and `ABC` cannot coexist.
    pub async fn create(pool: &DbPool, mut input: CreateTenant) -> AppResult<Tenant> {
        input
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        input.tenant_code = input.tenant_code.to_uppercase();

        if TenantRepo::find_by_code(pool, &input.tenant_code)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "Tenant with code '{}' already exists",
                input.tenant_code
            ))
            .into());
        }

        let tenant = TenantRepo::create(pool, &input).await?;
        tracing::info!(tenant_id = tenant.id, code = %tenant.tenant_code, "tenant created");
        Ok(tenant)
    }

    /// Fetch a tenant by ID. Soft-deleted tenants read as not found.
    pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Tenant> {
        TenantRepo::find_by_id(pool, id)
            .await?
            .filter(|t| !t.is_deleted)
            .ok_or_else(|| CoreError::NotFound { entity: "Tenant", id }.into())
    }

    /// Fetch a tenant by code. Soft-deleted tenants read as not found.
    pub async fn get_by_code(pool: &DbPool, code: &str) -> AppResult<Tenant> {
        TenantRepo::find_by_code(pool, code)
            .await?
            .filter(|t| !t.is_deleted)
            .ok_or_else(|| {
                CoreError::NotFoundByCode {
                    entity: "Tenant",
                    code: code.to_string(),
                }
                .into()
            })
    }

    /// List tenants with pagination and filters.
    pub async fn list(pool: &DbPool, query: TenantListQuery) -> AppResult<Page<Tenant>> {
        Ok(TenantRepo::list(pool, &query).await?)
    }

    /// Update a tenant. A changed code is uppercased and checked against
    /// other tenants before the write.
    pub async fn update(pool: &DbPool, id: DbId, mut input: UpdateTenant) -> AppResult<Tenant> {
        input
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        // Ensures the row exists and is not soft-deleted before any check.
        let current = Self::get(pool, id).await?;

        if let Some(code) = &mut input.tenant_code {
            *code = code.to_uppercase();
            if *code != current.tenant_code {
                if let Some(existing) = TenantRepo::find_by_code(pool, code).await? {
                    if existing.id != id {
                        return Err(CoreError::Conflict(format!(
                            "Tenant with code '{code}' already exists"
                        ))
                        .into());
                    }
                }
            }
        }

        TenantRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Tenant", id }.into())
    }

    /// Delete a tenant. Soft delete (the default) marks the row and returns
    /// its final state; hard delete removes it and returns the last-seen row.
    pub async fn delete(pool: &DbPool, id: DbId, soft: bool) -> AppResult<Tenant> {
        let tenant = Self::get(pool, id).await?;

        if soft {
            TenantRepo::soft_delete(pool, id).await?;
            TenantRepo::find_by_id(pool, id)
                .await?
                .ok_or_else(|| CoreError::NotFound { entity: "Tenant", id }.into())
        } else {
            TenantRepo::hard_delete(pool, id).await?;
            Ok(tenant)
        }
    }
}
