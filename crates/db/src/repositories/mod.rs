//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Table-generic operations and the
//! filter/pagination composition live in [`base`]; entity repositories add
//! hand-written create/update SQL and domain lookups on top.

pub mod base;
pub mod mapping_repo;
pub mod sport_config_repo;
pub mod sport_repo;
pub mod tenant_repo;

pub use mapping_repo::MappingRepo;
pub use sport_config_repo::SportConfigRepo;
pub use sport_repo::SportRepo;
pub use tenant_repo::TenantRepo;
