//! Business logic between the HTTP handlers and the repositories.
//!
//! Services validate input, normalize codes, enforce uniqueness and
//! existence rules, and translate repository results into [`AppError`]s.
//!
//! [`AppError`]: crate::error::AppError

mod mapping;
mod sport;
mod sport_config;
mod tenant;

pub use mapping::MappingService;
pub use sport::SportService;
pub use sport_config::SportConfigService;
pub use tenant::TenantService;
