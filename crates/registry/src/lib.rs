//! Read-only source of PHP version records for `phpvm`.
//!
//! The registry is the only place version records come from. The shell pulls
//! them once at startup and never calls back into the registry afterwards.

mod error;
mod record;
mod registry;

pub use error::RegistryError;
pub use record::VersionRecord;
pub use registry::{Registry, StaticRegistry, active_versions, check_single_active};
