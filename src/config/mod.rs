//! Option structs and module-scoped numeric constants.

pub mod constants;
pub mod options;

pub use options::{IntegrationOptions, IterOptions, SvmOptions};
