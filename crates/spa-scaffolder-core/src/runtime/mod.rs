//! Registry lookups used by the update check

pub mod registry;

pub use registry::{check_for_updates, RegistryQuery, UpdateNotice};
