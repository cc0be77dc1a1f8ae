//! Fatal configuration errors
//!
//! These are the only errors the selector raises on its own. Prompt and
//! process failures travel as plain `anyhow` errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown moduleType option {0}. Valid values are root-config, app-parcel, util-module")]
    UnknownModuleType(String),

    #[error("Unsupported framework '{0}'")]
    UnsupportedFramework(String),

    #[error(
        "Framework '{0}' is not yet supported for utility microfrontends. Try creating a vanilla utility module (no framework) in the meantime, which are usable by all frameworks."
    )]
    UnsupportedUtilFramework(String),
}
