//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to tell the core which packages to
//! version-check, where child generators live and where users report
//! unsupported frameworks.

/// A published package whose latest version is compared against a known one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedPackage {
    /// Package name on the registry
    pub name: &'static str,
    /// Version this build corresponds to
    pub current_version: &'static str,
}

/// Configuration trait for scaffolding CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Packages checked for newer releases, in lookup order
    fn tracked_packages(&self) -> Vec<TrackedPackage>;

    /// Registry client used for version lookups
    fn registry_command(&self) -> &'static str {
        "npm"
    }

    /// Environment variable name for overriding the registry client
    fn registry_command_env(&self) -> &'static str;

    /// Prefix prepended to a generator identity to form its executable name
    fn generator_prefix(&self) -> &'static str {
        "generator-"
    }

    /// Environment variable naming the directory that holds child generators
    fn generator_path_env(&self) -> &'static str;

    /// Where users can follow or request support for new frameworks
    fn issues_url(&self) -> &'static str;

    /// Upgrade/install command shown in version notices
    fn upgrade_command(&self, package: &str) -> String {
        format!("npm install -g {}@latest", package)
    }
}
