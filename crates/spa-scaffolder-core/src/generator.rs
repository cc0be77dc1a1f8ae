//! Child generator identities

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppFramework {
    React,
    Vue,
    Angular,
    Svelte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilFramework {
    /// Vanilla module usable from every framework
    None,
    React,
}

/// Every child generator the orchestrator can delegate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    RootConfig,
    App(AppFramework),
    Util(UtilFramework),
}

impl GeneratorKind {
    #[cfg(test)]
    pub const ALL: [GeneratorKind; 7] = [
        GeneratorKind::RootConfig,
        GeneratorKind::App(AppFramework::React),
        GeneratorKind::App(AppFramework::Vue),
        GeneratorKind::App(AppFramework::Angular),
        GeneratorKind::App(AppFramework::Svelte),
        GeneratorKind::Util(UtilFramework::None),
        GeneratorKind::Util(UtilFramework::React),
    ];

    /// Stable identity used to locate the generator and in its payload
    pub fn identity(&self) -> &'static str {
        match self {
            GeneratorKind::RootConfig => "root-config",
            GeneratorKind::App(AppFramework::React) => "single-spa-react",
            GeneratorKind::App(AppFramework::Vue) => "single-spa-vue",
            GeneratorKind::App(AppFramework::Angular) => "single-spa-angular",
            GeneratorKind::App(AppFramework::Svelte) => "single-spa-svelte",
            GeneratorKind::Util(UtilFramework::None) => "single-spa-util-module",
            GeneratorKind::Util(UtilFramework::React) => "react-util-module",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity())
    }
}

impl Serialize for GeneratorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identity())
    }
}
