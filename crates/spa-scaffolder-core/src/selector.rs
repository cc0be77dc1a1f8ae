//! Module type and framework selection
//!
//! A two-level decision: first the kind of project, then (for applications
//! and utility modules) the framework. Missing answers are asked for one at a
//! time, always in the same order.

use crate::config::options::{Options, FRAMEWORK, MODULE_TYPE};
use crate::error::ConfigError;
use crate::generator::{AppFramework, GeneratorKind, UtilFramework};
use crate::prompt::{Choice, PromptRequest, Prompter};
use anyhow::Result;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    AppParcel,
    UtilModule,
    RootConfig,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::AppParcel => "app-parcel",
            ModuleType::UtilModule => "util-module",
            ModuleType::RootConfig => "root-config",
        }
    }
}

impl FromStr for ModuleType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app-parcel" => Ok(ModuleType::AppParcel),
            "util-module" => Ok(ModuleType::UtilModule),
            "root-config" => Ok(ModuleType::RootConfig),
            other => Err(ConfigError::UnknownModuleType(other.to_string())),
        }
    }
}

/// Framework names as they appear on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    None,
    React,
    Vue,
    Angular,
    Svelte,
    Other,
}

impl Framework {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Framework::None),
            "react" => Some(Framework::React),
            "vue" => Some(Framework::Vue),
            "angular" => Some(Framework::Angular),
            "svelte" => Some(Framework::Svelte),
            "other" => Some(Framework::Other),
            _ => None,
        }
    }
}

pub const MODULE_TYPE_PROMPT: PromptRequest = PromptRequest::list(
    MODULE_TYPE,
    "Select type to generate",
    &[
        Choice {
            value: "app-parcel",
            label: "single-spa application / parcel",
        },
        Choice {
            value: "util-module",
            label: "in-browser utility module (styleguide, api cache, etc)",
        },
        Choice {
            value: "root-config",
            label: "single-spa root config",
        },
    ],
);

pub const APP_FRAMEWORK_PROMPT: PromptRequest = PromptRequest::list(
    FRAMEWORK,
    "Which framework do you want to use?",
    &[
        Choice { value: "react", label: "react" },
        Choice { value: "vue", label: "vue" },
        Choice { value: "angular", label: "angular" },
        Choice { value: "svelte", label: "svelte" },
        Choice { value: "other", label: "other" },
    ],
);

// Offers more than is supported; unsupported picks fail with a pointer to "none".
pub const UTIL_FRAMEWORK_PROMPT: PromptRequest = PromptRequest::list(
    FRAMEWORK,
    "Which framework do you want to use?",
    &[
        Choice { value: "none", label: "none" },
        Choice { value: "react", label: "react" },
        Choice { value: "vue", label: "vue" },
        Choice { value: "angular", label: "angular" },
        Choice { value: "svelte", label: "svelte" },
        Choice { value: "other", label: "other" },
    ],
);

/// Where the decision tree ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Generate(GeneratorKind),
    /// Application framework not covered yet; nothing is generated
    OtherFramework,
}

pub struct Selector<'p, P: Prompter + ?Sized> {
    prompter: &'p mut P,
}

impl<'p, P: Prompter + ?Sized> Selector<'p, P> {
    pub fn new(prompter: &'p mut P) -> Self {
        Self { prompter }
    }

    /// Run the decision tree, returning the completed options and the result
    pub fn select(&mut self, options: Options) -> Result<(Options, Selection)> {
        let (options, module_type) = self.module_type(options)?;

        match module_type {
            ModuleType::RootConfig => Ok((options, Selection::Generate(GeneratorKind::RootConfig))),
            ModuleType::AppParcel => self.app_parcel(options),
            ModuleType::UtilModule => self.util_module(options),
        }
    }

    fn module_type(&mut self, options: Options) -> Result<(Options, ModuleType)> {
        let raw = match options.module_type() {
            Some(module_type) => module_type.to_string(),
            None if options.framework().is_some() => ModuleType::AppParcel.as_str().to_string(),
            None => self.prompter.prompt(&MODULE_TYPE_PROMPT)?,
        };

        let module_type = raw.parse::<ModuleType>()?;
        Ok((options.with_module_type(raw), module_type))
    }

    fn framework(&mut self, options: Options, request: &PromptRequest) -> Result<(Options, String)> {
        match options.framework() {
            Some(framework) => {
                let framework = framework.to_string();
                Ok((options, framework))
            }
            None => {
                let framework = self.prompter.prompt(request)?;
                Ok((options.with_framework(framework.clone()), framework))
            }
        }
    }

    fn app_parcel(&mut self, options: Options) -> Result<(Options, Selection)> {
        let (options, framework) = self.framework(options, &APP_FRAMEWORK_PROMPT)?;

        let selection = match Framework::parse(&framework) {
            Some(Framework::React) => Selection::Generate(GeneratorKind::App(AppFramework::React)),
            Some(Framework::Vue) => Selection::Generate(GeneratorKind::App(AppFramework::Vue)),
            Some(Framework::Angular) => {
                Selection::Generate(GeneratorKind::App(AppFramework::Angular))
            }
            Some(Framework::Svelte) => {
                Selection::Generate(GeneratorKind::App(AppFramework::Svelte))
            }
            Some(Framework::Other) => Selection::OtherFramework,
            Some(Framework::None) | None => {
                return Err(ConfigError::UnsupportedFramework(framework).into())
            }
        };

        Ok((options, selection))
    }

    fn util_module(&mut self, options: Options) -> Result<(Options, Selection)> {
        let (options, framework) = self.framework(options, &UTIL_FRAMEWORK_PROMPT)?;

        let kind = match Framework::parse(&framework) {
            Some(Framework::None) => GeneratorKind::Util(UtilFramework::None),
            Some(Framework::React) => GeneratorKind::Util(UtilFramework::React),
            _ => return Err(ConfigError::UnsupportedUtilFramework(framework).into()),
        };

        Ok((options, Selection::Generate(kind)))
    }
}
