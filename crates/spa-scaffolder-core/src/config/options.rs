//! Option normalization
//!
//! Command-line flags always arrive as strings, so the raw bag is canonicalized
//! once before any decision logic reads it: the first positional argument
//! stands in for `dir`, and every literal `"false"` becomes a real boolean.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single raw option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// JavaScript-style truthiness, used for "was this option given at all"
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Str(s) => !s.is_empty(),
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            OptionValue::Bool(false) => None,
            OptionValue::Bool(true) => Some("true".to_string()),
            OptionValue::Str(s) if s.is_empty() => None,
            OptionValue::Str(s) => Some(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => write!(f, "{}", s),
        }
    }
}

pub const DIR: &str = "dir";
pub const FRAMEWORK: &str = "framework";
pub const MODULE_TYPE: &str = "moduleType";
pub const SKIP_INSTALL: &str = "skipInstall";

/// Replace every `"false"` string with boolean `false`
pub fn coerce_false_strings(raw: &mut BTreeMap<String, OptionValue>) {
    for value in raw.values_mut() {
        if matches!(value, OptionValue::Str(s) if s == "false") {
            *value = OptionValue::Bool(false);
        }
    }
}

/// The option set for one generation run
///
/// Recognized keys are explicit fields. Everything else is carried in
/// `extra` untouched for the child generator to interpret. Values are never
/// mutated in place; the `with_*` methods return a refined copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    module_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_install: Option<bool>,
    #[serde(flatten)]
    extra: BTreeMap<String, OptionValue>,
}

impl Options {
    /// Build the canonical option set from constructor arguments and flags
    pub fn normalize(args: &[String], mut raw: BTreeMap<String, OptionValue>) -> Self {
        let has_dir = raw.get(DIR).is_some_and(OptionValue::is_truthy);
        if !has_dir {
            if let Some(first) = args.first() {
                raw.insert(DIR.to_string(), OptionValue::Str(first.clone()));
            }
        }

        coerce_false_strings(&mut raw);

        let dir = raw.remove(DIR).and_then(OptionValue::into_text);
        let framework = raw.remove(FRAMEWORK).and_then(OptionValue::into_text);
        let module_type = raw.remove(MODULE_TYPE).and_then(OptionValue::into_text);
        let skip_install = raw.remove(SKIP_INSTALL).map(|v| v.is_truthy());

        Self {
            dir,
            framework,
            module_type,
            skip_install,
            extra: raw,
        }
    }

    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn module_type(&self) -> Option<&str> {
        self.module_type.as_deref()
    }

    #[cfg(test)]
    pub fn skip_install(&self) -> bool {
        self.skip_install.unwrap_or(false)
    }

    /// Pass-through option not recognized by the orchestrator
    pub fn extra(&self, key: &str) -> Option<&OptionValue> {
        self.extra.get(key)
    }

    pub fn with_dir(self, dir: impl Into<String>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..self
        }
    }

    pub fn with_framework(self, framework: impl Into<String>) -> Self {
        Self {
            framework: Some(framework.into()),
            ..self
        }
    }

    pub fn with_module_type(self, module_type: impl Into<String>) -> Self {
        Self {
            module_type: Some(module_type.into()),
            ..self
        }
    }

    /// JSON payload handed to child generators
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
