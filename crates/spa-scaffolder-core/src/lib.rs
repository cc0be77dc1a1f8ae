//! Scaffolder Core - selection and composition for single-spa project generators
//!
//! This library decides which child generator should materialize a new
//! microfrontend project and hands it a normalized option set. It does not
//! render templates or install packages itself.
//!
//! # Architecture
//!
//! - **Options** - `config` normalizes the raw option bag and resolves the destination
//! - **Selection** - `selector` walks module type then framework, prompting for gaps
//! - **Composition** - `compose` runs exactly one child generator
//! - **Update check** - `runtime::registry` performs best-effort version lookups
//! - **CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use spa_scaffolder_core::{Options, Orchestrator, ProcessComposer};
//!
//! let options = Options::normalize(&args, raw_flags);
//! let orchestrator = Orchestrator::new(std::env::current_dir()?, "my-cli", "https://example.com/issues");
//! let mut composer = ProcessComposer::new("generator-", None);
//! orchestrator.run(options, &mut my_prompter, &mut composer)?;
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod generator;
pub mod orchestrator;
pub mod product;
pub mod prompt;
pub mod runtime;
pub mod selector;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use compose::{Composer, Invocation, ProcessComposer};
pub use config::{OptionValue, Options};
pub use error::ConfigError;
pub use generator::GeneratorKind;
pub use orchestrator::{Orchestrator, Outcome};
pub use product::{ProductConfig, TrackedPackage};
pub use prompt::{PromptRequest, Prompter};
pub use selector::{Selection, Selector};

#[cfg(feature = "tui")]
pub use tui::run;
