//! Prompt request/response contract
//!
//! The selector only describes what it needs to know. Rendering is left to a
//! `Prompter` implementation (cliclack in the TUI, a script in tests).

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text
    Input,
    /// One value out of a fixed list
    List,
}

/// One entry of a list prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub kind: PromptKind,
    /// Option key the answer fills in
    pub key: &'static str,
    pub message: &'static str,
    pub choices: &'static [Choice],
    pub default: Option<&'static str>,
}

impl PromptRequest {
    pub const fn input(key: &'static str, message: &'static str, default: &'static str) -> Self {
        Self {
            kind: PromptKind::Input,
            key,
            message,
            choices: &[],
            default: Some(default),
        }
    }

    pub const fn list(key: &'static str, message: &'static str, choices: &'static [Choice]) -> Self {
        Self {
            kind: PromptKind::List,
            key,
            message,
            choices,
            default: None,
        }
    }
}

/// Suspension point for user input and the channel for user-facing notes
///
/// `prompt` blocks until the user answers and returns the value for
/// `request.key`. A prompt that cannot complete (closed input, interrupt)
/// is an error; no fallback answer is substituted.
pub trait Prompter {
    fn prompt(&mut self, request: &PromptRequest) -> Result<String>;

    fn info(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;
}
