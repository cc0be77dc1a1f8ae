//! Child generator composition
//!
//! The orchestrator hands exactly one `Invocation` to a `Composer`. The
//! shipped composer runs child generators as external executables named
//! `<prefix><identity>`, passing the option set as JSON and using the
//! destination root as the working directory.

use crate::config::Options;
use crate::generator::GeneratorKind;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

/// Everything a child generator receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    #[serde(rename = "generatorIdentity")]
    pub generator: GeneratorKind,
    #[serde(rename = "optionSet")]
    pub options: Options,
    pub destination_root: PathBuf,
}

pub trait Composer {
    fn compose(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs child generators as separate processes
#[derive(Debug, Clone)]
pub struct ProcessComposer {
    prefix: String,
    search_dir: Option<PathBuf>,
    search_dir_env: &'static str,
}

impl ProcessComposer {
    pub fn new(prefix: impl Into<String>, search_dir: Option<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            search_dir,
            search_dir_env: "",
        }
    }

    /// Use the product's naming, honouring its search-path environment override
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        let search_dir = std::env::var_os(config.generator_path_env())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            search_dir_env: config.generator_path_env(),
            ..Self::new(config.generator_prefix(), search_dir)
        }
    }

    /// Executable for a generator; a bare name is looked up on `PATH`
    pub fn program(&self, kind: GeneratorKind) -> PathBuf {
        let name = format!("{}{}", self.prefix, kind.identity());
        match &self.search_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl Composer for ProcessComposer {
    fn compose(&mut self, invocation: &Invocation) -> Result<()> {
        let program = self.program(invocation.generator);
        let root = &invocation.destination_root;

        std::fs::create_dir_all(root)
            .with_context(|| format!("Failed to create destination {}", root.display()))?;

        let payload = invocation.options.to_json()?;

        println!(
            "{} {} {}",
            "Running:".dimmed(),
            program.display().to_string().yellow(),
            format!("(in {})", root.display()).dimmed()
        );

        let status = match Command::new(&program)
            .arg("--options")
            .arg(&payload)
            .current_dir(root)
            .status()
        {
            Ok(status) => status,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let hint = if self.search_dir_env.is_empty() {
                    String::new()
                } else {
                    format!(" or set {} to the directory containing it", self.search_dir_env)
                };
                anyhow::bail!(
                    "Generator '{}' was not found. Install {}{}.",
                    invocation.generator,
                    program.display(),
                    hint
                );
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to run {}", program.display()))
            }
        };

        if !status.success() {
            anyhow::bail!(
                "Generator '{}' exited with code: {}",
                invocation.generator,
                status.code().unwrap_or(-1)
            );
        }

        Ok(())
    }
}
