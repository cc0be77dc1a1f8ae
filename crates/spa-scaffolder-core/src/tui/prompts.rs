//! Charm-style CLI prompts using cliclack

use crate::compose::ProcessComposer;
use crate::config::{OptionValue, Options};
use crate::orchestrator::{Orchestrator, Outcome};
use crate::product::ProductConfig;
use crate::prompt::{PromptKind, PromptRequest, Prompter};
use crate::runtime::{check_for_updates, RegistryQuery};
use anyhow::Result;
use std::collections::BTreeMap;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Positional arguments; the first one is shorthand for `dir`
    pub args: Vec<String>,

    /// Raw option bag, normalized before use
    pub options: BTreeMap<String, OptionValue>,

    /// Skip the registry update check
    pub skip_version_check: bool,
}

/// Renders prompt requests with cliclack
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn prompt(&mut self, request: &PromptRequest) -> Result<String> {
        let answer = match request.kind {
            PromptKind::Input => {
                let mut input = cliclack::input(request.message);
                if let Some(default) = request.default {
                    input = input.placeholder(default).default_input(default);
                }
                let value: String = input.interact()?;
                value
            }
            PromptKind::List => {
                let mut select = cliclack::select(request.message);
                for choice in request.choices {
                    select = select.item(choice.value, choice.label, "");
                }
                if let Some(default) = request.default {
                    select = select.initial_value(default);
                }
                let value: &str = select.interact()?;
                value.to_string()
            }
        };

        Ok(answer)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let options = Options::normalize(&args.args, args.options);
    let mut prompter = CliclackPrompter;

    // Step 1: Update check (never fails the run)
    if args.skip_version_check {
        cliclack::log::info("Skipping version check")?;
    } else {
        check_versions(config, &mut prompter).await?;
    }

    // Step 2: Select and delegate
    let cwd = std::env::current_dir()?;
    let orchestrator = Orchestrator::new(cwd, config.display_name(), config.issues_url());
    let mut composer = ProcessComposer::from_config(config);

    match orchestrator.run(options, &mut prompter, &mut composer)? {
        Outcome::Generated(invocation) => {
            cliclack::outro(format!(
                "Generated {} in {}",
                invocation.generator,
                invocation.destination_root.display()
            ))?;
        }
        Outcome::NothingGenerated => {
            cliclack::outro("Nothing was generated")?;
        }
    }

    Ok(())
}

async fn check_versions<C: ProductConfig>(config: &C, prompter: &mut CliclackPrompter) -> Result<()> {
    let query = RegistryQuery::from_config(config);

    let spinner = cliclack::spinner();
    spinner.start(format!("Checking for updates ({})...", query.program()));

    let notices = check_for_updates(config, &query).await;

    if notices.is_empty() {
        spinner.stop("Version check complete");
    } else {
        spinner.stop("Updates available");
        for notice in &notices {
            prompter.warning(&notice.to_string())?;
        }
    }

    Ok(())
}
