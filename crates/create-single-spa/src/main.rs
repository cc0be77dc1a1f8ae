//! create-single-spa - Project scaffolding for single-spa microfrontends

use anyhow::Result;
use clap::Parser;
use spa_scaffolder_core::config::options::{DIR, FRAMEWORK, MODULE_TYPE, SKIP_INSTALL};
use spa_scaffolder_core::tui::CreateArgs;
use spa_scaffolder_core::{OptionValue, ProductConfig, TrackedPackage};
use std::collections::BTreeMap;

/// CLI version - compared against the fork's latest release
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upstream create-single-spa release this build follows
pub const UPSTREAM_VERSION: &str = "4.1.3";

/// single-spa product configuration
#[derive(Clone)]
pub struct SingleSpaConfig;

impl ProductConfig for SingleSpaConfig {
    fn name(&self) -> &'static str {
        "create-single-spa"
    }

    fn display_name(&self) -> &'static str {
        "create-single-spa"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding single-spa microfrontends"
    }

    fn tracked_packages(&self) -> Vec<TrackedPackage> {
        vec![
            TrackedPackage {
                name: "exitb-create-single-spa",
                current_version: CLI_VERSION,
            },
            TrackedPackage {
                name: "create-single-spa",
                current_version: UPSTREAM_VERSION,
            },
        ]
    }

    fn registry_command_env(&self) -> &'static str {
        "SINGLE_SPA_REGISTRY_CMD"
    }

    fn generator_path_env(&self) -> &'static str {
        "SINGLE_SPA_GENERATOR_PATH"
    }

    fn issues_url(&self) -> &'static str {
        "https://github.com/single-spa/create-single-spa/issues"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-single-spa")]
#[command(about = "CLI for scaffolding single-spa microfrontends")]
#[command(version)]
pub struct Args {
    /// Directory for the new project (shorthand for --dir)
    pub args: Vec<String>,

    /// Directory for the new project, relative or absolute
    #[arg(long)]
    pub dir: Option<String>,

    /// Framework: react, vue, angular, svelte, none or other
    #[arg(long)]
    pub framework: Option<String>,

    /// Module type: app-parcel, util-module or root-config
    #[arg(long = "moduleType", alias = "module-type")]
    pub module_type: Option<String>,

    /// Skip dependency installation (accepts --skipInstall=false)
    #[arg(
        long = "skipInstall",
        alias = "skip-install",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub skip_install: Option<String>,

    /// Extra option passed through to the generator (key=value, repeatable)
    #[arg(short = 'o', long = "option", value_parser = parse_key_value)]
    pub extra: Vec<(String, String)>,

    /// Skip checking the registry for newer releases
    #[arg(long = "no-version-check")]
    pub no_version_check: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        let mut options: BTreeMap<String, OptionValue> = args
            .extra
            .into_iter()
            .map(|(k, v)| (k, OptionValue::Str(v)))
            .collect();

        for (key, value) in [
            (DIR, args.dir),
            (FRAMEWORK, args.framework),
            (MODULE_TYPE, args.module_type),
            (SKIP_INSTALL, args.skip_install),
        ] {
            if let Some(value) = value {
                options.insert(key.to_string(), OptionValue::Str(value));
            }
        }

        CreateArgs {
            args: args.args,
            options,
            skip_version_check: args.no_version_check,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = SingleSpaConfig;

    let result = spa_scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
