//! One generation run: destination, selection, delegation

use crate::compose::{Composer, Invocation};
use crate::config::options::DIR;
use crate::config::{resolve_destination, Options};
use crate::prompt::{PromptRequest, Prompter};
use crate::selector::{Selection, Selector};
use anyhow::Result;
use std::path::PathBuf;

pub const DIR_PROMPT: PromptRequest = PromptRequest::input(DIR, "Directory for new project", ".");

/// How a run finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(Invocation),
    /// The `other` framework was chosen; nothing was generated
    NothingGenerated,
}

pub struct Orchestrator {
    cwd: PathBuf,
    product_name: String,
    issues_url: String,
}

impl Orchestrator {
    pub fn new(cwd: PathBuf, product_name: impl Into<String>, issues_url: impl Into<String>) -> Self {
        Self {
            cwd,
            product_name: product_name.into(),
            issues_url: issues_url.into(),
        }
    }

    pub fn run<P, C>(&self, options: Options, prompter: &mut P, composer: &mut C) -> Result<Outcome>
    where
        P: Prompter + ?Sized,
        C: Composer + ?Sized,
    {
        let options = choose_destination_dir(options, prompter)?;
        let (options, selection) = Selector::new(prompter).select(options)?;

        match selection {
            Selection::Generate(generator) => {
                // The child sees the same absolute directory it runs in
                let destination_root = resolve_destination(options.dir(), &self.cwd);
                let options = options.with_dir(destination_root.to_string_lossy().into_owned());
                let invocation = Invocation {
                    generator,
                    options,
                    destination_root,
                };
                composer.compose(&invocation)?;
                Ok(Outcome::Generated(invocation))
            }
            Selection::OtherFramework => {
                prompter.info(&self.other_framework_message())?;
                Ok(Outcome::NothingGenerated)
            }
        }
    }

    fn other_framework_message(&self) -> String {
        format!(
            "Check {} for updates on new frameworks being added to {}. Feel free to create a new issue if one does not yet exist for the framework you're using.",
            self.issues_url, self.product_name
        )
    }
}

/// Ask for the project directory when neither `--dir` nor a positional gave one
fn choose_destination_dir<P: Prompter + ?Sized>(options: Options, prompter: &mut P) -> Result<Options> {
    if options.dir().is_some() {
        return Ok(options);
    }

    let dir = prompter.prompt(&DIR_PROMPT)?;
    Ok(options.with_dir(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::testing::RecordingComposer;
    use crate::config::OptionValue;
    use crate::error::ConfigError;
    use crate::generator::{AppFramework, GeneratorKind, UtilFramework};
    use crate::prompt::testing::ScriptedPrompter;
    use std::collections::BTreeMap;

    const ISSUES: &str = "https://github.com/single-spa/create-single-spa/issues";

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(PathBuf::from("/work"), "create-single-spa", ISSUES)
    }

    fn options(args: &[&str], pairs: &[(&str, &str)]) -> Options {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let raw: BTreeMap<String, OptionValue> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OptionValue::from(*v)))
            .collect();
        Options::normalize(&args, raw)
    }

    #[test]
    fn test_vue_app_invokes_only_vue() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let mut composer = RecordingComposer::default();

        let outcome = orchestrator()
            .run(
                options(&["myapp"], &[("moduleType", "app-parcel"), ("framework", "vue")]),
                &mut prompter,
                &mut composer,
            )
            .unwrap();

        assert_eq!(composer.invocations.len(), 1);
        let inv = &composer.invocations[0];
        assert_eq!(inv.generator, GeneratorKind::App(AppFramework::Vue));
        assert_eq!(inv.destination_root, PathBuf::from("/work/myapp"));
        assert_eq!(inv.options.dir(), Some("/work/myapp"));
        assert_eq!(outcome, Outcome::Generated(inv.clone()));
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_every_branch_resolves_destination() {
        let cases = [
            ("root-config", None, GeneratorKind::RootConfig),
            ("app-parcel", Some("react"), GeneratorKind::App(AppFramework::React)),
            ("app-parcel", Some("vue"), GeneratorKind::App(AppFramework::Vue)),
            ("app-parcel", Some("angular"), GeneratorKind::App(AppFramework::Angular)),
            ("app-parcel", Some("svelte"), GeneratorKind::App(AppFramework::Svelte)),
            ("util-module", Some("none"), GeneratorKind::Util(UtilFramework::None)),
            ("util-module", Some("react"), GeneratorKind::Util(UtilFramework::React)),
        ];

        for (module_type, framework, expected) in cases {
            let mut pairs = vec![("moduleType", module_type), ("dir", "/abs/myapp")];
            if let Some(framework) = framework {
                pairs.push(("framework", framework));
            }
            let mut prompter = ScriptedPrompter::new(&[]);
            let mut composer = RecordingComposer::default();

            orchestrator()
                .run(options(&[], &pairs), &mut prompter, &mut composer)
                .unwrap();

            assert_eq!(composer.invocations.len(), 1, "{}", expected);
            assert_eq!(composer.invocations[0].generator, expected);
            assert_eq!(
                composer.invocations[0].destination_root,
                PathBuf::from("/abs/myapp")
            );
            assert_eq!(composer.invocations[0].options.dir(), Some("/abs/myapp"));
        }
    }

    #[test]
    fn test_other_framework_generates_nothing() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let mut composer = RecordingComposer::default();

        let outcome = orchestrator()
            .run(
                options(&["myapp"], &[("moduleType", "app-parcel"), ("framework", "other")]),
                &mut prompter,
                &mut composer,
            )
            .unwrap();

        assert_eq!(outcome, Outcome::NothingGenerated);
        assert!(composer.invocations.is_empty());
        assert_eq!(prompter.infos.len(), 1);
        assert!(prompter.infos[0].contains(ISSUES));
        assert!(prompter.infos[0].contains("being added to create-single-spa."));
    }

    #[test]
    fn test_config_error_stops_before_delegation() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let mut composer = RecordingComposer::default();

        let err = orchestrator()
            .run(
                options(&["myapp"], &[("moduleType", "util-module"), ("framework", "angular")]),
                &mut prompter,
                &mut composer,
            )
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnsupportedUtilFramework("angular".into()))
        );
        assert!(composer.invocations.is_empty());
    }

    #[test]
    fn test_fully_interactive_run() {
        let mut prompter = ScriptedPrompter::new(&["shared-ui", "util-module", "react"]);
        let mut composer = RecordingComposer::default();

        orchestrator()
            .run(options(&[], &[]), &mut prompter, &mut composer)
            .unwrap();

        assert_eq!(prompter.asked_keys(), vec!["dir", "moduleType", "framework"]);
        assert_eq!(prompter.asked[0].default, Some("."));
        let inv = &composer.invocations[0];
        assert_eq!(inv.generator, GeneratorKind::Util(UtilFramework::React));
        assert_eq!(inv.destination_root, PathBuf::from("/work/shared-ui"));
        assert_eq!(inv.options.dir(), Some("/work/shared-ui"));
        assert_eq!(inv.options.module_type(), Some("util-module"));
        assert_eq!(inv.options.framework(), Some("react"));
    }

    #[test]
    fn test_pass_through_options_reach_child() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let mut composer = RecordingComposer::default();

        orchestrator()
            .run(
                options(
                    &["app"],
                    &[("framework", "react"), ("orgName", "acme"), ("typescript", "false")],
                ),
                &mut prompter,
                &mut composer,
            )
            .unwrap();

        let inv = &composer.invocations[0];
        assert_eq!(inv.options.extra("orgName"), Some(&OptionValue::from("acme")));
        assert_eq!(inv.options.extra("typescript"), Some(&OptionValue::Bool(false)));
    }
}
