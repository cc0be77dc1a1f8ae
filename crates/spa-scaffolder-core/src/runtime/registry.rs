//! Best-effort update check against the package registry
//!
//! Each tracked package is looked up with `<registry> view <pkg>@latest version`.
//! Any failure (spawn error, non-zero exit, odd output, timeout) simply means
//! there is nothing to report.

use crate::product::{ProductConfig, TrackedPackage};
use semver::Version;
use std::fmt;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Upper bound for a single registry lookup
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs registry lookups through an external client such as `npm`
#[derive(Debug, Clone)]
pub struct RegistryQuery {
    program: String,
    timeout: Duration,
}

impl RegistryQuery {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: LOOKUP_TIMEOUT,
        }
    }

    /// Registry client from the product, overridable through its env var
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        let program = std::env::var(config.registry_command_env())
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| config.registry_command().to_string());
        Self::new(program)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Latest published version of `package`, if it can be determined
    pub async fn latest_version(&self, package: &str) -> Option<Version> {
        let output = TokioCommand::new(&self.program)
            .arg("view")
            .arg(format!("{}@latest", package))
            .arg("version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, output).await.ok()?.ok()?;
        if !output.status.success() {
            return None;
        }

        parse_version_output(&output.stdout)
    }
}

/// Parse registry stdout; anything but a single semantic version is rejected
pub fn parse_version_output(stdout: &[u8]) -> Option<Version> {
    let text = std::str::from_utf8(stdout).ok()?.trim();
    if text.is_empty() {
        return None;
    }
    // Remove leading 'v' if present
    let cleaned = text.strip_prefix('v').unwrap_or(text);
    Version::parse(cleaned).ok()
}

/// A newer release of a tracked package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNotice {
    pub package: String,
    pub current: Version,
    pub latest: Version,
    pub upgrade_command: String,
}

impl fmt::Display for UpdateNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A new version of {} is available: {} -> {}\nUpgrade with: {}",
            self.package, self.current, self.latest, self.upgrade_command
        )
    }
}

/// Compare a known version with the published one
///
/// Returns a notice only when the published version is strictly newer.
/// An unparseable `current` yields nothing.
pub fn compare(package: &TrackedPackage, latest: &Version, upgrade_command: String) -> Option<UpdateNotice> {
    let current = match Version::parse(package.current_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip notice
    };

    if *latest <= current {
        return None;
    }
    Some(UpdateNotice {
        package: package.name.to_string(),
        current,
        latest: latest.clone(),
        upgrade_command,
    })
}

/// Look up every tracked package in order, collecting notices
pub async fn check_for_updates<C: ProductConfig>(config: &C, query: &RegistryQuery) -> Vec<UpdateNotice> {
    let mut notices = Vec::new();
    for package in config.tracked_packages() {
        let Some(latest) = query.latest_version(package.name).await else {
            continue;
        };
        if let Some(notice) = compare(&package, &latest, config.upgrade_command(package.name)) {
            notices.push(notice);
        }
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKG: TrackedPackage = TrackedPackage {
        name: "create-single-spa",
        current_version: "1.2.0",
    };

    #[test]
    fn test_parse_version_output() {
        assert_eq!(
            parse_version_output(b"1.4.2\n"),
            Some(Version::new(1, 4, 2))
        );
        assert_eq!(parse_version_output(b"v2.0.0"), Some(Version::new(2, 0, 0)));
        assert_eq!(parse_version_output(b""), None);
        assert_eq!(parse_version_output(b"   \n"), None);
        assert_eq!(parse_version_output(b"npm ERR! 404"), None);
        assert_eq!(parse_version_output(&[0xff, 0xfe]), None);
    }

    #[test]
    fn test_compare_only_reports_newer() {
        let notice = compare(&PKG, &Version::new(1, 3, 0), "npm i -g x".into()).unwrap();
        assert_eq!(notice.current, Version::new(1, 2, 0));
        assert_eq!(notice.latest, Version::new(1, 3, 0));
        assert!(notice.to_string().contains("create-single-spa"));
        assert!(notice.to_string().contains("npm i -g x"));

        assert!(compare(&PKG, &Version::new(1, 2, 0), String::new()).is_none());
        assert!(compare(&PKG, &Version::new(1, 1, 9), String::new()).is_none());
    }

    #[test]
    fn test_compare_ignores_unparseable_current() {
        let pkg = TrackedPackage {
            name: "x",
            current_version: "dev",
        };
        assert!(compare(&pkg, &Version::new(9, 0, 0), String::new()).is_none());
    }

    #[tokio::test]
    async fn test_missing_registry_client_is_unavailable() {
        let query = RegistryQuery::new("definitely-not-a-registry-client-7f3a");
        assert_eq!(query.latest_version("create-single-spa").await, None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_or_empty_lookup_is_unavailable() {
        // `false` exits non-zero, `true` succeeds with empty output
        assert_eq!(RegistryQuery::new("false").latest_version("pkg").await, None);
        assert_eq!(RegistryQuery::new("true").latest_version("pkg").await, None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_version_output_is_unavailable() {
        // `echo` prints its arguments back, which is not a version
        let query = RegistryQuery::new("echo");
        assert_eq!(query.latest_version("pkg").await, None);
    }

    #[derive(Clone)]
    struct TrackingConfig(&'static [TrackedPackage]);

    impl ProductConfig for TrackingConfig {
        fn name(&self) -> &'static str {
            "test"
        }

        fn display_name(&self) -> &'static str {
            "test"
        }

        fn cli_description(&self) -> &'static str {
            "test"
        }

        fn tracked_packages(&self) -> Vec<TrackedPackage> {
            self.0.to_vec()
        }

        fn registry_command_env(&self) -> &'static str {
            "TEST_REGISTRY_CMD"
        }

        fn generator_path_env(&self) -> &'static str {
            "TEST_GENERATOR_PATH"
        }

        fn issues_url(&self) -> &'static str {
            "https://example.com/issues"
        }
    }

    // Fails for packages named `broken*`, reports 2.0.0 for everything else.
    #[cfg(unix)]
    fn fake_registry(dir: &std::path::Path) -> RegistryQuery {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("fake-registry");
        std::fs::write(
            &script,
            "#!/bin/sh\ncase \"$2\" in\n  broken*) exit 1 ;;\n  *) echo 2.0.0 ;;\nesac\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        RegistryQuery::new(script.to_string_lossy())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_lookup_does_not_affect_the_other() {
        let tmp = tempfile::tempdir().unwrap();
        let query = fake_registry(tmp.path());
        let config = TrackingConfig(&[
            TrackedPackage {
                name: "broken-fork",
                current_version: "1.0.0",
            },
            TrackedPackage {
                name: "good",
                current_version: "1.0.0",
            },
        ]);

        let notices = check_for_updates(&config, &query).await;

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].package, "good");
        assert_eq!(notices[0].latest, Version::new(2, 0, 0));
        assert_eq!(notices[0].upgrade_command, "npm install -g good@latest");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_all_lookups_failing_yields_no_notices() {
        let tmp = tempfile::tempdir().unwrap();
        let query = fake_registry(tmp.path());
        let config = TrackingConfig(&[
            TrackedPackage {
                name: "broken-fork",
                current_version: "1.0.0",
            },
            TrackedPackage {
                name: "broken-upstream",
                current_version: "1.0.0",
            },
        ]);

        assert!(check_for_updates(&config, &query).await.is_empty());
    }
}
