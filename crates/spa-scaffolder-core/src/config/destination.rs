//! Destination root resolution

use std::path::{Path, PathBuf};

/// Resolve the `dir` option against the working directory
///
/// Absolute paths are used as-is, relative ones are joined onto `cwd`.
/// Without a `dir` the destination stays at `cwd`.
pub fn resolve_destination(dir: Option<&str>, cwd: &Path) -> PathBuf {
    match dir {
        Some(dir) => {
            let p = Path::new(dir);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                cwd.join(p)
            }
        }
        None => cwd.to_path_buf(),
    }
}
