//! Lexical path helpers for the upward walk.
//!
//! The starting directory of a search need not exist, so these helpers fold
//! `.` and `..` components lexically instead of canonicalising through the
//! filesystem.

use std::path::{Component, Path, PathBuf};

use camino::Utf8PathBuf;

use crate::ResolveResult;
use crate::error::invalid_input;

/// Resolve `dir` to an absolute, lexically normalised path.
///
/// Relative paths are resolved against the process working directory.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidInput`](crate::ResolveError::InvalidInput)
/// for an empty path, or when a relative path cannot be resolved because the
/// working directory is unavailable.
pub(crate) fn absolutise(dir: &Path) -> ResolveResult<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(invalid_input(dir, "path is empty"));
    }
    let joined = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        let cwd = std::env::current_dir()
            .map_err(|err| invalid_input(dir, format!("cannot resolve relative path: {err}")))?;
        cwd.join(dir)
    };
    Ok(normalise(&joined))
}

/// Fold `.` and `..` components without consulting the filesystem.
///
/// `..` at the root stays at the root, matching the walk's termination
/// condition.
pub(crate) fn normalise(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let _ = out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Convert a resolved path to UTF-8; paths that cannot be represented are
/// omitted.
pub(crate) fn to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
