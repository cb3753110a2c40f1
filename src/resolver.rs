//! Resolution of command names to built-ins or executables on `PATH`.

use crate::command::is_builtin;
use crate::env::Environment;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Outcome of resolving a command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name is in the built-in registry.
    Builtin,
    /// The name resolves to this executable file.
    Found(PathBuf),
    NotFound,
}

/// Resolve `name` the way `type` reports it.
///
/// Built-ins take precedence over any same-named executable. Otherwise `PATH` is read
/// from `env` at call time and searched with [`resolve_external`]; results are never
/// cached, since both `PATH` and the filesystem may change between commands.
pub fn resolve(name: &str, env: &Environment) -> Resolution {
    if is_builtin(name) {
        return Resolution::Builtin;
    }
    let path_env = env.get_var("PATH");
    match resolve_external(name, path_env.as_deref()) {
        Some(path) => Resolution::Found(path),
        None => Resolution::NotFound,
    }
}

/// Search for an executable called `name`.
///
/// Behavior:
/// - Empty name, or an absent or empty `path_env`: returns `None`.
/// - Otherwise: split `path_env` on the platform separator and probe `dir/name` in
///   order. The first executable candidate wins. Empty entries (from `::` or a
///   leading/trailing separator) are skipped. `name` is appended verbatim, so
///   `sub/tool` is probed as `dir/sub/tool` and an absolute name is never probed
///   on its own.
pub fn resolve_external(name: &str, path_env: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let search_paths = path_env?;
    find_in_path(search_paths, name)
}

fn find_in_path(search_paths: &OsStr, name: &str) -> Option<PathBuf> {
    for dir in std::env::split_paths(search_paths) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = candidate_path(dir, name);
        log::trace!("probing {}", candidate.display());
        if is_executable(&candidate) {
            log::debug!("resolved {} to {}", name, candidate.display());
            return Some(candidate);
        }
    }
    log::debug!("{} not found in PATH", name);
    None
}

/// `dir` + separator + `name`. Unlike `Path::join`, an absolute `name` does not
/// replace `dir`.
fn candidate_path(dir: PathBuf, name: &str) -> PathBuf {
    let mut candidate = dir.into_os_string();
    let has_trailing_separator = candidate
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| std::path::is_separator(b as char));
    if !has_trailing_separator {
        candidate.push(std::path::MAIN_SEPARATOR_STR);
    }
    candidate.push(name);
    PathBuf::from(candidate)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
