// src/core/resolver.rs

use crate::{
    constants::{PATH_VAR, PATHEXT_VAR},
    core::shebang,
    system::{env::EnvView, platform::Platform},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Executable '{0}' not found")]
    NotFound(String),
    #[error("No command specified to normalize.")]
    EmptyCommand,
}

/// Resolves bare executable names to absolute paths and rewrites commands
/// into directly spawnable invocations.
///
/// A resolver is a pure function of its inputs: the environment view and
/// the platform strategy are injected at construction and never mutated,
/// so one resolver can be shared across threads without coordination.
#[derive(Debug, Clone)]
pub struct Resolver {
    env: EnvView,
    platform: Platform,
}

impl Resolver {
    pub fn new(env: EnvView, platform: Platform) -> Self {
        Self { env, platform }
    }

    /// A resolver over the real process environment and the host platform.
    pub fn from_process() -> Self {
        Self::new(EnvView::from_process(), Platform::host())
    }

    /// Locates `name` as an absolute executable path.
    ///
    /// A name containing a path marker is taken as a path: it resolves to
    /// its absolute form when it exists and is executable, and to `None`
    /// otherwise. Any other name is searched for along `PATH`, directory by
    /// directory in list order. When the environment carries `PATHEXT`,
    /// each extension is tried in list order before the bare name within a
    /// directory; the first hit wins. `None` is the normal "nothing
    /// matched" outcome, not a fault.
    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        if self.platform.is_path(name) {
            let path = Path::new(name);
            if self.platform.is_executable(path) {
                return Some(absolutize(path));
            }
            return None;
        }

        let candidates = self.candidate_names(name);
        let search_path = self.env.get(PATH_VAR).unwrap_or_default();
        for dir in self.platform.split_list(search_path) {
            for candidate in &candidates {
                let joined = Path::new(dir).join(candidate);
                if self.platform.is_executable(&joined) {
                    log::debug!("Resolved '{}' to '{}'", name, joined.display());
                    return Some(absolutize(&joined));
                }
            }
        }
        log::debug!("No executable '{}' found on PATH", name);
        None
    }

    /// Candidate file names tried within one search directory: `name` plus
    /// each `PATHEXT` extension in list order (lowercased, the Windows
    /// convention), then the bare name last.
    fn candidate_names(&self, name: &str) -> Vec<String> {
        let mut candidates = Vec::new();
        if let Some(pathext) = self.env.get(PATHEXT_VAR) {
            for ext in self.platform.split_list(pathext) {
                candidates.push(format!("{}{}", name, ext.to_lowercase()));
            }
        }
        candidates.push(name.to_owned());
        candidates
    }

    /// Like [`Self::find_executable`], but a miss is a hard
    /// [`ResolveError::NotFound`] carrying the attempted name.
    pub fn normalize_executable(&self, name: &str) -> Result<PathBuf, ResolveError> {
        self.find_executable(name)
            .ok_or_else(|| ResolveError::NotFound(name.to_owned()))
    }

    /// Rewrites `cmd` into an invocation whose first element is an
    /// absolute, executable path, splicing in the interpreter from the
    /// target's shebang when it has one.
    ///
    /// For a script with shebang `#!/usr/bin/env python` the result is the
    /// resolved `python` path, then the script's own absolute path, then
    /// the original trailing arguments. Exactly one level of shebang is
    /// followed: an interpreter that is itself a script with its own
    /// shebang is resolved but not expanded further.
    ///
    /// The returned paths exist and are executable at resolution time;
    /// they are not re-validated afterwards.
    pub fn normalize_command(&self, cmd: &[String]) -> Result<Vec<String>, ResolveError> {
        let (program, rest) = cmd.split_first().ok_or(ResolveError::EmptyCommand)?;
        let exe = self.normalize_executable(program)?;

        let interpreter_tokens = shebang::parse_file(&exe, &self.platform);
        let mut normalized = Vec::with_capacity(cmd.len() + interpreter_tokens.len());
        match interpreter_tokens.split_first() {
            Some((interpreter, interpreter_args)) => {
                let interpreter = self.normalize_executable(interpreter)?;
                normalized.push(path_to_string(&interpreter));
                normalized.extend(interpreter_args.iter().cloned());
                normalized.push(path_to_string(&exe));
            }
            None => normalized.push(path_to_string(&exe)),
        }
        normalized.extend(rest.iter().cloned());
        Ok(normalized)
    }
}

/// Returns `path` unchanged when already absolute; otherwise anchors it to
/// the current working directory. Covers relative command paths and empty
/// `PATH` entries, which mean the working directory by convention.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => dunce::simplified(&cwd.join(path)).to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
