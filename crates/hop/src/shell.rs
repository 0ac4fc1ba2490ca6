//! Shell handoff
//!
//! A child process cannot change its parent shell's working directory, so
//! commands that need the shell to act write a one-line command to a fixed
//! file. The wrapper function evaluates and deletes that file after hop
//! exits successfully; on a non-zero exit it is left unread.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use hop_core::Paths;

/// Writes the command the shell wrapper will evaluate
pub struct ShellBridge {
    path: PathBuf,
}

impl Default for ShellBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellBridge {
    /// Bridge at the fixed well-known location
    pub fn new() -> Self {
        Self {
            path: Paths::new().bridge,
        }
    }

    /// Bridge writing to an explicit file, for tests
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ask the shell to change into `dir`
    pub fn change_dir(&self, dir: &Path) -> Result<()> {
        self.send("cd", dir)
    }

    /// Ask the shell to run `program` against `target`
    pub fn run(&self, program: &str, target: &Path) -> Result<()> {
        self.send(program, target)
    }

    fn send(&self, program: &str, target: &Path) -> Result<()> {
        let command = format!("{} '{}'", program, target.display());
        tracing::debug!(path = %self.path.display(), command = %command, "handing off to shell");
        fs::write(&self.path, command)
            .with_context(|| format!("Failed to write shell handoff {}", self.path.display()))
    }
}
