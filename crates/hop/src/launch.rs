//! Platform launchers and project markers
//!
//! What "opening" a project means depends on what is inside it: an
//! executable `start` script runs in place, a single Xcode workspace or
//! project file goes to the system opener. The opener sits behind a trait so
//! the command logic stays free of platform branching.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Opens a path with the operating system's default handler
pub trait Launcher {
    fn open(&self, target: &Path) -> Result<()>;
}

/// `open` on macOS, `xdg-open` on Linux
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, target: &Path) -> Result<()> {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "linux") {
            "xdg-open"
        } else {
            bail!("No system opener available on this platform");
        };

        Command::new(program)
            .arg(target)
            .spawn()
            .with_context(|| format!("Failed to run {} {}", program, target.display()))?;
        Ok(())
    }
}

/// Something launchable found inside a project directory
#[derive(Debug, PartialEq, Eq)]
pub enum Marker {
    /// Executable ./start script
    StartScript(PathBuf),
    /// Exactly one *.xcworkspace
    Workspace(PathBuf),
    /// Exactly one *.xcodeproj
    IdeProject(PathBuf),
}

/// Inspect a project directory for something launchable, in priority order:
/// start script, workspace file, project file
pub fn detect_marker(dir: &Path) -> Option<Marker> {
    let start = dir.join("start");
    if is_executable_file(&start) {
        return Some(Marker::StartScript(start));
    }

    if let Some(workspace) = single_with_extension(dir, "xcworkspace") {
        return Some(Marker::Workspace(workspace));
    }

    if let Some(project) = single_with_extension(dir, "xcodeproj") {
        return Some(Marker::IdeProject(project));
    }

    None
}

fn is_executable_file(path: &Path) -> bool {
    let Ok(meta) = path.metadata() else {
        return false;
    };
    if !meta.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// The one entry carrying `ext`, or None when there are zero or several
fn single_with_extension(dir: &Path, ext: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;

    let mut found = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == ext) {
            if found.is_some() {
                return None;
            }
            found = Some(path);
        }
    }

    found
}
