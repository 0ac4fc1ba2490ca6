//! Standard paths used by hop

use std::env;
use std::path::{Path, PathBuf};

/// Fixed locations shared by the binary and the shell wrapper
pub struct Paths {
    /// Project store (~/.hop.json)
    pub store: PathBuf,
    /// Shell handoff file ($TMPDIR/hop_cmd)
    pub bridge: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let store = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".hop.json");

        // The wrapper function resolves the same location, so this must stay
        // in step with the snippet in the README
        let bridge = env::temp_dir().join("hop_cmd");

        Self { store, bridge }
    }
}

/// Render a path with the home directory collapsed to `~`
pub fn display_tilde(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~/{}", rest.display());
        }
    }

    path.display().to_string()
}
