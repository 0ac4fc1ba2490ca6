//! hop - directory bookmarks with partial-name matching
//!
//! hop keeps a name -> directory registry in a single JSON file and resolves
//! possibly-partial queries to exactly one project, prompting the user to
//! narrow ambiguous matches. Commands that must act in the invoking shell
//! (changing its directory, launching $EDITOR) hand a one-line command to
//! the shell wrapper through a fixed temp file.
//!
//! Commands:
//! - (default): switch the shell into a project directory
//! - save: save the current directory under a name
//! - delete: forget one project
//! - view: open a project in the system file explorer
//! - open: run a project's start script or open its IDE files
//! - edit: open a project in $EDITOR
//! - reset: forget every project

pub mod commands;
pub mod error;
pub mod launch;
pub mod prompt;
pub mod registry;
pub mod resolver;
pub mod shell;

pub use error::HopError;
pub use registry::{Registry, Store};
