//! Command handlers
//!
//! One function per CLI action. Collaborators (store, bridge, launcher,
//! prompter) are passed in explicitly so every handler can be exercised
//! against temp files and scripted input.

use std::env;
use std::process::Command;

use anyhow::{Context, Result};

use crate::error::HopError;
use crate::launch::{detect_marker, Launcher, Marker};
use crate::prompt::Prompter;
use crate::registry::{Registry, Store};
use crate::resolver::resolve;
use crate::shell::ShellBridge;

/// Switch the invoking shell into a project directory
pub fn load(
    query: &str,
    registry: &Registry,
    bridge: &ShellBridge,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let (name, path) = resolve(query, registry, "Which project should be loaded?", prompter)?;

    if path == env::current_dir()? {
        println!("Already in project directory");
        return Ok(());
    }

    println!("Switching to \"{name}\"");
    bridge.change_dir(path)
}

/// Save the current directory under a project name
pub fn save(
    query: &str,
    registry: &mut Registry,
    store: &Store,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let name = if query.is_empty() {
        prompter.read_line("Enter new project name: ")?
    } else {
        query.to_string()
    };

    if name.is_empty() {
        return Err(HopError::Argument("Project name must not be empty".into()).into());
    }

    if registry.contains(&name) {
        let message = format!("Project named \"{name}\" already exists. Overwrite");
        if !prompter.confirm(&message)? {
            return Ok(());
        }
    }

    registry.set(name.clone(), env::current_dir()?);
    store.save(registry)?;
    println!("Saved project \"{name}\"");
    Ok(())
}

/// Forget one project
pub fn delete(
    query: &str,
    registry: &mut Registry,
    store: &Store,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let (name, _) = resolve(query, registry, "Which project should be deleted?", prompter)?;
    let name = name.to_string();

    if prompter.confirm(&format!("Delete \"{name}\""))? {
        registry.remove(&name);
        store.save(registry)?;
        println!("Deleted project \"{name}\"");
    }

    Ok(())
}

/// Open a project in the system file explorer
pub fn view(
    query: &str,
    registry: &Registry,
    launcher: &dyn Launcher,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let (name, path) = resolve(
        query,
        registry,
        "Which project should open in the file explorer?",
        prompter,
    )?;

    println!("Opening \"{name}\" in file explorer...");
    launcher.open(path)
}

/// Launch a project: its start script, its IDE files, or the editor as a
/// last resort
pub fn open(
    query: &str,
    registry: &Registry,
    launcher: &dyn Launcher,
    bridge: &ShellBridge,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let (name, path) = resolve(
        query,
        registry,
        "Which project would you like to open?",
        prompter,
    )?;

    match detect_marker(path) {
        Some(Marker::StartScript(script)) => {
            println!("Starting \"{name}\"...");
            env::set_current_dir(path).map_err(|source| HopError::ChangeDir {
                path: path.to_path_buf(),
                source,
            })?;
            Command::new(script)
                .status()
                .context("Failed to execute start script")?;
            Ok(())
        }
        Some(Marker::Workspace(target)) | Some(Marker::IdeProject(target)) => {
            println!("Opening \"{name}\" in Xcode...");
            launcher.open(&target)
        }
        None => {
            // Nothing launchable inside; treat it like an edit
            let editor = editor_program()?;
            bridge.run(&editor, path)
        }
    }
}

/// Open a project in the configured editor, inside the invoking shell
pub fn edit(
    query: &str,
    registry: &Registry,
    bridge: &ShellBridge,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let editor = editor_program()?;
    let message = format!("Which project should be opened with {editor}?");
    let (_, path) = resolve(query, registry, &message, prompter)?;

    bridge.run(&editor, path)
}

/// Forget every saved project and delete the backing file
pub fn reset(registry: &Registry, store: &Store, prompter: &mut dyn Prompter) -> Result<()> {
    if registry.is_empty() {
        return Err(HopError::NoProjects.into());
    }

    let message = format!("Remove {} saved projects", registry.len());
    if prompter.confirm(&message)? {
        store.wipe()?;
        println!("Removed all saved projects");
    }

    Ok(())
}

fn editor_program() -> Result<String> {
    match env::var("EDITOR") {
        Ok(editor) if !editor.is_empty() => Ok(editor),
        _ => Err(HopError::Config(
            "No editor configured. Please set the $EDITOR environment variable".into(),
        )
        .into()),
    }
}
