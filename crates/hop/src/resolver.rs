//! Query resolution against the registry
//!
//! Resolves a free-text query to exactly one project, prompting to narrow
//! ambiguity. Matching is case-sensitive: an exact name wins outright,
//! otherwise substring containment filters the candidate set. Ambiguous
//! input narrows the set for the next round; an empty line at the prompt
//! resets it to the full registry so an over-narrowed search can start over.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use hop_core::display_tilde;

use crate::error::HopError;
use crate::prompt::Prompter;
use crate::registry::Registry;

/// Spaces between the name column and the path column
const LISTING_GUTTER: usize = 2;

/// Resolve `query` to a single (name, path) entry of `registry`.
///
/// `prompt` is the question shown above the full listing when the user has
/// to be asked for input; narrowed listings show a match count instead.
pub fn resolve<'a>(
    query: &str,
    registry: &'a Registry,
    prompt: &str,
    prompter: &mut dyn Prompter,
) -> Result<(&'a str, &'a Path)> {
    if registry.is_empty() {
        return Err(HopError::NoProjects.into());
    }

    let full: Vec<(&str, &Path)> = registry.iter().collect();
    let mut candidates = full.clone();
    let mut query = query.to_string();

    loop {
        if query.is_empty() {
            // An empty line always re-broadens to the full registry
            candidates = full.clone();
            print_listing(&candidates, prompt);
            query = prompter.read_line("\nEnter project: ")?;
            continue;
        }

        // An exact name wins even when it is also a substring of others
        if let Some(&(name, path)) = candidates.iter().find(|(name, _)| *name == query) {
            return Ok((name, path));
        }

        let matches: Vec<(&str, &Path)> = candidates
            .iter()
            .copied()
            .filter(|(name, _)| name.contains(&query))
            .collect();

        match matches.len() {
            0 => return Err(HopError::NoMatch.into()),
            1 => return Ok(matches[0]),
            _ => {
                candidates = matches;
                print_listing(&candidates, "");
                query = prompter.read_line("\nEnter project: ")?;
            }
        }
    }
}

/// Print entries as a two-column listing: bold names left-justified to the
/// longest name plus a gutter, then tilde-collapsed paths
fn print_listing(entries: &[(&str, &Path)], prompt: &str) {
    if prompt.is_empty() {
        let suffix = if entries.len() == 1 { "" } else { "s" };
        println!("{} project{} found\n", entries.len(), suffix);
    } else {
        println!("{prompt}\n");
    }

    let width = entries
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        + LISTING_GUTTER;

    for &(name, path) in entries {
        // Pad before applying the style so escape codes do not skew the column
        println!("{}{}", format!("{name: <width$}").bold(), display_tilde(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Scripted;
    use std::path::PathBuf;

    fn registry(entries: &[(&str, &str)]) -> Registry {
        let mut registry = Registry::new();
        for (name, path) in entries {
            registry.set(*name, PathBuf::from(path));
        }
        registry
    }

    fn no_input() -> Scripted {
        Scripted::new(Vec::<String>::new())
    }

    #[test]
    fn test_exact_match_beats_substring() {
        let registry = registry(&[("project1", "/a"), ("project12", "/b")]);
        let (name, _) = resolve("project1", &registry, "Pick", &mut no_input()).unwrap();
        assert_eq!(name, "project1");
    }

    #[test]
    fn test_single_substring_match() {
        let registry = registry(&[("api", "/srv/api"), ("blog", "/srv/blog")]);
        let (name, path) = resolve("pi", &registry, "Pick", &mut no_input()).unwrap();
        assert_eq!(name, "api");
        assert_eq!(path, Path::new("/srv/api"));
    }

    #[test]
    fn test_ambiguous_query_narrows() {
        let registry = registry(&[("project1", "/a"), ("project2", "/b")]);
        let mut prompter = Scripted::new(["2"]);
        let (name, _) = resolve("proj", &registry, "Pick", &mut prompter).unwrap();
        assert_eq!(name, "project2");
    }

    #[test]
    fn test_narrowed_set_excludes_non_matches() {
        // "zoth" matches a registry entry, but not one inside the narrowed
        // set, so the second round must fail
        let registry = registry(&[("project1", "/a"), ("project2", "/b"), ("zother", "/c")]);
        let mut prompter = Scripted::new(["zoth"]);
        let err = resolve("proj", &registry, "Pick", &mut prompter).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HopError>(),
            Some(HopError::NoMatch)
        ));
    }

    #[test]
    fn test_empty_input_rebroadens_to_full_set() {
        // Narrow to {project1, project2}, press enter, then pick an entry
        // that was outside the narrowed set
        let registry = registry(&[("project1", "/a"), ("project2", "/b"), ("other", "/c")]);
        let mut prompter = Scripted::new(["", "oth"]);
        let (name, _) = resolve("proj", &registry, "Pick", &mut prompter).unwrap();
        assert_eq!(name, "other");
    }

    #[test]
    fn test_no_match_fails_without_prompting() {
        let registry = registry(&[("project1", "/a")]);
        let err = resolve("zzz", &registry, "Pick", &mut no_input()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HopError>(),
            Some(HopError::NoMatch)
        ));
    }

    #[test]
    fn test_empty_registry_fails_without_prompting() {
        let registry = Registry::new();
        for query in ["", "anything"] {
            let err = resolve(query, &registry, "Pick", &mut no_input()).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<HopError>(),
                Some(HopError::NoProjects)
            ));
        }
    }

    #[test]
    fn test_empty_query_prompts_against_full_registry() {
        let registry = registry(&[("api", "/srv/api"), ("blog", "/srv/blog")]);
        let mut prompter = Scripted::new(["blog"]);
        let (name, _) = resolve("", &registry, "Pick", &mut prompter).unwrap();
        assert_eq!(name, "blog");
    }
}
