// src/core/timetable/loader.rs
use crate::core::timetable::parse_timetable;
use crate::models::Timetable;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the timetable file looked up when none is given explicitly.
pub const TIMETABLE_FILE_NAME: &str = "timetable.toml";

/// Reads and parses the timetable file at `path`.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not a valid timetable
pub fn load_timetable(path: &Path) -> Result<Timetable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read timetable file: {}", path.display()))?;
    parse_timetable(&content)
        .with_context(|| format!("Failed to parse timetable file: {}", path.display()))
}

/// Looks for a `timetable.toml` starting from `dir` and walking up through
/// its parents. Returns the first one found.
#[must_use]
pub fn find_timetable(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(TIMETABLE_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Picks the timetable for this run: the explicit file if one is given,
/// otherwise a `timetable.toml` found from `dir` upwards, otherwise the
/// built-in timetable.
///
/// # Errors
///
/// Returns an error if the selected file cannot be loaded.
pub fn resolve_timetable(explicit: Option<&Path>, dir: &Path) -> Result<Timetable> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_timetable(dir),
    };
    if path.is_none() {
        debug!(dir = %dir.display(), "no timetable file found");
    }
    load_or_builtin(path.as_deref())
}

/// Loads the timetable at `path`, or returns the built-in timetable when
/// there is no file to load.
///
/// # Errors
///
/// Returns an error if `path` is given and cannot be loaded.
pub fn load_or_builtin(path: Option<&Path>) -> Result<Timetable> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading timetable");
            load_timetable(path)
        }
        None => {
            debug!("using built-in timetable");
            Ok(Timetable::sample())
        }
    }
}
