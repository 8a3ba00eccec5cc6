// File: crates/cli/src/fonts.rs
// Summary: Font selection: an explicit path wins, otherwise the first font file found in a directory.

use std::path::{Path, PathBuf};

use rank_report::ConfigError;
use tracing::info;

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Font files directly inside `dir`, sorted by name. Files whose name
/// contains `temp` are leftovers from earlier uploads and are skipped.
pub fn discover(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if FONT_EXTENSIONS.contains(&ext.as_str()) && !name.contains("temp") {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Pick the run's font file.
pub fn resolve(explicit: Option<&Path>, search_dir: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let found = discover(search_dir).map_err(|e| ConfigError::MissingFont {
        reason: format!("cannot scan '{}': {e}", search_dir.display()),
    })?;
    info!(count = found.len(), dir = %search_dir.display(), "font files detected");
    found.into_iter().next().ok_or_else(|| ConfigError::MissingFont {
        reason: format!("no .ttf/.otf file in '{}'; pass --font", search_dir.display()),
    })
}
