use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Read a JSON or YAML file (by extension) and deserialise into a typed struct.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical).map_err(|e| {
        CliError::Parse(format!("Failed to read '{}': {}", canonical.display(), e))
    })?;

    let is_yaml = matches!(
        canonical.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| CliError::Parse(format!("Failed to parse '{}': {}", canonical.display(), e)))
}

/// Resolve the path against the working directory and check it is a file.
fn resolve_path(path: &str) -> Result<PathBuf, CliError> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(CliError::Parse(format!(
            "File not found: {}",
            canonical.display()
        )));
    }

    if !canonical.is_file() {
        return Err(CliError::Parse(format!("Not a file: {}", canonical.display())));
    }

    Ok(canonical)
}
