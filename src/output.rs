use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Recipe;

/// Write the aggregated records as one pretty-printed UTF-8 JSON array,
/// creating parent directories as needed. The file is overwritten.
pub fn write(path: &Path, recipes: &[Recipe]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let mut json = serde_json::to_string_pretty(recipes)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// Read a previously written JSON array back.
pub fn read(path: &Path) -> Result<Vec<Recipe>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid recipe JSON in {}", path.display()))
}

// ── Tests ──
