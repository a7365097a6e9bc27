pub mod blocks;
pub mod extract;
pub mod sections;

use std::fs;

use crate::discover::RecipeSource;
use crate::error::ExtractError;
use crate::images;
use crate::model::Recipe;

/// Single-file pipeline: markdown → blocks → sections → recipe record.
pub fn parse_recipe(source: &RecipeSource, media_base: &str) -> Result<Recipe, ExtractError> {
    let content = fs::read_to_string(&source.path).map_err(|e| ExtractError::Read {
        path: source.path.clone(),
        source: e,
    })?;

    let blocks = blocks::classify_lines(&content);
    let sections = sections::cluster_sections(&blocks);

    let name = extract::meta::title(&sections)
        .ok_or_else(|| ExtractError::MissingTitle(source.path.clone()))?;
    let image_path = images::find_image(&source.path, &source.relative_path, &name, media_base);

    Ok(extract::extract_all(
        source, &content, name, image_path, &sections,
    ))
}

// ── Tests ──
