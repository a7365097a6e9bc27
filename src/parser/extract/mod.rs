pub mod ingredients;
pub mod meta;
pub mod notes;
pub mod steps;

use crate::discover::{recipe_id, RecipeSource};
use crate::model::Recipe;

use super::sections::Section;

/// Assemble the full record from the clustered sections. The title is
/// resolved by the caller (its absence is the one per-file fatal case).
pub fn extract_all(
    source: &RecipeSource,
    content: &str,
    name: String,
    image_path: Option<String>,
    sections: &[Section],
) -> Recipe {
    let rating = meta::star_rating(content);
    let description = meta::description(sections, rating);

    Recipe {
        id: recipe_id(&source.relative_path),
        name,
        description,
        source_path: source.relative_path.clone(),
        image_path,
        category: source.category.clone(),
        difficulty: rating.unwrap_or(1),
        tags: vec![source.category.clone()],
        servings: 1,
        ingredients: ingredients::extract(sections),
        steps: steps::extract(sections),
        prep_time_minutes: None,
        cook_time_minutes: None,
        total_time_minutes: None,
        additional_notes: notes::extract(sections),
    }
}

// ── Tests ──
