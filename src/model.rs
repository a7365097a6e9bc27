use serde::{Deserialize, Serialize};

/// One recipe record, one per source markdown file. Field set matches the
/// published all_recipes.json schema; optionals serialize as explicit null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub source_path: String,
    pub image_path: Option<String>,
    pub category: String,
    pub difficulty: u8,
    pub tags: Vec<String>,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub total_time_minutes: Option<u32>,
    pub additional_notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    /// The quantity text as it appeared in the source ("300 g", "适量"),
    /// or the whole line when nothing splits.
    pub text_quantity: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub step: u32,
    pub description: String,
}
