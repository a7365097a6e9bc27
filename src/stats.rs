use std::collections::BTreeMap;

use crate::model::Recipe;

pub fn print_stats(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes; nothing to report.");
        return;
    }
    println!("{}", render(recipes));
}

fn render(recipes: &[Recipe]) -> String {
    let total = recipes.len();
    let with_image = recipes.iter().filter(|r| r.image_path.is_some()).count();
    let with_steps = recipes.iter().filter(|r| !r.steps.is_empty()).count();
    let ingredient_total: usize = recipes.iter().map(|r| r.ingredients.len()).sum();

    let mut out = String::new();
    out.push_str("## Recipe Stats\n");
    out.push_str(&format!("- Total recipes: {}\n", total));
    out.push_str(&format!(
        "- With image: {} ({:.1}%)\n",
        with_image,
        percent(with_image, total)
    ));
    out.push_str(&format!(
        "- With steps: {} ({:.1}%)\n",
        with_steps,
        percent(with_steps, total)
    ));
    out.push_str(&format!(
        "- Ingredient lines: {} ({:.1} per recipe)\n",
        ingredient_total,
        ingredient_total as f64 / total as f64
    ));

    out.push_str("\n### By category\n");
    for (category, count) in category_counts(recipes) {
        out.push_str(&format!(
            "- {}: {} ({:.1}%)\n",
            category,
            count,
            percent(count, total)
        ));
    }

    out.push_str("\n### Difficulty\n");
    for rating in 1..=5u8 {
        let count = recipes.iter().filter(|r| r.difficulty == rating).count();
        out.push_str(&format!(
            "- {}: {} ({:.1}%)\n",
            "★".repeat(rating as usize),
            count,
            percent(count, total)
        ));
    }

    out
}

fn category_counts(recipes: &[Recipe]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in recipes {
        *counts.entry(r.category.clone()).or_insert(0) += 1;
    }
    counts
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

// ── Tests ──
