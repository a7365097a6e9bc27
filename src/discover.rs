use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Category labels keyed by the directory names of the upstream dishes/
/// tree. Unknown directories fall through to their own name.
const CATEGORY_MAP: &[(&str, &str)] = &[
    ("aquatic", "水产"),
    ("breakfast", "早餐"),
    ("condiment", "调味料"),
    ("dessert", "甜点"),
    ("drink", "饮品"),
    ("meat_dish", "荤菜"),
    ("semi-finished", "半成品"),
    ("soup", "汤"),
    ("staple", "主食"),
    ("vegetable_dish", "素菜"),
    ("template", "模板"),
];

const UNCATEGORIZED: &str = "未分类";

/// One markdown file found under the dishes/ tree.
#[derive(Debug, Clone)]
pub struct RecipeSource {
    pub path: PathBuf,
    /// Path relative to dishes/, always /-separated.
    pub relative_path: String,
    pub category: String,
}

/// Enumerate recipe files under `{source_root}/dishes`, sorted by relative
/// path so output order never depends on filesystem traversal order.
/// Template files are skipped. A missing dishes/ tree is fatal.
pub fn discover(source_root: &Path) -> Result<Vec<RecipeSource>> {
    let dishes = source_root.join("dishes");
    if !dishes.is_dir() {
        bail!("source directory {} does not exist", dishes.display());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&dishes).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "md") {
            continue;
        }
        let Ok(rel) = path.strip_prefix(&dishes) else {
            continue;
        };
        let relative_path = to_slash(rel);
        if relative_path.to_lowercase().contains("template") {
            debug!(path = %relative_path, "skipping template file");
            continue;
        }
        let category = category_for(&relative_path);
        found.push(RecipeSource {
            path: path.to_path_buf(),
            relative_path,
            category,
        });
    }

    found.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(found)
}

/// "dishes-{relative path}" with separators flattened to dashes and the
/// extension dropped: "meat_dish/红烧肉.md" → "dishes-meat_dish-红烧肉".
pub fn recipe_id(relative_path: &str) -> String {
    let stem = relative_path.strip_suffix(".md").unwrap_or(relative_path);
    format!("dishes-{}", stem.replace('/', "-"))
}

fn category_for(relative_path: &str) -> String {
    let Some((dir, _)) = relative_path.split_once('/') else {
        return UNCATEGORIZED.to_string();
    };
    CATEGORY_MAP
        .iter()
        .find(|(key, _)| *key == dir)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| dir.to_string())
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_recipe(root: &Path, rel: &str) {
        let path = root.join("dishes").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# 菜\n").unwrap();
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn finds_and_sorts_by_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        write_recipe(dir.path(), "soup/b.md");
        write_recipe(dir.path(), "meat_dish/a.md");
        write_recipe(dir.path(), "meat_dish/z.md");
        let sources = discover(dir.path()).unwrap();
        let rels: Vec<&str> = sources.iter().map(|s| s.relative_path.as_str()).collect();
        assert_eq!(rels, vec!["meat_dish/a.md", "meat_dish/z.md", "soup/b.md"]);
    }

    #[test]
    fn category_from_directory_table() {
        let dir = tempfile::tempdir().unwrap();
        write_recipe(dir.path(), "meat_dish/红烧肉.md");
        let sources = discover(dir.path()).unwrap();
        assert_eq!(sources[0].category, "荤菜");
    }

    #[test]
    fn unknown_directory_keeps_its_name() {
        let dir = tempfile::tempdir().unwrap();
        write_recipe(dir.path(), "fusion/菜.md");
        let sources = discover(dir.path()).unwrap();
        assert_eq!(sources[0].category, "fusion");
    }

    #[test]
    fn top_level_file_is_uncategorized() {
        let dir = tempfile::tempdir().unwrap();
        write_recipe(dir.path(), "菜.md");
        let sources = discover(dir.path()).unwrap();
        assert_eq!(sources[0].category, UNCATEGORIZED);
    }

    #[test]
    fn template_files_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_recipe(dir.path(), "template/示例菜.md");
        write_recipe(dir.path(), "soup/汤.md");
        let sources = discover(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].relative_path, "soup/汤.md");
    }

    #[test]
    fn non_markdown_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_recipe(dir.path(), "soup/汤.md");
        fs::write(dir.path().join("dishes/soup/汤.jpg"), b"img").unwrap();
        let sources = discover(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn id_from_relative_path() {
        assert_eq!(
            recipe_id("meat_dish/红烧肉.md"),
            "dishes-meat_dish-红烧肉"
        );
        assert_eq!(recipe_id("菜.md"), "dishes-菜");
    }
}
