use std::path::PathBuf;

use anyhow::{bail, Result};
use config::Config;

pub const DEFAULT_OUTPUT: &str = "target/all_recipes.json";
pub const DEFAULT_MEDIA_BASE: &str =
    "https://media.githubusercontent.com/media/Anduin2017/HowToCook/refs/heads/master/dishes";

/// Locations probed when neither --source nor RECIPES_SOURCE is given.
const SOURCE_CANDIDATES: &[&str] = &["HowToCook", "../HowToCook"];

#[derive(Debug, Clone)]
pub struct Settings {
    /// The HowToCook checkout; recipes live under its dishes/ tree.
    pub source_root: PathBuf,
    pub output: PathBuf,
    pub media_base: String,
}

impl Settings {
    /// Resolve settings for a convert run: CLI flag, then RECIPES_*
    /// environment, then defaults. A source root that cannot be found
    /// anywhere is fatal.
    pub fn resolve(source: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self> {
        let env = environment();

        let source_root = source
            .or_else(|| env.get_string("source").ok().map(PathBuf::from))
            .or_else(detect_source_root);
        let Some(source_root) = source_root else {
            bail!(
                "no recipe source found; tried {:?} (pass --source or set RECIPES_SOURCE)",
                SOURCE_CANDIDATES
            );
        };

        let media_base = env
            .get_string("media_base")
            .unwrap_or_else(|_| DEFAULT_MEDIA_BASE.to_string());

        Ok(Settings {
            source_root,
            output: resolve_output(output),
            media_base,
        })
    }
}

/// Output path on its own, for subcommands that only read the artifact.
pub fn resolve_output(output: Option<PathBuf>) -> PathBuf {
    output
        .or_else(|| environment().get_string("output").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

fn environment() -> Config {
    Config::builder()
        .add_source(config::Environment::with_prefix("RECIPES"))
        .build()
        .unwrap_or_default()
}

fn detect_source_root() -> Option<PathBuf> {
    SOURCE_CANDIDATES
        .iter()
        .copied()
        .map(PathBuf::from)
        .find(|p| p.is_dir())
}
