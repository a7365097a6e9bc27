mod config;
mod discover;
mod error;
mod images;
mod model;
mod output;
mod parser;
mod stats;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::config::Settings;
use crate::model::Recipe;

#[derive(Parser)]
#[command(name = "recipe_extractor", about = "HowToCook markdown to JSON converter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the markdown tree into one JSON array (the default)
    Convert {
        /// HowToCook checkout (default: auto-detect, see RECIPES_SOURCE)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Output JSON path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summary statistics for a converted JSON file
    Stats {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recipes overview table
    Overview {
        /// Filter by category label (e.g. 荤菜)
        #[arg(short, long)]
        category: Option<String>,
        /// Only recipes at or above this difficulty
        #[arg(long)]
        min_difficulty: Option<u8>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Convert {
        source: None,
        output: None,
    }) {
        Commands::Convert { source, output } => run_convert(source, output),
        Commands::Stats { output } => {
            let recipes = read_converted(output)?;
            stats::print_stats(&recipes);
            Ok(())
        }
        Commands::Overview {
            category,
            min_difficulty,
            limit,
            output,
        } => {
            let recipes = read_converted(output)?;
            run_overview(&recipes, category.as_deref(), min_difficulty, limit);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

#[derive(Default)]
struct ConvertCounts {
    recipes: usize,
    skipped: usize,
    ingredients: usize,
    steps: usize,
}

impl ConvertCounts {
    fn print(&self, output: &std::path::Path) {
        println!(
            "Saved {} recipes ({} ingredient lines, {} steps, {} files skipped).",
            self.recipes, self.ingredients, self.steps, self.skipped,
        );
        println!("Output: {}", output.display());
    }
}

fn run_convert(source: Option<PathBuf>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = Settings::resolve(source, output)?;
    let sources = discover::discover(&settings.source_root)?;
    if sources.is_empty() {
        println!(
            "No recipe files under {}.",
            settings.source_root.join("dishes").display()
        );
        return Ok(());
    }

    println!("Converting {} recipe files...", sources.len());
    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut counts = ConvertCounts::default();
    let mut recipes: Vec<Recipe> = Vec::with_capacity(sources.len());
    for src in &sources {
        match parser::parse_recipe(src, &settings.media_base) {
            Ok(recipe) => {
                counts.ingredients += recipe.ingredients.len();
                counts.steps += recipe.steps.len();
                recipes.push(recipe);
            }
            Err(e) => {
                warn!(path = %src.relative_path, error = %e, "skipping file");
                counts.skipped += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    output::write(&settings.output, &recipes)?;
    counts.recipes = recipes.len();
    counts.print(&settings.output);
    Ok(())
}

fn read_converted(output: Option<PathBuf>) -> anyhow::Result<Vec<Recipe>> {
    let path = config::resolve_output(output);
    if !path.is_file() {
        anyhow::bail!(
            "no converted recipes at {}; run 'convert' first",
            path.display()
        );
    }
    output::read(&path)
}

fn run_overview(
    recipes: &[Recipe],
    category: Option<&str>,
    min_difficulty: Option<u8>,
    limit: usize,
) {
    let rows: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .filter(|r| min_difficulty.map_or(true, |d| r.difficulty >= d))
        .take(limit)
        .collect();

    if rows.is_empty() {
        println!("No recipes found.");
        return;
    }

    println!(
        "{:>3} | {:<28} | {:<8} | {:<5} | {:>4} | {:>4}",
        "#", "Recipe", "Category", "Diff", "Ingr", "Step"
    );
    println!("{}", "-".repeat(68));

    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<28} | {:<8} | {:<5} | {:>4} | {:>4}",
            i + 1,
            truncate(&r.name, 28),
            truncate(&r.category, 8),
            "★".repeat(r.difficulty as usize),
            r.ingredients.len(),
            r.steps.len(),
        );
    }

    println!("\n{} recipes | id: dishes-<category>-<name>", rows.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
