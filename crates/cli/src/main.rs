#![deny(unsafe_code)]
//! CLI binary for the voronoi-raster image generator.
//!
//! Subcommands:
//! - `render` — scatter seeds, rasterize, write a PPM or PNG
//! - `list` — print available palettes and distance metrics

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use voronoi_raster_core::{Distance, Palette, Recipe};

#[derive(Parser)]
#[command(name = "voronoi-raster", about = "Voronoi tessellation image generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a tessellated image and write it to disk.
    Render {
        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 512)]
        height: usize,

        /// Number of seeds (Voronoi cells).
        #[arg(short = 'n', long, default_value_t = 32)]
        seeds: usize,

        /// Distance metric (manhattan, squared-euclidean).
        #[arg(short, long, default_value = "manhattan")]
        distance: String,

        /// Palette name (ocean, neon, earth, monochrome, vapor, fire, primary).
        #[arg(short, long, default_value = "ocean")]
        palette: String,

        /// PRNG seed. Drawn from the platform RNG when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Rasterize rows in parallel.
        #[arg(long)]
        parallel: bool,

        /// Output path; `.png` writes PNG, anything else PPM.
        #[arg(short, long, default_value = "voronoi.ppm")]
        output: PathBuf,

        /// Load all generation parameters from a recipe JSON file.
        #[arg(long, conflicts_with_all = ["width", "height", "seeds", "distance", "palette", "seed"])]
        recipe: Option<PathBuf>,
    },
    /// List available palettes and distance metrics.
    List,
}

fn load_recipe(path: &Path) -> Result<Recipe, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = Palette::list_names();
            let distances = Distance::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "distances": distances,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
                println!("Distances:");
                println!("  {}", distances.join(", "));
            }
        }
        Command::Render {
            width,
            height,
            seeds,
            distance,
            palette,
            seed,
            parallel,
            output,
            recipe,
        } => {
            let recipe = match recipe {
                Some(path) => load_recipe(&path)?,
                None => {
                    let mut r = match seed {
                        Some(s) => Recipe::new(width, height, seeds, s),
                        None => Recipe::with_entropy(width, height, seeds),
                    };
                    r.distance = Distance::from_name(&distance)?;
                    r.palette = palette;
                    r
                }
            };
            log::debug!("rendering {recipe:?}");

            let palette = recipe.resolve_palette()?;
            let tessellation = if parallel {
                recipe.generate_par(&palette)?
            } else {
                recipe.generate(&palette)?
            };
            let format = voronoi_raster_output::save(&tessellation.image, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "recipe": recipe,
                    "format": format!("{format:?}").to_lowercase(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} seeds ({}x{}, {}, palette {}, seed {}) -> {}",
                    recipe.seed_count,
                    recipe.width,
                    recipe.height,
                    recipe.distance.name(),
                    recipe.palette,
                    recipe.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["voronoi-raster", "render"]).unwrap();
        match cli.command {
            Command::Render {
                width,
                height,
                seeds,
                distance,
                seed,
                output,
                ..
            } => {
                assert_eq!((width, height, seeds), (512, 512, 32));
                assert_eq!(distance, "manhattan");
                assert!(seed.is_none());
                assert_eq!(output, PathBuf::from("voronoi.ppm"));
            }
            Command::List => panic!("expected render"),
        }
    }

    #[test]
    fn recipe_conflicts_with_explicit_parameters() {
        let result =
            Cli::try_parse_from(["voronoi-raster", "render", "--recipe", "r.json", "-W", "8"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_distance_is_input_error() {
        let cli = Cli::try_parse_from([
            "voronoi-raster",
            "render",
            "--distance",
            "chebyshev",
            "--seed",
            "1",
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn zero_seeds_is_generation_error() {
        let cli =
            Cli::try_parse_from(["voronoi-raster", "render", "-n", "0", "--seed", "1"]).unwrap();
        assert_eq!(run(cli).unwrap_err().exit_code(), 10);
    }

    #[test]
    fn unallocatable_dimensions_are_generation_error() {
        let cli = Cli::try_parse_from([
            "voronoi-raster",
            "render",
            "-W",
            "4611686018427387904",
            "-H",
            "1",
            "-n",
            "1",
            "--seed",
            "1",
        ])
        .unwrap();
        assert_eq!(run(cli).unwrap_err().exit_code(), 10);
    }

    fn expected_ppm(recipe: &Recipe) -> Vec<u8> {
        let palette = recipe.resolve_palette().unwrap();
        let image = recipe.generate(&palette).unwrap().image;
        let mut bytes = Vec::new();
        voronoi_raster_output::ppm::write_ppm(&image, &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn render_with_flags_writes_reproducible_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cells.ppm");
        let cli = Cli::try_parse_from([
            "voronoi-raster",
            "render",
            "-W",
            "24",
            "-H",
            "16",
            "-n",
            "5",
            "-d",
            "squared-euclidean",
            "-p",
            "fire",
            "--seed",
            "7",
            "-o",
            path.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();

        let mut recipe = Recipe::new(24, 16, 5, 7);
        recipe.distance = Distance::SquaredEuclidean;
        recipe.palette = "fire".into();
        assert_eq!(std::fs::read(&path).unwrap(), expected_ppm(&recipe));
    }

    #[test]
    fn render_from_recipe_file_matches_direct_generation() {
        let dir = tempfile::tempdir().unwrap();
        let recipe_path = dir.path().join("recipe.json");
        let out_path = dir.path().join("cells.ppm");
        let mut recipe = Recipe::new(20, 12, 4, 99);
        recipe.palette = "neon".into();
        std::fs::write(&recipe_path, serde_json::to_string(&recipe).unwrap()).unwrap();

        let cli = Cli::try_parse_from([
            "voronoi-raster",
            "--json",
            "render",
            "--parallel",
            "--recipe",
            recipe_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();

        assert_eq!(std::fs::read(&out_path).unwrap(), expected_ppm(&recipe));
    }

    #[test]
    fn invalid_recipe_json_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.json");
        std::fs::write(&path, "{\"width\": 4}").unwrap();
        assert_eq!(load_recipe(&path).unwrap_err().exit_code(), 12);
    }

    #[test]
    fn load_recipe_reports_missing_file_as_io() {
        let err = load_recipe(Path::new("/nonexistent/recipe.json")).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }
}
