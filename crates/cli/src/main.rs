#![deny(unsafe_code)]
//! CLI binary for the noise-engine raster generator.
//!
//! Subcommands:
//! - `render <generator>` — generate a noise field, write a grayscale PNG
//! - `list` — print available generators

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use noise_engine_core::{Generator, ImageSpec};
use noise_engine_render::GeneratorKind;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "noise-engine", about = "Gradient noise raster generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a noise field and write a grayscale PNG.
    Render {
        /// Generator name (e.g. "perlin").
        generator: String,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 512)]
        height: usize,

        /// Lattice cell size in pixels. A `cell_size` key in --params wins.
        #[arg(short, long, default_value_t = 16)]
        cell_size: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file path.
        #[arg(short, long, default_value = "noise.png")]
        output: PathBuf,

        /// Generator parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available generators.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let generators = GeneratorKind::list_generators();
            if cli.json {
                let info = serde_json::json!({ "generators": generators });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Generators:");
                for name in generators {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            generator,
            width,
            height,
            cell_size,
            seed,
            output,
            params,
        } => {
            let mut params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            if !params.is_object() {
                return Err(CliError::Input("--params must be a JSON object".into()));
            }
            if let Some(map) = params.as_object_mut() {
                map.entry("cell_size")
                    .or_insert_with(|| serde_json::json!(cell_size));
            }

            let mut spec = ImageSpec::new(&generator, width, height, seed);
            spec.params = params;
            spec.validate()?;

            let kind = GeneratorKind::from_name(&spec.generator, spec.seed, &spec.params)?;
            let field = kind.generate(spec.width, spec.height)?;

            noise_engine_render::snapshot::write_png(&field, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "spec": spec,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {generator} ({width}x{height}, cell {}, seed {seed}) -> {}",
                    spec.params["cell_size"],
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
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
