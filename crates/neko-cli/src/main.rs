//! # neko-lottie
//!
//! Command-line front end for the cat animation generator.
//!
//! ## Commands
//! - `generate`: Write the Lottie documents to the asset folder (the default
//!   when no command is given)
//! - `verify`: Parse Lottie files and report structural problems
//! - `print`: Dump one scene's document to stdout

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lottie_core::audit_document;
use lottie_data::model::LottieJson;
use neko_lottie::{GeneratorConfig, Scene, DEFAULT_OUT_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(name = "neko-lottie")]
#[command(about = "Generates the desktop cat's Lottie animations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the animation documents
    Generate {
        /// Output directory, created if missing
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Only generate these scenes (idle, speaking, listening, sleeping)
        #[arg(short, long = "scene")]
        scenes: Vec<Scene>,
    },

    /// Check Lottie files for structural problems
    Verify {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print one scene's document as pretty JSON
    Print {
        /// Scene to print
        scene: Scene,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("neko_lottie=info,neko_cli=info")
            }),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_generate(GeneratorConfig::default()),
        Some(Commands::Generate { out_dir, scenes }) => {
            cmd_generate(GeneratorConfig::new(out_dir).with_scenes(&scenes))
        }
        Some(Commands::Verify { files }) => cmd_verify(&files),
        Some(Commands::Print { scene }) => cmd_print(scene),
    }
}

fn cmd_generate(config: GeneratorConfig) -> Result<()> {
    let written = neko_lottie::generate(&config).with_context(|| {
        format!(
            "Failed to generate animations into {}",
            config.out_dir.display()
        )
    })?;

    for w in &written {
        println!("Generated: {}  ({} bytes)", w.path.display(), w.bytes);
    }
    println!(
        "\nAll {} Lottie animation files generated successfully.",
        written.len()
    );
    Ok(())
}

fn cmd_verify(files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for file in files {
        match verify_file(file) {
            Ok(0) => println!("ok    {}", file.display()),
            Ok(count) => {
                println!("FAIL  {} ({} problems)", file.display(), count);
                failed += 1;
            }
            Err(e) => {
                warn!(file = %file.display(), "could not check file");
                println!("FAIL  {}: {:#}", file.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed verification", failed, files.len());
    }
    Ok(())
}

/// Returns the number of violations found in `path`.
fn verify_file(path: &Path) -> Result<usize> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let doc: LottieJson = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as a Lottie document", path.display()))?;

    let violations = audit_document(&doc);
    for v in &violations {
        println!("      {}", v);
    }
    Ok(violations.len())
}

fn cmd_print(scene: Scene) -> Result<()> {
    let text = neko_lottie::to_pretty_json(&scene.build())
        .with_context(|| format!("Failed to serialize {}", scene))?;
    println!("{}", text);
    Ok(())
}
