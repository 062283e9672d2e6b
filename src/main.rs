// src/main.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use worldsmith::placement::ascii_plot;
use worldsmith::{Assembler, SceneDoc, TemplateRegistry, WorldConfig, WorldError};

/// Assemble a simulated-world scene from a declarative configuration.
#[derive(Parser, Debug)]
#[command(name = "worldsmith", version, about)]
struct Args {
    /// World configuration (RON).
    #[arg(short, long)]
    config: PathBuf,

    /// Object template registry (RON).
    #[arg(short, long)]
    templates: PathBuf,

    /// Output scene document (JSON).
    #[arg(short, long, default_value = "scene.json")]
    out: PathBuf,

    /// Override the configured world seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a text plot of each assembled area.
    #[arg(long)]
    plot: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), WorldError> {
    let mut config = WorldConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let templates = TemplateRegistry::load(&args.templates)?;

    let env = Assembler::new(&config, &templates).assemble()?;
    if args.plot {
        for area in env.areas() {
            println!("{}", ascii_plot(area));
        }
    }
    SceneDoc::from_environment(&env).write_json(&args.out)
}
