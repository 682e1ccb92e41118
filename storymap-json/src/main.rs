//! Point d'entrée CLI pour storymap-json

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use storymap_json::cli::{self, ConvertArgs};
use storymap_json::config;

/// Convertir la table StoryMap (CSV) en JSON pour la carte
#[derive(Parser)]
#[command(name = "storymap-json")]
#[command(author, version)]
#[command(about = "Convertir la table de projets StoryMap (CSV) en JSON pour le front-end cartographique")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() -> Result<()> {
    // Avant clap: les valeurs par défaut peuvent venir de .env
    let env_files = config::load_dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    for path in &env_files {
        debug!(path = %path.display(), "Loaded env file");
    }

    cli::cmd_convert(&cli.convert)?;
    println!("Conversion complete!");

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
