pub mod init;
pub mod load;
pub mod sanitize;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DossierConfig;
use crate::content::RecordKind;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "dossier",
    version,
    about = "Validated, sanitized content loading for a static portfolio site"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: ./dossier.yml)")]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log accepted records and per-kind totals")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default dossier.yml and the data/ directory tree.
    Init,
    /// Load every manifest entry and report what was accepted.
    Load {
        #[arg(long, help = "Content base directory or http(s) URL")]
        base: Option<String>,
        #[arg(long, help = "Print the content bundle as JSON")]
        json: bool,
    },
    /// Print one record as JSON.
    Show {
        kind: RecordKind,
        id: String,
        #[arg(long, help = "Content base directory or http(s) URL")]
        base: Option<String>,
    },
    /// Check a local JSON file against a record shape.
    Validate { kind: RecordKind, file: PathBuf },
    /// Sanitize a single value.
    Sanitize {
        #[arg(value_enum)]
        mode: SanitizeMode,
        input: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SanitizeMode {
    Text,
    Email,
    Url,
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(),
        Commands::Load { base, json } => {
            let config = load_config(cli.config.as_deref(), base)?;
            load::run_load(&config, json).await
        }
        Commands::Show { kind, id, base } => {
            let config = load_config(cli.config.as_deref(), base)?;
            load::run_show(&config, kind, &id).await
        }
        Commands::Validate { kind, file } => validate::run(kind, &file),
        Commands::Sanitize { mode, input } => {
            sanitize::run(mode, &input);
            Ok(())
        }
    }
}

/// Read the config file (explicit path or `./dossier.yml`) and apply a base override.
fn load_config(path: Option<&Path>, base: Option<String>) -> Result<DossierConfig> {
    let mut config = match path {
        Some(path) => DossierConfig::load_from(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            DossierConfig::load_project(&cwd)?
        }
    };
    if let Some(base) = base {
        config.base = base;
    }
    Ok(config)
}
