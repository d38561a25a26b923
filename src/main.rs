use clap::Parser;

use dossier::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    if let Err(e) = cli::run(cli).await {
        eprintln!("dossier: {e}");
        std::process::exit(1);
    }
}
