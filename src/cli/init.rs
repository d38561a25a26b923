use std::path::PathBuf;

use crate::config::{DossierConfig, CONFIG_FILE};
use crate::content::RecordKind;
use crate::error::Result;

/// Write a default `dossier.yml` and create `data/<kind>/` directories.
pub fn run() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_path = cwd.join(CONFIG_FILE);

    for kind in RecordKind::ALL {
        std::fs::create_dir_all(cwd.join("data").join(kind.directory()))?;
    }

    if config_path.exists() {
        eprintln!("dossier: {} already exists, leaving it untouched", CONFIG_FILE);
        return Ok(());
    }

    std::fs::write(&config_path, DossierConfig::default().to_yaml()?)?;
    eprintln!("dossier: initialized {} and data/", CONFIG_FILE);
    Ok(())
}
