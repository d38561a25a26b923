use crate::config::DossierConfig;
use crate::content::RecordKind;
use crate::error::{DossierError, Result};
use crate::loader::ContentLoader;

/// Load everything and print a per-kind summary, or the bundle as JSON.
pub async fn run_load(config: &DossierConfig, json: bool) -> Result<()> {
    let loader = ContentLoader::from_config(config)?;
    let (bundle, report) = loader.load_all_with_report().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    for kind in RecordKind::ALL {
        let skipped = report.for_kind(kind).count();
        println!(
            "{:<16} {} loaded, {} skipped",
            kind.section(),
            bundle.count(kind),
            skipped
        );
        for entry in report.for_kind(kind) {
            println!("  - {}: {}", entry.id, entry.reason);
        }
    }

    Ok(())
}

/// Load everything and print the record of `kind` with `id`.
pub async fn run_show(config: &DossierConfig, kind: RecordKind, id: &str) -> Result<()> {
    let loader = ContentLoader::from_config(config)?;
    let bundle = loader.load_all().await;

    let record = bundle
        .find(kind, id)
        .ok_or_else(|| DossierError::RecordNotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        })?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
