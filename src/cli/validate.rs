use std::path::Path;

use crate::content::RecordKind;
use crate::error::{DossierError, Result};
use crate::validate;

/// Validate one local JSON file. Every violation is listed; exit status is
/// non-zero if there is at least one.
pub fn run(kind: RecordKind, file: &Path) -> Result<()> {
    let contents = std::fs::read(file)?;
    let value: serde_json::Value = serde_json::from_slice(&contents)?;
    let report = validate::validate(kind, &value);

    if report.is_valid() {
        eprintln!("dossier: {} is a valid {} record", file.display(), kind);
        return Ok(());
    }

    for error in report.errors() {
        println!("{error}");
    }
    Err(DossierError::InvalidRecord {
        kind: kind.to_string(),
        errors: report.errors(),
    })
}
