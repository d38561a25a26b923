use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{DossierError, Result};

use super::{normalize_path, ContentSource};

/// Reads content files from a local directory (a site's `public/` tree).
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(normalize_path(path));
        tokio::fs::read(&full)
            .await
            .map_err(|e| DossierError::Fetch {
                path: full.display().to_string(),
                reason: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
