use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DossierError, Result};

use super::Manifests;

/// Top-level configuration from `dossier.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DossierConfig {
    /// Content base: a directory or an `http(s)://` URL. Default: `.`
    #[serde(default = "default_base")]
    pub base: String,

    /// HTTP timeout in seconds. Default: none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Files to load per record kind.
    #[serde(default)]
    pub manifests: Manifests,
}

fn default_base() -> String {
    ".".into()
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            timeout_secs: None,
            manifests: Manifests::default(),
        }
    }
}

impl DossierConfig {
    /// Load config from a YAML file. Returns default if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| DossierError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load config from the project root. Checks `dossier.yml`.
    pub fn load_project(project_root: &Path) -> Result<Self> {
        Self::load_from(&project_root.join(super::CONFIG_FILE))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| DossierError::ConfigParse {
            path: super::CONFIG_FILE.into(),
            reason: e.to_string(),
        })
    }
}
