use serde::{Deserialize, Serialize};

use crate::content::RecordKind;

/// Ordered file identifiers to load, per record kind.
///
/// An identifier `x` for kind `k` resolves to `data/<k directory>/x.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifests {
    pub projects: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub articles: Vec<String>,
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for Manifests {
    fn default() -> Self {
        Self {
            projects: ids(&[
                "zero-day-hunter",
                "phantom-proxy",
                "neural-breach",
                "cryptic-vault",
            ]),
            experience: ids(&["cyberdyne", "blackmesh", "netcorp"]),
            education: ids(&["mit", "stanford"]),
            certifications: ids(&["oscp", "cissp", "ceh", "i2cs", "nexhunt", "cyber-basics"]),
            articles: ids(&["aslr-bypass", "quantum-decryption", "social-engineering-ai"]),
        }
    }
}

impl Manifests {
    /// A manifest set with no entries for any kind.
    pub fn empty() -> Self {
        Self {
            projects: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            articles: Vec::new(),
        }
    }

    pub fn ids(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::Project => &self.projects,
            RecordKind::Experience => &self.experience,
            RecordKind::Education => &self.education,
            RecordKind::Certification => &self.certifications,
            RecordKind::Article => &self.articles,
        }
    }

    pub fn set(&mut self, kind: RecordKind, ids: Vec<String>) {
        match kind {
            RecordKind::Project => self.projects = ids,
            RecordKind::Experience => self.experience = ids,
            RecordKind::Education => self.education = ids,
            RecordKind::Certification => self.certifications = ids,
            RecordKind::Article => self.articles = ids,
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, kind: RecordKind, ids: &[&str]) -> Self {
        self.set(kind, ids.iter().map(|s| s.to_string()).collect());
        self
    }
}

/// Relative path of one content file: `data/<directory>/<id>.json`.
pub fn content_path(kind: RecordKind, id: &str) -> String {
    format!("data/{}/{}.json", kind.directory(), id)
}
