pub mod records;

pub use records::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DossierError;

/// The five fixed content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Project,
    Experience,
    Education,
    Certification,
    Article,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Project,
        RecordKind::Experience,
        RecordKind::Education,
        RecordKind::Certification,
        RecordKind::Article,
    ];

    /// Directory under `data/` holding this kind's files.
    pub fn directory(&self) -> &'static str {
        match self {
            RecordKind::Project => "projects",
            RecordKind::Experience => "experience",
            RecordKind::Education => "education",
            RecordKind::Certification => "certificates",
            RecordKind::Article => "articles",
        }
    }

    /// Section name used by the presentation layer and the bundle fields.
    pub fn section(&self) -> &'static str {
        match self {
            RecordKind::Project => "projects",
            RecordKind::Experience => "experience",
            RecordKind::Education => "education",
            RecordKind::Certification => "certifications",
            RecordKind::Article => "articles",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Project => write!(f, "project"),
            RecordKind::Experience => write!(f, "experience"),
            RecordKind::Education => write!(f, "education"),
            RecordKind::Certification => write!(f, "certification"),
            RecordKind::Article => write!(f, "article"),
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = DossierError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" | "projects" => Ok(RecordKind::Project),
            "experience" | "experiences" => Ok(RecordKind::Experience),
            "education" => Ok(RecordKind::Education),
            "certification" | "certifications" | "certificate" | "certificates" => {
                Ok(RecordKind::Certification)
            }
            "article" | "articles" => Ok(RecordKind::Article),
            _ => Err(DossierError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// A typed content record, produced only from a validated and sanitized value.
pub trait Record: DeserializeOwned + Serialize + Send + 'static {
    const KIND: RecordKind;

    fn id(&self) -> &str;
}

/// Everything the presentation layer renders, one ordered list per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub articles: Vec<Article>,
}

/// A borrowed record of any kind, as returned by a detail lookup.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum RecordRef<'a> {
    Project(&'a Project),
    Experience(&'a Experience),
    Education(&'a Education),
    Certification(&'a Certification),
    Article(&'a Article),
}

impl RecordRef<'_> {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordRef::Project(_) => RecordKind::Project,
            RecordRef::Experience(_) => RecordKind::Experience,
            RecordRef::Education(_) => RecordKind::Education,
            RecordRef::Certification(_) => RecordKind::Certification,
            RecordRef::Article(_) => RecordKind::Article,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RecordRef::Project(r) => r.id(),
            RecordRef::Experience(r) => r.id(),
            RecordRef::Education(r) => r.id(),
            RecordRef::Certification(r) => r.id(),
            RecordRef::Article(r) => r.id(),
        }
    }
}

fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}

impl ContentBundle {
    /// Look up a single record for a detail view.
    pub fn find(&self, kind: RecordKind, id: &str) -> Option<RecordRef<'_>> {
        match kind {
            RecordKind::Project => find_by_id(&self.projects, id).map(RecordRef::Project),
            RecordKind::Experience => find_by_id(&self.experience, id).map(RecordRef::Experience),
            RecordKind::Education => find_by_id(&self.education, id).map(RecordRef::Education),
            RecordKind::Certification => {
                find_by_id(&self.certifications, id).map(RecordRef::Certification)
            }
            RecordKind::Article => find_by_id(&self.articles, id).map(RecordRef::Article),
        }
    }

    /// Number of records held for a kind.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Project => self.projects.len(),
            RecordKind::Experience => self.experience.len(),
            RecordKind::Education => self.education.len(),
            RecordKind::Certification => self.certifications.len(),
            RecordKind::Article => self.articles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        RecordKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }
}
