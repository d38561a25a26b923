pub mod dir;
pub mod http;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::{content_path, DossierConfig, Manifests};
use crate::content::{
    Article, Certification, ContentBundle, Education, Experience, Project, Record, RecordKind,
};
use crate::error::{DossierError, Result};
use crate::sanitize::ObjectSanitizer;
use crate::validate;

pub use dir::DirSource;
pub use http::HttpSource;

/// Where content files come from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the raw bytes of `path`, relative to the content base
    /// (`data/projects/x.json`). A missing file or non-success response is an error.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Pick a source for a configured base: URLs go over HTTP, anything else is a directory.
pub fn source_for_base(base: &str, timeout_secs: Option<u64>) -> Result<Box<dyn ContentSource>> {
    let lower = base.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(Box::new(HttpSource::new(base, timeout_secs)?))
    } else {
        Ok(Box::new(DirSource::new(base)))
    }
}

/// Collapse repeated slashes and drop leading ones so the path stays relative.
pub(crate) fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Why one manifest entry never made it into the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    FetchFailed(String),
    ParseFailed(String),
    Invalid(Vec<String>),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::FetchFailed(reason) => write!(f, "fetch failed: {reason}"),
            SkipReason::ParseFailed(reason) => write!(f, "parse failed: {reason}"),
            SkipReason::Invalid(errors) => write!(f, "invalid: {}", errors.join("; ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub kind: RecordKind,
    pub id: String,
    pub reason: SkipReason,
}

/// Diagnostics for one load: every entry that was silently left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn for_kind(&self, kind: RecordKind) -> impl Iterator<Item = &SkippedEntry> {
        self.skipped.iter().filter(move |s| s.kind == kind)
    }
}

/// Validate, sanitize and type one parsed value.
pub fn accept_value<T: Record>(value: &Value, sanitizer: &ObjectSanitizer) -> Result<T> {
    let report = validate::validate(T::KIND, value);
    if !report.is_valid() {
        return Err(DossierError::InvalidRecord {
            kind: T::KIND.to_string(),
            errors: report.errors(),
        });
    }
    let clean = sanitizer.sanitize(value);
    // Markup-only ids pass validation but sanitize to nothing.
    if clean.get("id").and_then(Value::as_str).map_or(true, str::is_empty) {
        let violation = validate::Violation {
            field: "id".into(),
            kind: validate::ViolationKind::Empty,
        };
        return Err(DossierError::InvalidRecord {
            kind: T::KIND.to_string(),
            errors: vec![violation.to_string()],
        });
    }
    serde_json::from_value(clean).map_err(|e| DossierError::InvalidRecord {
        kind: T::KIND.to_string(),
        errors: vec![e.to_string()],
    })
}

/// Loads every manifest entry of every kind from one source.
///
/// Failures never propagate: a file that cannot be fetched, parsed or
/// validated is left out and recorded in the [`LoadReport`].
pub struct ContentLoader {
    source: Box<dyn ContentSource>,
    manifests: Manifests,
    sanitizer: ObjectSanitizer,
}

impl ContentLoader {
    pub fn new(source: Box<dyn ContentSource>, manifests: Manifests) -> Self {
        Self {
            source,
            manifests,
            sanitizer: ObjectSanitizer::default(),
        }
    }

    pub fn from_config(config: &DossierConfig) -> Result<Self> {
        let source = source_for_base(&config.base, config.timeout_secs)?;
        Ok(Self::new(source, config.manifests.clone()))
    }

    /// Replace the object sanitizer (and with it the text pipeline).
    pub fn with_sanitizer(mut self, sanitizer: ObjectSanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn manifests(&self) -> &Manifests {
        &self.manifests
    }

    pub async fn load_projects(&self) -> Vec<Project> {
        self.load_kind::<Project>().await.0
    }

    pub async fn load_experience(&self) -> Vec<Experience> {
        self.load_kind::<Experience>().await.0
    }

    pub async fn load_education(&self) -> Vec<Education> {
        self.load_kind::<Education>().await.0
    }

    pub async fn load_certifications(&self) -> Vec<Certification> {
        self.load_kind::<Certification>().await.0
    }

    pub async fn load_articles(&self) -> Vec<Article> {
        self.load_kind::<Article>().await.0
    }

    /// Load all five kinds concurrently and return once every kind has finished.
    pub async fn load_all(&self) -> ContentBundle {
        self.load_all_with_report().await.0
    }

    /// Like [`load_all`](Self::load_all), also returning what was skipped.
    pub async fn load_all_with_report(&self) -> (ContentBundle, LoadReport) {
        let (
            (projects, mut skipped),
            (experience, experience_skipped),
            (education, education_skipped),
            (certifications, certifications_skipped),
            (articles, articles_skipped),
        ) = tokio::join!(
            self.load_kind::<Project>(),
            self.load_kind::<Experience>(),
            self.load_kind::<Education>(),
            self.load_kind::<Certification>(),
            self.load_kind::<Article>(),
        );

        skipped.extend(experience_skipped);
        skipped.extend(education_skipped);
        skipped.extend(certifications_skipped);
        skipped.extend(articles_skipped);

        let bundle = ContentBundle {
            projects,
            experience,
            education,
            certifications,
            articles,
        };
        (bundle, LoadReport { skipped })
    }

    /// Load one kind in manifest order.
    async fn load_kind<T: Record>(&self) -> (Vec<T>, Vec<SkippedEntry>) {
        let kind = T::KIND;
        let ids = self.manifests.ids(kind);
        let mut records = Vec::with_capacity(ids.len());
        let mut skipped = Vec::new();

        for id in ids {
            match self.load_entry::<T>(id).await {
                Ok(record) => {
                    tracing::debug!("accepted {} {}", kind, id);
                    records.push(record);
                }
                Err(reason) => {
                    tracing::warn!("skipping {} {}: {}", kind, id, reason);
                    skipped.push(SkippedEntry {
                        kind,
                        id: id.clone(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            "loaded {} of {} {} record(s) from {}",
            records.len(),
            ids.len(),
            kind,
            self.source.describe()
        );
        (records, skipped)
    }

    async fn load_entry<T: Record>(&self, id: &str) -> std::result::Result<T, SkipReason> {
        let path = content_path(T::KIND, id);
        let bytes = self
            .source
            .fetch(&path)
            .await
            .map_err(|e| SkipReason::FetchFailed(e.to_string()))?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| SkipReason::ParseFailed(e.to_string()))?;
        accept_value(&value, &self.sanitizer).map_err(|e| match e {
            DossierError::InvalidRecord { errors, .. } => SkipReason::Invalid(errors),
            other => SkipReason::Invalid(vec![other.to_string()]),
        })
    }
}
