use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DossierError {
    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("invalid content base {base}: {reason}")]
    InvalidBase { base: String, reason: String },

    #[error("fetch failed for {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("api error: status={status}, body={body}")]
    Api { status: u16, body: String },

    #[error("unknown record kind: {name}")]
    UnknownKind { name: String },

    #[error("no {kind} record with id {id}")]
    RecordNotFound { kind: String, id: String },

    #[error("invalid {kind} record: {}", errors.join("; "))]
    InvalidRecord { kind: String, errors: Vec<String> },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DossierError>;
