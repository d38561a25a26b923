use serde_json::{Map, Value};

use super::SanitizePipeline;

/// Keys that must never reach a consumer, compared case-insensitively.
const DANGEROUS_KEYS: &[&str] = &["__proto__", "constructor", "prototype"];

pub fn is_dangerous_key(key: &str) -> bool {
    let folded = key.to_lowercase();
    DANGEROUS_KEYS.contains(&folded.as_str())
}

/// Walks a parsed JSON tree and returns a clean copy.
///
/// Dangerous keys are dropped together with their values. Every string,
/// wherever it sits in the tree, goes through the text pipeline. Objects and
/// arrays found inside arrays are walked the same way rather than passed
/// through untouched, so no dangerous key or markup survives at any depth.
/// Numbers, booleans and nulls pass through unchanged. There is no depth
/// guard here; callers validate depth first.
pub struct ObjectSanitizer {
    pipeline: SanitizePipeline,
}

impl Default for ObjectSanitizer {
    fn default() -> Self {
        Self::new(SanitizePipeline::default_pipeline())
    }
}

impl ObjectSanitizer {
    pub fn new(pipeline: SanitizePipeline) -> Self {
        Self { pipeline }
    }

    /// Sanitize any JSON value.
    pub fn sanitize(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.pipeline.sanitize(s)),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.sanitize(v)).collect()),
            Value::Object(map) => Value::Object(self.sanitize_map(map)),
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    /// Sanitize the entries of one object.
    pub fn sanitize_map(&self, map: &Map<String, Value>) -> Map<String, Value> {
        let mut cleaned = Map::new();
        for (key, value) in map {
            if is_dangerous_key(key) {
                tracing::debug!("dropping dangerous key {:?}", key);
                continue;
            }
            cleaned.insert(key.clone(), self.sanitize(value));
        }
        cleaned
    }
}

/// Sanitize a parsed record with the default text pipeline.
pub fn sanitize_object(value: &Value) -> Value {
    ObjectSanitizer::default().sanitize(value)
}
