pub mod records;

pub use records::*;

use serde_json::Value;

pub const MAX_STRING_LENGTH: usize = 10_000;
pub const MAX_ARRAY_LENGTH: usize = 100;
pub const MAX_OBJECT_DEPTH: usize = 10;

/// What went wrong with one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    DepthExceeded,
    NotAString,
    NotAnArray,
    Empty,
    TooLong,
    InvalidValue,
}

/// One shape violation. `field` is index-qualified for sequence elements
/// (`techStack[2]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ViolationKind::DepthExceeded => write!(f, "Object depth exceeds maximum"),
            ViolationKind::NotAString => write!(f, "{} must be a string", self.field),
            ViolationKind::NotAnArray => write!(f, "{} must be an array", self.field),
            ViolationKind::Empty => write!(f, "{} must not be empty", self.field),
            ViolationKind::TooLong => write!(f, "{} exceeds maximum length", self.field),
            ViolationKind::InvalidValue => write!(f, "Invalid {} value", self.field),
        }
    }
}

/// Every violation found in one value, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable messages, one per violation.
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    /// Whether any violation names `field` (or one of its elements).
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| {
            v.field == field
                || v
                    .field
                    .strip_prefix(field)
                    .is_some_and(|rest| rest.starts_with('['))
        })
    }

    fn push(&mut self, field: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation {
            field: field.into(),
            kind,
        });
    }
}

/// Returns false if any value sits deeper than [`MAX_OBJECT_DEPTH`].
/// The value passed in is at `depth`; its children are one level deeper.
pub fn within_depth(value: &Value, depth: usize) -> bool {
    if depth > MAX_OBJECT_DEPTH {
        return false;
    }
    match value {
        Value::Object(map) => map.values().all(|v| within_depth(v, depth + 1)),
        Value::Array(items) => items.iter().all(|v| within_depth(v, depth + 1)),
        _ => true,
    }
}

fn too_long(s: &str) -> bool {
    s.chars().count() > MAX_STRING_LENGTH
}

/// Accumulates violations for one value. Every check runs; nothing
/// short-circuits.
pub struct ShapeCheck<'a> {
    data: &'a Value,
    report: ValidationReport,
}

impl<'a> ShapeCheck<'a> {
    /// Start a check. The depth of the whole tree is checked up front.
    pub fn new(data: &'a Value) -> Self {
        let mut report = ValidationReport::default();
        if !within_depth(data, 0) {
            report.push("object", ViolationKind::DepthExceeded);
        }
        Self { data, report }
    }

    pub fn string(mut self, field: &str) -> Self {
        let data = self.data;
        self.check_string(field, data.get(field));
        self
    }

    /// A required string that must also have at least one character.
    pub fn non_empty_string(mut self, field: &str) -> Self {
        let data = self.data;
        let value = data.get(field);
        self.check_string(field, value);
        if value.and_then(Value::as_str).is_some_and(str::is_empty) {
            self.report.push(field, ViolationKind::Empty);
        }
        self
    }

    pub fn optional_string(mut self, field: &str) -> Self {
        let data = self.data;
        if let Some(value) = data.get(field) {
            self.check_string(field, Some(value));
        }
        self
    }

    pub fn string_array(mut self, field: &str) -> Self {
        let data = self.data;
        self.check_string_array(field, data.get(field));
        self
    }

    pub fn optional_string_array(mut self, field: &str) -> Self {
        let data = self.data;
        if let Some(value) = data.get(field) {
            self.check_string_array(field, Some(value));
        }
        self
    }

    /// The field must be a string exactly equal to one of `allowed`.
    pub fn one_of(mut self, field: &str, allowed: &[&str]) -> Self {
        let ok = self
            .data
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| allowed.contains(&s));
        if !ok {
            self.report.push(field, ViolationKind::InvalidValue);
        }
        self
    }

    pub fn finish(self) -> ValidationReport {
        self.report
    }

    fn check_string(&mut self, field: &str, value: Option<&Value>) {
        match value {
            Some(Value::String(s)) if too_long(s) => {
                self.report.push(field, ViolationKind::TooLong)
            }
            Some(Value::String(_)) => {}
            _ => self.report.push(field, ViolationKind::NotAString),
        }
    }

    fn check_string_array(&mut self, field: &str, value: Option<&Value>) {
        let Some(Value::Array(items)) = value else {
            self.report.push(field, ViolationKind::NotAnArray);
            return;
        };
        if items.len() > MAX_ARRAY_LENGTH {
            self.report.push(field, ViolationKind::TooLong);
            return;
        }
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(s) if too_long(s) => {
                    self.report
                        .push(format!("{field}[{index}]"), ViolationKind::TooLong)
                }
                Value::String(_) => {}
                _ => self
                    .report
                    .push(format!("{field}[{index}]"), ViolationKind::NotAString),
            }
        }
    }
}
