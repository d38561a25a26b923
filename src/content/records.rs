use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Record, RecordKind};

/// Clearance label shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityLevel {
    #[serde(rename = "DECLASSIFIED")]
    Declassified,
    #[serde(rename = "RESTRICTED")]
    Restricted,
    #[serde(rename = "TOP SECRET")]
    TopSecret,
}

impl SecurityLevel {
    pub const ALL: [SecurityLevel; 3] = [
        SecurityLevel::Declassified,
        SecurityLevel::Restricted,
        SecurityLevel::TopSecret,
    ];

    /// The exact literal used in content files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::Declassified => "DECLASSIFIED",
            SecurityLevel::Restricted => "RESTRICTED",
            SecurityLevel::TopSecret => "TOP SECRET",
        }
    }

    /// Exact, case-sensitive match against the three literals.
    pub fn from_literal(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub security_level: SecurityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writeup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Fields not named above, kept as they arrived (after sanitization).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub link: String,
    /// Markdown body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Project {
    const KIND: RecordKind = RecordKind::Project;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Experience {
    const KIND: RecordKind = RecordKind::Experience;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Education {
    const KIND: RecordKind = RecordKind::Education;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Certification {
    const KIND: RecordKind = RecordKind::Certification;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Article {
    const KIND: RecordKind = RecordKind::Article;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_security_level_literals() {
        assert_eq!(
            SecurityLevel::from_literal("TOP SECRET"),
            Some(SecurityLevel::TopSecret)
        );
        assert_eq!(SecurityLevel::from_literal("top secret"), None);
        assert_eq!(SecurityLevel::from_literal("CONFIDENTIAL"), None);
    }

    #[test]
    fn test_project_keeps_unknown_fields() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "Zero-Day Hunter",
            "description": "scanner",
            "techStack": ["Rust"],
            "securityLevel": "RESTRICTED",
            "stars": 42
        }))
        .unwrap();

        assert_eq!(project.security_level, SecurityLevel::Restricted);
        assert_eq!(project.extra.get("stars"), Some(&json!(42)));
        assert!(project.link.is_none());

        let back = serde_json::to_value(&project).unwrap();
        assert_eq!(back["techStack"], json!(["Rust"]));
        assert_eq!(back["stars"], json!(42));
        assert!(back.get("link").is_none());
    }
}
