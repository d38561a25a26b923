use serde_json::Value;

use crate::content::{RecordKind, SecurityLevel};

use super::{ShapeCheck, ValidationReport};

pub fn validate_project(data: &Value) -> ValidationReport {
    let levels: Vec<&str> = SecurityLevel::ALL.iter().map(|l| l.as_str()).collect();
    ShapeCheck::new(data)
        .non_empty_string("id")
        .string("title")
        .string("description")
        .string_array("techStack")
        .one_of("securityLevel", &levels)
        .optional_string("link")
        .optional_string("fullDescription")
        .optional_string("writeup")
        .optional_string_array("images")
        .finish()
}

pub fn validate_experience(data: &Value) -> ValidationReport {
    ShapeCheck::new(data)
        .non_empty_string("id")
        .string("role")
        .string("company")
        .string("period")
        .string("description")
        .string_array("tech")
        .optional_string_array("details")
        .optional_string("location")
        .finish()
}

pub fn validate_education(data: &Value) -> ValidationReport {
    ShapeCheck::new(data)
        .non_empty_string("id")
        .string("degree")
        .string("school")
        .string("year")
        .optional_string("honors")
        .optional_string("description")
        .finish()
}

pub fn validate_certification(data: &Value) -> ValidationReport {
    ShapeCheck::new(data)
        .non_empty_string("id")
        .string("name")
        .string("issuer")
        .string("date")
        .optional_string("badgeUrl")
        .optional_string("description")
        .optional_string("verificationLink")
        .optional_string("fileUrl")
        .finish()
}

pub fn validate_article(data: &Value) -> ValidationReport {
    ShapeCheck::new(data)
        .non_empty_string("id")
        .string("title")
        .string("summary")
        .string("date")
        .string("readTime")
        .string("link")
        .string_array("tags")
        .optional_string("content")
        .finish()
}

/// Run the validator for `kind`.
pub fn validate(kind: RecordKind, data: &Value) -> ValidationReport {
    match kind {
        RecordKind::Project => validate_project(data),
        RecordKind::Experience => validate_experience(data),
        RecordKind::Education => validate_education(data),
        RecordKind::Certification => validate_certification(data),
        RecordKind::Article => validate_article(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_kind_rejects_non_object() {
        for kind in RecordKind::ALL {
            let report = validate(kind, &json!(["not", "an", "object"]));
            assert!(!report.is_valid(), "{kind} accepted an array");
            assert!(report.mentions("id"));
        }
    }

    #[test]
    fn test_project_enum_is_case_sensitive() {
        let data = json!({
            "id": "p1",
            "title": "t",
            "description": "d",
            "techStack": [],
            "securityLevel": "top secret"
        });
        let report = validate_project(&data);
        assert_eq!(report.errors(), vec!["Invalid securityLevel value"]);
    }
}
