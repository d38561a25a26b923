use crate::sanitize::{sanitize_email, sanitize_text, sanitize_url};

use super::SanitizeMode;

/// Print the sanitized value. Rejected emails and URLs print an empty line.
pub fn run(mode: SanitizeMode, input: &str) {
    let output = match mode {
        SanitizeMode::Text => sanitize_text(input),
        SanitizeMode::Email => sanitize_email(input),
        SanitizeMode::Url => sanitize_url(input),
    };
    println!("{output}");
}
