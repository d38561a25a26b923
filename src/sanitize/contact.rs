use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::markup::sanitize_text;

/// `local@domain.tld` with no whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Sanitize then validate an email address.
///
/// Returns an empty string when the address does not match; callers treat
/// empty as missing/invalid, never as a valid empty address.
pub fn sanitize_email(input: &str) -> String {
    let sanitized = sanitize_text(input);
    if EMAIL_PATTERN.is_match(&sanitized) {
        sanitized
    } else {
        String::new()
    }
}

/// Accept only absolute `http`/`https` URLs.
///
/// Parse failures and any other scheme (`javascript:`, `data:`, `file:` ...)
/// yield an empty string. On success the original string is returned with
/// markup stripped.
pub fn sanitize_url(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    match Url::parse(input) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => sanitize_text(input),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_simple_address() {
        assert_eq!(sanitize_email("user@example.com"), "user@example.com");
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert_eq!(sanitize_email("not-an-email"), "");
        assert_eq!(sanitize_email("user@localhost"), "");
        assert_eq!(sanitize_email("us er@example.com"), "");
        assert_eq!(sanitize_email(""), "");
    }

    #[test]
    fn test_email_strips_markup_first() {
        assert_eq!(
            sanitize_email("<b>user@example.com</b>"),
            "user@example.com"
        );
    }

    #[test]
    fn test_url_schemes() {
        assert_eq!(sanitize_url("https://example.com"), "https://example.com");
        assert_eq!(
            sanitize_url("http://example.com/path"),
            "http://example.com/path"
        );
        assert_eq!(sanitize_url("javascript:alert(1)"), "");
        assert_eq!(sanitize_url("data:text/html,<b>x</b>"), "");
        assert_eq!(sanitize_url("ftp://example.com/file"), "");
    }

    #[test]
    fn test_url_rejects_relative_and_garbage() {
        assert_eq!(sanitize_url("/data/projects/x.json"), "");
        assert_eq!(sanitize_url("not a url"), "");
        assert_eq!(sanitize_url(""), "");
    }
}
