use scraper::{ElementRef, Html, Node};

use super::Sanitizer;

/// Elements whose content is dropped along with the tag itself.
const DROP_CONTENT: &[&str] = &[
    "script", "style", "template", "noscript", "iframe", "noembed", "noframes", "xmp",
    "plaintext", "title", "head", "svg", "math", "object", "audio", "video",
];

/// Strips every tag and attribute, keeping only text content.
///
/// The input is parsed as an HTML body fragment, so entities are decoded and
/// broken markup is recovered the way a browser would. Text is written back
/// HTML-escaped, which keeps the output free of markup and makes a second pass
/// a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupSanitizer;

impl MarkupSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl Sanitizer for MarkupSanitizer {
    fn sanitize(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let fragment = Html::parse_fragment(input);
        let mut text = String::with_capacity(input.len());
        collect_text(fragment.root_element(), &mut text);
        text
    }

    fn name(&self) -> &str {
        "markup"
    }
}

/// Strip markup from `input`. Empty input yields an empty string.
pub fn sanitize_text(input: &str) -> String {
    MarkupSanitizer.sanitize(input)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_escaped(out, text),
            Node::Element(el) if DROP_CONTENT.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            // Comments, doctypes and processing instructions carry no text.
            _ => {}
        }
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
