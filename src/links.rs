//! Reference-link extraction: pull `[label]: target` lines out of the body
//! so they never interfere with heading detection.

use crate::lexer::classify_line;
use crate::types::LineKind;

/// Result of separating link definitions from body content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLinks {
    /// The document with every link-definition line replaced by an empty line.
    /// Same length as the input, so line indices still line up.
    pub body: Vec<String>,
    /// Each definition found, in document order.
    pub definitions: Vec<LinkDefinition>,
    /// All definition lines joined by newlines, trimmed. Empty when none were found.
    pub links: String,
}

/// One `[label]: target` line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LinkDefinition {
    /// Text between the brackets.
    pub label: String,
    /// Zero-based index of the line in the document.
    pub line: usize,
    /// The definition line as written.
    pub text: String,
}

/// Separate reference-link definitions from the rest of the document.
pub fn extract_links(document: &[String]) -> ExtractedLinks {
    let mut body = Vec::with_capacity(document.len());
    let mut definitions = Vec::new();

    for (line, text) in document.iter().enumerate() {
        match classify_line(text) {
            LineKind::LinkDefinition { label, .. } => {
                definitions.push(LinkDefinition {
                    label,
                    line,
                    text: text.clone(),
                });
                body.push(String::new());
            },
            _ => body.push(text.clone()),
        }
    }

    let links = join_definitions(definitions.iter());
    tracing::debug!(count = definitions.len(), "extracted link definitions");

    return ExtractedLinks { body, definitions, links };
}

/// Join definition lines with newlines and trim the result.
fn join_definitions<'a>(definitions: impl Iterator<Item = &'a LinkDefinition>) -> String {
    return definitions
        .map(|d| return d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();
}

/// Only the definitions whose `[label]` is mentioned in `text`.
/// Labels compare case-insensitively, as Markdown reference labels do.
pub fn referenced_links(definitions: &[LinkDefinition], text: &str) -> String {
    let haystack = text.to_lowercase();
    let used = definitions.iter().filter(|d| {
        let needle = format!("[{}]", d.label.to_lowercase());
        return haystack.contains(&needle);
    });
    return join_definitions(used);
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        return text.lines().map(String::from).collect();
    }

    #[test]
    fn interleaved_definitions_are_blanked_in_place() {
        let doc = lines("# Changelog\n[a]: url1\n## [1.0.0]\n- x\n[b]: url2\n- y");
        let extracted = extract_links(&doc);

        assert_eq!(extracted.links, "[a]: url1\n[b]: url2");
        assert_eq!(extracted.body.len(), doc.len());
        assert_eq!(extracted.body, lines("# Changelog\n\n## [1.0.0]\n- x\n\n- y"));
    }

    #[test]
    fn trailing_link_block_is_collected_in_order() {
        let doc = lines(
            "## [Unreleased]\n- x\n\n[Unreleased]: https://e.com/compare/v1.0.0...HEAD\n\n[1.0.0]: https://e.com/releases/v1.0.0\n",
        );
        let extracted = extract_links(&doc);

        assert_eq!(
            extracted.links,
            "[Unreleased]: https://e.com/compare/v1.0.0...HEAD\n[1.0.0]: https://e.com/releases/v1.0.0"
        );
        let labels: Vec<&str> = extracted.definitions.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Unreleased", "1.0.0"]);
        assert_eq!(extracted.definitions.first().map(|d| d.line), Some(3));
    }

    #[test]
    fn no_definitions_yields_empty_links() {
        let doc = lines("## [1.0.0]\n### Added\n- x");
        let extracted = extract_links(&doc);

        assert!(extracted.links.is_empty());
        assert!(extracted.definitions.is_empty());
        assert_eq!(extracted.body, doc);
    }

    #[test]
    fn referenced_links_keeps_only_mentioned_labels() {
        let doc = lines("[1.0.0]: u1\n[0.9.0]: u2\n[Unreleased]: u3");
        let extracted = extract_links(&doc);

        let text = "## [1.0.0] - 2020-01-01\n## [unreleased]";
        assert_eq!(referenced_links(&extracted.definitions, text), "[1.0.0]: u1\n[Unreleased]: u3");
        assert_eq!(referenced_links(&extracted.definitions, "nothing"), "");
    }
}
