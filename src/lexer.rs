//! Line classification: one pass over the text turns raw lines into typed
//! structural markers before any windowing happens.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::LineKind;

/// `### <free text>`
static CATEGORY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"^###[ \t]+(.*)").expect("valid regex"));

/// `[label]: target`
static LINK_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"^\[([^\]]+)\]:[ \t]+(.*)$").expect("valid regex"));

/// Label extraction for a recognized version heading.
static VERSION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    return Regex::new(r"^##[ \t]+\[?(Unreleased|[^\s\]]+)\]?").expect("valid regex");
});

/// Loose version-heading marker: exactly `##` then whitespace.
static VERSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"^##[ \t]+").expect("valid regex"));

/// Classify one line of a changelog.
///
/// A line that passes the loose `##` marker but fails label extraction is
/// reported as `MalformedHeading` so the indexer can surface it.
pub fn classify_line(line: &str) -> LineKind {
    if VERSION_MARKER.is_match(line) {
        let Some(label) = VERSION_LABEL.captures(line).and_then(|c| return c.get(1)) else {
            return LineKind::MalformedHeading;
        };
        return LineKind::VersionHeading {
            label: label.as_str().to_string(),
        };
    }

    if let Some(caps) = CATEGORY_HEADING.captures(line) {
        let raw = caps.get(1).map_or("", |m| return m.as_str());
        return LineKind::CategoryHeading {
            label: title_case(raw.trim()),
        };
    }

    if let Some(caps) = LINK_DEFINITION.captures(line) {
        let label = caps.get(1).map_or("", |m| return m.as_str());
        let target = caps.get(2).map_or("", |m| return m.as_str());
        return LineKind::LinkDefinition {
            label: label.to_string(),
            target: target.to_string(),
        };
    }

    return LineKind::Plain;
}

/// Upper-case the first letter of every word, leaving the rest untouched.
/// Words are separated by anything that is not alphanumeric or `_`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    return out;
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn heading(label: &str) -> LineKind {
        return LineKind::VersionHeading { label: label.to_string() };
    }

    #[test]
    fn bracketed_version_heading() {
        assert_eq!(classify_line("## [1.0.0] - 2020-01-01"), heading("1.0.0"));
        assert_eq!(classify_line("## [Unreleased]"), heading("Unreleased"));
    }

    #[test]
    fn bare_version_heading() {
        assert_eq!(classify_line("##\t0.3.1 (2021-05-02)"), heading("0.3.1"));
        assert_eq!(classify_line("## Unreleased"), heading("Unreleased"));
    }

    #[test]
    fn heading_needs_whitespace_after_hashes() {
        assert_eq!(classify_line("##1.0.0"), LineKind::Plain);
        assert_eq!(classify_line("# Changelog"), LineKind::Plain);
    }

    #[test]
    fn heading_without_label_is_malformed() {
        assert_eq!(classify_line("##   "), LineKind::MalformedHeading);
        assert_eq!(classify_line("## ]oops"), LineKind::MalformedHeading);
    }

    #[test]
    fn category_heading_is_trimmed_and_title_cased() {
        assert_eq!(
            classify_line("###   added  "),
            LineKind::CategoryHeading { label: "Added".to_string() }
        );
        assert_eq!(
            classify_line("### breaking changes"),
            LineKind::CategoryHeading { label: "Breaking Changes".to_string() }
        );
    }

    #[test]
    fn level_four_heading_is_plain() {
        assert_eq!(classify_line("#### Details"), LineKind::Plain);
    }

    #[test]
    fn link_definition() {
        assert_eq!(
            classify_line("[1.0.0]: https://example.com/compare/v0.9.0...v1.0.0"),
            LineKind::LinkDefinition {
                label: "1.0.0".to_string(),
                target: "https://example.com/compare/v0.9.0...v1.0.0".to_string(),
            }
        );
    }

    #[test]
    fn inline_link_is_not_a_definition() {
        assert_eq!(classify_line("- see [docs](https://example.com)"), LineKind::Plain);
        assert_eq!(classify_line("[]: empty"), LineKind::Plain);
        assert_eq!(classify_line("[a]:no-space"), LineKind::Plain);
    }

    #[test]
    fn title_case_keeps_existing_capitals() {
        assert_eq!(title_case("added"), "Added");
        assert_eq!(title_case("SECURITY"), "SECURITY");
        assert_eq!(title_case("re-added"), "Re-Added");
        assert_eq!(title_case(""), "");
    }
}
