//! Turning query results into terminal text or JSON.

use changelog::{CategoryMap, Changelog, Selection};
use serde::Serialize;

/// How `get` lays out the selected versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GetFormat {
    /// Grouped by category across versions.
    Merged,
    /// The selected lines as written, headings included.
    Raw,
}

/// How `list` prints each version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    /// The full heading line.
    Markdown,
    /// Just the label.
    Raw,
}

// ── Text output ───────────────────────────────────────────────────────

/// One line per version, in document order.
pub fn list(changelog: &Changelog, format: ListFormat) -> String {
    let mut out = String::new();
    for version in changelog.versions() {
        let line = match format {
            ListFormat::Markdown => changelog.heading(version),
            ListFormat::Raw => version.label.as_str(),
        };
        out.push_str(line);
        out.push('\n');
    }
    return out;
}

/// `## <Category>` sections for every category that has content.
pub fn merged(categories: &CategoryMap) -> String {
    let mut out = String::new();
    for (label, blocks) in categories.non_empty() {
        out.push_str("## ");
        out.push_str(label);
        out.push('\n');
        out.push_str(&blocks.join("\n"));
        out.push('\n');
    }
    return out;
}

/// The selected span as written.
pub fn raw(changelog: &Changelog, selection: &Selection) -> String {
    let mut out = changelog.span_text(selection);
    out.push('\n');
    return out;
}

/// Append the link block after a blank line, if there is one.
pub fn with_links(mut body: String, links: &str) -> String {
    if !links.is_empty() {
        body.push('\n');
        body.push_str(links);
        body.push('\n');
    }
    return body;
}

// ── JSON output ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct VersionJson<'a> {
    end_line: usize,
    heading: &'a str,
    label: &'a str,
    start_line: usize,
}

#[derive(Serialize)]
struct GetJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<&'a CategoryMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    links: &'a str,
    versions: Vec<&'a str>,
}

/// Every version with its line window and heading.
pub fn list_json(changelog: &Changelog) -> String {
    let versions: Vec<VersionJson<'_>> = changelog
        .versions()
        .iter()
        .map(|v| VersionJson {
            end_line: v.end_line,
            heading: changelog.heading(v),
            label: &v.label,
            start_line: v.start_line,
        })
        .collect();

    // serde_json::to_string_pretty won't fail on this structure.
    serde_json::to_string_pretty(&versions).unwrap_or_default()
}

/// The selection as raw text or as a category map.
pub fn get_json(
    changelog: &Changelog,
    selection: &Selection,
    categories: Option<&CategoryMap>,
    links: &str,
) -> String {
    let info = GetJson {
        categories,
        content: categories.is_none().then(|| changelog.span_text(selection)),
        links,
        versions: selection.resolved.iter().map(|v| v.label.as_str()).collect(),
    };

    serde_json::to_string_pretty(&info).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Changelog

## [Unreleased]
### Added
- x

## [1.0.0] - 2020-01-01
### Added
- a
### Fixed
- y

[1.0.0]: https://e.com/v1.0.0
";

    #[test]
    fn list_raw_and_markdown() {
        let changelog = Changelog::parse(DOC).unwrap();
        assert_eq!(list(&changelog, ListFormat::Raw), "Unreleased\n1.0.0\n");
        assert_eq!(
            list(&changelog, ListFormat::Markdown),
            "## [Unreleased]\n## [1.0.0] - 2020-01-01\n"
        );
    }

    #[test]
    fn merged_skips_empty_categories() {
        let changelog = Changelog::parse(DOC).unwrap();
        let selection = changelog.select(&["Unreleased", "1.0.0"]).unwrap();
        let out = merged(&changelog.merged(&selection));
        assert_eq!(out, "## Added\n- x\n- a\n## Fixed\n- y\n");
    }

    #[test]
    fn raw_with_links() {
        let changelog = Changelog::parse(DOC).unwrap();
        let selection = changelog.select(&["1.0.0"]).unwrap();
        let out = with_links(raw(&changelog, &selection), changelog.links());
        assert_eq!(
            out,
            "## [1.0.0] - 2020-01-01\n### Added\n- a\n### Fixed\n- y\n\n[1.0.0]: https://e.com/v1.0.0\n"
        );
    }

    #[test]
    fn no_links_adds_nothing() {
        assert_eq!(with_links("body\n".to_string(), ""), "body\n");
    }

    #[test]
    fn get_json_merged_has_categories_not_content() {
        let changelog = Changelog::parse(DOC).unwrap();
        let selection = changelog.select(&["1.0.0"]).unwrap();
        let categories = changelog.merged(&selection);
        let json: serde_json::Value =
            serde_json::from_str(&get_json(&changelog, &selection, Some(&categories), "")).unwrap();

        assert_eq!(json["versions"], serde_json::json!(["1.0.0"]));
        assert_eq!(json["categories"]["Fixed"], serde_json::json!(["- y"]));
        assert!(json.get("content").is_none());
    }

    #[test]
    fn list_json_has_windows() {
        let changelog = Changelog::parse(DOC).unwrap();
        let json: serde_json::Value = serde_json::from_str(&list_json(&changelog)).unwrap();
        assert_eq!(json[0]["label"], "Unreleased");
        assert_eq!(json[0]["start_line"], 2);
        assert_eq!(json[1]["end_line"], 12);
    }
}
