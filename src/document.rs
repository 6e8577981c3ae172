//! The parsed changelog: raw text, link-free body, and version index together.

use crate::categories::{CategoryMap, merge_categories};
use crate::error::Error;
use crate::links::{ExtractedLinks, LinkDefinition, extract_links};
use crate::select::{Selection, select_versions};
use crate::types::Version;
use crate::versions::index_versions;

/// A changelog parsed once and queried many times.
/// Nothing here is mutated after `parse`.
#[derive(Debug, Clone)]
pub struct Changelog {
    /// Document lines with link definitions blanked out.
    body: Vec<String>,
    /// Link definitions removed from the body.
    definitions: Vec<LinkDefinition>,
    /// All link definitions as one trimmed block.
    links: String,
    /// The document exactly as read.
    raw: String,
    /// Versions in document order.
    versions: Vec<Version>,
}

impl Changelog {
    /// Body lines, link definitions replaced by empty lines.
    pub fn body(&self) -> &[String] {
        return &self.body;
    }

    /// The heading line of `version`, as written.
    pub fn heading(&self, version: &Version) -> &str {
        return self.body.get(version.start_line).map_or("", String::as_str);
    }

    /// Link definitions in document order.
    pub fn link_definitions(&self) -> &[LinkDefinition] {
        return &self.definitions;
    }

    /// All link definitions, one per line.
    pub fn links(&self) -> &str {
        return &self.links;
    }

    /// Category view across the selected versions, in selection order.
    pub fn merged(&self, selection: &Selection) -> CategoryMap {
        return merge_categories(&selection.resolved, &self.body);
    }

    /// Split `raw` into lines, extract links, and index versions.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedHeading` if a `##` heading has no label.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let document: Vec<String> = raw.lines().map(String::from).collect();
        let ExtractedLinks { body, definitions, links } = extract_links(&document);
        let versions = index_versions(&body)?;

        return Ok(Self {
            body,
            definitions,
            links,
            raw: raw.to_string(),
            versions,
        });
    }

    /// The document exactly as read.
    pub fn raw(&self) -> &str {
        return &self.raw;
    }

    /// Resolve one label or a two-label range.
    ///
    /// # Errors
    ///
    /// See [`select_versions`].
    pub fn select(&self, labels: &[&str]) -> Result<Selection, Error> {
        return select_versions(labels, &self.versions);
    }

    /// Body lines covered by `selection`, headings included, joined and trimmed.
    pub fn span_text(&self, selection: &Selection) -> String {
        let lines = self.body.get(selection.span.clone()).unwrap_or(&[]);
        return lines.join("\n").trim().to_string();
    }

    /// Versions in document order. Empty when the document has no headings.
    pub fn versions(&self) -> &[Version] {
        return &self.versions;
    }
}
