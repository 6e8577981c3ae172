//! Category merging: regroup version content by `###` sub-heading across a
//! set of versions.

use serde::ser::SerializeMap as _;

use crate::lexer::classify_line;
use crate::types::{ContentType, LineKind, Version};
use crate::window::windows_from_markers;

/// Categories defined by Keep a Changelog, in the order they are reported.
pub const CANONICAL_CATEGORIES: [&str; 6] =
    ["Added", "Changed", "Deprecated", "Removed", "Fixed", "Security"];

/// Insertion-ordered mapping from category label to content blocks.
///
/// The canonical categories are always present, first and in fixed order,
/// even when empty. Other labels follow in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    /// Label and blocks, one block per contributing version.
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryMap {
    /// Append a block under `label`, creating the entry if it is new.
    fn append(&mut self, label: &str, block: String) {
        if let Some((_, blocks)) = self.entries.iter_mut().find(|(l, _)| return l == label) {
            blocks.push(block);
            return;
        }
        self.entries.push((label.to_string(), vec![block]));
    }

    /// Blocks recorded for `label`, if the label is known.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        return self
            .entries
            .iter()
            .find(|(l, _)| return l == label)
            .map(|(_, blocks)| return blocks.as_slice());
    }

    /// Whether no category received any content.
    pub fn is_empty(&self) -> bool {
        return self.entries.iter().all(|(_, blocks)| return blocks.is_empty());
    }

    /// Every label with its blocks, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        return self
            .entries
            .iter()
            .map(|(label, blocks)| return (label.as_str(), blocks.as_slice()));
    }

    /// Every label, in report order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        return self.entries.iter().map(|(label, _)| return label.as_str());
    }

    /// The canonical scaffold with no content.
    pub fn new() -> Self {
        let entries = CANONICAL_CATEGORIES
            .iter()
            .map(|label| return ((*label).to_string(), Vec::new()))
            .collect();
        return Self { entries };
    }

    /// Only the categories that received at least one block.
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &[String])> {
        return self.iter().filter(|(_, blocks)| return !blocks.is_empty());
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        return Self::new();
    }
}

impl serde::Serialize for CategoryMap {
    /// Serialize as a map, preserving report order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, blocks) in &self.entries {
            map.serialize_entry(label, blocks)?;
        }
        return map.end();
    }
}

/// Merge category content across `requested`, in the order given.
///
/// Versions are not re-sorted by date or semver; document or caller order is kept.
pub fn merge_categories(requested: &[Version], body: &[String]) -> CategoryMap {
    let mut merged = CategoryMap::new();

    for version in requested {
        for (label, block) in version_blocks(version, body) {
            merged.append(&label, block);
        }
    }

    tracing::debug!(
        versions = requested.len(),
        categories = merged.entries.len(),
        "merged categories"
    );
    return merged;
}

/// Find `###` sub-headings in a version's content lines.
/// Line numbers are relative to the first content line.
pub fn scan_categories(content: &[String]) -> Vec<ContentType> {
    return content
        .iter()
        .enumerate()
        .filter_map(|(line, text)| {
            return match classify_line(text) {
                LineKind::CategoryHeading { label } => Some(ContentType { label, line }),
                LineKind::LinkDefinition { .. }
                | LineKind::MalformedHeading
                | LineKind::Plain
                | LineKind::VersionHeading { .. } => None,
            };
        })
        .collect();
}

/// Slice one version into `(category, block)` pairs, in document order.
/// Each block excludes its sub-heading and is trimmed. Lines before the
/// first sub-heading are not part of any category.
pub fn version_blocks(version: &Version, body: &[String]) -> Vec<(String, String)> {
    let content = body.get(version.content_range()).unwrap_or(&[]);
    let categories = scan_categories(content);
    let markers: Vec<usize> = categories.iter().map(|c| return c.line).collect();

    return categories
        .into_iter()
        .zip(windows_from_markers(&markers, content.len()))
        .map(|(category, window)| {
            let lines = content
                .get(window.start().saturating_add(1)..=*window.end())
                .unwrap_or(&[]);
            let block = lines.join("\n").trim().to_string();
            return (category.label, block);
        })
        .collect();
}
