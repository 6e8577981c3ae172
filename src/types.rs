/// Core domain types: versions, categories, and classified lines.
use std::ops::RangeInclusive;

/// One heading-delimited section of the changelog.
/// Windows are contiguous and non-overlapping by construction in `index_versions`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Version {
    /// Zero-based index of the last line belonging to this version.
    pub end_line: usize,
    /// Version identifier with surrounding brackets stripped, e.g. `1.2.0` or `Unreleased`.
    pub label: String,
    /// Zero-based index of the heading line.
    pub start_line: usize,
}

impl Version {
    /// Lines after the heading up to the end of the window.
    /// Empty when the heading is the last line of its window.
    pub const fn content_range(&self) -> RangeInclusive<usize> {
        return self.start_line.saturating_add(1)..=self.end_line;
    }

    /// Whether this is the `Unreleased` pseudo-version.
    pub fn is_unreleased(&self) -> bool {
        return self.label == UNRELEASED;
    }

    /// The full window, heading line included.
    pub const fn window(&self) -> RangeInclusive<usize> {
        return self.start_line..=self.end_line;
    }
}

/// A category sub-heading (`### Added`) inside one version's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Title-cased category name.
    pub label: String,
    /// Index of the sub-heading, relative to the first content line of the version.
    pub line: usize,
}

/// Structural classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `### <label>`, label trimmed and title-cased.
    CategoryHeading {
        /// Normalized category name.
        label: String,
    },
    /// `[label]: target` reference-link definition.
    LinkDefinition {
        /// Text between the brackets.
        label: String,
        /// Everything after the colon and separating whitespace.
        target: String,
    },
    /// Starts with `##` and whitespace but has no extractable label.
    MalformedHeading,
    /// Anything else.
    Plain,
    /// `## [label] ...`
    VersionHeading {
        /// Label with brackets stripped.
        label: String,
    },
}

/// Label of the pseudo-version collecting changes not yet released.
pub const UNRELEASED: &str = "Unreleased";
