//! Resolving requested labels to versions and the line span they cover.

use std::ops::RangeInclusive;

use crate::error::Error;
use crate::types::Version;

/// Most labels a single request may name: one version or a closed range.
pub const MAX_REQUESTED: usize = 2;

/// Requested versions, resolved, plus the span of body lines they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Resolved versions, in the order they were requested.
    pub resolved: Vec<Version>,
    /// Smallest start line to largest end line across `resolved`.
    pub span: RangeInclusive<usize>,
}

/// Find a version by exact label.
pub fn find_version<'a>(versions: &'a [Version], label: &str) -> Option<&'a Version> {
    return versions.iter().find(|v| return v.label == label);
}

/// Resolve one or two labels against the parsed versions.
///
/// # Errors
///
/// Returns `Error::NoVersionsRequested` for an empty request,
/// `Error::TooManyVersions` for more than two labels,
/// or `Error::VersionNotFound` naming the first label with no match.
pub fn select_versions(labels: &[&str], all: &[Version]) -> Result<Selection, Error> {
    if labels.is_empty() {
        return Err(Error::NoVersionsRequested);
    }
    if labels.len() > MAX_REQUESTED {
        return Err(Error::TooManyVersions { count: labels.len() });
    }

    let mut resolved = Vec::with_capacity(labels.len());
    for label in labels {
        let Some(version) = find_version(all, label) else {
            return Err(Error::VersionNotFound {
                available: all.iter().map(|v| return v.label.clone()).collect(),
                label: (*label).to_string(),
            });
        };
        resolved.push(version.clone());
    }

    let start = resolved.iter().map(|v| return v.start_line).min().unwrap_or(0);
    let end = resolved.iter().map(|v| return v.end_line).max().unwrap_or(0);

    return Ok(Selection { resolved, span: start..=end });
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn sample() -> Vec<Version> {
        return vec![
            Version { end_line: 2, label: "Unreleased".to_string(), start_line: 0 },
            Version { end_line: 5, label: "1.0.0".to_string(), start_line: 3 },
            Version { end_line: 9, label: "0.9.0".to_string(), start_line: 6 },
        ];
    }

    #[test]
    fn single_label_spans_its_window() {
        let selection = select_versions(&["1.0.0"], &sample()).unwrap();
        assert_eq!(selection.span, 3..=5);
        assert_eq!(selection.resolved.len(), 1);
        assert_eq!(selection.resolved[0].label, "1.0.0");
    }

    #[test]
    fn range_spans_both_windows_in_either_order() {
        let forward = select_versions(&["Unreleased", "0.9.0"], &sample()).unwrap();
        let backward = select_versions(&["0.9.0", "Unreleased"], &sample()).unwrap();

        assert_eq!(forward.span, 0..=9);
        assert_eq!(backward.span, 0..=9);
        let labels: Vec<&str> = backward.resolved.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, ["0.9.0", "Unreleased"]);
    }

    #[test]
    fn unknown_label_is_named_in_error() {
        let err = select_versions(&["1.0.0", "9.9.9"], &sample()).unwrap_err();
        match err {
            Error::VersionNotFound { label, available } => {
                assert_eq!(label, "9.9.9");
                assert_eq!(available, ["Unreleased", "1.0.0", "0.9.0"]);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn label_match_is_exact() {
        assert!(select_versions(&["v1.0.0"], &sample()).is_err());
        assert!(select_versions(&["unreleased"], &sample()).is_err());
    }

    #[test]
    fn more_than_two_labels_is_usage_error() {
        let err = select_versions(&["Unreleased", "1.0.0", "0.9.0"], &sample()).unwrap_err();
        assert!(matches!(err, Error::TooManyVersions { count: 3 }));
    }

    #[test]
    fn empty_request_is_usage_error() {
        let err = select_versions(&[], &sample()).unwrap_err();
        assert!(matches!(err, Error::NoVersionsRequested));
    }
}
