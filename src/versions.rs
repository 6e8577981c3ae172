//! Version indexing: find `##` headings and turn them into line windows.

use crate::error::Error;
use crate::lexer::classify_line;
use crate::types::{LineKind, Version};
use crate::window::windows_from_markers;

/// Scan body lines for version headings, in document order.
///
/// An empty result means the document has no versions; that is not an error.
///
/// # Errors
///
/// Returns `Error::MalformedHeading` for a `##` line whose label cannot be extracted.
pub fn index_versions(body: &[String]) -> Result<Vec<Version>, Error> {
    let mut markers = Vec::new();
    let mut labels = Vec::new();

    for (line, text) in body.iter().enumerate() {
        match classify_line(text) {
            LineKind::MalformedHeading => {
                return Err(Error::MalformedHeading {
                    content: text.clone(),
                    line,
                });
            },
            LineKind::VersionHeading { label } => {
                tracing::trace!(line, %label, "version heading");
                markers.push(line);
                labels.push(label);
            },
            LineKind::CategoryHeading { .. } | LineKind::LinkDefinition { .. } | LineKind::Plain => {},
        }
    }

    let versions: Vec<Version> = windows_from_markers(&markers, body.len())
        .into_iter()
        .zip(labels)
        .map(|(window, label)| {
            return Version {
                end_line: *window.end(),
                label,
                start_line: *window.start(),
            };
        })
        .collect();

    tracing::debug!(count = versions.len(), lines = body.len(), "indexed versions");
    return Ok(versions);
}
