/// Crate-level error types for changelog parsing and queries.
use std::path::PathBuf;

/// Every failure the core can report. Each variant names the line, label, or
/// path involved so the CLI can print a useful diagnostic.
///
/// Finding zero versions is not an error: `index_versions` returns an empty list.
#[allow(clippy::error_impl_error, reason = "crate-level error type re-exported from lib")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The changelog file does not exist on disk.
    #[error("changelog not found: {}", path.display())]
    ChangelogNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// A line starts like a version heading but carries no usable label.
    #[error("malformed version heading on line {}: `{content}`", line.saturating_add(1))]
    MalformedHeading {
        /// The offending heading text.
        content: String,
        /// Zero-based index of the line in the document.
        line: usize,
    },

    /// The document has no released version to compare a new release against.
    #[error("no previous release found to compare against")]
    NoPreviousRelease,

    /// The document has no `## [Unreleased]` heading to cut a release from.
    #[error("no `## [Unreleased]` section found")]
    NoUnreleasedSection,

    /// The caller asked for a range but supplied no labels.
    #[error("no version requested")]
    NoVersionsRequested,

    /// Config file exists but is not valid TOML.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// More than two labels were requested for a range.
    #[error("can only get a single version or a range of two, e.g. 0.1.1 or 0.1.1,0.1.2 (got {count})")]
    TooManyVersions {
        /// Number of labels supplied.
        count: usize,
    },

    /// The release being cut already has a heading in the document.
    #[error("version `{label}` already exists")]
    VersionExists {
        /// The duplicated label.
        label: String,
    },

    /// A requested label matches no parsed version.
    #[error("requested version ({label}) not found")]
    VersionNotFound {
        /// Labels that do exist, in document order.
        available: Vec<String>,
        /// The label that was requested.
        label: String,
    },
}
