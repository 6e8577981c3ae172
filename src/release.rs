//! Cutting a release: move `Unreleased` content under a new dated heading
//! and update the compare links.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::error::Error;
use crate::select::find_version;
use crate::types::{UNRELEASED, Version};

/// The literal heading a release is cut from.
static UNRELEASED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"## \[Unreleased\]").expect("valid regex"));

/// Rewrite `raw` so the current `Unreleased` changes become `new_version`.
///
/// `## [Unreleased]` gains a fresh empty section above `## [<new_version>] - <date>`.
/// When an `[Unreleased]: <base>/<prefix><x>...HEAD` link exists it is pointed
/// at the new tag and a `[<new_version>]` compare link against the previous
/// release is added beneath it.
///
/// # Errors
///
/// Returns `Error::VersionExists` if `new_version` is already a heading,
/// `Error::NoUnreleasedSection` if there is no `## [Unreleased]` heading,
/// or `Error::NoPreviousRelease` if no released version exists to compare against.
///
/// # Panics
///
/// Panics if the link pattern built from the escaped prefix is invalid (compile-time invariant).
pub fn release(
    raw: &str,
    versions: &[Version],
    new_version: &str,
    date: &str,
    tag_prefix: &str,
) -> Result<String, Error> {
    if find_version(versions, new_version).is_some() {
        return Err(Error::VersionExists {
            label: new_version.to_string(),
        });
    }
    if !UNRELEASED_HEADING.is_match(raw) {
        return Err(Error::NoUnreleasedSection);
    }
    let Some(previous) = versions.iter().find(|v| return !v.is_unreleased()) else {
        return Err(Error::NoPreviousRelease);
    };
    tracing::debug!(previous = %previous.label, new = new_version, "cutting release");

    let prefix = regex::escape(tag_prefix);
    let link = Regex::new(&format!(r"(\[{UNRELEASED}\]:)(.*)(/{prefix}.*HEAD)"))
        .expect("escaped prefix yields a valid regex");

    let output = link.replace_all(raw, |caps: &Captures<'_>| {
        let key = caps.get(1).map_or("", |m| return m.as_str());
        let base = caps.get(2).map_or("", |m| return m.as_str());
        return format!(
            "{key}{base}/{tag_prefix}{new_version}...HEAD\n[{new_version}]:{base}/{tag_prefix}{old}...{new_version}",
            old = previous.label,
        );
    });

    let heading = format!("## [{UNRELEASED}]\n\n## [{new_version}] - {date}");
    let output = UNRELEASED_HEADING.replace_all(&output, NoExpand(&heading));

    return Ok(output.into_owned());
}
