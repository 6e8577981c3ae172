use std::fmt::Write as _;

use changelog::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic: what happened and how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::ChangelogNotFound { path } => format!("\
# Error: Changelog Not Found

`{}` does not exist.

## Fix

Pass `--file <path>` or set `path` in `.changelog.toml`.
", path.display()),

        Error::MalformedHeading { line, content } => format!("\
# Error: Malformed Version Heading

Line {} starts a version heading but has no version label:

    {content}

## Fix

Use `## [1.2.3]` or `## [Unreleased]`.
", line.saturating_add(1)),

        Error::VersionNotFound { label, available } => render_version_not_found(label, available),

        Error::TooManyVersions { .. } | Error::NoVersionsRequested => format!("\
# Error: Invalid Version Request

{e}.

## Fix

    changelog get 0.1.1
    changelog get 0.1.1,0.1.2
"),

        Error::VersionExists { label } => format!("\
# Error: Version Exists

`## [{label}]` is already in the changelog.
"),

        Error::NoUnreleasedSection => "\
# Error: Nothing To Release

The changelog has no `## [Unreleased]` heading.
"
        .to_string(),

        Error::NoPreviousRelease => "\
# Error: No Previous Release

A release needs at least one released version to compare against.
"
        .to_string(),

        Error::TomlDe(err) => format!("\
# Error: Invalid Config

`.changelog.toml`: {err}
"),

        Error::Io(err) => format!("\
# Error: I/O

{err}
"),
    }
}

fn render_version_not_found(label: &str, available: &[String]) -> String {
    let mut out = format!("\
# Error: Version Not Found

Requested version ({label}) not found.
");

    if let Some(suggestion) = find_closest_suggestion(label, available) {
        let _ = write!(out, "\n## Did you mean `{suggestion}`?\n\n    changelog get {suggestion}\n");
    } else if !available.is_empty() {
        out.push_str("\n## Available versions\n\n");
        for v in available {
            let _ = writeln!(out, "- `{v}`");
        }
    }

    out
}

/// Find a version label equal to `label` once tag prefixes, brackets and case are ignored.
pub(crate) fn find_closest_suggestion(label: &str, available: &[String]) -> Option<String> {
    let normalized = normalize_label(label);
    available.iter()
        .find(|v| normalize_label(v) == normalized)
        .cloned()
}

/// Strip brackets, a leading `v`, and case for loose label comparison.
fn normalize_label(s: &str) -> String {
    let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
    let lowered = trimmed.to_lowercase();
    match lowered.strip_prefix('v') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest.to_string(),
        _ => lowered,
    }
}
