//! CLI commands: list, get, release.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use changelog::links::referenced_links;
use changelog::{Changelog, Error};
use chrono::NaiveDate;

use crate::config::Config;
use crate::render::{self, GetFormat, ListFormat};

/// Options shared by every command.
pub struct Context {
    /// Changelog path given on the command line, overriding the config.
    pub file: Option<PathBuf>,
    /// Directory holding `.changelog.toml`.
    pub root: PathBuf,
}

/// Print the selected versions, raw or merged by category.
///
/// With no labels, fetches the configured default version (`Unreleased`).
///
/// # Errors
///
/// Returns errors from loading or parsing the changelog, and
/// `Error::VersionNotFound` / `Error::TooManyVersions` for bad requests.
pub fn get(
    ctx: &Context,
    labels: &[String],
    format: GetFormat,
    json: bool,
    referenced_only: bool,
) -> Result<ExitCode, Error> {
    let (config, changelog) = load(ctx)?;
    if changelog.versions().is_empty() {
        return Ok(report_nothing_to_do());
    }

    let requested: Vec<&str> = if labels.is_empty() {
        vec![config.default_version.as_str()]
    } else {
        labels.iter().map(|l| return l.trim()).collect()
    };
    let selection = changelog.select(&requested)?;

    let categories = match format {
        GetFormat::Merged => Some(changelog.merged(&selection)),
        GetFormat::Raw => None,
    };
    let printed = match &categories {
        Some(map) => render::merged(map),
        None => render::raw(&changelog, &selection),
    };
    let links = if referenced_only {
        referenced_links(changelog.link_definitions(), &printed)
    } else {
        changelog.links().to_string()
    };

    if json {
        println!("{}", render::get_json(&changelog, &selection, categories.as_ref(), &links));
    } else {
        print!("{}", render::with_links(printed, &links));
    }
    return Ok(ExitCode::SUCCESS);
}

/// Print every version in document order.
///
/// # Errors
///
/// Returns errors from loading or parsing the changelog.
pub fn list(ctx: &Context, format: ListFormat, json: bool) -> Result<ExitCode, Error> {
    let (_, changelog) = load(ctx)?;
    if changelog.versions().is_empty() {
        return Ok(report_nothing_to_do());
    }

    if json {
        println!("{}", render::list_json(&changelog));
    } else {
        print!("{}", render::list(&changelog, format));
    }
    return Ok(ExitCode::SUCCESS);
}

/// Read config and the changelog it points at.
///
/// # Errors
///
/// Returns `Error::ChangelogNotFound` if the file is missing,
/// `Error::Io` / `Error::TomlDe` from config loading,
/// or `Error::MalformedHeading` from parsing.
fn load(ctx: &Context) -> Result<(Config, Changelog), Error> {
    let config = Config::load(&ctx.root)?;
    let path = ctx.file.clone().unwrap_or_else(|| return config.path.clone());
    let raw = read_changelog(&path)?;
    let changelog = Changelog::parse(&raw)?;
    tracing::info!(
        path = %path.display(),
        versions = changelog.versions().len(),
        "loaded changelog"
    );
    return Ok((config, changelog));
}

/// Read the changelog, mapping a missing file to its own error.
///
/// # Errors
///
/// Returns `Error::ChangelogNotFound` or `Error::Io`.
fn read_changelog(path: &Path) -> Result<String, Error> {
    return match std::fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::ChangelogNotFound { path: path.to_path_buf() })
        },
        Err(e) => Err(Error::Io(e)),
        Ok(c) => Ok(c),
    };
}

/// Cut a release from `Unreleased`, printing the result or writing it back.
///
/// # Errors
///
/// Returns errors from loading the changelog, from the rewrite itself
/// (`Error::VersionExists`, `Error::NoUnreleasedSection`, `Error::NoPreviousRelease`),
/// or `Error::Io` when writing.
pub fn release(
    ctx: &Context,
    version: &str,
    date: Option<NaiveDate>,
    write: bool,
) -> Result<ExitCode, Error> {
    let (config, changelog) = load(ctx)?;
    if changelog.versions().is_empty() {
        return Ok(report_nothing_to_do());
    }

    let date = date.unwrap_or_else(|| return chrono::Local::now().date_naive());
    let output = changelog::release::release(
        changelog.raw(),
        changelog.versions(),
        version,
        &date.format("%Y-%m-%d").to_string(),
        &config.tag_prefix,
    )?;

    if write {
        let path = ctx.file.clone().unwrap_or(config.path);
        std::fs::write(&path, output)?;
        eprintln!("Released {version} in {}", path.display());
    } else {
        print!("{output}");
    }
    return Ok(ExitCode::SUCCESS);
}

/// An empty changelog is not a failure, just nothing to do.
fn report_nothing_to_do() -> ExitCode {
    eprintln!("No versions found. Nothing to do here!");
    return ExitCode::SUCCESS;
}
