use std::path::{Path, PathBuf};

use changelog::{Error, UNRELEASED};

/// Name of the optional project config file.
pub const CONFIG_FILE: &str = ".changelog.toml";

/// Project configuration loaded from `.changelog.toml`.
/// Every field has a default, so the file itself is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label fetched by `get` when no version is named.
    pub default_version: String,
    /// Changelog location, relative to the config's directory.
    pub path: PathBuf,
    /// Prefix of git tags in compare links, e.g. `v` in `v1.2.0`.
    pub tag_prefix: String,
}

/// Raw TOML structure for `.changelog.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ChangelogTomlConfig {
    /// Overrides `Config::default_version`.
    default_version: Option<String>,
    /// Overrides `Config::path`.
    path: Option<PathBuf>,
    /// Overrides `Config::tag_prefix`.
    tag_prefix: Option<String>,
}

impl Config {
    /// Load config from `.changelog.toml` in the given root directory.
    /// Returns defaults if the file doesn't exist. A file that exists but is
    /// malformed is an error, never a silent fallback.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::rooted_at(root));
            },
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };

        return Self::parse(root, &content);
    }

    /// Parse config content; a relative `path` is resolved against `root`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the TOML is malformed or has unknown keys.
    pub fn parse(root: &Path, content: &str) -> Result<Self, Error> {
        let raw: ChangelogTomlConfig = toml::from_str(content)?;
        let defaults = Self::rooted_at(root);

        return Ok(Self {
            default_version: raw.default_version.unwrap_or(defaults.default_version),
            path: raw.path.map_or(defaults.path, |p| return root.join(p)),
            tag_prefix: raw.tag_prefix.unwrap_or(defaults.tag_prefix),
        });
    }

    /// Defaults with the changelog path resolved against `root`.
    fn rooted_at(root: &Path) -> Self {
        let defaults = Self::default();
        return Self {
            path: root.join(&defaults.path),
            ..defaults
        };
    }
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            default_version: UNRELEASED.to_string(),
            path: PathBuf::from("CHANGELOG.md"),
            tag_prefix: "v".to_string(),
        };
    }
}
