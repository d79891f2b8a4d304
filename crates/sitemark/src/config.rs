//! Site configuration

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{io_error, Result, SiteError};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "sitemark.toml";

/// Where to read sources from and where to write the site
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory searched recursively for `index.md` files
    pub content_dir: PathBuf,

    /// Directory copied verbatim into the output
    pub static_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,

    /// Output directory; wiped on every build
    pub output_dir: PathBuf,

    /// Prefix for root-relative `href` and `src` values
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            static_dir: PathBuf::from("./static"),
            template: PathBuf::from("./template.html"),
            output_dir: PathBuf::from("./public"),
            base_path: "/".to_string(),
        }
    }
}

/// Values given on the command line; each one that is set replaces the
/// corresponding file value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub content_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub base_path: Option<String>,
}

impl SiteConfig {
    /// Load config from a TOML file, or return defaults if the file does not
    /// exist. A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(io_error(path)(e)),
        };

        toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace file values with every override that is set
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(content_dir) = overrides.content_dir {
            self.content_dir = content_dir;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        if let Some(template) = overrides.template {
            self.template = template;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(base_path) = overrides.base_path {
            self.base_path = base_path;
        }
        self
    }

    /// Base path with exactly one leading and one trailing `/`
    pub fn normalized_base_path(&self) -> String {
        normalize_base_path(&self.base_path)
    }
}

fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("./content"));
        assert_eq!(config.output_dir, PathBuf::from("./public"));
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemark.toml");
        fs::write(&path, "base_path = \"/blog/\"\noutput_dir = \"docs\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.base_path, "/blog/");
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.content_dir, PathBuf::from("./content"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemark.toml");
        fs::write(&path, "base_path = [").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, SiteError::Config { .. }));
    }

    #[test]
    fn test_override_replaces_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemark.toml");
        fs::write(&path, "base_path = \"/blog/\"\noutput_dir = \"docs\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap().with_overrides(ConfigOverrides {
            base_path: Some("/repo/".to_string()),
            output_dir: Some(PathBuf::from("dist")),
            ..Default::default()
        });
        assert_eq!(config.base_path, "/repo/");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_unset_override_keeps_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemark.toml");
        fs::write(&path, "base_path = \"/blog/\"\ncontent_dir = \"pages\"\n").unwrap();

        let loaded = SiteConfig::load(&path).unwrap();
        let config = loaded.clone().with_overrides(ConfigOverrides {
            template: Some(PathBuf::from("layout.html")),
            ..Default::default()
        });
        assert_eq!(config.base_path, "/blog/");
        assert_eq!(config.content_dir, PathBuf::from("pages"));
        assert_eq!(config.template, PathBuf::from("layout.html"));

        assert_eq!(loaded.clone().with_overrides(ConfigOverrides::default()), loaded);
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("blog"), "/blog/");
        assert_eq!(normalize_base_path("/blog"), "/blog/");
        assert_eq!(normalize_base_path("/repo/site/"), "/repo/site/");
    }
}
