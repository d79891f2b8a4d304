//! SiteGenerator - the main entry point for building a site.

use std::path::PathBuf;

use crate::assets::copy_static;
use crate::config::SiteConfig;
use crate::generate::generate_pages_recursive;
use crate::template::Template;
use crate::Result;

/// Summary of a finished build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of static files copied
    pub files_copied: usize,

    /// Pages written, in sorted path order
    pub pages: Vec<PathBuf>,
}

/// Builds a site from a [`SiteConfig`]
pub struct SiteGenerator {
    config: SiteConfig,
}

impl SiteGenerator {
    /// Create a SiteGenerator with default config
    pub fn new() -> Self {
        Self {
            config: SiteConfig::default(),
        }
    }

    /// Create a SiteGenerator with custom config
    pub fn with_config(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Get the current config
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get mutable access to config
    pub fn config_mut(&mut self) -> &mut SiteConfig {
        &mut self.config
    }

    /// Wipe the output directory, copy static files, then generate every page.
    pub fn build(&self) -> Result<BuildReport> {
        let config = &self.config;
        let base_path = config.normalized_base_path();

        // Load the template before touching the output directory
        let template = Template::load(&config.template)?;

        let files_copied = copy_static(&config.static_dir, &config.output_dir)?;
        let pages =
            generate_pages_recursive(&config.content_dir, &template, &config.output_dir, &base_path)?;

        tracing::info!(
            pages = pages.len(),
            files = files_copied,
            output = %config.output_dir.display(),
            "site built"
        );

        Ok(BuildReport {
            files_copied,
            pages,
        })
    }
}

impl Default for SiteGenerator {
    fn default() -> Self {
        Self::new()
    }
}
