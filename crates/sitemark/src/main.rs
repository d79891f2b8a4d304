use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitemark::config::DEFAULT_CONFIG_FILE;
use sitemark::{ConfigOverrides, SiteConfig, SiteGenerator};

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(about = "Build a static site from Markdown content")]
struct Cli {
    /// Prefix for root-relative links, e.g. /my-repo/
    base_path: Option<String>,

    /// Config file (defaults to sitemark.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory searched for index.md files
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static directory copied into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template file
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (wiped before each build)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<SiteConfig> {
        let path = self
            .config
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let config = SiteConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?;

        Ok(config.with_overrides(ConfigOverrides {
            content_dir: self.content,
            static_dir: self.static_dir,
            template: self.template,
            output_dir: self.output,
            base_path: self.base_path,
        }))
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    let report = SiteGenerator::with_config(config)
        .build()
        .context("building site")?;

    println!(
        "Generated {} page(s), copied {} static file(s)",
        report.pages.len(),
        report.files_copied
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
