//! Command line and environment configuration.
//!
//! Every option can also be set through the environment variable named in its
//! `env` attribute. `GalleryConfig::from_cli` turns raw arguments into a
//! validated config; nothing else in the crate reads arguments or env vars.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::page::PageOptions;
use crate::page::render::{DEFAULT_FADE_PERIOD_MS, DEFAULT_TITLE, DEFAULT_TOGGLE_INTERVAL_MS};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("gallery root {} does not exist", .0.display())]
    RootMissing(PathBuf),
    #[error("gallery root {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("page title must not be empty")]
    EmptyTitle,
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

#[derive(Parser, Debug)]
#[command(
    name = "dataset-gallery",
    about = "Browse remeshing results laid out one folder per dataset"
)]
pub struct Cli {
    /// Directory holding one subfolder per dataset.
    #[arg(long, env = "GALLERY_ROOT", default_value = ".")]
    pub root: PathBuf,

    #[arg(long, env = "GALLERY_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "GALLERY_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Full period of the before/after cross-fade.
    #[arg(
        long,
        env = "GALLERY_FADE_PERIOD_MS",
        default_value_t = DEFAULT_FADE_PERIOD_MS
    )]
    pub fade_period_ms: u64,

    #[arg(
        long,
        env = "GALLERY_TOGGLE_INTERVAL_MS",
        default_value_t = DEFAULT_TOGGLE_INTERVAL_MS
    )]
    pub toggle_interval_ms: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the gallery over HTTP (default).
    Serve,
    /// Render the gallery once to a static HTML file.
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    /// Output file; defaults to `index.html` inside the gallery root.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Dataset shown when the exported page opens.
    #[arg(long)]
    pub select: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Serve,
    Export {
        out: PathBuf,
        select: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub root: PathBuf,
    pub host: String,
    pub port: u16,
    pub page: PageOptions,
    pub mode: Mode,
}

impl GalleryConfig {
    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing or not a directory, the title is
    /// blank, or a timer period is zero.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if !cli.root.exists() {
            return Err(ConfigError::RootMissing(cli.root));
        }
        if !cli.root.is_dir() {
            return Err(ConfigError::RootNotDirectory(cli.root));
        }
        let title = cli.title.trim();
        if title.is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if cli.fade_period_ms == 0 {
            return Err(ConfigError::ZeroInterval("fade period"));
        }
        if cli.toggle_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("toggle interval"));
        }

        let mode = match cli.command.unwrap_or(Command::Serve) {
            Command::Serve => Mode::Serve,
            Command::Export(args) => Mode::Export {
                out: args.out.unwrap_or_else(|| cli.root.join(INDEX_FILE)),
                select: args.select,
            },
        };

        Ok(Self {
            page: PageOptions {
                title: title.to_string(),
                fade_period_ms: cli.fade_period_ms,
                toggle_interval_ms: cli.toggle_interval_ms,
            },
            root: cli.root,
            host: cli.host,
            port: cli.port,
            mode,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
