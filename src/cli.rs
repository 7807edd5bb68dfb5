//! Command-line interface definitions for the `docs-descriptor` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};


/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "docs-descriptor",
    author,
    about = "Loads a documentation build configuration and answers questions about it.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, `./docs.toml` and then `./source/docs.toml` are tried.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        global = true,
        help = "Path to the configuration file to use. Defaults to ./docs.toml or ./source/docs.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CLICommand,
}


#[derive(Subcommand)]
pub enum CLICommand {
    /// Print a human-readable summary of the configuration.
    Show,

    /// Print a single configuration value as JSON.
    Get {
        #[arg(help = "Attribute name (e.g. static_asset_paths) or renderer name (e.g. html_static_path).")]
        key: String,
    },

    /// Print every configuration value.
    Export {
        #[arg(long = "format", value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Print the sidebar widgets selected for a document.
    Sidebar {
        #[arg(help = "Document name without extension, e.g. labs/intro.")]
        document: String,
    },

    /// Report whether a project-relative source path is excluded.
    Excluded {
        #[arg(help = "Source path relative to the project root, e.g. _build/index.md.")]
        path: String,
    },

    /// Print the absolute form of every configured path.
    Paths,
}


#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
}
