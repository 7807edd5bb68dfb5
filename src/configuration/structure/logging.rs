use std::path::PathBuf;

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::project_root::ProjectRoot;
use crate::configuration::{
    traits::ResolvableConfigurationWithContext,
    utilities::replace_placeholders_in_path,
};


fn default_console_output_level_filter() -> String {
    "info".to_string()
}

fn default_log_file_output_level_filter() -> String {
    "debug".to_string()
}


#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub(super) struct UnresolvedLoggingConfiguration {
    #[serde(default = "default_console_output_level_filter")]
    console_output_level_filter: String,

    #[serde(default = "default_log_file_output_level_filter")]
    log_file_output_level_filter: String,

    #[serde(default)]
    log_file_output_directory: Option<String>,
}

impl Default for UnresolvedLoggingConfiguration {
    fn default() -> Self {
        Self {
            console_output_level_filter: default_console_output_level_filter(),
            log_file_output_level_filter: default_log_file_output_level_filter(),
            log_file_output_directory: None,
        }
    }
}

/// Logging configuration (`[logging]` table). Not part of the renderer's key set.
#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    pub console_output_level_filter: String,

    pub log_file_output_level_filter: String,

    /// Directory log files are written to. No log file is written when this is `None`.
    pub log_file_output_directory: Option<PathBuf>,
}

impl ResolvableConfigurationWithContext for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;
    type Context = ProjectRoot;

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved> {
        // Validate the file and console level filters.
        EnvFilter::try_new(&self.console_output_level_filter)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to parse field console_output_level_filter"))?;

        EnvFilter::try_new(&self.log_file_output_level_filter)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to parse field log_file_output_level_filter"))?;


        let log_file_output_directory = self.log_file_output_directory.map(|directory| {
            let directory = replace_placeholders_in_path(directory, context.placeholders_map());
            context.join(directory)
        });


        Ok(Self::Resolved {
            console_output_level_filter: self.console_output_level_filter,
            log_file_output_level_filter: self.log_file_output_level_filter,
            log_file_output_directory,
        })
    }
}

impl LoggingConfiguration {
    pub fn console_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `resolve`.
        EnvFilter::try_new(&self.console_output_level_filter).unwrap()
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `resolve`.
        EnvFilter::try_new(&self.log_file_output_level_filter).unwrap()
    }
}
