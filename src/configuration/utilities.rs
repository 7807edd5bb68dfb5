use std::{collections::HashMap, env::current_dir, path::PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};

use crate::error::ConfigurationError;


/// File names probed (relative to the current directory) when no configuration
/// file path is given explicitly.
pub const DEFAULT_CONFIGURATION_FILE_CANDIDATES: [&str; 2] = ["docs.toml", "source/docs.toml"];


/// Returns the default configuration file path: the first of
/// `{current directory}/docs.toml` and `{current directory}/source/docs.toml` that exists.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    let current_directory = current_dir()
        .into_diagnostic()
        .wrap_err_with(|| miette!("Could not get the current directory."))?;

    let candidates: Vec<PathBuf> = DEFAULT_CONFIGURATION_FILE_CANDIDATES
        .iter()
        .map(|candidate| current_directory.join(candidate))
        .collect();

    match candidates.iter().find(|candidate| candidate.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(ConfigurationError::ConfigurationFileNotFound { candidates }.into()),
    }
}

#[must_use = "function returns the modified path"]
pub fn replace_placeholders_in_path<S>(
    original_path: S,
    placeholders: HashMap<&'static str, String>,
) -> PathBuf
where
    S: Into<String>,
{
    let mut path_string: String = original_path.into();

    for (key, value) in placeholders.into_iter() {
        path_string = path_string.replace(key, &value);
    }

    PathBuf::from(path_string)
}
