use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;


/// Errors raised while loading or reading a documentation configuration.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigurationError {
    /// The configuration file is not valid TOML, a key holds a value of the wrong type,
    /// or an unrecognized key appears in one of the strongly typed tables.
    #[error("Malformed configuration: {message}")]
    #[diagnostic(
        code(docs_descriptor::malformed_configuration),
        help("Check the key names and value types against the documented configuration layout.")
    )]
    MalformedConfiguration {
        message: String,

        #[source_code]
        source_code: NamedSource<String>,

        #[label("here")]
        span: Option<SourceSpan>,
    },

    /// A string key does not name any configuration attribute.
    #[error("Unrecognized configuration key: {key}")]
    #[diagnostic(
        code(docs_descriptor::unrecognized_key),
        help("Recognized keys are: {recognized}")
    )]
    UnrecognizedKey { key: String, recognized: String },

    #[error("Could not find a configuration file (tried: {})", format_candidates(.candidates))]
    #[diagnostic(
        code(docs_descriptor::configuration_file_not_found),
        help("Pass a path explicitly with --configuration-file-path.")
    )]
    ConfigurationFileNotFound { candidates: Vec<PathBuf> },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|candidate| candidate.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigurationError {
    pub(crate) fn from_toml_error<N>(error: toml::de::Error, source_name: N, contents: &str) -> Self
    where
        N: AsRef<str>,
    {
        Self::MalformedConfiguration {
            message: error.message().to_string(),
            source_code: NamedSource::new(source_name, contents.to_string()),
            span: error.span().map(SourceSpan::from),
        }
    }
}
