use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;
use tracing::debug;

pub use self::general::GeneralConfiguration;
use self::general::UnresolvedGeneralConfiguration;
pub use self::html::{HtmlConfiguration, DEFAULT_THEME};
use self::html::UnresolvedHtmlConfiguration;
pub use self::logging::LoggingConfiguration;
use self::logging::UnresolvedLoggingConfiguration;
pub use self::project::ProjectConfiguration;
use self::project::UnresolvedProjectConfiguration;
pub use self::project_root::ProjectRoot;
pub use self::theme_options::{ThemeOptionValue, ThemeOptions, RECOGNIZED_THEME_OPTIONS};
use super::key::{ConfigurationKey, ConfigurationValue};
use super::traits::{ResolvableConfiguration, ResolvableConfigurationWithContext};
use super::utilities::get_default_configuration_file_path;
use crate::error::ConfigurationError;

mod general;
mod html;
mod logging;
mod project;
mod project_root;
mod theme_options;


#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct UnresolvedConfiguration {
    /// Project information.
    project: UnresolvedProjectConfiguration,

    /// General build settings.
    #[serde(default)]
    general: UnresolvedGeneralConfiguration,

    /// HTML output settings.
    #[serde(default)]
    html: UnresolvedHtmlConfiguration,

    /// Logging-related configuration.
    #[serde(default)]
    logging: UnresolvedLoggingConfiguration,
}


/// The entire documentation configuration.
///
/// Constructed once and read-only afterwards: every accessor hands out shared borrows.
#[derive(Debug, Clone)]
pub struct Configuration {
    file_path: Option<PathBuf>,

    project_root: ProjectRoot,

    project: ProjectConfiguration,

    general: GeneralConfiguration,

    html: HtmlConfiguration,

    logging: LoggingConfiguration,
}


impl ResolvableConfigurationWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = (ProjectRoot, Option<PathBuf>);

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved> {
        let (project_root, file_path) = context;

        let project = self
            .project
            .resolve()
            .wrap_err("Failed to resolve project table.")?;

        let general = self
            .general
            .resolve()
            .wrap_err("Failed to resolve general table.")?;

        let html = self
            .html
            .resolve()
            .wrap_err("Failed to resolve html table.")?;

        let logging = self
            .logging
            .resolve(project_root.clone())
            .wrap_err("Failed to resolve logging table.")?;


        Ok(Configuration {
            file_path,
            project_root,
            project,
            general,
            html,
            logging,
        })
    }
}


impl Configuration {
    /// Load the configuration from a specific file path.
    ///
    /// The directory containing the file becomes the project root.
    pub fn load_from_path<S: AsRef<Path>>(configuration_file_path: S) -> Result<Self> {
        let configuration_file_path = dunce::canonicalize(configuration_file_path.as_ref())
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Could not canonicalize configuration file path {}.",
                    configuration_file_path.as_ref().display()
                )
            })?;

        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(&configuration_file_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Could not read configuration file {}.",
                    configuration_file_path.display()
                )
            })?;

        let project_root = ProjectRoot::from_configuration_file_path(&configuration_file_path)?;

        debug!(
            file = %configuration_file_path.display(),
            project_root = %project_root.directory().display(),
            "Parsing configuration file."
        );

        Self::parse_and_resolve(
            &configuration_string,
            &configuration_file_path.display().to_string(),
            project_root,
            Some(configuration_file_path.clone()),
        )
        .wrap_err("Could not load configuration file!")
    }

    /// Load the configuration from the default path
    /// (`./docs.toml`, falling back to `./source/docs.toml`).
    pub fn load_from_default_path() -> Result<Configuration> {
        Configuration::load_from_path(
            get_default_configuration_file_path()
                .wrap_err_with(|| "Could not load configuration file at default path.")?,
        )
    }

    /// Build the configuration from literal TOML text, resolving paths against
    /// `project_root` (used as given, without touching the filesystem).
    pub fn from_toml_str<P>(contents: &str, project_root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        Self::parse_and_resolve(contents, "docs.toml", ProjectRoot::new(project_root), None)
    }

    fn parse_and_resolve(
        contents: &str,
        source_name: &str,
        project_root: ProjectRoot,
        file_path: Option<PathBuf>,
    ) -> Result<Self> {
        // Parse the string into the `UnresolvedConfiguration` structure and then resolve it.
        let unresolved_configuration = toml::from_str::<UnresolvedConfiguration>(contents)
            .map_err(|error| ConfigurationError::from_toml_error(error, source_name, contents))?;

        unresolved_configuration
            .resolve((project_root, file_path))
            .wrap_err("Failed to resolve configuration.")
    }


    /// Reads one configuration value. Unset optional keys yield their documented default.
    pub fn get(&self, key: ConfigurationKey) -> ConfigurationValue<'_> {
        match key {
            ConfigurationKey::ProjectName => ConfigurationValue::Text(&self.project.name),
            ConfigurationKey::CopyrightNotice => ConfigurationValue::Text(&self.project.copyright),
            ConfigurationKey::Authors => ConfigurationValue::List(&self.project.authors),
            ConfigurationKey::Release => {
                ConfigurationValue::OptionalText(self.project.release.as_deref())
            }
            ConfigurationKey::ExtensionList => ConfigurationValue::Set(&self.general.extensions),
            ConfigurationKey::TemplateSearchPaths => {
                ConfigurationValue::Set(&self.general.templates_path)
            }
            ConfigurationKey::StaticAssetPaths => ConfigurationValue::Set(&self.html.static_path),
            ConfigurationKey::ExcludedPatterns => {
                ConfigurationValue::Set(&self.general.exclude_patterns)
            }
            ConfigurationKey::ThemeName => ConfigurationValue::Text(&self.html.theme),
            ConfigurationKey::LogoPath => ConfigurationValue::OptionalText(self.html.logo.as_deref()),
            ConfigurationKey::FaviconPath => {
                ConfigurationValue::OptionalText(self.html.favicon.as_deref())
            }
            ConfigurationKey::SidebarLayout => ConfigurationValue::SidebarLayout(&self.html.sidebars),
            ConfigurationKey::ThemeOptions => {
                ConfigurationValue::ThemeOptions(&self.html.theme_options)
            }
        }
    }

    /// Reads one configuration value by its attribute name (`static_asset_paths`)
    /// or the renderer's name for it (`html_static_path`).
    pub fn get_by_name(&self, key: &str) -> Result<ConfigurationValue<'_>, ConfigurationError> {
        Ok(self.get(key.parse()?))
    }

    /// Every key with its value, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigurationKey, ConfigurationValue<'_>)> {
        ConfigurationKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }


    /// The file this configuration was loaded from, if it was loaded from a file.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn project_root(&self) -> &ProjectRoot {
        &self.project_root
    }

    pub fn project(&self) -> &ProjectConfiguration {
        &self.project
    }

    pub fn general(&self) -> &GeneralConfiguration {
        &self.general
    }

    pub fn html(&self) -> &HtmlConfiguration {
        &self.html
    }

    pub fn logging(&self) -> &LoggingConfiguration {
        &self.logging
    }


    /// Joins a project-relative path onto the project root.
    pub fn resolve_path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.project_root.join(relative_path)
    }

    pub fn absolute_template_search_paths(&self) -> Vec<PathBuf> {
        self.general
            .templates_path
            .iter()
            .map(|path| self.resolve_path(path))
            .collect()
    }

    pub fn absolute_static_asset_paths(&self) -> Vec<PathBuf> {
        self.html
            .static_path
            .iter()
            .map(|path| self.resolve_path(path))
            .collect()
    }

    pub fn absolute_logo_path(&self) -> Option<PathBuf> {
        self.html.logo.as_ref().map(|path| self.resolve_path(path))
    }

    pub fn absolute_favicon_path(&self) -> Option<PathBuf> {
        self.html.favicon.as_ref().map(|path| self.resolve_path(path))
    }


    /// Sidebar widgets for a document name, see [`HtmlConfiguration::sidebar_for`].
    pub fn sidebar_for(&self, document_name: &str) -> Option<&[String]> {
        self.html.sidebar_for(document_name)
    }

    /// Whether a project-relative source path matches one of the exclusion patterns.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.general.is_excluded(path)
    }
}
