//! The key set of the documentation configuration and a borrowed view of its values.

use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Serialize;

use super::ThemeOptions;
use crate::error::ConfigurationError;


/// Every attribute of the configuration that the renderer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigurationKey {
    ProjectName,
    CopyrightNotice,
    Authors,
    Release,
    ExtensionList,
    TemplateSearchPaths,
    StaticAssetPaths,
    ExcludedPatterns,
    ThemeName,
    LogoPath,
    FaviconPath,
    SidebarLayout,
    ThemeOptions,
}

impl ConfigurationKey {
    pub const ALL: [ConfigurationKey; 13] = [
        ConfigurationKey::ProjectName,
        ConfigurationKey::CopyrightNotice,
        ConfigurationKey::Authors,
        ConfigurationKey::Release,
        ConfigurationKey::ExtensionList,
        ConfigurationKey::TemplateSearchPaths,
        ConfigurationKey::StaticAssetPaths,
        ConfigurationKey::ExcludedPatterns,
        ConfigurationKey::ThemeName,
        ConfigurationKey::LogoPath,
        ConfigurationKey::FaviconPath,
        ConfigurationKey::SidebarLayout,
        ConfigurationKey::ThemeOptions,
    ];

    /// The descriptor attribute name, e.g. `static_asset_paths`.
    pub const fn name(self) -> &'static str {
        match self {
            ConfigurationKey::ProjectName => "project_name",
            ConfigurationKey::CopyrightNotice => "copyright_notice",
            ConfigurationKey::Authors => "authors",
            ConfigurationKey::Release => "release",
            ConfigurationKey::ExtensionList => "extension_list",
            ConfigurationKey::TemplateSearchPaths => "template_search_paths",
            ConfigurationKey::StaticAssetPaths => "static_asset_paths",
            ConfigurationKey::ExcludedPatterns => "excluded_patterns",
            ConfigurationKey::ThemeName => "theme_name",
            ConfigurationKey::LogoPath => "logo_path",
            ConfigurationKey::FaviconPath => "favicon_path",
            ConfigurationKey::SidebarLayout => "sidebar_layout",
            ConfigurationKey::ThemeOptions => "theme_options",
        }
    }

    /// The name the renderer itself uses for this setting, e.g. `html_static_path`.
    pub const fn native_name(self) -> &'static str {
        match self {
            ConfigurationKey::ProjectName => "project",
            ConfigurationKey::CopyrightNotice => "copyright",
            ConfigurationKey::Authors => "author",
            ConfigurationKey::Release => "release",
            ConfigurationKey::ExtensionList => "extensions",
            ConfigurationKey::TemplateSearchPaths => "templates_path",
            ConfigurationKey::StaticAssetPaths => "html_static_path",
            ConfigurationKey::ExcludedPatterns => "exclude_patterns",
            ConfigurationKey::ThemeName => "html_theme",
            ConfigurationKey::LogoPath => "html_logo",
            ConfigurationKey::FaviconPath => "html_favicon",
            ConfigurationKey::SidebarLayout => "html_sidebars",
            ConfigurationKey::ThemeOptions => "html_theme_options",
        }
    }
}

impl Display for ConfigurationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigurationKey {
    type Err = ConfigurationError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        ConfigurationKey::ALL
            .into_iter()
            .find(|candidate| candidate.name() == key || candidate.native_name() == key)
            .ok_or_else(|| ConfigurationError::UnrecognizedKey {
                key: key.to_string(),
                recognized: ConfigurationKey::ALL
                    .iter()
                    .map(|candidate| candidate.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}


/// A borrowed view of one configuration value, as returned by
/// [`Configuration::get`][super::Configuration::get].
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum ConfigurationValue<'a> {
    Text(&'a str),
    OptionalText(Option<&'a str>),
    List(&'a [String]),
    Set(&'a BTreeSet<String>),
    SidebarLayout(&'a IndexMap<String, Vec<String>>),
    ThemeOptions(&'a ThemeOptions),
}

impl<'a> ConfigurationValue<'a> {
    /// Returns the text of a plain or optional text value.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            ConfigurationValue::Text(text) => Some(text),
            ConfigurationValue::OptionalText(text) => text,
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [String]> {
        match *self {
            ConfigurationValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&'a BTreeSet<String>> {
        match *self {
            ConfigurationValue::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_sidebar_layout(&self) -> Option<&'a IndexMap<String, Vec<String>>> {
        match *self {
            ConfigurationValue::SidebarLayout(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn as_theme_options(&self) -> Option<&'a ThemeOptions> {
        match *self {
            ConfigurationValue::ThemeOptions(options) => Some(options),
            _ => None,
        }
    }

    /// `true` for an optional value that is not configured.
    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigurationValue::OptionalText(None))
    }
}
