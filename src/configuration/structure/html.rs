use std::collections::BTreeSet;

use indexmap::IndexMap;
use miette::{Context, Result};
use serde::Deserialize;

use super::theme_options::ThemeOptions;
use crate::{configuration::traits::ResolvableConfiguration, patterns::SidebarMatcher};


/// Theme used when the configuration does not name one.
pub const DEFAULT_THEME: &str = "alabaster";


#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields, default)]
pub(super) struct UnresolvedHtmlConfiguration {
    theme: String,

    static_path: BTreeSet<String>,

    logo: Option<String>,

    favicon: Option<String>,

    sidebars: IndexMap<String, Vec<String>>,

    theme_options: ThemeOptions,
}

impl Default for UnresolvedHtmlConfiguration {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            static_path: BTreeSet::new(),
            logo: None,
            favicon: None,
            sidebars: IndexMap::new(),
            theme_options: ThemeOptions::default(),
        }
    }
}


/// HTML output configuration (`[html]` table).
#[derive(Clone, Debug)]
pub struct HtmlConfiguration {
    /// Name of the presentation theme. Passed through unchecked.
    pub theme: String,

    /// Directories (relative to the project root) copied into the output as static assets.
    pub static_path: BTreeSet<String>,

    /// Logo image path, relative to the project root.
    pub logo: Option<String>,

    /// Favicon path, relative to the project root.
    pub favicon: Option<String>,

    /// Document-name patterns mapped to the sidebar widgets shown on matching pages,
    /// in the order they were written.
    pub sidebars: IndexMap<String, Vec<String>>,

    pub theme_options: ThemeOptions,

    sidebar_matcher: SidebarMatcher,
}

impl ResolvableConfiguration for UnresolvedHtmlConfiguration {
    type Resolved = HtmlConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        let sidebar_matcher =
            SidebarMatcher::new(&self.sidebars).wrap_err("Failed to resolve sidebars.")?;

        Ok(HtmlConfiguration {
            theme: self.theme,
            static_path: self.static_path,
            logo: self.logo,
            favicon: self.favicon,
            sidebars: self.sidebars,
            theme_options: self.theme_options,
            sidebar_matcher,
        })
    }
}

impl HtmlConfiguration {
    /// Sidebar widgets for a document name (e.g. `labs/intro`), or `None` if no
    /// sidebar pattern matches it.
    pub fn sidebar_for(&self, document_name: &str) -> Option<&[String]> {
        self.sidebar_matcher.widgets_for(document_name)
    }
}
