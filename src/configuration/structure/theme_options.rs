use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


pub const NAV_TITLE: &str = "nav_title";
pub const BASE_URL: &str = "base_url";
pub const THEME_COLOR: &str = "theme_color";
pub const GLOBALTOC_DEPTH: &str = "globaltoc_depth";
pub const GLOBALTOC_COLLAPSE: &str = "globaltoc_collapse";
pub const GLOBALTOC_INCLUDEHIDDEN: &str = "globaltoc_includehidden";

/// Theme option names with a typed representation.
pub const RECOGNIZED_THEME_OPTIONS: [&str; 6] = [
    NAV_TITLE,
    BASE_URL,
    THEME_COLOR,
    GLOBALTOC_DEPTH,
    GLOBALTOC_COLLAPSE,
    GLOBALTOC_INCLUDEHIDDEN,
];


fn default_globaltoc_depth() -> i64 {
    1
}

fn default_true() -> bool {
    true
}


/// Options passed to the selected theme (`[html.theme_options]` table).
///
/// Options listed in [`RECOGNIZED_THEME_OPTIONS`] are typed. Any other option is
/// theme-specific and kept verbatim in [`additional`][Self::additional].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ThemeOptions {
    /// Project name shown in the navigation bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_title: Option<String>,

    /// Base URL of the deployed site. Without it no sitemap is generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Primary color as a hex string, e.g. `3E74FF`. Passed through unchecked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    /// Visible levels of the global table of contents; negative means unlimited.
    #[serde(default = "default_globaltoc_depth")]
    pub globaltoc_depth: i64,

    /// If `false`, all table of contents entries are expanded.
    #[serde(default = "default_true")]
    pub globaltoc_collapse: bool,

    /// If `true`, hidden table of contents entries are shown.
    #[serde(default = "default_true")]
    pub globaltoc_includehidden: bool,

    /// Theme-specific options without a typed representation.
    #[serde(flatten)]
    pub additional: BTreeMap<String, toml::Value>,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            nav_title: None,
            base_url: None,
            theme_color: None,
            globaltoc_depth: default_globaltoc_depth(),
            globaltoc_collapse: true,
            globaltoc_includehidden: true,
            additional: BTreeMap::new(),
        }
    }
}


/// A borrowed view of a single theme option value.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum ThemeOptionValue<'a> {
    Text(&'a str),
    Integer(i64),
    Boolean(bool),
    Other(&'a toml::Value),
}

impl ThemeOptions {
    /// Reads a theme option by name.
    ///
    /// Unset optional options (`nav_title`, `base_url`, `theme_color`) and unknown
    /// names return `None`.
    pub fn get(&self, option_name: &str) -> Option<ThemeOptionValue<'_>> {
        match option_name {
            NAV_TITLE => self.nav_title.as_deref().map(ThemeOptionValue::Text),
            BASE_URL => self.base_url.as_deref().map(ThemeOptionValue::Text),
            THEME_COLOR => self.theme_color.as_deref().map(ThemeOptionValue::Text),
            GLOBALTOC_DEPTH => Some(ThemeOptionValue::Integer(self.globaltoc_depth)),
            GLOBALTOC_COLLAPSE => Some(ThemeOptionValue::Boolean(self.globaltoc_collapse)),
            GLOBALTOC_INCLUDEHIDDEN => {
                Some(ThemeOptionValue::Boolean(self.globaltoc_includehidden))
            }
            other => self.additional.get(other).map(ThemeOptionValue::Other),
        }
    }

    /// The global table of contents depth, or `None` when it is unlimited.
    pub fn globaltoc_depth_limit(&self) -> Option<u32> {
        u32::try_from(self.globaltoc_depth).ok()
    }
}
