use std::collections::BTreeSet;

use miette::{Context, Result};
use serde::Deserialize;

use crate::{configuration::traits::ResolvableConfiguration, patterns::ExclusionMatcher};


#[derive(Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields, default)]
pub(super) struct UnresolvedGeneralConfiguration {
    extensions: BTreeSet<String>,

    templates_path: BTreeSet<String>,

    exclude_patterns: BTreeSet<String>,
}

/// General build configuration (`[general]` table).
#[derive(Clone, Debug)]
pub struct GeneralConfiguration {
    /// Renderer plugins to activate. Names are passed through unchecked.
    pub extensions: BTreeSet<String>,

    /// Directories (relative to the project root) searched for templates.
    pub templates_path: BTreeSet<String>,

    /// Glob patterns of source paths the renderer should skip.
    pub exclude_patterns: BTreeSet<String>,

    exclusion_matcher: ExclusionMatcher,
}

impl ResolvableConfiguration for UnresolvedGeneralConfiguration {
    type Resolved = GeneralConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        let exclusion_matcher = ExclusionMatcher::new(&self.exclude_patterns)
            .wrap_err("Failed to resolve exclude_patterns.")?;

        Ok(GeneralConfiguration {
            extensions: self.extensions,
            templates_path: self.templates_path,
            exclude_patterns: self.exclude_patterns,
            exclusion_matcher,
        })
    }
}

impl GeneralConfiguration {
    /// Returns `true` if `path` (relative to the project root) matches any exclusion pattern.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusion_matcher.is_excluded(path)
    }
}
