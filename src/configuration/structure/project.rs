use miette::Result;
use serde::Deserialize;

use crate::configuration::traits::ResolvableConfiguration;


/// Authors may be written either as a single string or as a list.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub(super) enum UnresolvedAuthors {
    Single(String),
    List(Vec<String>),
}

impl From<UnresolvedAuthors> for Vec<String> {
    fn from(authors: UnresolvedAuthors) -> Self {
        match authors {
            UnresolvedAuthors::Single(author) => vec![author],
            UnresolvedAuthors::List(authors) => authors,
        }
    }
}


#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub(super) struct UnresolvedProjectConfiguration {
    /// Display name of the documented project.
    name: String,

    #[serde(default)]
    copyright: String,

    #[serde(default, alias = "author")]
    authors: Option<UnresolvedAuthors>,

    #[serde(default)]
    release: Option<String>,
}

/// Project information (`[project]` table).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectConfiguration {
    /// Display name of the documented project.
    pub name: String,

    /// Legal attribution text. Empty when not configured.
    pub copyright: String,

    /// Authors, in the order they were written.
    pub authors: Vec<String>,

    /// Full project version, if any.
    pub release: Option<String>,
}

impl ResolvableConfiguration for UnresolvedProjectConfiguration {
    type Resolved = ProjectConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        Ok(ProjectConfiguration {
            name: self.name,
            copyright: self.copyright,
            authors: self.authors.map(Vec::from).unwrap_or_default(),
            release: self.release,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(contents: &str) -> ProjectConfiguration {
        toml::from_str::<UnresolvedProjectConfiguration>(contents)
            .unwrap()
            .resolve()
            .unwrap()
    }

    #[test]
    fn single_author_string_is_kept_verbatim() {
        let project = resolve(
            r#"
            name = "Developer Labs"
            author = "Tony Sangha, Nathan Neo"
            "#,
        );

        assert_eq!(project.authors, vec!["Tony Sangha, Nathan Neo".to_string()]);
    }

    #[test]
    fn author_list_keeps_order() {
        let project = resolve(
            r#"
            name = "Developer Labs"
            authors = ["B", "A", "C"]
            "#,
        );

        assert_eq!(project.authors, vec!["B", "A", "C"]);
    }

    #[test]
    fn optional_fields_default() {
        let project = resolve(r#"name = "Developer Labs""#);

        assert_eq!(project.copyright, "");
        assert!(project.authors.is_empty());
        assert_eq!(project.release, None);
    }

    #[test]
    fn name_is_required() {
        assert!(toml::from_str::<UnresolvedProjectConfiguration>(r#"copyright = "2023""#).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<UnresolvedProjectConfiguration>(
            r#"
            name = "Developer Labs"
            version = "1.0"
            "#
        )
        .is_err());
    }
}
