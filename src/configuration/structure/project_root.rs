use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use miette::{miette, Result};


/// The directory every relative path in the configuration is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    directory: PathBuf,
}

impl ProjectRoot {
    /// Uses `directory` as-is, without touching the filesystem.
    pub fn new<P>(directory: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            directory: directory.into(),
        }
    }

    /// The project root of a configuration file is the directory containing it.
    /// `configuration_file_path` must already be canonical.
    pub fn from_configuration_file_path(configuration_file_path: &Path) -> Result<Self> {
        let directory = configuration_file_path.parent().ok_or_else(|| {
            miette!(
                "Configuration file path {} has no parent directory.",
                configuration_file_path.display()
            )
        })?;

        Ok(Self::new(directory))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Joins a project-relative path onto the root. Absolute paths are returned unchanged.
    pub fn join<P>(&self, relative_path: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.directory.join(relative_path)
    }

    pub fn placeholders_map(&self) -> HashMap<&'static str, String> {
        let mut placeholders_map = HashMap::with_capacity(1);

        placeholders_map.insert(
            "{PROJECT_ROOT}",
            self.directory.to_string_lossy().to_string(),
        );

        placeholders_map
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_parent_of_configuration_file() {
        let root = ProjectRoot::from_configuration_file_path(Path::new("/srv/docs/source/docs.toml"))
            .unwrap();

        assert_eq!(root.directory(), Path::new("/srv/docs/source"));
        assert_eq!(
            root.join("_static"),
            PathBuf::from("/srv/docs/source/_static")
        );
    }

    #[test]
    fn placeholder_map_contains_root() {
        let root = ProjectRoot::new("/srv/docs");
        assert_eq!(
            root.placeholders_map().get("{PROJECT_ROOT}").map(String::as_str),
            Some("/srv/docs")
        );
    }
}
