//! Default configuration file lookup. These tests change the current directory,
//! which is process-wide, so they run one at a time under `CURRENT_DIRECTORY_LOCK`.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use docs_descriptor::{
    configuration::{Configuration, ConfigurationKey},
    ConfigurationError,
};
use tempfile::TempDir;


static CURRENT_DIRECTORY_LOCK: Mutex<()> = Mutex::new(());


/// Switches into a fresh temporary directory and switches back when dropped.
struct TemporaryCurrentDirectory {
    directory: TempDir,
    previous_directory: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl TemporaryCurrentDirectory {
    fn enter() -> Self {
        let lock = CURRENT_DIRECTORY_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let previous_directory = env::current_dir().unwrap();
        let directory = tempfile::tempdir().unwrap();
        env::set_current_dir(directory.path()).unwrap();

        Self {
            directory,
            previous_directory,
            _lock: lock,
        }
    }

    fn path(&self) -> &Path {
        self.directory.path()
    }
}

impl Drop for TemporaryCurrentDirectory {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous_directory);
    }
}


fn write_configuration(path: &Path, project_name: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    fs::write(
        path,
        format!("[project]\nname = \"{project_name}\"\n"),
    )
    .unwrap();
}


#[test]
fn falls_back_to_source_directory() {
    let current_directory = TemporaryCurrentDirectory::enter();
    write_configuration(&current_directory.path().join("source/docs.toml"), "Source Labs");

    let configuration = Configuration::load_from_default_path().unwrap();

    assert_eq!(
        configuration.get(ConfigurationKey::ProjectName).as_text(),
        Some("Source Labs")
    );
    assert_eq!(
        configuration.project_root().directory(),
        dunce::canonicalize(current_directory.path().join("source"))
            .unwrap()
            .as_path()
    );
}

#[test]
fn root_configuration_wins_over_source_directory() {
    let current_directory = TemporaryCurrentDirectory::enter();
    write_configuration(&current_directory.path().join("docs.toml"), "Root Labs");
    write_configuration(&current_directory.path().join("source/docs.toml"), "Source Labs");

    let configuration = Configuration::load_from_default_path().unwrap();

    assert_eq!(
        configuration.get(ConfigurationKey::ProjectName).as_text(),
        Some("Root Labs")
    );
}

#[test]
fn no_configuration_file_is_reported() {
    let _current_directory = TemporaryCurrentDirectory::enter();

    let report = Configuration::load_from_default_path().unwrap_err();

    let not_found = report
        .chain()
        .find_map(|error| error.downcast_ref::<ConfigurationError>());

    match not_found {
        Some(ConfigurationError::ConfigurationFileNotFound { candidates }) => {
            assert_eq!(candidates.len(), 2);
            assert!(candidates[0].ends_with("docs.toml"));
            assert!(candidates[1].ends_with("source/docs.toml"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
