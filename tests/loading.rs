use std::{fs, path::PathBuf};

use docs_descriptor::{
    configuration::{Configuration, ConfigurationKey, ThemeOptionValue},
    ConfigurationError,
};


fn sample_configuration_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("source/docs.toml")
}


#[test]
fn sample_configuration_reproduces_original_settings() {
    let configuration = Configuration::load_from_path(sample_configuration_path()).unwrap();

    assert_eq!(
        configuration.get(ConfigurationKey::ProjectName).as_text(),
        Some("Cloudflare APJC - Developer Labs")
    );
    assert_eq!(
        configuration.get(ConfigurationKey::CopyrightNotice).as_text(),
        Some("2023, Cloudflare, Inc")
    );
    assert_eq!(
        configuration.get(ConfigurationKey::Authors).as_list(),
        Some(["Tony Sangha, Nathan Neo".to_string()].as_slice())
    );
    assert!(configuration.get(ConfigurationKey::Release).is_absent());

    let extensions = configuration
        .get(ConfigurationKey::ExtensionList)
        .as_set()
        .unwrap();
    assert_eq!(extensions.iter().collect::<Vec<_>>(), vec!["myst_parser"]);

    assert!(configuration
        .get(ConfigurationKey::ExcludedPatterns)
        .as_set()
        .unwrap()
        .is_empty());

    assert_eq!(
        configuration.get_by_name("html_theme").unwrap().as_text(),
        Some("sphinx_material")
    );
    assert_eq!(
        configuration.get_by_name("html_favicon").unwrap().as_text(),
        Some("screencaps/favicon.ico")
    );

    let theme_options = configuration
        .get(ConfigurationKey::ThemeOptions)
        .as_theme_options()
        .unwrap();
    assert_eq!(
        theme_options.get("nav_title"),
        Some(ThemeOptionValue::Text("APJC Developer Labs"))
    );
    assert_eq!(
        theme_options.get("base_url"),
        Some(ThemeOptionValue::Text("https://devlabs.cfapjc.dev"))
    );
    assert_eq!(
        theme_options.get("theme_color"),
        Some(ThemeOptionValue::Text("3E74FF"))
    );
    assert_eq!(
        theme_options.get("globaltoc_depth"),
        Some(ThemeOptionValue::Integer(3))
    );
    assert_eq!(
        theme_options.get("globaltoc_collapse"),
        Some(ThemeOptionValue::Boolean(true))
    );
    assert_eq!(
        theme_options.get("globaltoc_includehidden"),
        Some(ThemeOptionValue::Boolean(false))
    );

    assert_eq!(
        configuration.sidebar_for("labs/workers/getting-started"),
        Some(
            [
                "logo-text.html".to_string(),
                "globaltoc.html".to_string(),
                "localtoc.html".to_string(),
                "searchbox.html".to_string(),
            ]
            .as_slice()
        )
    );
}

#[test]
fn project_root_is_canonical_configuration_directory() {
    let temporary_directory = tempfile::tempdir().unwrap();
    let source_directory = temporary_directory.path().join("source");
    fs::create_dir_all(&source_directory).unwrap();

    let configuration_file_path = source_directory.join("docs.toml");
    fs::write(
        &configuration_file_path,
        r#"
        [project]
        name = "Developer Labs"

        [html]
        static_path = ["_static"]
        logo = "screencaps/cf_logo.svg"
        "#,
    )
    .unwrap();

    let configuration = Configuration::load_from_path(&configuration_file_path).unwrap();
    let canonical_source_directory = dunce::canonicalize(&source_directory).unwrap();

    assert_eq!(
        configuration.project_root().directory(),
        canonical_source_directory.as_path()
    );
    assert_eq!(
        configuration.file_path(),
        Some(canonical_source_directory.join("docs.toml").as_path())
    );
    assert_eq!(
        configuration.absolute_static_asset_paths(),
        vec![canonical_source_directory.join("_static")]
    );
    assert_eq!(
        configuration.absolute_logo_path(),
        Some(canonical_source_directory.join("screencaps/cf_logo.svg"))
    );
}

#[test]
fn log_directory_placeholder_uses_project_root() {
    let temporary_directory = tempfile::tempdir().unwrap();
    let configuration_file_path = temporary_directory.path().join("docs.toml");
    fs::write(
        &configuration_file_path,
        r#"
        [project]
        name = "Developer Labs"

        [logging]
        log_file_output_directory = "{PROJECT_ROOT}/_logs"
        "#,
    )
    .unwrap();

    let configuration = Configuration::load_from_path(&configuration_file_path).unwrap();
    let canonical_root = dunce::canonicalize(temporary_directory.path()).unwrap();

    assert_eq!(
        configuration.logging().log_file_output_directory,
        Some(canonical_root.join("_logs"))
    );
}

#[test]
fn malformed_file_reports_the_error() {
    let temporary_directory = tempfile::tempdir().unwrap();
    let configuration_file_path = temporary_directory.path().join("docs.toml");
    fs::write(
        &configuration_file_path,
        r#"
        [project]
        name = "Developer Labs"
        authors = 42
        "#,
    )
    .unwrap();

    let report = Configuration::load_from_path(&configuration_file_path).unwrap_err();
    let messages: Vec<String> = report.chain().map(|error| error.to_string()).collect();

    assert_eq!(messages[0], "Could not load configuration file!");
    assert!(messages
        .iter()
        .any(|message| message.starts_with("Malformed configuration")));
}

#[test]
fn missing_file_is_an_error() {
    let temporary_directory = tempfile::tempdir().unwrap();

    assert!(Configuration::load_from_path(temporary_directory.path().join("docs.toml")).is_err());
}

#[test]
fn unrecognized_key_name_is_an_error() {
    let configuration = Configuration::load_from_path(sample_configuration_path()).unwrap();

    assert!(matches!(
        configuration.get_by_name("html_baseurl"),
        Err(ConfigurationError::UnrecognizedKey { .. })
    ));
}
