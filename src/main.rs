use clap::Parser;
use docs_descriptor::{
    configuration::{Configuration, ConfigurationKey},
    export,
    logging::initialize_tracing,
};
use miette::{Context, IntoDiagnostic, Result};
use tracing::{debug, info};

use crate::cli::{CLIArgs, CLICommand, ExportFormat};

mod cli;


fn print_summary(configuration: &Configuration) {
    let project = configuration.project();
    let general = configuration.general();
    let html = configuration.html();

    println!("Project:      {}", project.name);
    println!("Copyright:    {}", project.copyright);
    println!("Authors:      {}", project.authors.join("; "));
    if let Some(release) = project.release.as_deref() {
        println!("Release:      {}", release);
    }
    println!("Project root: {}", configuration.project_root().directory().display());

    println!();
    println!("Extensions:       {}", join_set(&general.extensions));
    println!("Templates:        {}", join_set(&general.templates_path));
    println!("Exclude patterns: {}", join_set(&general.exclude_patterns));

    println!();
    println!("Theme:       {}", html.theme);
    println!("Static path: {}", join_set(&html.static_path));
    println!("Logo:        {}", html.logo.as_deref().unwrap_or("-"));
    println!("Favicon:     {}", html.favicon.as_deref().unwrap_or("-"));

    if !html.sidebars.is_empty() {
        println!("Sidebars:");
        for (pattern, widgets) in &html.sidebars {
            println!("  {} -> {}", pattern, widgets.join(", "));
        }
    }

    let theme_options = &html.theme_options;
    println!("Theme options:");
    if let Some(nav_title) = theme_options.nav_title.as_deref() {
        println!("  nav_title = {}", nav_title);
    }
    if let Some(base_url) = theme_options.base_url.as_deref() {
        println!("  base_url = {}", base_url);
    }
    if let Some(theme_color) = theme_options.theme_color.as_deref() {
        println!("  theme_color = {}", theme_color);
    }
    match theme_options.globaltoc_depth_limit() {
        Some(depth) => println!("  globaltoc_depth = {}", depth),
        None => println!("  globaltoc_depth = unlimited"),
    }
    println!("  globaltoc_collapse = {}", theme_options.globaltoc_collapse);
    println!(
        "  globaltoc_includehidden = {}",
        theme_options.globaltoc_includehidden
    );
    for (name, value) in &theme_options.additional {
        println!("  {} = {}", name, value);
    }
}

fn join_set<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let joined = values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

fn print_paths(configuration: &Configuration) {
    println!(
        "project_root: {}",
        configuration.project_root().directory().display()
    );

    for path in configuration.absolute_template_search_paths() {
        println!("{}: {}", ConfigurationKey::TemplateSearchPaths, path.display());
    }

    for path in configuration.absolute_static_asset_paths() {
        println!("{}: {}", ConfigurationKey::StaticAssetPaths, path.display());
    }

    if let Some(logo) = configuration.absolute_logo_path() {
        println!("{}: {}", ConfigurationKey::LogoPath, logo.display());
    }

    if let Some(favicon) = configuration.absolute_favicon_path() {
        println!("{}: {}", ConfigurationKey::FaviconPath, favicon.display());
    }
}


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    // Load configuration.
    let configuration = match cli_args.configuration_file_path.as_ref() {
        Some(path) => Configuration::load_from_path(path),
        None => Configuration::load_from_default_path(),
    }
    .wrap_err("Failed to load configuration file.")?;


    let logging_raii_guard = initialize_tracing(
        configuration.logging().console_output_level_filter(),
        configuration.logging().log_file_output_level_filter(),
        configuration.logging().log_file_output_directory.as_deref(),
        "docs-descriptor",
    )
    .wrap_err("Failed to initialize tracing.")?;

    if let Some(file_path) = configuration.file_path() {
        info!(file = %file_path.display(), "Configuration loaded.");
    }


    match cli_args.command {
        CLICommand::Show => print_summary(&configuration),
        CLICommand::Get { key } => {
            let value = configuration.get_by_name(&key)?;
            debug!(key = %key, "Reading configuration value.");

            let rendered = serde_json::to_string_pretty(&value)
                .into_diagnostic()
                .wrap_err("Failed to serialize configuration value.")?;

            println!("{}", rendered);
        }
        CLICommand::Export { format } => {
            let exported = match format {
                ExportFormat::Json => export::to_json_string(&configuration)?,
                ExportFormat::Toml => export::to_toml_string(&configuration)?,
            };

            println!("{}", exported);
        }
        CLICommand::Sidebar { document } => match configuration.sidebar_for(&document) {
            Some(widgets) => {
                for widget in widgets {
                    println!("{}", widget);
                }
            }
            None => info!(
                document = %document,
                "No sidebar pattern matches this document; the theme's default sidebars apply."
            ),
        },
        CLICommand::Excluded { path } => {
            println!("{}", configuration.is_excluded(&path));
        }
        CLICommand::Paths => print_paths(&configuration),
    }


    drop(logging_raii_guard);
    Ok(())
}
