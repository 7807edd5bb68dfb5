use std::path::Path;

use chrono::Local;
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};


/// Keeps the non-blocking log file writer alive. Dropping it flushes pending log lines.
pub struct LoggingGuard {
    _file_writer_guard: Option<WorkerGuard>,
}


/// Installs the global `tracing` subscriber: a console layer on stderr and,
/// if `log_file_output_directory` is set, a log file layer writing to
/// `{log_file_output_directory}/{log_file_name_prefix}_{timestamp}.log`.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name_prefix: &str,
) -> Result<LoggingGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_level_filter);


    let (file_layer, file_writer_guard) = match log_file_output_directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .into_diagnostic()
                .wrap_err_with(|| {
                    miette!(
                        "Failed to create missing log file directory at {}.",
                        directory.display()
                    )
                })?;

            let log_file_name = format!(
                "{}_{}.log",
                log_file_name_prefix,
                Local::now().format("%Y-%m-%d_%H-%M-%S")
            );

            let file_appender = tracing_appender::rolling::never(directory, log_file_name);
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false)
                .with_filter(log_file_level_filter);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };


    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install tracing subscriber.")?;

    Ok(LoggingGuard {
        _file_writer_guard: file_writer_guard,
    })
}
