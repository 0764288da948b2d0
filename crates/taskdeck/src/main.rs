/*
[INPUT]:  CLI arguments, optional YAML configuration file, TASKDECK_* environment
[OUTPUT]: Interactive task deck TUI, or a written/validated config file
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;
mod tui;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use taskdeck::TaskdeckConfig;

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Terminal task list with onboarding and an add-task form")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default configuration file
    Init {
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long = "force")]
        force: bool,
    },
}

enum LogSink {
    Stderr,
    Buffer(LogBufferHandle),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::Init { output, force }) = args.command {
        init_tracing(&args.log_level, LogSink::Stderr, None)?;
        let output = output
            .or_else(TaskdeckConfig::default_path)
            .unwrap_or_else(|| PathBuf::from("taskdeck.yaml"));
        return cli::init::run_init(&output, force);
    }

    let config_path = args
        .config_path
        .clone()
        .or_else(|| TaskdeckConfig::default_path().filter(|path| path.exists()));

    if args.dry_run {
        init_tracing(&args.log_level, LogSink::Stderr, None)?;
        let config = load_config(config_path.as_deref())?;
        info!(
            config_path = ?config_path,
            seed_tasks = config.seed_tasks.len(),
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    let _file_guard = init_tracing(
        &args.log_level,
        LogSink::Buffer(log_buffer.clone()),
        args.log_file.as_deref(),
    )?;

    let config = load_config(config_path.as_deref())?;
    info!(
        config_path = ?config_path,
        seed_tasks = config.seed_tasks.len(),
        "starting taskdeck"
    );

    tui::run_tui_with_log(config, log_buffer).await
}

fn init_tracing(
    log_level: &str,
    sink: LogSink,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    let writer = match sink {
        LogSink::Stderr => BoxMakeWriter::new(io::stderr),
        LogSink::Buffer(buffer) => BoxMakeWriter::new(LogWriterFactory::new(buffer)),
    };
    let primary = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .context("log file path must name a file")?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(primary)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn load_config(path: Option<&Path>) -> Result<TaskdeckConfig> {
    TaskdeckConfig::load(path).context("load config")
}
