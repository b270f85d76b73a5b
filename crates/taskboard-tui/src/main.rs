/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Interactive task board, or a validated seed listing in dry-run mode
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use taskboard_tui::{BoardConfig, run_tui};

const LOG_FILE_PREFIX: &str = "taskboard.log";

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Terminal task board")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "log-dir", value_name = "PATH")]
    log_dir: Option<PathBuf>,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.dry_run {
        init_stderr_tracing(&args.log_level)?;
        let config = BoardConfig::load(args.config_path.as_deref()).context("load config")?;
        let store = config.build_store()?;
        for task in store.list() {
            info!(
                title = %task.title(),
                due_date = %task.due_date(),
                priority = %task.priority(),
                "seed task"
            );
        }
        info!(task_count = store.len(), "dry-run requested; configuration validated");
        return Ok(());
    }

    let config = BoardConfig::load(args.config_path.as_deref()).context("load config")?;
    let log_dir = match args.log_dir {
        Some(dir) => dir,
        None => config.resolve_log_dir()?,
    };
    let _guard = init_file_tracing(&args.log_level, &log_dir)?;

    info!(
        config_path = ?args.config_path,
        log_dir = %log_dir.display(),
        "starting taskboard"
    );

    let store = config.build_store()?;
    run_tui(store, &config).await
}

fn init_stderr_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// The terminal UI owns stdout, so logs go to a daily rolling file.
fn init_file_tracing(log_level: &str, log_dir: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
