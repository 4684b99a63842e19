//! kinsense binary entry point: config loading, logging setup, signal
//! handling, and command dispatch.

mod cli;
mod error_fmt;
mod run;

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use eyre::WrapErr;
use tracing::info;

use cli::{Cli, Commands, FILE_GUARD, JSON_MODE};

fn main() {
    let code = real_main();
    std::process::exit(code);
}

fn real_main() -> i32 {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);
    // Install once; a second install (tests in-process) is harmless.
    let _ = color_eyre::install();

    match execute(&cli) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            if cli.json {
                eprintln!("{}", error_fmt::format_error_json(&e));
            } else {
                eprintln!("{}", error_fmt::humanize(&e));
            }
            error_fmt::exit_code_for_error(&e)
        }
    }
}

fn execute(cli: &Cli) -> eyre::Result<()> {
    let cfg = load_config(cli)?;
    cfg.validate().wrap_err("validating config")?;
    init_logging(cli, &cfg)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "kinsense starting"
    );

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || {
            shutdown.store(true, Ordering::Relaxed);
        })
        .wrap_err("installing Ctrl-C handler")?;
    }

    match &cli.cmd {
        Commands::Motion {
            cycles,
            zone_width,
            samples,
            poll_ms,
        } => run::run_motion(
            &cfg,
            run::MotionOverrides {
                cycles: *cycles,
                zone_width: *zone_width,
                samples: *samples,
                poll_ms: *poll_ms,
            },
            &shutdown,
        ),
        Commands::Pendulum {
            max_events,
            threshold,
            sample_ms,
            paced,
        } => run::run_pendulum(
            &cfg,
            run::PendulumOverrides {
                max_events: *max_events,
                threshold: *threshold,
                sample_ms: *sample_ms,
                paced: *paced,
            },
            &shutdown,
        ),
        Commands::SelfCheck => run::self_check(&cfg),
    }
}

/// Read the TOML config if the file exists; otherwise fall back to defaults
/// so the CLI stays usable without an `etc/` tree.
fn load_config(cli: &Cli) -> eyre::Result<kinsense_config::Config> {
    if cli.config.exists() {
        let text = fs::read_to_string(&cli.config)
            .wrap_err_with(|| format!("reading config {}", cli.config.display()))?;
        kinsense_config::load_toml(&text)
            .wrap_err_with(|| format!("parsing config {}", cli.config.display()))
    } else {
        Ok(kinsense_config::Config::default())
    }
}

/// Console logging on stderr (pretty or JSON lines), plus an optional
/// rotating JSON file sink from `[logging]` in the config.
fn init_logging(cli: &Cli, cfg: &kinsense_config::Config) -> eyre::Result<()> {
    use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Precedence: RUST_LOG, then logging.level from the config, then the
    // --log-level flag (whose default is "info").
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(cfg.logging.level.as_deref().unwrap_or(&cli.log_level))
    });

    // Results go to stdout; keep all log lines on stderr.
    let console = if cli.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer().compact().with_writer(std::io::stderr).boxed()
    };

    let file_layer = match cfg.logging.file.as_deref() {
        Some(path) => {
            let path = std::path::Path::new(path);
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => std::path::Path::new("."),
            };
            let name = path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("kinsense.log"));
            let appender = match cfg.logging.rotation.as_deref() {
                Some("daily") => tracing_appender::rolling::daily(dir, name),
                Some("hourly") => tracing_appender::rolling::hourly(dir, name),
                _ => tracing_appender::rolling::never(dir, name),
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().json().with_writer(writer).boxed())
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;
    Ok(())
}
