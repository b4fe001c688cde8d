//! Global tracing subscriber setup for the setup tool.

use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, layer::Layer, layer::SubscriberExt};

use crate::config::SetupConfig;

/// Errors that can occur while initializing global telemetry.
#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

static TELEMETRY_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize global tracing/logging exactly once, wiring `log::` macros into the tracing pipeline.
pub fn init_tracing(config: &SetupConfig) -> Result<(), TelemetryInitError> {
    if TELEMETRY_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Ok(());
    }

    // Seeds and the KV client log through `log::`; route them into tracing.
    // Only one `log` logger can exist per process; another one winning is not fatal.
    if let Err(err) = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init()
    {
        eprintln!(
            "Warning: failed to install log tracer bridge: {}. `log::` records will not reach the subscriber.",
            err
        );
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let fmt_layer = match config.log_format.as_str() {
        "json" => fmt::layer().json().boxed(),
        "compact" => fmt::layer().compact().with_target(false).boxed(),
        _ => fmt::layer().pretty().with_target(false).boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        TELEMETRY_INITIALIZED.store(false, Ordering::SeqCst);
        return Err(err.into());
    }

    Ok(())
}
