//! Tracing setup
//!
//! The interactive gallery owns the terminal, so logs only go to stderr in
//! `--print` mode. A log file, when configured, always receives them.

use crate::config::Settings;
use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Crates whose chatter is capped at warn regardless of the configured level
const QUIET_TARGETS: [&str; 5] = ["reqwest", "hyper", "hyper_util", "rustls", "tokio"];

/// Where log lines end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(String),
    Stderr,
    Disabled,
}

impl LogTarget {
    pub fn for_settings(settings: &Settings) -> Self {
        match settings.log_file() {
            Some(path) => LogTarget::File(path.to_string()),
            None if settings.print() => LogTarget::Stderr,
            None => LogTarget::Disabled,
        }
    }
}

/// Build the filter from a level or directive string such as `debug` or
/// `flagline=trace`
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(level)
        .with_context(|| format!("invalid log filter '{level}'"))?;
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

pub fn init_tracing(settings: &Settings) -> Result<()> {
    let target = LogTarget::for_settings(settings);
    if target == LogTarget::Disabled {
        return Ok(());
    }

    let filter = build_filter(settings.log_level())?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339());

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open log file {path}"))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
        LogTarget::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
        LogTarget::Disabled => {}
    }

    tracing::debug!(level = settings.log_level(), "tracing initialized");
    Ok(())
}
