//! Console logging setup.

use std::io;

use ro_core::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, fmt};

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn  => LevelFilter::WARN,
        LogLevel::Info  => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Install a stdout fmt layer as the global subscriber.
pub fn init_std_out_logging(level: LogLevel) -> anyhow::Result<()> {
    let collector = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(io::stdout)
            .with_target(false)
            .with_filter(level_filter(level)),
    );
    tracing::subscriber::set_global_default(collector)?;
    Ok(())
}
