// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use call_data_config::LogConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a global tracing subscriber for the codec's diagnostics.
///
/// The codec only emits events; applications embedding it usually install
/// their own subscriber and never call this. A second call returns
/// [`LoggingError::AlreadyInitialized`].
///
/// # Examples
/// ```no_run
/// use call_data_codec::logging;
/// use call_data_config::LogConfig;
///
/// logging::init(&LogConfig {
///     level: "debug".to_string(),
///     json: false,
///     strip_ansi: true,
/// })?;
/// # Ok::<(), call_data_codec::logging::LoggingError>(())
/// ```
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_new(&config.level).map_err(|source| LoggingError::InvalidLogLevel {
            level: config.level.clone(),
            source,
        })?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
