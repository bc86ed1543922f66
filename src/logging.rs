//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Headless commands log to stderr. The interactive picker owns the terminal,
//! so there logs go to `--log-file` or nowhere at all.
//!
//! `RUST_LOG` always overrides the verbosity-derived level.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub target: LogTarget,
}

impl LogConfig {
    /// Map `-v` counts to a level: 0 = warn, 1 = info, 2 = debug, 3+ = trace
    pub fn from_verbosity(verbosity: u8, target: LogTarget) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, target }
    }
}

/// Install the global subscriber
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config.level);
    let layer = fmt::layer().with_target(false);

    let result = match &config.target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
        LogTarget::Discard => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(io::sink))
            .try_init(),
    };

    result.map_err(|e| io::Error::other(format!("Failed to install logger: {}", e)))
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    // External crates stay at warn level to reduce noise
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,mealpicker={}", level_str)))
}
