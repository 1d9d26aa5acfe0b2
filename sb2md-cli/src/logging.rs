//! Diagnostics setup
//!
//! Logs always go to stderr: stdout carries the converted Markdown and nothing else.
//!
//! `RUST_LOG` overrides the configured `log.filter`. A `RUST_LOG` that does not parse is
//! reported and ignored, it never stops a conversion. Only an invalid configured filter is an
//! error.

use sb2md_config::LogConfig;
use std::fmt;
use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// A configured `log.filter` that could not be parsed.
#[derive(Debug)]
pub struct InvalidFilter {
    pub directives: String,
    pub source: ParseError,
}

impl fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid log filter '{}' in configuration: {}",
            self.directives, self.source
        )
    }
}

impl std::error::Error for InvalidFilter {}

/// The filter in effect, plus the `RUST_LOG` value that was rejected, if any.
struct SelectedFilter {
    filter: EnvFilter,
    rejected_env: Option<String>,
}

/// `RUST_LOG` wins when set and valid, the configured directives are used otherwise.
fn select_filter(
    config: &LogConfig,
    from_env: Option<&str>,
) -> Result<SelectedFilter, InvalidFilter> {
    let mut rejected_env = None;
    if let Some(directives) = from_env.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => {
                return Ok(SelectedFilter {
                    filter,
                    rejected_env: None,
                })
            }
            Err(_) => rejected_env = Some(directives.to_string()),
        }
    }

    let filter = EnvFilter::try_new(&config.filter).map_err(|source| InvalidFilter {
        directives: config.filter.clone(),
        source,
    })?;
    Ok(SelectedFilter {
        filter,
        rejected_env,
    })
}

pub fn init_logging(config: &LogConfig) -> Result<(), InvalidFilter> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let selected = select_filter(config, from_env.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(selected.filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(directives) = selected.rejected_env {
        warn!(
            directives = %directives,
            fallback = %config.filter,
            "ignoring invalid {}", EnvFilter::DEFAULT_ENV
        );
    }

    Ok(())
}
