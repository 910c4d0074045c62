//! Tracing configuration for Menuz
//!
//! Installs a global `tracing-subscriber` with an env filter and a
//! timestamped fmt layer on stdout.
//!
//! Filter precedence: `RUST_LOG`, then the `[logging] filter` config value,
//! then the built-in defaults below.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the store crates
/// - **Production**: info level everywhere
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "info".to_string(),
        format!("menuz={level}"),
        format!("mz_app={level}"),
        format!("mz_infra={level}"),
    ]
}

fn build_env_filter(configured: &str, is_dev: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if configured.trim().is_empty() {
            EnvFilter::new(build_filter_directives(is_dev).join(","))
        } else {
            EnvFilter::new(configured)
        }
    })
}

/// Initialize the tracing subscriber
///
/// Call once, before wiring the stores.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(configured_filter: &str) -> anyhow::Result<()> {
    let env_filter = build_env_filter(configured_filter, is_development());

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)));

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
