//! Process bootstrap for the server binary: config discovery, log
//! subscriber and shutdown signals.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Config file used when neither the CLI nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable naming the config file.
pub const CONFIG_PATH_VAR: &str = "MINDCHECK_CONFIG_PATH";

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    CliArg,
    EnvVar,
    Default,
}

impl ConfigSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigSource::CliArg => "cli-arg",
            ConfigSource::EnvVar => "env-var",
            ConfigSource::Default => "default",
        }
    }
}

/// Picks the config path: first CLI argument, then `MINDCHECK_CONFIG_PATH`,
/// then `config.toml`. Blank values are skipped.
pub fn config_location(
    cli_arg: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> (String, ConfigSource) {
    let non_blank = |value: &String| !value.trim().is_empty();

    if let Some(path) = cli_arg.filter(non_blank) {
        (path, ConfigSource::CliArg)
    } else if let Some(path) = lookup(CONFIG_PATH_VAR).filter(non_blank) {
        (path, ConfigSource::EnvVar)
    } else {
        (DEFAULT_CONFIG_PATH.to_string(), ConfigSource::Default)
    }
}

impl LoggingConfig {
    /// The filter directive in effect; an unparsable level falls back to `info`.
    pub fn filter_directive(&self) -> &str {
        if EnvFilter::try_new(&self.level).is_ok() {
            &self.level
        } else {
            "info"
        }
    }
}

/// Installs the global `tracing` subscriber, as JSON lines or plain text.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::new(logging.filter_directive());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}

/// Resolves on SIGINT or, on unix, SIGTERM, returning the signal's name.
pub async fn shutdown_signal() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => tokio::select! {
                _ = tokio::signal::ctrl_c() => "SIGINT",
                _ = terminate.recv() => "SIGTERM",
            },
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable, waiting for SIGINT only");
                let _ = tokio::signal::ctrl_c().await;
                "SIGINT"
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        "SIGINT"
    }
}
