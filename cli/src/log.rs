use std::io::IsTerminal;

use tracing_subscriber::{fmt::Subscriber, EnvFilter};

pub const LOG_ENV: &str = "TASK_CLI_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs a stderr subscriber filtered by `$TASK_CLI_LOG` (default `warn`).
///
/// Stdout is left alone so listings and result lines stay clean.
pub fn setup() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let subscriber = Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(env_filter)
        .finish();

    // A second install attempt (e.g. from tests) keeps the first subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
