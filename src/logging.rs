// logging.rs

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "TEXTECHO_LOG";

/// `TEXTECHO_LOG` wins over `RUST_LOG`; `level` applies when neither is set.
/// Logs go to stderr so stdout only carries echoed text.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
