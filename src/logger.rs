// src/logger.rs
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Environment variable holding an `env_logger` filter, e.g. `MODBUILD_LOG=trace`.
pub const LOG_ENV: &str = "MODBUILD_LOG";

/// Installs the stderr logger.
///
/// `verbosity` comes from the repeated `-v` flag and wins over the environment:
/// one `-v` enables `debug`, two or more enable `trace`.
pub fn init(verbosity: u8) {
    let default_filter = if cfg!(debug_assertions) { "debug" } else { "off" };
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter));

    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    builder.target(Target::Stderr).format(|buf, record| {
        writeln!(
            buf,
            "[{:>5} {}:{}] {}",
            record.level(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    });

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

/// Re-export logging macros
#[allow(unused_imports)]
pub use log::{debug, error, info, trace, warn};
