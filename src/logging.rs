//! Logger setup for hosts that want the crate's diagnostics on stderr.

use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};

use crate::error::{Error, Result};

/// Installs a compact stderr logger at the given level.
///
/// Fails if a global logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });

    builder
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
