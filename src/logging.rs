//! Shared logger setup for the binaries, tests and benchmarks.

use flexi_logger::{DeferredNow, FlexiLoggerError, Logger};
use log::Record;

/// Logger configured from RUST_LOG, `info` if unset. Callers pick the output and start it.
pub fn logger() -> Result<Logger, FlexiLoggerError> {
    Ok(Logger::try_with_env_or_str("info")?
        .set_palette("196;208;3;7;8".to_owned())
        .format(short_format))
}

/// `HH:MM:SS [L] message`, with the level letter colored.
pub fn short_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    let style = flexi_logger::style(record.level());
    write!(
        w,
        "{} {pref}[{}] {}{suf}",
        now.format("%H:%M:%S"),
        &record.level().as_str()[0..1],
        record.args(),
        pref = style.prefix(),
        suf = style.suffix(),
    )
}
