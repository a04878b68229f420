use std::path::Path;

use anyhow::Result;
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Start file logging under `dir`.
///
/// The terminal is in raw mode on the alternate screen while the game runs,
/// so logs never go to stderr. Level comes from `RUST_LOG`, else `info`.
/// Keep the returned handle alive for as long as logging is wanted.
pub fn setup_logging(dir: &Path) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(dir).basename("tui-2048"))
        .format(flexi_logger::detailed_format)
        .start()?;
    Ok(handle)
}
