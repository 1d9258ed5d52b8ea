use log::LevelFilter;
use tui_logger::{init_logger, set_default_level, TuiLoggerError, TuiLoggerFile};

pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

/// Route `log` records to the tui logger, mirrored to `log_file`
pub fn setup_logger(level: LevelFilter, log_file: &str) -> Result<(), TuiLoggerError> {
    init_logger(LevelFilter::Trace)?;
    set_default_level(level);
    tui_logger::set_log_file(TuiLoggerFile::new(log_file));
    Ok(())
}
