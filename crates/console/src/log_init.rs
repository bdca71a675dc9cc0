//! A minimal file logger for applications that embed a console.
//!
//! Logging to the terminal would interleave with console output, so log
//! records are appended to a file instead.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{LevelFilter, Metadata, Record, SetLoggerError};

struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(
                file,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Sends `log` records at or above `level` to the file at `path`.
///
/// Fails if a logger has already been installed.
pub fn init_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        path: path.as_ref().to_path_buf(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
