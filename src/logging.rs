//! File logging
//!
//! Every run truncates and rewrites a single log file under the local app data
//! folder. Records at or above the echo level are also printed to stderr so
//! warnings show up in the terminal without opening the log.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct FileLogger {
    file: Mutex<std::fs::File>,
    level: LevelFilter,
    echo_level: LevelFilter,
}

impl FileLogger {
    fn new(file_path: PathBuf, level: LevelFilter, echo_level: LevelFilter) -> io::Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(FileLogger {
            file: Mutex::new(file),
            level,
            echo_level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level || metadata.level() <= self.echo_level
    }

    fn log(&self, record: &Record) {
        if record.level() <= self.level {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(
                    file,
                    "[{}] [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                );
                let _ = file.flush();
            }
        }

        if record.level() <= self.echo_level {
            eprintln!("{}: {}", level_label(record.level()), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Get the platform-specific log file path
pub fn default_log_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir()
        .ok_or("Could not determine local data directory")?;

    Ok(data_dir.join("UIToolkitStrings").join("uitk_string_gen.log"))
}

/// Initialize the logger, overwriting previous logs.
///
/// `log_file` overrides the default location. Records up to `level` go to the
/// file, records up to `echo_level` are also printed to stderr.
pub fn init_logger(
    log_file: Option<PathBuf>,
    level: LevelFilter,
    echo_level: LevelFilter,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_file_path = match log_file {
        Some(path) => path,
        None => default_log_file_path()?,
    };
    let logger = FileLogger::new(log_file_path.clone(), level, echo_level)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level.max(echo_level)))?;

    Ok(log_file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logger_filters_by_level() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("test.log");
        let logger = FileLogger::new(path.clone(), LevelFilter::Info, LevelFilter::Off).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("wrote MainMenuStrings.cs"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("too chatty"))
                .build(),
        );
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[INFO] wrote MainMenuStrings.cs"));
        assert!(!content.contains("too chatty"));
    }

    #[test]
    fn test_enabled_considers_echo_level() {
        let temp_dir = TempDir::new().unwrap();
        let logger = FileLogger::new(
            temp_dir.path().join("test.log"),
            LevelFilter::Error,
            LevelFilter::Warn,
        )
        .unwrap();

        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}
