use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use crossterm::style::{Color, Stylize as _};
use log::{Log, Metadata, Record};

use crate::error::AppError;

static LOGGER: OnceLock<TermLogger> = OnceLock::new();

pub fn get_logger() -> &'static TermLogger {
    LOGGER.get_or_init(|| TermLogger::new(log::LevelFilter::Warn))
}

/// Installs the logger, `verbosity` is the number of `-v` flags.
pub fn init(verbosity: u8) -> Result<(), AppError> {
    let logger = get_logger();
    logger.set_level(level_for(verbosity));

    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Writes records to stderr, so they never mix with the printed maze.
pub struct TermLogger {
    level: RwLock<log::LevelFilter>,
}

impl TermLogger {
    fn new(level: log::LevelFilter) -> Self {
        Self {
            level: RwLock::new(level),
        }
    }

    pub fn level(&self) -> log::LevelFilter {
        self.level.read().map(|l| *l).unwrap_or(log::LevelFilter::Warn)
    }

    pub fn set_level(&self, level: log::LevelFilter) {
        if let Ok(mut current) = self.level.write() {
            *current = level;
        }
    }

    pub fn format(record: &Record) -> String {
        let color = match record.level() {
            log::Level::Error => Color::Red,
            log::Level::Warn => Color::Yellow,
            log::Level::Info => Color::White,
            log::Level::Debug => Color::Blue,
            log::Level::Trace => Color::Grey,
        };

        format!(
            "{} {} -> {}",
            format!("{:<5}", record.level()).with(color),
            record.module_path().unwrap_or("unknown").dim(),
            record.args()
        )
    }
}

impl Log for TermLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), log::LevelFilter::Warn);
        assert_eq!(level_for(2), log::LevelFilter::Debug);
        assert_eq!(level_for(9), log::LevelFilter::Trace);
    }

    #[test]
    fn filters_by_level() {
        let logger = TermLogger::new(log::LevelFilter::Info);
        let info = Metadata::builder().level(log::Level::Info).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));

        logger.set_level(log::LevelFilter::Trace);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn format_contains_source_and_message() {
        let line = TermLogger::format(
            &Record::builder()
                .level(log::Level::Warn)
                .module_path(Some("pmaze::algorithms"))
                .args(format_args!("clamped"))
                .build(),
        );
        assert!(line.contains("pmaze::algorithms"));
        assert!(line.ends_with("clamped"));
    }
}
