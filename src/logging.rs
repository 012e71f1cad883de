use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use colored::Colorize as _;
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn))
}

/// Installs the stderr logger, later calls only adjust the level
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Maps the number of `-v` flags to a level
pub fn level_from_verbosity(verbosity: u8) -> log::Level {
    match verbosity {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        self.min_level
            .read()
            .map(|level| *level)
            .unwrap_or(log::Level::Warn)
    }

    pub fn set_min_level(&self, level: log::Level) {
        if let Ok(mut min_level) = self.min_level.write() {
            *min_level = level;
        }
    }

    fn format(record: &Record) -> String {
        let level = match record.level() {
            log::Level::Error => "error".red(),
            log::Level::Warn => "warn".yellow(),
            log::Level::Info => "info".white(),
            log::Level::Debug => "debug".blue(),
            log::Level::Trace => "trace".dimmed(),
        };
        let source = record.module_path().unwrap_or("unknown");

        format!("{} {} -> {}", level, source.dimmed(), record.args())
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{}", Self::format(record));
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
        assert_eq!(level_from_verbosity(0), log::Level::Warn);
        assert_eq!(level_from_verbosity(2), log::Level::Debug);
        assert_eq!(level_from_verbosity(9), log::Level::Trace);
    }

    #[test]
    fn level_filter() {
        let logger = AppLogger::new(log::Level::Info);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();

        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));

        logger.set_min_level(log::Level::Trace);
        assert!(logger.enabled(&debug));
    }
}
