use log::{LevelFilter, Log, Metadata, Record};

pub const LOG_ENV: &str = "DICECOURT_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Level from `DICECOURT_LOG` (`off`, `error`, `warn`, `info`, `debug`,
/// `trace`). Unset or unreadable values mean warnings only.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn init() {
    let level = level_from_env(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
