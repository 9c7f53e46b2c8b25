use chrono::Local;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

/// Environment variable that seeds the log level on first use
pub const LOG_LEVEL_ENV: &str = "ISVALID_LOG";

/// Oldest entries are dropped past this many
pub const MAX_ENTRIES: usize = 1000;

// Bounded in-memory log storage, only touched for messages that pass the level
static LOGS: Lazy<Mutex<VecDeque<String>>> = Lazy::new(|| Mutex::new(VecDeque::new()));

// Current log level
static LOG_LEVEL: Lazy<AtomicU8> = Lazy::new(|| AtomicU8::new(level_from_env() as u8));

// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            _ => LogLevel::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!(
                "Invalid log level '{}'. Valid values are: debug, info, warning, error",
                other
            )),
        }
    }
}

fn level_from_env() -> LogLevel {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LogLevel::Warning)
}

// Set the current log level
pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

// Get the current log level
pub fn get_log_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

// Record a message with timestamp and level. Messages below the current
// level are dropped before any shared state is touched.
pub fn log(level: LogLevel, message: &str) {
    if level < get_log_level() {
        return;
    }

    let timestamp = Local::now().format("%H:%M:%S").to_string();
    let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);

    if let Ok(mut logs) = LOGS.lock() {
        if logs.len() >= MAX_ENTRIES {
            logs.pop_front();
        }
        logs.push_back(formatted.clone());
    }

    match level {
        LogLevel::Error | LogLevel::Warning => eprintln!("{}", formatted),
        _ => println!("{}", formatted),
    }
}

// Get all stored logs, oldest first
pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.iter().cloned().collect()
    } else {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        vec![format!("[{}] ERROR Error accessing logs", timestamp)]
    }
}

// Clear all logs
pub fn clear_logs() {
    if let Ok(mut logs) = LOGS.lock() {
        logs.clear();
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    // The store and the level are process-wide, so every test that logs
    // holds this lock and restores the default level before releasing it.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn with_level(level: LogLevel, f: impl FnOnce()) {
        let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_log_level(level);
        f();
        set_log_level(LogLevel::Warning);
    }

    fn contains(marker: &str) -> bool {
        get_logs().iter().any(|line| line.contains(marker))
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(" error ".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_level_round_trips_through_atomic() {
        with_level(LogLevel::Info, || {
            assert_eq!(get_log_level(), LogLevel::Info);
            set_log_level(LogLevel::Error);
            assert_eq!(get_log_level(), LogLevel::Error);
        });
    }

    #[test]
    fn test_messages_below_level_are_not_stored() {
        with_level(LogLevel::Warning, || {
            let before = get_logs().len();
            debug("logging-test-dropped-marker");
            assert_eq!(get_logs().len(), before);
            assert!(!contains("logging-test-dropped-marker"));
        });
    }

    #[test]
    fn test_messages_at_level_are_stored() {
        with_level(LogLevel::Debug, || {
            debug("logging-test-debug-marker");
            assert!(contains("logging-test-debug-marker"));
        });
    }

    #[test]
    fn test_entry_format() {
        with_level(LogLevel::Debug, || {
            log(LogLevel::Info, "logging-test-format-marker");
            let line = get_logs()
                .into_iter()
                .find(|line| line.contains("logging-test-format-marker"))
                .unwrap();
            assert!(line.starts_with('['));
            assert!(line.contains("] INFO logging-test-format-marker"));
        });
    }

    #[test]
    fn test_store_is_bounded() {
        with_level(LogLevel::Debug, || {
            for i in 0..MAX_ENTRIES + 10 {
                debug(&format!("logging-test-bound-{}", i));
            }
            assert!(get_logs().len() <= MAX_ENTRIES);
            assert!(contains(&format!("logging-test-bound-{}", MAX_ENTRIES + 9)));
        });
    }
}
