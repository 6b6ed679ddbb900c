//! Rolling file logging for the reminders core.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend exactly once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Initialization is idempotent for the same level and directory.
//! - A second call with a different level or directory is rejected.
//! - Reminder text (titles, descriptions, place names) is never logged.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "location_reminders";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

impl LoggingState {
    fn check_same_config(&self, level: &str, log_dir: &Path) -> Result<(), String> {
        if self.log_dir != log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                log_dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                self.level, level
            ));
        }
        Ok(())
    }
}

/// Initializes file logging with `level` under the absolute `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is empty, relative, or cannot be created.
/// - Logging is already active with a different level or directory.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = parse_log_dir(log_dir)?;

    if let Some(state) = LOGGING_STATE.get() {
        return state.check_same_config(level, &log_dir);
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir.clone()))?;
    // Another thread may have won the init race with other settings.
    state.check_same_config(level, &log_dir)
}

fn start_logger(level: &'static str, log_dir: PathBuf) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=core_init module=core status=ok platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );

    Ok(LoggingState {
        level,
        log_dir,
        _logger: logger,
    })
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Accepted level spellings, matched case-insensitively after trimming.
const LEVEL_NAMES: &[(&str, &str)] = &[
    ("trace", "trace"),
    ("debug", "debug"),
    ("info", "info"),
    ("warn", "warn"),
    ("warning", "warn"),
    ("error", "error"),
];

fn parse_level(raw: &str) -> Result<&'static str, String> {
    let wanted = raw.trim();
    LEVEL_NAMES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|&(_, level)| level)
        .ok_or_else(|| {
            format!("reminder log level `{wanted}` is not one of trace|debug|info|warn|error")
        })
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let dir = PathBuf::from(raw.trim());
    if dir.as_os_str().is_empty() {
        Err("reminder log directory is empty".to_string())
    } else if dir.is_relative() {
        Err(format!(
            "reminder log directory `{}` must be absolute",
            dir.display()
        ))
    } else {
        Ok(dir)
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}", loc.file(), loc.line()),
        );
        let payload = panic_text(panic_info.payload()).unwrap_or("non-string panic payload");
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            single_line(payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

fn panic_text(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

// Panic text can carry reminder fields, so it is flattened to one line and
// capped before reaching the log file.
fn single_line(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let mut line = chars
        .by_ref()
        .take(max_chars)
        .map(|c| if matches!(c, '\n' | '\r') { ' ' } else { c })
        .collect::<String>();
    if chars.next().is_some() {
        line.push_str("...");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, panic_text, parse_level, parse_log_dir, single_line,
    };

    #[test]
    fn parse_level_accepts_aliases_and_case() {
        assert_eq!(parse_level("ERROR").unwrap(), "error");
        assert_eq!(parse_level(" warning ").unwrap(), "warn");
        assert!(parse_level("verbose")
            .unwrap_err()
            .contains("reminder log level `verbose`"));
    }

    #[test]
    fn parse_log_dir_rejects_empty_and_relative() {
        assert!(parse_log_dir("   ").unwrap_err().contains("empty"));
        assert!(parse_log_dir("logs/dev").unwrap_err().contains("absolute"));
    }

    #[test]
    fn single_line_flattens_and_caps_length() {
        assert_eq!(single_line("first\nsecond\rthird", 10), "first seco...");
        assert_eq!(single_line("short", 10), "short");
        assert_eq!(single_line("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn panic_text_reads_str_and_string_payloads() {
        let borrowed: Box<dyn std::any::Any + Send> = Box::new("boom");
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned boom"));
        let other: Box<dyn std::any::Any + Send> = Box::new(7_u8);

        assert_eq!(panic_text(borrowed.as_ref()), Some("boom"));
        assert_eq!(panic_text(owned.as_ref()), Some("owned boom"));
        assert_eq!(panic_text(other.as_ref()), None);
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let log_dir = tempfile::tempdir().unwrap();
        let other_dir = tempfile::tempdir().unwrap();
        let log_dir_str = log_dir.path().to_str().unwrap().to_string();
        let other_dir_str = other_dir.path().to_str().unwrap().to_string();

        init_logging("info", &log_dir_str).unwrap();
        init_logging("INFO", &log_dir_str).unwrap();

        let level_error = init_logging("debug", &log_dir_str).unwrap_err();
        assert!(level_error.contains("refusing to switch"));
        let dir_error = init_logging("info", &other_dir_str).unwrap_err();
        assert!(dir_error.contains("refusing to switch"));

        let (level, dir) = logging_status().unwrap();
        assert_eq!(level, "info");
        assert_eq!(dir, log_dir.path());
    }
}
