//! Process-wide file logging.
//!
//! # Responsibility
//! - Start a rotating file logger once per process.
//! - Record panics as sanitized, single-line log events.
//!
//! # Invariants
//! - Repeating `init_logging` with the same settings is a no-op.
//! - Changing level or directory after the first init is rejected.
//! - Initialization reports failures as values and never panics.
//! - Log events carry metadata only, never resume text.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "resume_core";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;
const PANIC_MESSAGE_LIMIT: usize = 120;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name case-insensitively; `warning` is accepted.
    pub fn parse(value: &str) -> Result<Self, LoggingError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LoggingError::UnknownLevel(value.trim().to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Logging bootstrap failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnknownLevel(String),
    /// Directory is empty or relative.
    InvalidDirectory(String),
    CreateDirectory { dir: PathBuf, message: String },
    Backend(String),
    /// Logging already runs with different settings.
    Conflict {
        active_level: LogLevel,
        active_dir: PathBuf,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(value) => write!(
                f,
                "unknown log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidDirectory(value) => {
                write!(f, "log directory must be a non-empty absolute path, got `{value}`")
            }
            Self::CreateDirectory { dir, message } => {
                write!(f, "cannot create log directory `{}`: {message}", dir.display())
            }
            Self::Backend(message) => write!(f, "logger backend failed to start: {message}"),
            Self::Conflict {
                active_level,
                active_dir,
            } => write!(
                f,
                "logging already active at level `{}` in `{}`",
                active_level.as_str(),
                active_dir.display()
            ),
        }
    }
}

impl Error for LoggingError {}

struct ActiveLogger {
    level: LogLevel,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under `log_dir`.
///
/// # Errors
/// - `level` is not a known level name.
/// - `log_dir` is empty, relative, or cannot be created.
/// - The logger backend cannot start.
/// - Logging already runs with a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = LogLevel::parse(level)?;
    let dir = absolute_dir(log_dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &dir))?;
    if active.level != level || active.dir != dir {
        return Err(LoggingError::Conflict {
            active_level: active.level,
            active_dir: active.dir.clone(),
        });
    }
    Ok(())
}

/// Active `(level, directory)`, or `None` before `init_logging` succeeded.
pub fn logging_status() -> Option<(LogLevel, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        LogLevel::Debug.as_str()
    } else {
        LogLevel::Info.as_str()
    }
}

fn start_logger(level: LogLevel, dir: &Path) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|err| LoggingError::CreateDirectory {
        dir: dir.to_path_buf(),
        message: err.to_string(),
    })?;

    let handle = Logger::try_with_str(level.as_str())
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook();
    info!(
        "event=logging_start module=logging status=ok level={} dir={} os={} version={}",
        level.as_str(),
        dir.display(),
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn absolute_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    let path = Path::new(trimmed);
    if trimmed.is_empty() || !path.is_absolute() {
        return Err(LoggingError::InvalidDirectory(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic module=logging status=error location={location} message={}",
            single_line(&message, PANIC_MESSAGE_LIMIT)
        );
        previous(info);
    }));
}

/// Flattens newlines and caps length at `limit` characters.
fn single_line(value: &str, limit: usize) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= limit {
        return flat;
    }
    let mut capped: String = flat.chars().take(limit).collect();
    capped.push_str("...");
    capped
}

#[cfg(test)]
mod tests {
    use super::{absolute_dir, init_logging, logging_status, single_line, LogLevel, LoggingError};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" WARNING "), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::parse("Info"), Ok(LogLevel::Info));
        assert!(matches!(
            LogLevel::parse("verbose"),
            Err(LoggingError::UnknownLevel(_))
        ));
    }

    #[test]
    fn relative_and_empty_dirs_are_rejected() {
        assert!(absolute_dir("logs").is_err());
        assert!(absolute_dir("   ").is_err());
    }

    #[test]
    fn single_line_flattens_and_caps() {
        assert_eq!(single_line("a\nb\rc", 10), "a b c");
        assert_eq!(single_line("abcdefgh", 4), "abcd...");
    }

    fn scratch_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "resume-core-logs-{label}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn repeat_init_is_idempotent_and_conflicts_are_rejected() {
        let first = scratch_dir("first");
        let second = scratch_dir("second");
        let first_dir = first.to_str().expect("utf-8 path").to_string();
        let second_dir = second.to_str().expect("utf-8 path").to_string();

        init_logging("info", &first_dir).expect("first init");
        init_logging("INFO", &first_dir).expect("same settings are idempotent");

        assert!(matches!(
            init_logging("debug", &first_dir),
            Err(LoggingError::Conflict { .. })
        ));
        assert!(matches!(
            init_logging("info", &second_dir),
            Err(LoggingError::Conflict { .. })
        ));

        let (level, dir) = logging_status().expect("logging active");
        assert_eq!(level, LogLevel::Info);
        assert_eq!(dir, first);
    }
}
