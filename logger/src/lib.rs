use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Severity of a log line. Lines below the logger's threshold are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(LoggerError::InvalidLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Writes the log of one explorer session to `<log_dir>/<session>.log`,
/// optionally echoing every line to stdout.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
    threshold: Level,
    echo: bool,
}

impl Logger {
    /// Creates a new `Logger` for a session.
    ///
    /// # Parameters
    /// - `log_dir`: Directory that holds the log file. Created if missing.
    /// - `session`: Name of the session; used as the log file stem.
    ///
    /// The log file is truncated, so every run starts with an empty log.
    pub fn new(log_dir: &Path, session: &str) -> Result<Self, LoggerError> {
        if log_dir.exists() && !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory",
                log_dir.display()
            )));
        }
        std::fs::create_dir_all(log_dir)?;

        let stem: String = session
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        if stem.is_empty() {
            return Err(LoggerError::InvalidPath("empty session name".into()));
        }
        let log_file = log_dir.join(format!("{stem}.log"));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger {
            log_file,
            threshold: Level::Info,
            echo: false,
        })
    }

    /// Also print every accepted line to stdout, coloured by level.
    pub fn with_console(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Drops lines whose level is below `threshold`.
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    fn log(&self, level: Level, color: Option<Color>, message: &str) -> Result<(), LoggerError> {
        if level < self.threshold {
            return Ok(());
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        if self.echo {
            let ansi = match (level, color) {
                (Level::Warn, _) => "\x1b[93m",
                (Level::Error, _) => "\x1b[91m",
                (_, Some(color)) => color.to_ansi_code(),
                (_, None) => Color::White.to_ansi_code(),
            };
            let mut stdout = io::stdout().lock();
            write!(stdout, "{ansi}{line}\x1b[0m")?;
            stdout.flush()?;
        }

        let mut file = OpenOptions::new().append(true).open(&self.log_file)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    pub fn debug(&self, message: &str) -> Result<(), LoggerError> {
        self.log(Level::Debug, Some(Color::Cyan), message)
    }

    /// Logs an informational message, echoed in `color` when console output is on.
    pub fn info(&self, message: &str, color: Color) -> Result<(), LoggerError> {
        self.log(Level::Info, Some(color), message)
    }

    pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
        self.log(Level::Warn, None, message)
    }

    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.log(Level::Error, None, message)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(io::Error),
    InvalidPath(String),
    InvalidLevel(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
            LoggerError::InvalidLevel(level) => write!(f, "Invalid Level: {}", level),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) | LoggerError::InvalidLevel(_) => None,
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(err: io::Error) -> Self {
        LoggerError::IoError(err)
    }
}
