use std::fmt::{self, Display};

use logger::LoggerError;

/// Errors from resolving user input into a location.
///
/// The possible errors are:
///
/// - `EmptyQuery`: the search text was blank; the UI ignores it.
/// - `NotFound`: no known address matches the search text.
/// - `PlaceNotFound`: an autocomplete suggestion without a location was picked.
///
/// The `Display` text is shown to the user as is.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeError {
    EmptyQuery,
    NotFound(String),
    PlaceNotFound(String),
}

impl Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::EmptyQuery => write!(f, "Type an address to search."),
            GeocodeError::NotFound(_) => {
                write!(f, "Location not found. Try a different address.")
            }
            GeocodeError::PlaceNotFound(_) => write!(f, "Place not found."),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Errors from loading the gazetteer that backs geocoding.
#[derive(Debug)]
pub enum GazetteerError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl Display for GazetteerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GazetteerError::Io(e) => write!(f, "[Gazetteer]: could not read file: {}", e),
            GazetteerError::Csv(e) => write!(f, "[Gazetteer]: malformed CSV: {}", e),
        }
    }
}

impl std::error::Error for GazetteerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GazetteerError::Io(e) => Some(e),
            GazetteerError::Csv(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for GazetteerError {
    fn from(err: std::io::Error) -> Self {
        GazetteerError::Io(err)
    }
}

impl From<csv::Error> for GazetteerError {
    fn from(err: csv::Error) -> Self {
        GazetteerError::Csv(err)
    }
}

/// Errors from loading the sample activity list.
#[derive(Debug)]
pub enum ActivityError {
    Csv(csv::Error),
    UnknownCategory(String),
}

impl Display for ActivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityError::Csv(e) => write!(f, "[Activities]: malformed CSV: {}", e),
            ActivityError::UnknownCategory(id) => {
                write!(f, "[Activities]: unknown category '{}'", id)
            }
        }
    }
}

impl std::error::Error for ActivityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActivityError::Csv(e) => Some(e),
            ActivityError::UnknownCategory(_) => None,
        }
    }
}

impl From<csv::Error> for ActivityError {
    fn from(err: csv::Error) -> Self {
        ActivityError::Csv(err)
    }
}

/// Errors that stop the explorer from starting.
#[derive(Debug)]
pub enum ExplorerError {
    Logger(LoggerError),
    Window(eframe::Error),
}

impl Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerError::Logger(e) => write!(f, "[Logger]: {}", e),
            ExplorerError::Window(e) => write!(f, "[Window]: {}", e),
        }
    }
}

impl std::error::Error for ExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExplorerError::Logger(e) => Some(e),
            ExplorerError::Window(e) => Some(e),
        }
    }
}

impl From<LoggerError> for ExplorerError {
    fn from(err: LoggerError) -> Self {
        ExplorerError::Logger(err)
    }
}

impl From<eframe::Error> for ExplorerError {
    fn from(err: eframe::Error) -> Self {
        ExplorerError::Window(err)
    }
}
