// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Error type used by the configuration layer. Assembling and publishing
//! the feature table never fails, so nothing in the registry core returns
//! these.

use std::error;
use std::fmt;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// The crate error
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    origin: Option<Box<dyn error::Error + Send + Sync>>,
    errmsg: Option<String>,
}

/// Broad classification of an [Error]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /* The configuration is malformed, see errmsg or origin */
    Config,
    /* No configuration file could be located, see errmsg */
    NotFound,
    /* Other error, see origin */
    Nested,
}

impl Error {
    /// Configuration error carrying a descriptive message
    pub fn config(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::Config,
            origin: None,
            errmsg: Some(errmsg),
        }
    }

    /// Configuration error wrapping the parser error that caused it
    pub fn config_from_error<E>(error: E) -> Error
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error {
            kind: ErrorKind::Config,
            origin: Some(error.into()),
            errmsg: None,
        }
    }

    /// A required file or value was not found
    pub fn not_found(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::NotFound,
            origin: None,
            errmsg: Some(errmsg),
        }
    }

    /// Wraps any other error
    pub fn other_error<E>(error: E) -> Error
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error {
            kind: ErrorKind::Nested,
            origin: Some(error.into()),
            errmsg: None,
        }
    }

    /// Returns the error classification
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = match self.kind {
            ErrorKind::Config => "invalid configuration",
            ErrorKind::NotFound => "not found",
            ErrorKind::Nested => "error",
        };
        match (&self.errmsg, &self.origin) {
            (Some(msg), _) => write!(f, "{}: {}", prefix, msg),
            (None, Some(origin)) => write!(f, "{}: {}", prefix, origin),
            (None, None) => write!(f, "{}", prefix),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.origin {
            Some(e) => Some(e.as_ref()),
            None => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::other_error(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Error {
        Error::config_from_error(error)
    }
}
