/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of moto-lab.
 *
 * moto-lab is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * moto-lab is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with moto-lab. If not, see <https://www.gnu.org/licenses/>.
 */

use std::{error, fmt, io, result};
use std::fmt::{Display, Formatter};
use thiserror::Error as ThisError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error{
    kind: ErrorKind,
    details: String
}

impl Error {
    pub fn new(kind: ErrorKind, details: String) -> Error {
        Error{ kind, details }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kind.as_str(), self.details)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::new(ErrorKind::IOError, format!("{}. {}", e.to_string(), e.kind().to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::new(ErrorKind::JsonDecodeError, e.to_string())
    }
}

impl From<ParseLabelError> for Error {
    fn from(e: ParseLabelError) -> Self {
        Error::new(ErrorKind::InvalidInput, e.to_string())
    }
}


#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    InvalidInput,
    LookupMiss,
    InvalidCatalog,
    IOError,
    JsonDecodeError
}

impl ErrorKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::LookupMiss => "no such entry",
            ErrorKind::InvalidCatalog => "invalid catalog",
            ErrorKind::IOError => "io error",
            ErrorKind::JsonDecodeError => "json decode error"
        }
    }
}

/// Raised when a label can't be mapped onto one of the fixed variants of a category
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {category} '{value}'")]
pub struct ParseLabelError {
    category: &'static str,
    value: String
}

impl ParseLabelError {
    pub fn new(category: &'static str, value: &str) -> ParseLabelError {
        ParseLabelError {
            category,
            value: String::from(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorKind, ParseLabelError};

    #[test]
    fn error_display() {
        let err = Error::new(ErrorKind::InvalidInput, "front sprocket can't be 0".to_string());
        assert_eq!(err.to_string(), "invalid input - front sprocket can't be 0");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn parse_error_converts_to_invalid_input() {
        let err: Error = ParseLabelError::new("tier", "turbo").into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.details(), "Unknown tier 'turbo'");
    }
}
