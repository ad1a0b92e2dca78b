// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Specific failures while reading the content catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The JSON could not be parsed into the catalog shape.
    Malformed(String),

    /// Two items share the same identifier.
    DuplicateId(String),

    /// A featured entry references an item that does not exist.
    UnknownFeatured(String),

    /// The embedded default fixture is missing from the binary.
    MissingFixture,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog: {}", msg),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate item id: {}", id),
            CatalogError::UnknownFeatured(id) => {
                write!(f, "Featured item does not exist: {}", id)
            }
            CatalogError::MissingFixture => write!(f, "Embedded catalog fixture is missing"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Catalog(CatalogError::Malformed(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
