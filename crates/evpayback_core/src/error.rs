use std::fmt;

use crate::model::PairId;

/// Errors related to catalog lookups
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    PairNotFound(PairId),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::PairNotFound(id) => write!(f, "vehicle pair {id:?} not found"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors raised while building a catalog.
///
/// Nothing can be computed without a catalog, so callers should treat these
/// as fatal rather than continue with an empty one.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Catalog text is not a valid list of pair records
    Parse(String),
    /// Catalog contains no records
    Empty,
    DuplicateId(PairId),
    InvalidRecord {
        id: PairId,
        reason: &'static str,
    },
    /// The fallback pair is not part of the catalog
    MissingDefault(PairId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "failed to parse catalog: {msg}"),
            CatalogError::Empty => write!(f, "catalog contains no vehicle pairs"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate vehicle pair id {id:?}"),
            CatalogError::InvalidRecord { id, reason } => {
                write!(f, "invalid vehicle pair {id:?}: {reason}")
            }
            CatalogError::MissingDefault(id) => {
                write!(f, "default vehicle pair {id:?} is not in the catalog")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
