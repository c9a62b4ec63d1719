//! Identifiers for catalog entities
//!
//! Pair identifiers are free-form strings supplied by the catalog file and by
//! share links, so they are wrapped rather than interned.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a vehicle pair within a catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(pub String);

impl PairId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PairId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PairId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
