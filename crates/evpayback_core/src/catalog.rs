//! Vehicle pair catalog
//!
//! An ordered, read-only list of [`VehiclePairRecord`] with an id index. The
//! catalog is loaded once at startup; every other operation only looks pairs
//! up by id.

use rustc_hash::FxHashMap;

use crate::error::{CatalogError, LookupError};
use crate::model::{DEFAULT_PAIR_ID, PairId, VehiclePairRecord};

#[derive(Debug, Clone)]
pub struct VehiclePairCatalog {
    pairs: Vec<VehiclePairRecord>,
    index: FxHashMap<PairId, usize>,
    default_id: PairId,
}

impl VehiclePairCatalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// The fallback pair is [`DEFAULT_PAIR_ID`] when present, otherwise the
    /// first record.
    pub fn from_records(pairs: Vec<VehiclePairRecord>) -> Result<Self, CatalogError> {
        let Some(first) = pairs.first() else {
            return Err(CatalogError::Empty);
        };
        let first_id = first.id.clone();

        let mut index = FxHashMap::default();
        for (i, pair) in pairs.iter().enumerate() {
            if let Some(reason) = pair.validation_error() {
                return Err(CatalogError::InvalidRecord {
                    id: pair.id.clone(),
                    reason,
                });
            }
            if index.insert(pair.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(pair.id.clone()));
            }
        }

        let preferred = PairId::from(DEFAULT_PAIR_ID);
        let default_id = if index.contains_key(&preferred) {
            preferred
        } else {
            first_id
        };

        tracing::debug!(pairs = pairs.len(), default = %default_id, "Catalog loaded");

        Ok(Self {
            pairs,
            index,
            default_id,
        })
    }

    /// Parse a catalog from `pairs.json` text (a JSON array of records)
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let pairs: Vec<VehiclePairRecord> = serde_json::from_str(json)?;
        Self::from_records(pairs)
    }

    /// Replace the fallback pair used for unknown ids
    pub fn with_default(mut self, id: impl Into<PairId>) -> Result<Self, CatalogError> {
        let id = id.into();
        if !self.index.contains_key(&id) {
            return Err(CatalogError::MissingDefault(id));
        }
        self.default_id = id;
        Ok(self)
    }

    pub fn get(&self, id: &PairId) -> Option<&VehiclePairRecord> {
        self.index.get(id).map(|&i| &self.pairs[i])
    }

    /// Strict lookup for callers that must not fall back
    pub fn lookup(&self, id: &PairId) -> Result<&VehiclePairRecord, LookupError> {
        self.get(id)
            .ok_or_else(|| LookupError::PairNotFound(id.clone()))
    }

    pub fn contains(&self, id: &PairId) -> bool {
        self.index.contains_key(id)
    }

    pub fn default_id(&self) -> &PairId {
        &self.default_id
    }

    /// The requested id if it is in the catalog, otherwise the fallback pair
    pub fn resolve_pair_id<'a>(&'a self, requested: &'a PairId) -> &'a PairId {
        if self.contains(requested) {
            requested
        } else {
            tracing::debug!(requested = %requested, fallback = %self.default_id, "Unknown pair id");
            &self.default_id
        }
    }

    /// Look up a pair, substituting the fallback pair for unknown ids
    pub fn resolve(&self, requested: &PairId) -> &VehiclePairRecord {
        let id = self.resolve_pair_id(requested);
        &self.pairs[self.index[id]]
    }

    pub fn pairs(&self) -> &[VehiclePairRecord] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
