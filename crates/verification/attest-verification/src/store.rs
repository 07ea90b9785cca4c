use attest_types::{Address, CreatorAllowance, Document, Fingerprint};
use std::collections::HashMap;

/// Documents keyed by fingerprint. Records are never removed.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: HashMap<Fingerprint, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Document> {
        self.documents.get(fingerprint)
    }

    pub fn get_mut(&mut self, fingerprint: &Fingerprint) -> Option<&mut Document> {
        self.documents.get_mut(fingerprint)
    }

    /// Insert a new record. Returns false and leaves the store untouched if
    /// the fingerprint is already present.
    pub fn insert(&mut self, fingerprint: Fingerprint, document: Document) -> bool {
        if self.documents.contains_key(&fingerprint) {
            return false;
        }
        self.documents.insert(fingerprint, document);
        true
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Creator allowance records keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct CreatorStore {
    records: HashMap<Address, CreatorAllowance>,
}

impl CreatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for `creator`, or an empty one if it was never configured.
    pub fn get(&self, creator: &Address) -> CreatorAllowance {
        self.records.get(creator).copied().unwrap_or_default()
    }

    /// Existing record of a current creator, if any.
    pub fn active_mut(&mut self, creator: &Address) -> Option<&mut CreatorAllowance> {
        self.records.get_mut(creator).filter(|record| record.is_creator)
    }

    pub fn set(&mut self, creator: Address, record: CreatorAllowance) {
        self.records.insert(creator, record);
    }
}
