use crate::error::VerificationError;
use attest_core_types::{Address, Timestamp};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Quorum rule chosen for a document at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    /// Every requested signer must have signed
    Multisig = 1,

    /// Strictly more than half of the requested signers must have signed
    Voting = 2,
}

impl VerificationType {
    /// Signatures needed out of `requested` for the document to be legit.
    pub fn required_signatures(&self, requested: usize) -> usize {
        match self {
            VerificationType::Multisig => requested,
            VerificationType::Voting => requested / 2 + 1,
        }
    }
}

impl TryFrom<u8> for VerificationType {
    type Error = VerificationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VerificationType::Multisig),
            2 => Ok(VerificationType::Voting),
            other => Err(VerificationError::UnknownVerificationType(other)),
        }
    }
}

impl From<VerificationType> for u8 {
    fn from(value: VerificationType) -> Self {
        value as u8
    }
}

/// An active signature on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub signer: Address,
    pub signed_at: Timestamp,
}

/// A document registered for verification, keyed by its fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub creator: Address,

    /// Sign and revoke are accepted up to and including this time
    pub verification_deadline: Timestamp,

    /// The document can only be legit up to and including this time
    pub document_deadline: Timestamp,

    pub verification_type: VerificationType,

    /// Fixed at creation, no duplicates
    pub requested_signers: Vec<Address>,

    pub verification_created_at: Timestamp,

    pub signatures: Vec<SignatureRecord>,
}

impl Document {
    pub fn is_requested(&self, signer: &Address) -> bool {
        self.requested_signers.contains(signer)
    }

    pub fn has_signed(&self, signer: &Address) -> bool {
        self.signatures.iter().any(|s| &s.signer == signer)
    }

    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    /// Quorum check, ignoring deadlines.
    pub fn quorum_reached(&self) -> bool {
        let required = self
            .verification_type
            .required_signatures(self.requested_signers.len());
        self.signatures.len() >= required
    }

    /// Every active signer is requested and appears once.
    pub fn signatures_consistent(&self) -> bool {
        self.signatures.len() <= self.requested_signers.len()
            && self.signatures.iter().enumerate().all(|(i, s)| {
                self.is_requested(&s.signer)
                    && !self.signatures[..i].iter().any(|p| p.signer == s.signer)
            })
    }

    /// JSON view of the record, for export by collaborators.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
