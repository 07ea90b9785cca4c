use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing identity primitives from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Missing 0x prefix in {0}")]
    MissingPrefix(String),

    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("Invalid length: expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },
}

/// A 20-byte account identity on the ledger.
///
/// Both people (owners, controllers, creators, signers) and deployed
/// instances (engines, administrations) are addressed this way.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// The null identity. Used for cleared bindings and renounced ownership.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Derive a deterministic identity from a human readable label.
    pub fn from_seed(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        Self::from_digest(&digest)
    }

    /// Address of the `nonce`-th instance deployed by `deployer`.
    pub fn derive(deployer: &Address, nonce: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(deployer.0);
        hasher.update(nonce.to_be_bytes());
        Self::from_digest(&hasher.finalize())
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut bytes = [0u8; 20];
        // last 20 bytes, like an account derived from a key hash
        bytes.copy_from_slice(&digest[digest.len() - 20..]);
        Address(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("0x")
            .ok_or_else(|| IdentityError::MissingPrefix(s.to_string()))?;
        let raw = hex::decode(body).map_err(|e| IdentityError::InvalidHex(e.to_string()))?;
        let bytes: [u8; 20] = raw
            .as_slice()
            .try_into()
            .map_err(|_| IdentityError::InvalidLength { expected: 20, found: raw.len() })?;
        Ok(Address(bytes))
    }
}
