//! attest-types
//! Document, allowance and error model shared by the verification engine
//! and the administration layers, plus the access-control capability that
//! connects them.

pub mod allowance;
pub mod capability;
pub mod document;
pub mod error;

pub use allowance::CreatorAllowance;
pub use capability::{CreatorOperation, DocumentCreatorManagement, EngineDirectory};
pub use document::{Document, SignatureRecord, VerificationType};
pub use error::VerificationError;

// Re-export the primitives so downstream crates need a single import
pub use attest_core_types::{Address, CallContext, Fingerprint, Timestamp};
