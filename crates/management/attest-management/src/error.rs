use attest_types::{Address, VerificationError};
use thiserror::Error;

/// Failures raised by an administration layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagementError {
    #[error("Ownable: caller is not the owner")]
    CallerIsNotOwner,

    #[error("Ownable: new owner is the zero address")]
    NewOwnerIsZeroAddress,

    #[error("CallerIsNotController()")]
    CallerIsNotController,

    #[error("Document management interface is not set")]
    ManagementInterfaceNotSet,

    #[error("No verification engine at {0}")]
    EngineNotFound(Address),

    #[error("{0}")]
    Verification(#[from] VerificationError),
}
