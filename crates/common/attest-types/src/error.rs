use attest_core_types::Timestamp;
use thiserror::Error;

/// Failures raised by the verification engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    // Authorization
    #[error("CallerIsNotManagement()")]
    CallerIsNotManagement,

    #[error("CallerIsNotDocumentCreator()")]
    CallerIsNotDocumentCreator,

    // State preconditions
    #[error("DocumentIsAlreadyOnVerification()")]
    DocumentIsAlreadyOnVerification,

    #[error("InvalidDocument()")]
    InvalidDocument,

    #[error("SignerIsNotRequested()")]
    SignerIsNotRequested,

    #[error("SignerAlreadySigned()")]
    SignerAlreadySigned,

    #[error("SignerDidNotSigned()")]
    SignerDidNotSigned,

    #[error("DocumentCreatorNotFound()")]
    DocumentCreatorNotFound,

    // Quantitative
    #[error("RequestedSignersAreNotEnough({sent}, {required})")]
    RequestedSignersAreNotEnough { sent: usize, required: usize },

    #[error("DecrementAmountExceedsAllowance()")]
    DecrementAmountExceedsAllowance,

    #[error("DocumentCreatorAllowanceNotEnough()")]
    DocumentCreatorAllowanceNotEnough,

    #[error("AllowanceOverflow()")]
    AllowanceOverflow,

    // Temporal
    #[error("LateToExecute({0})")]
    LateToExecute(Timestamp),

    // Decoding
    #[error("Unknown verification type: {0}")]
    UnknownVerificationType(u8),
}
