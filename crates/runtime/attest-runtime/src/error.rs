use attest_management::ManagementError;
use attest_types::{Address, Timestamp, VerificationError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No instance deployed at {0}")]
    UnknownInstance(Address),

    #[error("Instance at {address} is not a {expected}")]
    WrongInstanceKind { address: Address, expected: &'static str },

    #[error("Clock cannot move backwards from {current} to {requested}")]
    ClockRegression { current: Timestamp, requested: Timestamp },

    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    #[error("Management error: {0}")]
    Management(#[from] ManagementError),
}
