// src/lib.rs for attest-core-types

pub mod address;
pub mod context;
pub mod fingerprint;
pub mod time;

pub use address::{Address, IdentityError};
pub use context::CallContext;
pub use fingerprint::Fingerprint;
pub use time::{days_to_seconds, Timestamp, SECONDS_PER_DAY};
