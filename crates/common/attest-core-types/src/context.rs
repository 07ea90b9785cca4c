use crate::address::Address;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// The authenticated caller of a ledger call and the ledger time it runs at.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Address,
    pub now: Timestamp,
}

impl CallContext {
    pub fn new(caller: Address, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// The same call re-issued by `caller`, e.g. an administration forwarding to its engine.
    pub fn forwarded_by(&self, caller: Address) -> Self {
        Self { caller, now: self.now }
    }
}
