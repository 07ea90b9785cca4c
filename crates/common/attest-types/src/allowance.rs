use serde::{Deserialize, Serialize};

/// Creation rights of one identity on one engine.
///
/// Membership and remaining credit are independent: an exhausted creator
/// keeps `is_creator` until it is explicitly removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorAllowance {
    pub is_creator: bool,
    pub allowance: u64,
}

impl CreatorAllowance {
    pub fn granted(allowance: u64) -> Self {
        Self { is_creator: true, allowance }
    }
}
