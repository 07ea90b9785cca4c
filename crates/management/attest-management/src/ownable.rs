use crate::error::ManagementError;
use attest_types::{Address, CallContext};
use log::info;
use serde::{Deserialize, Serialize};

/// Single-owner gate shared by both administration variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownable {
    owner: Address,
}

impl Ownable {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn only_owner(&self, ctx: &CallContext) -> Result<(), ManagementError> {
        // a renounced owner (zero) can never match a real caller
        if self.owner.is_zero() || ctx.caller != self.owner {
            return Err(ManagementError::CallerIsNotOwner);
        }
        Ok(())
    }

    pub fn transfer_ownership(&mut self, ctx: &CallContext, new_owner: Address) -> Result<(), ManagementError> {
        self.only_owner(ctx)?;
        if new_owner.is_zero() {
            return Err(ManagementError::NewOwnerIsZeroAddress);
        }
        info!("Ownership transferred from {} to {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }

    pub fn renounce_ownership(&mut self, ctx: &CallContext) -> Result<(), ManagementError> {
        self.only_owner(ctx)?;
        info!("Ownership renounced by {}", self.owner);
        self.owner = Address::ZERO;
        Ok(())
    }
}
