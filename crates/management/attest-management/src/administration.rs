use crate::error::ManagementError;
use crate::multi::ManagementMulti;
use crate::single::ManagementSingle;
use attest_types::{Address, CallContext, CreatorOperation, EngineDirectory};
use log::debug;

/// Creator management as exposed by an administration layer.
///
/// Implementors only decide whether the caller is authorized and which
/// engine the call is for; forwarding is shared. The engine sees the
/// administration's own address as caller, so it only accepts calls
/// from the administration it was bound to.
pub trait CreatorAdministration {
    /// Ledger address of this administration instance.
    fn address(&self) -> Address;

    /// Authorize the caller and resolve the engine the call is forwarded to.
    fn route(&self, ctx: &CallContext) -> Result<Address, ManagementError>;

    fn administer(
        &self,
        ctx: &CallContext,
        engines: &mut dyn EngineDirectory,
        operation: &CreatorOperation,
    ) -> Result<(), ManagementError> {
        let target = self.route(ctx).map_err(|e| {
            debug!("Administration {} rejected {:?} from {}: {}", self.address(), operation, ctx.caller, e);
            e
        })?;
        let engine = engines
            .engine_mut(&target)
            .ok_or(ManagementError::EngineNotFound(target))?;

        debug!("Administration {} forwarding {:?} to engine {}", self.address(), operation, target);
        engine.apply(&ctx.forwarded_by(self.address()), operation)?;
        Ok(())
    }

    fn configure_document_creator(
        &self,
        ctx: &CallContext,
        engines: &mut dyn EngineDirectory,
        creator: Address,
        amount: u64,
    ) -> Result<(), ManagementError> {
        self.administer(ctx, engines, &CreatorOperation::Configure { creator, amount })
    }

    fn remove_document_creator(
        &self,
        ctx: &CallContext,
        engines: &mut dyn EngineDirectory,
        creator: Address,
    ) -> Result<(), ManagementError> {
        self.administer(ctx, engines, &CreatorOperation::Remove { creator })
    }

    fn increase_document_creator_allowance(
        &self,
        ctx: &CallContext,
        engines: &mut dyn EngineDirectory,
        creator: Address,
        delta: u64,
    ) -> Result<(), ManagementError> {
        self.administer(ctx, engines, &CreatorOperation::Increase { creator, delta })
    }

    fn decrease_document_creator_allowance(
        &self,
        ctx: &CallContext,
        engines: &mut dyn EngineDirectory,
        creator: Address,
        delta: u64,
    ) -> Result<(), ManagementError> {
        self.administer(ctx, engines, &CreatorOperation::Decrease { creator, delta })
    }
}

/// Either administration variant, as stored by the ledger.
#[derive(Debug, Clone)]
pub enum Administration {
    Single(ManagementSingle),
    Multi(ManagementMulti),
}

impl Administration {
    pub fn owner(&self) -> Address {
        match self {
            Administration::Single(single) => single.owner(),
            Administration::Multi(multi) => multi.owner(),
        }
    }
}

impl CreatorAdministration for Administration {
    fn address(&self) -> Address {
        match self {
            Administration::Single(single) => single.address(),
            Administration::Multi(multi) => multi.address(),
        }
    }

    fn route(&self, ctx: &CallContext) -> Result<Address, ManagementError> {
        match self {
            Administration::Single(single) => single.route(ctx),
            Administration::Multi(multi) => multi.route(ctx),
        }
    }
}

impl From<ManagementSingle> for Administration {
    fn from(value: ManagementSingle) -> Self {
        Administration::Single(value)
    }
}

impl From<ManagementMulti> for Administration {
    fn from(value: ManagementMulti) -> Self {
        Administration::Multi(value)
    }
}
