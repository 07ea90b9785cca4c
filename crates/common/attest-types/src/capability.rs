use crate::error::VerificationError;
use attest_core_types::{Address, CallContext};
use serde::{Deserialize, Serialize};

/// A creator-management mutation, routed as one unit through an
/// administration layer into its engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CreatorOperation {
    Configure { creator: Address, amount: u64 },
    Remove { creator: Address },
    Increase { creator: Address, delta: u64 },
    Decrease { creator: Address, delta: u64 },
}

/// Operations an engine exposes to the administration layer bound to it.
pub trait DocumentCreatorManagement {
    /// Grant creator status with exactly `amount` credits.
    fn configure_document_creator(
        &mut self,
        ctx: &CallContext,
        creator: Address,
        amount: u64,
    ) -> Result<(), VerificationError>;

    fn remove_document_creator(&mut self, ctx: &CallContext, creator: Address) -> Result<(), VerificationError>;

    fn increase_document_creator_allowance(
        &mut self,
        ctx: &CallContext,
        creator: Address,
        delta: u64,
    ) -> Result<(), VerificationError>;

    fn decrease_document_creator_allowance(
        &mut self,
        ctx: &CallContext,
        creator: Address,
        delta: u64,
    ) -> Result<(), VerificationError>;

    fn is_document_creator(&self, creator: &Address) -> bool;

    fn document_creator_allowance(&self, creator: &Address) -> u64;

    /// Dispatch a typed operation to the matching method.
    fn apply(&mut self, ctx: &CallContext, operation: &CreatorOperation) -> Result<(), VerificationError> {
        match *operation {
            CreatorOperation::Configure { creator, amount } => self.configure_document_creator(ctx, creator, amount),
            CreatorOperation::Remove { creator } => self.remove_document_creator(ctx, creator),
            CreatorOperation::Increase { creator, delta } => {
                self.increase_document_creator_allowance(ctx, creator, delta)
            }
            CreatorOperation::Decrease { creator, delta } => {
                self.decrease_document_creator_allowance(ctx, creator, delta)
            }
        }
    }
}

/// Resolves engine addresses for administration layers that forward to them.
pub trait EngineDirectory {
    fn engine_mut(&mut self, address: &Address) -> Option<&mut dyn DocumentCreatorManagement>;
}
