use crate::administration::CreatorAdministration;
use crate::error::ManagementError;
use crate::ownable::Ownable;
use attest_types::{Address, CallContext};
use log::info;
use std::collections::HashMap;

/// One owner delegating engines to controllers.
///
/// Each controller is bound to exactly one engine and can only manage
/// creators there. The owner manages the bindings but is not a controller
/// unless it binds itself.
#[derive(Debug, Clone)]
pub struct ManagementMulti {
    address: Address,
    ownable: Ownable,
    // controller -> bound engine
    controllers: HashMap<Address, Address>,
}

impl ManagementMulti {
    pub fn new(address: Address, owner: Address) -> Self {
        Self {
            address,
            ownable: Ownable::new(owner),
            controllers: HashMap::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    /// Bind `controller` to `engine`, replacing any previous binding.
    /// Binding to the zero address is the same as removing the controller.
    pub fn configure_controller(
        &mut self,
        ctx: &CallContext,
        controller: Address,
        engine: Address,
    ) -> Result<(), ManagementError> {
        self.ownable.only_owner(ctx)?;
        if engine.is_zero() {
            self.controllers.remove(&controller);
            info!("Controller {} unbound", controller);
        } else {
            self.controllers.insert(controller, engine);
            info!("Controller {} bound to engine {}", controller, engine);
        }
        Ok(())
    }

    pub fn remove_controller(&mut self, ctx: &CallContext, controller: Address) -> Result<(), ManagementError> {
        self.ownable.only_owner(ctx)?;
        self.controllers.remove(&controller);
        info!("Controller {} removed", controller);
        Ok(())
    }

    /// Engine bound to `controller`, or the zero address.
    pub fn get_document_verification_management(&self, controller: &Address) -> Address {
        self.controllers.get(controller).copied().unwrap_or(Address::ZERO)
    }

    /// Active (controller, engine) bindings.
    pub fn controllers(&self) -> impl Iterator<Item = (&Address, &Address)> {
        self.controllers.iter()
    }

    pub fn transfer_ownership(&mut self, ctx: &CallContext, new_owner: Address) -> Result<(), ManagementError> {
        self.ownable.transfer_ownership(ctx, new_owner)
    }

    pub fn renounce_ownership(&mut self, ctx: &CallContext) -> Result<(), ManagementError> {
        self.ownable.renounce_ownership(ctx)
    }
}

impl CreatorAdministration for ManagementMulti {
    fn address(&self) -> Address {
        self.address
    }

    fn route(&self, ctx: &CallContext) -> Result<Address, ManagementError> {
        self.controllers
            .get(&ctx.caller)
            .copied()
            .ok_or(ManagementError::CallerIsNotController)
    }
}
