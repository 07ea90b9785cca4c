use crate::administration::CreatorAdministration;
use crate::error::ManagementError;
use crate::ownable::Ownable;
use attest_types::{Address, CallContext};
use log::info;

/// One owner administering exactly one verification engine.
#[derive(Debug, Clone)]
pub struct ManagementSingle {
    address: Address,
    ownable: Ownable,
    management_interface: Option<Address>,
}

impl ManagementSingle {
    /// A new administration at `address`, owned by `owner`, with no engine bound yet.
    pub fn new(address: Address, owner: Address) -> Self {
        Self {
            address,
            ownable: Ownable::new(owner),
            management_interface: None,
        }
    }

    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    /// The engine creator-management calls are forwarded to.
    pub fn management_interface(&self) -> Option<Address> {
        self.management_interface
    }

    /// Bind (or rebind) the engine. Setting the zero address unbinds.
    pub fn set_document_management_interface(
        &mut self,
        ctx: &CallContext,
        engine: Address,
    ) -> Result<(), ManagementError> {
        self.ownable.only_owner(ctx)?;
        if engine.is_zero() {
            self.management_interface = None;
            info!("Administration {} unbound from its engine", self.address);
        } else {
            self.management_interface = Some(engine);
            info!("Administration {} bound to engine {}", self.address, engine);
        }
        Ok(())
    }

    pub fn transfer_ownership(&mut self, ctx: &CallContext, new_owner: Address) -> Result<(), ManagementError> {
        self.ownable.transfer_ownership(ctx, new_owner)
    }

    pub fn renounce_ownership(&mut self, ctx: &CallContext) -> Result<(), ManagementError> {
        self.ownable.renounce_ownership(ctx)
    }
}

impl CreatorAdministration for ManagementSingle {
    fn address(&self) -> Address {
        self.address
    }

    fn route(&self, ctx: &CallContext) -> Result<Address, ManagementError> {
        self.ownable.only_owner(ctx)?;
        self.management_interface
            .ok_or(ManagementError::ManagementInterfaceNotSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_types::{DocumentCreatorManagement, EngineDirectory, VerificationError};
    use attest_verification::DocumentVerification;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Engines(HashMap<Address, DocumentVerification>);

    impl EngineDirectory for Engines {
        fn engine_mut(&mut self, address: &Address) -> Option<&mut dyn DocumentCreatorManagement> {
            self.0
                .get_mut(address)
                .map(|engine| engine as &mut dyn DocumentCreatorManagement)
        }
    }

    struct Fixture {
        admin: ManagementSingle,
        engines: Engines,
        engine: Address,
        owner: Address,
        user1: Address,
    }

    fn fixture() -> Fixture {
        let owner = Address::from_seed("admin");
        let admin_address = Address::from_seed("management-single");
        let engine = Address::from_seed("engine");
        let mut engines = Engines::default();
        engines.0.insert(engine, DocumentVerification::new(admin_address));

        let mut admin = ManagementSingle::new(admin_address, owner);
        admin
            .set_document_management_interface(&CallContext::new(owner, 0), engine)
            .unwrap();

        Fixture { admin, engines, engine, owner, user1: Address::from_seed("user1") }
    }

    fn allowance(f: &Fixture, creator: &Address) -> u64 {
        f.engines.0[&f.engine].document_creator_allowance(creator)
    }

    #[test]
    fn test_set_interface_is_owner_only() {
        let mut f = fixture();
        assert_eq!(
            f.admin.set_document_management_interface(&CallContext::new(f.user1, 0), Address::ZERO),
            Err(ManagementError::CallerIsNotOwner)
        );
        assert_eq!(f.admin.management_interface(), Some(f.engine));
    }

    #[test]
    fn test_forwarding_without_interface() {
        let owner = Address::from_seed("admin");
        let admin = ManagementSingle::new(Address::from_seed("fresh"), owner);
        let mut engines = Engines::default();
        assert_eq!(
            admin.configure_document_creator(&CallContext::new(owner, 0), &mut engines, owner, 1),
            Err(ManagementError::ManagementInterfaceNotSet)
        );
    }

    #[test]
    fn test_unbinding_stops_forwarding() {
        let mut f = fixture();
        let owner_ctx = CallContext::new(f.owner, 0);
        f.admin.configure_document_creator(&owner_ctx, &mut f.engines, f.user1, 2).unwrap();

        f.admin.set_document_management_interface(&owner_ctx, Address::ZERO).unwrap();
        assert_eq!(f.admin.management_interface(), None);
        assert_eq!(
            f.admin.increase_document_creator_allowance(&owner_ctx, &mut f.engines, f.user1, 1),
            Err(ManagementError::ManagementInterfaceNotSet)
        );
        assert_eq!(allowance(&f, &f.user1), 2);

        // rebinding restores forwarding
        f.admin.set_document_management_interface(&owner_ctx, f.engine).unwrap();
        f.admin.increase_document_creator_allowance(&owner_ctx, &mut f.engines, f.user1, 1).unwrap();
        assert_eq!(allowance(&f, &f.user1), 3);
    }

    #[test]
    fn test_forwarding_to_missing_engine() {
        let mut f = fixture();
        let ghost = Address::from_seed("ghost");
        f.admin
            .set_document_management_interface(&CallContext::new(f.owner, 0), ghost)
            .unwrap();
        assert_eq!(
            f.admin.configure_document_creator(&CallContext::new(f.owner, 0), &mut f.engines, f.user1, 1),
            Err(ManagementError::EngineNotFound(ghost))
        );
    }

    #[test]
    fn test_creator_lifecycle() {
        let mut f = fixture();
        let owner_ctx = CallContext::new(f.owner, 0);
        let user_ctx = CallContext::new(f.user1, 0);

        assert_eq!(
            f.admin.configure_document_creator(&user_ctx, &mut f.engines, f.user1, 100),
            Err(ManagementError::CallerIsNotOwner)
        );

        f.admin.configure_document_creator(&owner_ctx, &mut f.engines, f.user1, 3).unwrap();
        assert!(f.engines.0[&f.engine].is_document_creator(&f.user1));
        assert_eq!(allowance(&f, &f.user1), 3);

        f.admin.increase_document_creator_allowance(&owner_ctx, &mut f.engines, f.user1, 2).unwrap();
        assert_eq!(allowance(&f, &f.user1), 5);

        assert_eq!(
            f.admin.decrease_document_creator_allowance(&owner_ctx, &mut f.engines, f.user1, 6),
            Err(ManagementError::Verification(VerificationError::DecrementAmountExceedsAllowance))
        );
        f.admin.decrease_document_creator_allowance(&owner_ctx, &mut f.engines, f.user1, 2).unwrap();
        assert_eq!(allowance(&f, &f.user1), 3);

        assert_eq!(
            f.admin.increase_document_creator_allowance(&owner_ctx, &mut f.engines, Address::ZERO, 1),
            Err(ManagementError::Verification(VerificationError::DocumentCreatorNotFound))
        );

        assert_eq!(
            f.admin.remove_document_creator(&user_ctx, &mut f.engines, f.user1),
            Err(ManagementError::CallerIsNotOwner)
        );
        f.admin.remove_document_creator(&owner_ctx, &mut f.engines, f.user1).unwrap();
        assert!(!f.engines.0[&f.engine].is_document_creator(&f.user1));
        assert_eq!(allowance(&f, &f.user1), 0);
    }

    #[test]
    fn test_new_owner_takes_over() {
        let mut f = fixture();
        f.admin.transfer_ownership(&CallContext::new(f.owner, 0), f.user1).unwrap();
        assert_eq!(f.admin.owner(), f.user1);

        assert_eq!(
            f.admin.configure_document_creator(&CallContext::new(f.owner, 0), &mut f.engines, f.owner, 1),
            Err(ManagementError::CallerIsNotOwner)
        );
        f.admin
            .configure_document_creator(&CallContext::new(f.user1, 0), &mut f.engines, f.owner, 1)
            .unwrap();
        assert_eq!(allowance(&f, &f.owner), 1);

        f.admin.renounce_ownership(&CallContext::new(f.user1, 0)).unwrap();
        assert!(f
            .admin
            .set_document_management_interface(&CallContext::new(f.user1, 0), Address::ZERO)
            .is_err());
    }
}
