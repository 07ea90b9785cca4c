#![allow(dead_code)]

// Shared setup for the integration tests: a ledger with named accounts,
// mirroring the admin/user1/user2 signers of a local test chain.

use attest_runtime::Ledger;
use attest_types::{Address, CallContext, CreatorOperation, Fingerprint, VerificationType};
use attest_verification::DocumentVerification;

pub const GENESIS: u64 = 1_700_000_000;

pub struct Accounts {
    pub admin: Address,
    pub user1: Address,
    pub user2: Address,
    pub user3: Address,
}

pub fn accounts() -> Accounts {
    Accounts {
        admin: Address::from_seed("admin"),
        user1: Address::from_seed("user1"),
        user2: Address::from_seed("user2"),
        user3: Address::from_seed("user3"),
    }
}

pub fn init_logging() {
    attest_runtime::init_runtime();
}

/// A ledger with a single-tenant administration bound to one engine.
/// Returns (ledger, administration, engine).
pub fn single_tenant_setup(admin: Address) -> (Ledger, Address, Address) {
    let mut ledger = Ledger::new(GENESIS);
    let management = ledger.deploy_management_single(admin);
    let engine = ledger.deploy_document_verification(admin, management);
    let ctx = ledger.context(admin);
    ledger
        .management_single_mut(&management)
        .expect("single deployed")
        .set_document_management_interface(&ctx, engine)
        .expect("owner binds engine");
    (ledger, management, engine)
}

pub fn configure(ledger: &mut Ledger, caller: Address, management: Address, creator: Address, amount: u64) {
    ledger
        .administer(caller, management, CreatorOperation::Configure { creator, amount })
        .expect("configure document creator");
}

pub fn engine_mut<'a>(ledger: &'a mut Ledger, engine: &Address) -> &'a mut DocumentVerification {
    ledger.document_verification_mut(engine).expect("engine deployed")
}

/// Put a document whose verification and document deadlines are both `ttl` seconds from now.
pub fn put_document(
    ledger: &mut Ledger,
    engine: &Address,
    creator: Address,
    name: &str,
    ttl: u64,
    verification_type: VerificationType,
    signers: Vec<Address>,
) -> Result<Fingerprint, attest_types::VerificationError> {
    let fingerprint = Fingerprint::of(name.as_bytes());
    let ctx: CallContext = ledger.context(creator);
    let deadline = ctx.now + ttl;
    engine_mut(ledger, engine).put_document_to_verification(
        &ctx,
        fingerprint,
        deadline,
        deadline,
        verification_type,
        signers,
    )?;
    Ok(fingerprint)
}
