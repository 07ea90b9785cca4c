use crate::clock::LedgerClock;
use crate::error::LedgerError;
use crate::registry::EngineRegistry;
use attest_config::AttestConfig;
use attest_management::{Administration, CreatorAdministration, ManagementMulti, ManagementSingle};
use attest_types::{Address, CallContext, CreatorOperation, Fingerprint, Timestamp};
use attest_verification::DocumentVerification;
use log::{debug, info};
use std::collections::HashMap;

/// The shared ledger every engine and administration lives on.
///
/// Calls are applied one at a time against the ledger's current time.
/// A failed call leaves every instance unchanged.
#[derive(Debug)]
pub struct Ledger {
    clock: LedgerClock,
    nonces: HashMap<Address, u64>,
    engines: EngineRegistry,
    administrations: HashMap<Address, Administration>,
}

impl Ledger {
    pub fn new(genesis: Timestamp) -> Self {
        Self::with_clock(LedgerClock::new(genesis))
    }

    pub fn with_clock(clock: LedgerClock) -> Self {
        Self {
            clock,
            nonces: HashMap::new(),
            engines: EngineRegistry::new(),
            administrations: HashMap::new(),
        }
    }

    pub fn from_config(config: &AttestConfig) -> Self {
        let clock = match config.ledger.genesis_timestamp {
            Some(genesis) => LedgerClock::new(genesis),
            None => LedgerClock::starting_now(),
        };
        info!("Ledger starting at {}", clock.now());
        Self::with_clock(clock)
    }

    // --- time ---

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Simulate `seconds` of elapsed time.
    pub fn advance_time(&mut self, seconds: u64) -> Timestamp {
        let now = self.clock.advance(seconds);
        debug!("Ledger time advanced by {}s to {}", seconds, now);
        now
    }

    pub fn set_time(&mut self, timestamp: Timestamp) -> Result<(), LedgerError> {
        self.clock.set(timestamp)
    }

    /// Context for a call made by `caller` at the current ledger time.
    pub fn context(&self, caller: Address) -> CallContext {
        CallContext::new(caller, self.clock.now())
    }

    // --- deployment ---

    fn next_address(&mut self, deployer: Address) -> Address {
        let nonce = self.nonces.entry(deployer).or_insert(0);
        let address = Address::derive(&deployer, *nonce);
        *nonce += 1;
        address
    }

    /// Deploy an engine whose creators can only be managed by `management`.
    pub fn deploy_document_verification(&mut self, deployer: Address, management: Address) -> Address {
        let address = self.next_address(deployer);
        self.engines.insert(address, DocumentVerification::new(management));
        info!("DocumentVerification deployed to {} (management {})", address, management);
        address
    }

    /// Deploy a single-tenant administration owned by the deployer.
    pub fn deploy_management_single(&mut self, deployer: Address) -> Address {
        let address = self.next_address(deployer);
        self.administrations
            .insert(address, ManagementSingle::new(address, deployer).into());
        info!("ManagementSingle deployed to {} (owner {})", address, deployer);
        address
    }

    /// Deploy a multi-tenant administration owned by the deployer.
    pub fn deploy_management_multi(&mut self, deployer: Address) -> Address {
        let address = self.next_address(deployer);
        self.administrations
            .insert(address, ManagementMulti::new(address, deployer).into());
        info!("ManagementMulti deployed to {} (owner {})", address, deployer);
        address
    }

    // --- instance access ---

    pub fn document_verification(&self, address: &Address) -> Result<&DocumentVerification, LedgerError> {
        self.engines.get(address).ok_or_else(|| self.missing(address, "DocumentVerification"))
    }

    pub fn document_verification_mut(&mut self, address: &Address) -> Result<&mut DocumentVerification, LedgerError> {
        let missing = self.missing(address, "DocumentVerification");
        self.engines.get_mut(address).ok_or(missing)
    }

    pub fn administration(&self, address: &Address) -> Result<&Administration, LedgerError> {
        self.administrations
            .get(address)
            .ok_or_else(|| self.missing(address, "administration"))
    }

    pub fn management_single(&self, address: &Address) -> Result<&ManagementSingle, LedgerError> {
        match self.administration(address)? {
            Administration::Single(single) => Ok(single),
            Administration::Multi(_) => Err(wrong_kind(address, "ManagementSingle")),
        }
    }

    pub fn management_single_mut(&mut self, address: &Address) -> Result<&mut ManagementSingle, LedgerError> {
        match self.administrations.get_mut(address) {
            Some(Administration::Single(single)) => Ok(single),
            Some(Administration::Multi(_)) => Err(wrong_kind(address, "ManagementSingle")),
            None => Err(LedgerError::UnknownInstance(*address)),
        }
    }

    pub fn management_multi(&self, address: &Address) -> Result<&ManagementMulti, LedgerError> {
        match self.administration(address)? {
            Administration::Multi(multi) => Ok(multi),
            Administration::Single(_) => Err(wrong_kind(address, "ManagementMulti")),
        }
    }

    pub fn management_multi_mut(&mut self, address: &Address) -> Result<&mut ManagementMulti, LedgerError> {
        match self.administrations.get_mut(address) {
            Some(Administration::Multi(multi)) => Ok(multi),
            Some(Administration::Single(_)) => Err(wrong_kind(address, "ManagementMulti")),
            None => Err(LedgerError::UnknownInstance(*address)),
        }
    }

    fn missing(&self, address: &Address, expected: &'static str) -> LedgerError {
        let deployed = self.engines.contains(address) || self.administrations.contains_key(address);
        if deployed {
            wrong_kind(address, expected)
        } else {
            LedgerError::UnknownInstance(*address)
        }
    }

    // --- calls ---

    /// Send a creator-management transaction from `caller` to the
    /// administration at `administration`, which forwards it to its engine.
    pub fn administer(
        &mut self,
        caller: Address,
        administration: Address,
        operation: CreatorOperation,
    ) -> Result<(), LedgerError> {
        let ctx = self.context(caller);
        let admin = self
            .administrations
            .get(&administration)
            .ok_or(LedgerError::UnknownInstance(administration))?;
        admin.administer(&ctx, &mut self.engines, &operation)?;
        Ok(())
    }

    /// Whether a document on `engine` is legit at the current ledger time.
    pub fn is_document_legit(&self, engine: &Address, fingerprint: &Fingerprint) -> Result<bool, LedgerError> {
        Ok(self.document_verification(engine)?.is_document_legit(fingerprint, self.now()))
    }
}

fn wrong_kind(address: &Address, expected: &'static str) -> LedgerError {
    LedgerError::WrongInstanceKind { address: *address, expected }
}
