use attest_types::{Address, DocumentCreatorManagement, EngineDirectory};
use attest_verification::DocumentVerification;
use std::collections::HashMap;

/// Every verification engine deployed on the ledger, by address.
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: HashMap<Address, DocumentVerification>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: Address, engine: DocumentVerification) {
        self.engines.insert(address, engine);
    }

    pub fn get(&self, address: &Address) -> Option<&DocumentVerification> {
        self.engines.get(address)
    }

    pub fn get_mut(&mut self, address: &Address) -> Option<&mut DocumentVerification> {
        self.engines.get_mut(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.engines.contains_key(address)
    }
}

impl EngineDirectory for EngineRegistry {
    fn engine_mut(&mut self, address: &Address) -> Option<&mut dyn DocumentCreatorManagement> {
        self.engines
            .get_mut(address)
            .map(|engine| engine as &mut dyn DocumentCreatorManagement)
    }
}
