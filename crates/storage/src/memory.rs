use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::{errors::StoreError, registration::Registration, store::RegistrationStore};

/// In-memory registration store for tests and ephemeral runs.
///
/// A single write guard covers the constraint checks and both map inserts,
/// matching the atomicity contract of the durable backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    by_address: BTreeMap<String, Registration>,
    by_validator_key: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistrationStore for MemoryStore {
    fn total_count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().by_address.len() as u64)
    }

    fn find_by_address(&self, address: &str) -> Result<Option<Registration>, StoreError> {
        let address_key = address.to_ascii_lowercase();
        Ok(self.inner.read().by_address.get(&address_key).cloned())
    }

    fn find_by_validator_key(
        &self,
        validator_key: &str,
    ) -> Result<Option<Registration>, StoreError> {
        let validator_key_index = validator_key.to_ascii_lowercase();
        let inner = self.inner.read();
        let Some(address_key) = inner.by_validator_key.get(&validator_key_index) else {
            return Ok(None);
        };
        Ok(inner.by_address.get(address_key).cloned())
    }

    fn insert(&self, registration: Registration) -> Result<Registration, StoreError> {
        let address_key = registration.address_key();
        let validator_key_index = registration.validator_key_index();

        let mut inner = self.inner.write();
        if inner.by_address.contains_key(&address_key) {
            return Err(StoreError::DuplicateKey("address"));
        }
        if inner.by_validator_key.contains_key(&validator_key_index) {
            return Err(StoreError::DuplicateKey("validator_key"));
        }

        inner
            .by_validator_key
            .insert(validator_key_index, address_key.clone());
        inner.by_address.insert(address_key, registration.clone());
        Ok(registration)
    }
}
