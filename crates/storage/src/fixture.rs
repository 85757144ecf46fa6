use crate::{errors::StoreError, registration::Registration, store::RegistrationStore};

/// Read-only store serving a fixed fixture set instead of a live backend.
///
/// Selected at startup for demos and frontend work when no database is
/// reachable; `insert` always fails with [`StoreError::ReadOnly`].
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    registrations: Vec<Registration>,
}

impl StaticStore {
    pub fn new(registrations: Vec<Registration>) -> Self {
        Self { registrations }
    }

    /// The fixture rows shipped with the portal.
    pub fn campaign_fixtures() -> Self {
        Self::new(vec![
            Registration::new(
                "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
                format!("0xa0{}", "91c4d7e2".repeat(12).split_at(94).0),
                format!("0x{}", "4f".repeat(65)),
            ),
            Registration::new(
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".to_string(),
                format!("0xb3{}", "27e8a5c1".repeat(12).split_at(94).0),
                format!("0x{}", "9d".repeat(65)),
            ),
            Registration::new(
                "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".to_string(),
                format!("0x8c{}", "5a96f0d4".repeat(12).split_at(94).0),
                format!("0x{}", "72".repeat(65)),
            ),
        ])
    }
}

impl RegistrationStore for StaticStore {
    fn total_count(&self) -> Result<u64, StoreError> {
        Ok(self.registrations.len() as u64)
    }

    fn find_by_address(&self, address: &str) -> Result<Option<Registration>, StoreError> {
        let address_key = address.to_ascii_lowercase();
        Ok(self
            .registrations
            .iter()
            .find(|registration| registration.address_key() == address_key)
            .cloned())
    }

    fn find_by_validator_key(
        &self,
        validator_key: &str,
    ) -> Result<Option<Registration>, StoreError> {
        let validator_key_index = validator_key.to_ascii_lowercase();
        Ok(self
            .registrations
            .iter()
            .find(|registration| registration.validator_key_index() == validator_key_index)
            .cloned())
    }

    fn insert(&self, _registration: Registration) -> Result<Registration, StoreError> {
        Err(StoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_well_formed() {
        let store = StaticStore::campaign_fixtures();
        assert_eq!(store.total_count().expect("count"), 3);
        for registration in &store.registrations {
            assert_eq!(registration.validator_key.len(), 2 + 96);
            assert_eq!(registration.signature.len(), 2 + 130);
        }
    }

    #[test]
    fn lookups_serve_fixture_rows() {
        let store = StaticStore::campaign_fixtures();
        let row = store
            .find_by_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .expect("lookup")
            .expect("fixture row should exist");
        assert!(
            store
                .find_by_validator_key(&row.validator_key.to_uppercase())
                .expect("lookup")
                .is_some()
        );
    }

    #[test]
    fn writes_are_rejected() {
        let store = StaticStore::campaign_fixtures();
        let result = store.insert(Registration::new(
            "0x0000000000000000000000000000000000000001".to_string(),
            format!("0x{}", "c".repeat(96)),
            format!("0x{}", "2e".repeat(65)),
        ));
        assert!(matches!(result, Err(StoreError::ReadOnly)));
    }
}
