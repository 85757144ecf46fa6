use crate::{errors::StoreError, registration::Registration};

/// Durable storage for registrations.
///
/// Implementations enforce both uniqueness constraints atomically inside
/// `insert`: the service's pre-checks are advisory, and two concurrent
/// callers that both pass them must still resolve to exactly one stored
/// row, the loser observing [`StoreError::DuplicateKey`].
pub trait RegistrationStore: Send + Sync {
    /// Count of all stored registrations.
    fn total_count(&self) -> Result<u64, StoreError>;

    /// Exact lookup on the unique address key, case-insensitive.
    fn find_by_address(&self, address: &str) -> Result<Option<Registration>, StoreError>;

    /// Lookup on the unique validator-key index, case-insensitive.
    fn find_by_validator_key(
        &self,
        validator_key: &str,
    ) -> Result<Option<Registration>, StoreError>;

    /// Atomic insert-if-absent on both uniqueness keys. No partial write
    /// survives a failure.
    fn insert(&self, registration: Registration) -> Result<Registration, StoreError>;
}
