use std::sync::Arc;

pub use voxylon_ecdsa::test_utils::{
    checksum_address, sign_personal_message, signing_key_from_seed,
};
use voxylon_registry::RegistrationService;
use voxylon_storage::memory::MemoryStore;
use voxylon_validation::message::build_registration_message;

/// Service over an empty in-memory store with registration held open.
pub fn open_service() -> Arc<RegistrationService> {
    Arc::new(RegistrationService::with_deadline(
        Arc::new(MemoryStore::new()),
        u64::MAX,
    ))
}

/// Service whose deadline has already passed.
pub fn closed_service() -> Arc<RegistrationService> {
    Arc::new(RegistrationService::with_deadline(
        Arc::new(MemoryStore::new()),
        0,
    ))
}

/// A well-formed validator key filled with `fill`.
pub fn sample_key(fill: char) -> String {
    format!("0x{}", fill.to_string().repeat(96))
}

/// (address, signature) of a deterministic wallet signing the canonical
/// message for `validator_key`.
pub fn signed_submission(seed: u8, validator_key: &str) -> (String, String) {
    let signing_key = signing_key_from_seed(seed);
    let message = build_registration_message(validator_key);
    (
        checksum_address(&signing_key),
        sign_personal_message(&signing_key, &message),
    )
}
