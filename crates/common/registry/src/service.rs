use std::sync::Arc;

use tracing::info;
use voxylon_ecdsa::verify_signature;
use voxylon_storage::{registration::Registration, store::RegistrationStore};
use voxylon_validation::{
    deadline::{REGISTRATION_DEADLINE_UNIX_SECS, deadline_passed},
    rules::{
        is_valid_signature_format, is_valid_validator_key, normalize_address,
        normalize_validator_key,
    },
};

use crate::errors::RegistryError;

/// A stored registration together with its freshly recomputed validity
/// flag. Validity is never persisted; every read recomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedRegistration {
    pub registration: Registration,
    pub is_valid: bool,
}

/// Orchestrates validation, signature verification and the store to run
/// each address through its one-way Unregistered → Registered transition.
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
    deadline_unix_secs: u64,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self::with_deadline(store, REGISTRATION_DEADLINE_UNIX_SECS)
    }

    /// The deadline is fixed per campaign; it is injectable here so tests
    /// can keep registration open or force it closed.
    pub fn with_deadline(store: Arc<dyn RegistrationStore>, deadline_unix_secs: u64) -> Self {
        Self {
            store,
            deadline_unix_secs,
        }
    }

    /// Register a validator slot for `address`.
    ///
    /// The store's atomic insert is the authority on uniqueness: the
    /// conflict pre-checks exist for precise error reporting, and a race
    /// that slips past them surfaces as `DuplicateRegistration`.
    pub fn register(
        &self,
        address: Option<&str>,
        validator_key: Option<&str>,
        signature: Option<&str>,
    ) -> Result<VerifiedRegistration, RegistryError> {
        if deadline_passed(self.deadline_unix_secs) {
            return Err(RegistryError::DeadlinePassed);
        }

        let address = require_field(address, "address")?;
        let validator_key = require_field(validator_key, "validatorKey")?;
        let signature = require_field(signature, "signature")?;

        let address = normalize_address(address).map_err(|_| RegistryError::InvalidAddress)?;
        if !is_valid_validator_key(validator_key) {
            return Err(RegistryError::InvalidValidatorKeyFormat);
        }
        let validator_key = normalize_validator_key(validator_key);
        if !is_valid_signature_format(signature) {
            return Err(RegistryError::InvalidSignatureFormat);
        }
        if !verify_signature(&address, &validator_key, signature) {
            return Err(RegistryError::SignatureMismatch);
        }

        if self.store.find_by_address(&address)?.is_some() {
            return Err(RegistryError::AddressAlreadyRegistered);
        }
        if let Some(existing) = self.store.find_by_validator_key(&validator_key)?
            && !existing.address.eq_ignore_ascii_case(&address)
        {
            return Err(RegistryError::ValidatorKeyAlreadyRegistered);
        }

        let stored = self.store.insert(Registration::new(
            address,
            validator_key,
            signature.to_string(),
        ))?;

        // prove the response is self-consistent instead of trusting the
        // write path: re-verify what was actually stored
        let is_valid =
            verify_signature(&stored.address, &stored.validator_key, &stored.signature);
        info!(address = %stored.address, "validator registration stored");

        Ok(VerifiedRegistration {
            registration: stored,
            is_valid,
        })
    }

    /// Fetch the registration for `address`, re-verifying its signature at
    /// read time.
    pub fn lookup_by_address(
        &self,
        address: &str,
    ) -> Result<Option<VerifiedRegistration>, RegistryError> {
        let address = normalize_address(address).map_err(|_| RegistryError::InvalidAddress)?;
        let Some(registration) = self.store.find_by_address(&address)? else {
            return Ok(None);
        };

        let is_valid = verify_signature(
            &registration.address,
            &registration.validator_key,
            &registration.signature,
        );
        Ok(Some(VerifiedRegistration {
            registration,
            is_valid,
        }))
    }

    /// Whether `validator_key` is already taken. Presence only — no
    /// signature payload; used as a pre-flight check before a client asks
    /// a wallet to sign.
    pub fn lookup_by_validator_key(&self, validator_key: &str) -> Result<bool, RegistryError> {
        if !is_valid_validator_key(validator_key) {
            return Err(RegistryError::InvalidValidatorKeyFormat);
        }
        let validator_key = normalize_validator_key(validator_key);
        Ok(self.store.find_by_validator_key(&validator_key)?.is_some())
    }

    /// Total number of stored registrations.
    pub fn total_count(&self) -> Result<u64, RegistryError> {
        Ok(self.store.total_count()?)
    }
}

fn require_field<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, RegistryError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(RegistryError::MissingField(name))
}
