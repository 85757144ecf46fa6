use thiserror::Error;
use voxylon_storage::errors::StoreError;

/// Failure modes of the registration service. Everything a client can
/// cause is a typed variant with a human-readable message; nothing escapes
/// uncategorized.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Registration is closed. The registration period has ended.")]
    DeadlinePassed,

    #[error("Missing required field: {0}.")]
    MissingField(&'static str),

    #[error("Invalid Ethereum address.")]
    InvalidAddress,

    #[error("Validator public key must be 0x-prefixed and 96 hexadecimal characters long.")]
    InvalidValidatorKeyFormat,

    #[error("Signature must be 0x-prefixed and 130 hexadecimal characters long.")]
    InvalidSignatureFormat,

    #[error("Signature does not match the supplied address.")]
    SignatureMismatch,

    #[error("A registration for this address already exists.")]
    AddressAlreadyRegistered,

    #[error("Validator key is already registered.")]
    ValidatorKeyAlreadyRegistered,

    #[error("Duplicate registration detected.")]
    DuplicateRegistration,

    #[error("Registration store unavailable")]
    StoreUnavailable(#[source] StoreError),
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        if err.is_duplicate() {
            // losing an insert race is an expected outcome, not a fault
            RegistryError::DuplicateRegistration
        } else {
            RegistryError::StoreUnavailable(err)
        }
    }
}

impl RegistryError {
    /// Conflict errors cannot succeed on retry; store faults can.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RegistryError::AddressAlreadyRegistered
                | RegistryError::ValidatorKeyAlreadyRegistered
                | RegistryError::DuplicateRegistration
        )
    }
}
