use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    #[error("signature is not valid hex")]
    InvalidHexString,
    #[error("signature must be 65 bytes")]
    InvalidByteLength,
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),
    #[error("signature scalars out of range")]
    InvalidSignature,
    #[error("public key recovery failed")]
    RecoveryFailed,
}
