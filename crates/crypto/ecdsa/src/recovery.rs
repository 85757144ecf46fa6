use alloy_primitives::{Address, B256, hex, keccak256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use voxylon_validation::{message::build_registration_message, rules::normalize_address};

use crate::errors::EcdsaError;

/// Byte length of a recoverable ECDSA signature (r || s || v).
pub const SIGNATURE_BYTE_LENGTH: usize = 65;

/// Hash a message per the EIP-191 `personal_sign` convention:
/// `keccak256("\x19Ethereum Signed Message:\n" + len(message) + message)`.
pub fn hash_personal_message(message: &str) -> B256 {
    let mut prefixed =
        format!("\x19Ethereum Signed Message:\n{}", message.len()).into_bytes();
    prefixed.extend_from_slice(message.as_bytes());
    keccak256(&prefixed)
}

/// Recover the address that personal-signed `message`.
pub fn recover_personal_sign_address(
    message: &str,
    signature: &str,
) -> Result<Address, EcdsaError> {
    let bytes = hex::decode(signature).map_err(|_| EcdsaError::InvalidHexString)?;
    if bytes.len() != SIGNATURE_BYTE_LENGTH {
        return Err(EcdsaError::InvalidByteLength);
    }

    let recovery_id = parse_recovery_byte(bytes[64])?;
    let signature =
        Signature::from_slice(&bytes[..64]).map_err(|_| EcdsaError::InvalidSignature)?;
    let digest = hash_personal_message(message);
    let verifying_key =
        VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)
            .map_err(|_| EcdsaError::RecoveryFailed)?;

    Ok(address_from_verifying_key(&verifying_key))
}

/// Check that `signature` is `address`'s personal-sign signature over the
/// canonical registration message for `validator_key`.
///
/// Signature invalidity is an expected outcome, not a fault: malformed
/// input, a failed recovery, or a non-matching signer all yield `false`.
pub fn verify_signature(address: &str, validator_key: &str, signature: &str) -> bool {
    let message = build_registration_message(validator_key);
    let Ok(recovered) = recover_personal_sign_address(&message, signature) else {
        return false;
    };
    let Ok(claimed) = normalize_address(address) else {
        return false;
    };
    recovered.to_checksum(None) == claimed
}

/// Wallets emit v as 27/28 (legacy) or 0/1; anything else is rejected.
fn parse_recovery_byte(byte: u8) -> Result<RecoveryId, EcdsaError> {
    let normalized = match byte {
        27 | 28 => byte - 27,
        0 | 1 => byte,
        other => return Err(EcdsaError::InvalidRecoveryId(other)),
    };
    RecoveryId::from_byte(normalized).ok_or(EcdsaError::InvalidRecoveryId(byte))
}

fn address_from_verifying_key(verifying_key: &VerifyingKey) -> Address {
    let point = verifying_key.to_encoded_point(false);
    Address::from_slice(&keccak256(&point.as_bytes()[1..])[12..])
}
