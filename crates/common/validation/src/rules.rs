use std::str::FromStr;

use alloy_primitives::Address;

use crate::errors::ValidationError;

/// Hex characters in a BLS12-381 public key (48 bytes) after the `0x` prefix.
pub const VALIDATOR_KEY_HEX_LENGTH: usize = 96;
/// Hex characters in a recoverable ECDSA signature (65 bytes) after the `0x` prefix.
pub const SIGNATURE_HEX_LENGTH: usize = 130;

fn is_prefixed_hex(value: &str, expected_length: usize) -> bool {
    match value.strip_prefix("0x") {
        Some(body) => {
            body.len() == expected_length && body.bytes().all(|byte| byte.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Check that `validator_key` is `0x` followed by exactly 96 hex characters.
///
/// Format only; the key is not checked to be a point on the curve.
pub fn is_valid_validator_key(validator_key: &str) -> bool {
    is_prefixed_hex(validator_key, VALIDATOR_KEY_HEX_LENGTH)
}

/// Check that `signature` is `0x` followed by exactly 130 hex characters.
pub fn is_valid_signature_format(signature: &str) -> bool {
    is_prefixed_hex(signature, SIGNATURE_HEX_LENGTH)
}

/// Lowercase a validator key for canonical storage and comparison.
///
/// Callers must have format-checked the key first; this does not validate.
pub fn normalize_validator_key(validator_key: &str) -> String {
    validator_key.to_ascii_lowercase()
}

/// Render an address in its canonical EIP-55 mixed-case checksum form.
pub fn normalize_address(address: &str) -> Result<String, ValidationError> {
    Address::from_str(address)
        .map(|address| address.to_checksum(None))
        .map_err(|_| ValidationError::InvalidAddress(address.to_string()))
}
