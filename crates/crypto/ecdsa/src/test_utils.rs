//! Deterministic wallets for tests: fixed scalars instead of an RNG so
//! fixtures and assertions stay stable across runs.

use alloy_primitives::{Address, hex, keccak256};
use k256::ecdsa::SigningKey;

use crate::recovery::hash_personal_message;

/// Build a signing key from a single-byte seed. The scalar is tiny but
/// valid; these keys must never leave test code.
pub fn signing_key_from_seed(seed: u8) -> SigningKey {
    let mut scalar = [0u8; 32];
    scalar[31] = seed;
    SigningKey::from_slice(&scalar).expect("seed must be a nonzero scalar")
}

/// EIP-55 checksummed address of `signing_key`.
pub fn checksum_address(signing_key: &SigningKey) -> String {
    let point = signing_key.verifying_key().to_encoded_point(false);
    Address::from_slice(&keccak256(&point.as_bytes()[1..])[12..]).to_checksum(None)
}

/// Personal-sign `message`, returning the 65-byte signature as
/// `0x`-prefixed hex with the legacy 27/28 recovery byte.
pub fn sign_personal_message(signing_key: &SigningKey, message: &str) -> String {
    let digest = hash_personal_message(message);
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest.as_slice())
        .expect("prehash signing should not fail");

    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(27 + recovery_id.to_byte());
    hex::encode_prefixed(bytes)
}
