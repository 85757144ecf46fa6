use serde::{Deserialize, Serialize};

/// A claimed validator slot. Created exactly once, never updated, never
/// deleted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// EIP-55 checksummed Ethereum address of the registrant.
    pub address: String,
    /// BLS12-381 public key, `0x` + 96 lowercase hex characters.
    pub validator_key: String,
    /// Recoverable ECDSA signature over the canonical registration message,
    /// `0x` + 130 hex characters.
    pub signature: String,
}

impl Registration {
    pub fn new(address: String, validator_key: String, signature: String) -> Self {
        Self {
            address,
            validator_key,
            signature,
        }
    }

    /// Uniqueness key for the address constraint.
    pub fn address_key(&self) -> String {
        self.address.to_ascii_lowercase()
    }

    /// Uniqueness key for the validator-key constraint.
    pub fn validator_key_index(&self) -> String {
        self.validator_key.to_ascii_lowercase()
    }
}
