use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub total: u64,
}

/// Availability answer for a validator key; only returned when the key is
/// taken (a free key is a 404).
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyStatusResponse {
    pub registered: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecordResponse {
    pub address: String,
    pub validator_key: String,
    pub signature: String,
    pub is_valid: bool,
}

/// Body of a successful `POST /api/registrations`: the stored record plus
/// the canonical message that was signed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub address: String,
    pub validator_key: String,
    pub signature: String,
    pub is_valid: bool,
    pub message: String,
    pub signed_message: String,
}
