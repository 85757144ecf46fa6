use serde::{Deserialize, Serialize};

/// Body of `POST /api/registrations`.
///
/// Fields are optional so an absent field reaches the service as such and
/// comes back as a missing-field rejection instead of a deserialization
/// error.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub address: Option<String>,
    pub validator_key: Option<String>,
    pub signature: Option<String>,
}
