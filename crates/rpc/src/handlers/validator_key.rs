use std::sync::Arc;

use actix_web::{
    HttpRequest, HttpResponse, Responder, get,
    web::{Data, Path},
};
use tracing::error;
use voxylon_api_types::{error::ApiError, responses::KeyStatusResponse};
use voxylon_registry::{RegistrationService, errors::RegistryError};

use crate::{handlers::peer_ip, quota::RouteQuotas};

// GET /api/registrations/validator-keys/{validator_key}
//
// Pre-flight availability check: lets a client learn a key is taken before
// spending a wallet signing interaction on it.
#[get("/registrations/validator-keys/{validator_key}")]
pub async fn get_validator_key_status(
    service: Data<Arc<RegistrationService>>,
    quotas: Data<RouteQuotas>,
    request: HttpRequest,
    path: Path<String>,
) -> Result<impl Responder, ApiError> {
    quotas.check_lookup(peer_ip(&request))?;

    let validator_key = path.into_inner();
    let registered = service
        .lookup_by_validator_key(&validator_key)
        .map_err(|err| match err {
            RegistryError::StoreUnavailable(source) => {
                error!("failed to lookup validator key: {source:?}");
                ApiError::InternalError("Failed to lookup validator key.".to_string())
            }
            other => other.into(),
        })?;

    if !registered {
        return Err(ApiError::NotFound("Validator key not registered.".to_string()));
    }

    Ok(HttpResponse::Ok().json(KeyStatusResponse {
        registered: true,
        message: "Validator key is already registered.".to_string(),
    }))
}
