use std::sync::Arc;

use actix_web::{
    HttpRequest, HttpResponse, Responder, get, post,
    web::{Data, Json, Path},
};
use tracing::error;
use voxylon_api_types::{
    error::ApiError,
    request::RegistrationRequest,
    responses::{RegisterResponse, RegistrationRecordResponse},
};
use voxylon_registry::{RegistrationService, errors::RegistryError};
use voxylon_validation::message::build_registration_message;

use crate::{handlers::peer_ip, quota::RouteQuotas};

// POST /api/registrations
#[post("/registrations")]
pub async fn post_registration(
    service: Data<Arc<RegistrationService>>,
    quotas: Data<RouteQuotas>,
    request: HttpRequest,
    body: Json<RegistrationRequest>,
) -> Result<impl Responder, ApiError> {
    quotas.check_registration(peer_ip(&request))?;

    let payload = body.into_inner();
    let verified = service
        .register(
            payload.address.as_deref(),
            payload.validator_key.as_deref(),
            payload.signature.as_deref(),
        )
        .map_err(|err| {
            if let RegistryError::StoreUnavailable(source) = &err {
                error!("failed to insert registration: {source:?}");
            }
            ApiError::from(err)
        })?;

    let signed_message = build_registration_message(&verified.registration.validator_key);
    let registration = verified.registration;

    Ok(HttpResponse::Created().json(RegisterResponse {
        address: registration.address,
        validator_key: registration.validator_key,
        signature: registration.signature,
        is_valid: verified.is_valid,
        message: "Validator registration recorded.".to_string(),
        signed_message,
    }))
}

// GET /api/registrations/{address}
#[get("/registrations/{address}")]
pub async fn get_registration(
    service: Data<Arc<RegistrationService>>,
    quotas: Data<RouteQuotas>,
    request: HttpRequest,
    path: Path<String>,
) -> Result<impl Responder, ApiError> {
    quotas.check_lookup(peer_ip(&request))?;

    let address = path.into_inner();
    let verified = service
        .lookup_by_address(&address)
        .map_err(|err| match err {
            RegistryError::StoreUnavailable(source) => {
                error!("failed to get registration: {source:?}");
                ApiError::InternalError("Failed to retrieve registration.".to_string())
            }
            other => other.into(),
        })?
        .ok_or_else(|| ApiError::NotFound("Registration not found.".to_string()))?;

    let registration = verified.registration;
    Ok(HttpResponse::Ok().json(RegistrationRecordResponse {
        address: registration.address,
        validator_key: registration.validator_key,
        signature: registration.signature,
        is_valid: verified.is_valid,
    }))
}
