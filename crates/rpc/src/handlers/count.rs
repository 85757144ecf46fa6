use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, get, web::Data};
use tracing::error;
use voxylon_api_types::{error::ApiError, responses::CountResponse};
use voxylon_registry::RegistrationService;

use crate::{handlers::peer_ip, quota::RouteQuotas};

// GET /api/registrations
#[get("/registrations")]
pub async fn get_registration_count(
    service: Data<Arc<RegistrationService>>,
    quotas: Data<RouteQuotas>,
    request: HttpRequest,
) -> Result<impl Responder, ApiError> {
    quotas.check_lookup(peer_ip(&request))?;

    let total = service.total_count().map_err(|err| {
        error!("failed to get registration count: {err:?}");
        ApiError::InternalError("Failed to retrieve registration count.".to_string())
    })?;

    Ok(HttpResponse::Ok().json(CountResponse { total }))
}
