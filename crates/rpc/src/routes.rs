use actix_web::web::{ServiceConfig, scope};

use crate::handlers::{
    count::get_registration_count,
    health::get_health,
    registration::{get_registration, post_registration},
    validator_key::get_validator_key_status,
};

/// Register all `/api` routes.
///
/// The validator-keys route is registered before the address match so the
/// literal segment wins.
pub fn register_routers(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/api")
            .service(get_health)
            .service(get_registration_count)
            .service(post_registration)
            .service(get_validator_key_status)
            .service(get_registration),
    );
}
