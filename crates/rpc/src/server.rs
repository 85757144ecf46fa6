use std::sync::Arc;

use actix_web::{
    App, HttpServer,
    middleware::{Condition, DefaultHeaders, Logger},
    web::Data,
};
use tracing::info;
use voxylon_registry::RegistrationService;

use crate::{config::RpcServerConfig, quota::RouteQuotas, routes::register_routers};

/// Start the portal API server.
pub async fn start_rpc_server(
    server_config: RpcServerConfig,
    service: Arc<RegistrationService>,
    quotas: RouteQuotas,
) -> std::io::Result<()> {
    info!(
        "starting HTTP server on {:?}",
        server_config.http_socket_address
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Condition::new(
                server_config.http_allow_origin,
                DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")),
            ))
            .app_data(Data::new(service.clone()))
            .app_data(Data::new(quotas.clone()))
            .configure(register_routers)
    })
    .bind(server_config.http_socket_address)?
    .run()
    .await
}
