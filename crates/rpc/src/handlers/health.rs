use actix_web::{HttpResponse, Responder, get};
use voxylon_api_types::responses::HealthResponse;

// GET /api/health
#[get("/health")]
pub async fn get_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        message: "Voxylon server is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};

    use super::get_health;

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test::init_service(App::new().service(get_health)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
