use actix_web::{App, http::StatusCode, test, web::Data};
use portal_api_tests::test_utils::{
    closed_service, open_service, sample_key, signed_submission,
};
use serde_json::{Value, json};
use voxylon_rpc::{quota::RouteQuotas, routes::register_routers};

macro_rules! portal_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($service.clone()))
                .app_data(Data::new(RouteQuotas::permissive()))
                .configure(register_routers),
        )
        .await
    };
}

#[tokio::test]
async fn full_campaign_scenario() {
    let service = open_service();
    let app = portal_app!(service);

    let empty_count = test::TestRequest::get()
        .uri("/api/registrations")
        .to_request();
    let response = test::call_service(&app, empty_count).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["total"], 0);

    // first wallet claims a slot
    let validator_key = sample_key('a');
    let (address, signature) = signed_submission(31, &validator_key);
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({
            "address": address,
            "validatorKey": validator_key,
            "signature": signature,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["address"], address.as_str());
    assert_eq!(body["validatorKey"], validator_key.as_str());
    assert_eq!(body["isValid"], true);
    assert_eq!(
        body["signedMessage"],
        format!("Register Validator: {validator_key}")
    );

    // same account, different key and casing: terminal state, conflict
    let second_key = sample_key('b');
    let (_, second_signature) = signed_submission(31, &second_key);
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({
            "address": address.to_lowercase(),
            "validatorKey": second_key,
            "signature": second_signature,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .expect("message should be a string")
            .to_lowercase()
            .contains("already exists")
    );

    // different account, taken key: conflict
    let (other_address, other_signature) = signed_submission(32, &validator_key);
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({
            "address": other_address,
            "validatorKey": validator_key.to_uppercase().replace("0X", "0x"),
            "signature": other_signature,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Validator key is already registered.");

    // exactly one registration landed
    let count = test::TestRequest::get()
        .uri("/api/registrations")
        .to_request();
    let response = test::call_service(&app, count).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn format_rejections_precede_signature_checks() {
    let service = open_service();
    let app = portal_app!(service);

    let (address, _) = signed_submission(33, &sample_key('c'));
    let zeroed_signature = format!("0x{}", "0".repeat(130));

    // short key: rejected on format, signature never inspected
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({
            "address": address,
            "validatorKey": "0xabc123",
            "signature": zeroed_signature,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "Validator public key must be 0x-prefixed and 96 hexadecimal characters long."
    );

    // short signature
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({
            "address": address,
            "validatorKey": sample_key('c'),
            "signature": "0xdead",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "Signature must be 0x-prefixed and 130 hexadecimal characters long."
    );

    // well-formed but unrecoverable signature
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({
            "address": address,
            "validatorKey": sample_key('c'),
            "signature": format!("0x{}", "0".repeat(130)),
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Signature does not match the supplied address.");
}

#[tokio::test]
async fn missing_fields_are_reported_by_name() {
    let service = open_service();
    let app = portal_app!(service);

    let (address, _) = signed_submission(34, &sample_key('d'));
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({ "address": address }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Missing required field: validatorKey.");
}

#[tokio::test]
async fn registration_closes_at_the_deadline() {
    let service = closed_service();
    let app = portal_app!(service);

    let validator_key = sample_key('e');
    let (address, signature) = signed_submission(35, &validator_key);
    let request = test::TestRequest::post()
        .uri("/api/registrations")
        .set_json(json!({
            "address": address,
            "validatorKey": validator_key,
            "signature": signature,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "Registration is closed. The registration period has ended."
    );
}
