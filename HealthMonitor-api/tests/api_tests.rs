use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Once;
use tower::ServiceExt;

use health_monitor_api::api::create_application;
use health_monitor_data::database::{DatabaseConfig, DatabasePool};

// Ensure tracing is initialized only once
static INIT: Once = Once::new();

fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn test_app() -> Router {
    initialize();
    let pool = DatabasePool::in_memory().expect("in-memory database");
    create_application(pool, "test")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.into()))
        .unwrap()
}

// Send one request through a clone of the router and decode the JSON body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn patient(mobile: &str) -> Value {
    json!({"name": "A", "age": 30, "gender": "F", "mobile": mobile})
}

#[tokio::test]
async fn test_home() {
    let app = test_app();
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Welcome to the Health Monitoring System"}));
}

#[tokio::test]
async fn test_register_same_mobile_twice_returns_same_id() {
    let app = test_app();

    let (status, first) = send(&app, post_json("/register", patient("555"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, json!({"message": "New patient registered", "pat_id": 1}));

    let (status, second) = send(&app, post_json("/register", patient("555"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, json!({"message": "Existing patient found", "pat_id": 1}));
}

#[tokio::test]
async fn test_existing_patient_is_matched_on_mobile_only() {
    let app = test_app();
    send(&app, post_json("/register", patient("555"))).await;

    let other_details = json!({"name": "B", "age": 52, "gender": "M", "mobile": "555"});
    let (_, body) = send(&app, post_json("/register", other_details)).await;

    assert_eq!(body["message"], "Existing patient found");
    assert_eq!(body["pat_id"], 1);
}

#[tokio::test]
async fn test_distinct_mobiles_get_increasing_ids() {
    let app = test_app();

    let (_, first) = send(&app, post_json("/register", patient("555"))).await;
    let (_, second) = send(&app, post_json("/register", patient("556"))).await;

    let first_id = first["pat_id"].as_i64().unwrap();
    let second_id = second["pat_id"].as_i64().unwrap();
    assert!(second_id > first_id);
    assert_eq!(second["message"], "New patient registered");
}

#[tokio::test]
async fn test_latest_prescription_is_last_saved() {
    let app = test_app();

    for n in 1..=3 {
        let (status, body) = send(
            &app,
            post_json("/prescription", json!({"pat_id": 1, "prescription": format!("dose {}", n)})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Prescription saved successfully"}));
    }

    let (status, body) = send(&app, get("/prescription/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prescription": "dose 3"}));
}

#[tokio::test]
async fn test_prescription_for_unregistered_patient_is_stored() {
    let app = test_app();

    let (status, _) = send(
        &app,
        post_json("/prescription", json!({"pat_id": 999, "prescription": "Rest"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/prescription/999")).await;
    assert_eq!(body["prescription"], "Rest");
}

#[tokio::test]
async fn test_missing_records_return_sentinels() {
    let app = test_app();

    let (status, body) = send(&app, get("/prescription/42")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prescription": "No prescription available."}));

    let (status, body) = send(&app, get("/health_metrics/42")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No health metrics available."}));
}

#[tokio::test]
async fn test_health_metrics_round_trip_exactly() {
    let app = test_app();
    let sample = json!({
        "pat_id": 3,
        "bpm": 72,
        "spo2": 98,
        "temperature": 36.6,
        "humidity": 45.123456789,
        "ppg": 0.1
    });

    let (status, body) = send(&app, post_json("/health_metrics", sample)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Health metrics saved successfully"}));

    let (status, body) = send(&app, get("/health_metrics/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"bpm": 72, "spo2": 98, "temperature": 36.6, "humidity": 45.123456789, "ppg": 0.1})
    );
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_seventeen_digit_reals_round_trip_bit_for_bit() {
    let app = test_app();
    let submitted = r#"{"pat_id": 1, "bpm": 72, "spo2": 98,
        "temperature": 23.646704290710478,
        "humidity": 31.482903732843294,
        "ppg": 21.018526445877402}"#;

    let (status, _) = send(&app, post_raw("/health_metrics", submitted)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/health_metrics/1")).await;
    let expected: [(&str, f64); 3] = [
        ("temperature", 23.646704290710478),
        ("humidity", 31.482903732843294),
        ("ppg", 21.018526445877402),
    ];
    for (field, value) in expected {
        let returned = body[field].as_f64().unwrap();
        assert_eq!(returned.to_bits(), value.to_bits(), "{} changed: {}", field, returned);
    }
}

#[tokio::test]
async fn test_latest_health_metrics_is_last_saved() {
    let app = test_app();

    for bpm in [60, 70, 80] {
        let sample = json!({
            "pat_id": 1, "bpm": bpm, "spo2": 97,
            "temperature": 37, "humidity": 40.5, "ppg": 1.25
        });
        send(&app, post_json("/health_metrics", sample)).await;
    }

    let (_, body) = send(&app, get("/health_metrics/1")).await;
    assert_eq!(body["bpm"], 80);
    assert_eq!(body["temperature"], 37.0);
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_requests() {
    let app = test_app();

    let requests = vec![
        post_raw("/register", "{not json"),
        post_json("/register", json!({"name": "A", "age": 30, "gender": "F"})),
        post_json("/register", json!({"name": "A", "age": "thirty", "gender": "F", "mobile": "555"})),
        post_json("/prescription", json!({"pat_id": 1})),
        post_json("/health_metrics", json!({"pat_id": 1, "bpm": 72})),
        Request::builder()
            .method(Method::POST)
            .uri("/prescription")
            .body(Body::from(json!({"pat_id": 1, "prescription": "x"}).to_string()))
            .unwrap(),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "unexpected status for {}", uri);
        assert_eq!(body["error"], "bad_request", "unexpected body for {}: {}", uri, body);
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let app = test_app();
    let body = format!(
        r#"{{"pat_id": 1, "prescription": "{}"}}"#,
        "x".repeat(3 * 1024 * 1024)
    );

    let (status, body) = send(&app, post_raw("/prescription", body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "payload_too_large");
}

#[tokio::test]
async fn test_empty_text_fields_are_validation_errors() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post_json("/register", json!({"name": "", "age": 30, "gender": "F", "mobile": "555"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (status, body) = send(
        &app,
        post_json("/prescription", json!({"pat_id": 1, "prescription": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // nothing was stored by the rejected requests
    let (_, body) = send(&app, post_json("/register", patient("555"))).await;
    assert_eq!(body["message"], "New patient registered");
}

#[tokio::test]
async fn test_non_integer_patient_id_is_bad_request() {
    let app = test_app();

    for uri in ["/prescription/abc", "/health_metrics/1.5"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "unexpected status for {}", uri);
        assert_eq!(body["error"], "bad_request");
    }
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "http://dashboard.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let app = test_app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["components"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app();
    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/register").is_some());
    assert!(body["paths"].get("/health_metrics/{pat_id}").is_some());
}

#[tokio::test]
async fn test_file_store_keeps_rows_across_restarts() {
    initialize();
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        sqlite_path: dir.path().join("data").join("patients.db").to_string_lossy().to_string(),
        ..DatabaseConfig::default()
    };

    let app = create_application(DatabasePool::initialize(&config).unwrap(), "test");
    let (_, body) = send(&app, post_json("/register", patient("555"))).await;
    assert_eq!(body["pat_id"], 1);
    send(&app, post_json("/prescription", json!({"pat_id": 1, "prescription": "Rest"}))).await;
    drop(app);

    // schema initialization runs again on the second start
    let app = create_application(DatabasePool::initialize(&config).unwrap(), "test");
    let (_, body) = send(&app, post_json("/register", patient("555"))).await;
    assert_eq!(body, json!({"message": "Existing patient found", "pat_id": 1}));

    let (_, body) = send(&app, get("/prescription/1")).await;
    assert_eq!(body["prescription"], "Rest");
}
