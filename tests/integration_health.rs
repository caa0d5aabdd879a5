mod common;

use axum::http::{Method, StatusCode};
use common::{get, send, setup_test_app};
use menagerie::modules::animals::InMemoryAnimalRepository;

#[tokio::test]
async fn test_hello_returns_exact_body() {
    let app = setup_test_app(InMemoryAnimalRepository::new());

    let response = get(app, "/foo").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, r#"{"hello":true}"#);
    assert_eq!(response.content_type(), Some("application/json"));
}

#[tokio::test]
async fn test_hello_ignores_method_and_body() {
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let app = setup_test_app(InMemoryAnimalRepository::new());

        let response = send(app, method.clone(), "/foo", Some("text/plain"), "ignored").await;

        assert_eq!(response.status, StatusCode::OK, "method {method}");
        assert_eq!(response.body, r#"{"hello":true}"#, "method {method}");
    }
}

#[tokio::test]
async fn test_hello_does_not_touch_storage() {
    let app = setup_test_app(InMemoryAnimalRepository::failing());

    let response = get(app, "/foo").await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let app = setup_test_app(InMemoryAnimalRepository::new());

    let response = get(app, "/api-docs/openapi.json").await;
    assert_eq!(response.status, StatusCode::OK);

    let doc = response.json();
    assert!(doc["paths"]["/foo"].is_object());
    assert!(doc["paths"]["/animals"]["get"].is_object());
    assert!(doc["paths"]["/animals"]["post"].is_object());
    assert!(doc["paths"]["/animals/{id}"]["get"].is_object());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = setup_test_app(InMemoryAnimalRepository::new());

    let response = get(app, "/zebras").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
