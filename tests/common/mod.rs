use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use menagerie::menagerie_config::{AnimalsConfig, MissingAnimalPolicy};
use menagerie::modules::animals::InMemoryAnimalRepository;
use menagerie::router::init_router;
use menagerie::state::AppState;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
    }
}

#[allow(dead_code)]
pub fn setup_test_app(repo: InMemoryAnimalRepository) -> Router {
    setup_test_app_with_policy(repo, MissingAnimalPolicy::ZeroValue)
}

#[allow(dead_code)]
pub fn setup_test_app_with_policy(
    repo: InMemoryAnimalRepository,
    missing: MissingAnimalPolicy,
) -> Router {
    init_router(AppState::new(repo, AnimalsConfig { missing }))
}

/// Sends one request through the router and buffers the response.
#[allow(dead_code)]
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(body.into()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None, Body::empty()).await
}

#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    send(
        app,
        Method::POST,
        uri,
        Some("application/json"),
        body.to_string(),
    )
    .await
}
