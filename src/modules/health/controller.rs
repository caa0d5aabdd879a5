use axum::Json;
use menagerie_models::HealthResponse;

/// Static liveness payload. Method and body are ignored.
#[utoipa::path(
    get,
    path = "/foo",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn hello() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
