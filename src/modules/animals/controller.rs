use anyhow::anyhow;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use menagerie_config::MissingAnimalPolicy;
use menagerie_core::AppError;
use menagerie_models::{Animal, AnimalInput, MessageResponse};
use tracing::instrument;

use crate::state::AppState;

pub const ANIMAL_CREATED: &str = "Animal created";
pub const POST_REQUIRED: &str = "The POST method is required for this URI";

#[utoipa::path(
    post,
    path = "/animals",
    request_body = AnimalInput,
    responses(
        (status = 200, description = "Animal created", body = MessageResponse),
        (status = 400, description = "Body is not valid JSON for an animal", body = MessageResponse),
        (status = 500, description = "Database error", body = MessageResponse)
    ),
    tag = "Animals"
)]
#[instrument(skip(state, body))]
pub async fn create_animal(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    // Content-Type is not required; the body is parsed as JSON whatever it claims to be.
    let input: AnimalInput = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(anyhow!("Invalid animal payload: {e}")))?;

    let id = state.animals.create(input).await?;
    tracing::info!(animal_id = id, "Animal created");

    Ok(Json(MessageResponse::new(ANIMAL_CREATED)))
}

#[utoipa::path(
    get,
    path = "/animals",
    responses(
        (status = 200, description = "All animals ordered by id", body = Vec<Animal>),
        (status = 500, description = "Database error", body = MessageResponse)
    ),
    tag = "Animals"
)]
#[instrument(skip(state))]
pub async fn list_animals(State(state): State<AppState>) -> Result<Json<Vec<Animal>>, AppError> {
    let animals = state.animals.list().await?;
    Ok(Json(animals))
}

#[utoipa::path(
    get,
    path = "/animals/{id}",
    params(
        ("id" = i16, Path, description = "Animal ID")
    ),
    responses(
        (status = 200, description = "The animal, or the zero value when it does not exist", body = Animal),
        (status = 400, description = "Id is not a 16-bit integer", body = MessageResponse),
        (status = 404, description = "Animal not found (not-found policy only)", body = MessageResponse)
    ),
    tag = "Animals"
)]
#[instrument(skip(state))]
pub async fn get_animal_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Animal>, AppError> {
    let id: i16 = raw_id
        .parse()
        .map_err(|e| AppError::bad_request(anyhow!("Invalid animal id `{raw_id}`: {e}")))?;

    match state.animals.find_by_id(id).await? {
        Some(animal) => Ok(Json(animal)),
        None => match state.animals_config.missing {
            MissingAnimalPolicy::ZeroValue => Ok(Json(Animal::default())),
            MissingAnimalPolicy::NotFound => {
                Err(AppError::not_found(anyhow!("Animal {id} not found")))
            }
        },
    }
}

/// Fallback for any method on `/animals` other than GET and POST.
pub async fn unsupported_method() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(POST_REQUIRED)),
    )
}
