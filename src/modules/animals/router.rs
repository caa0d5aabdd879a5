use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_animal, get_animal_by_id, list_animals, unsupported_method};

pub fn init_animals_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_animal)
                .get(list_animals)
                .fallback(unsupported_method),
        )
        .route("/{id}", get(get_animal_by_id))
}
