use menagerie_models::{Animal, AnimalInput, HealthResponse, MessageResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::hello,
        crate::modules::animals::controller::create_animal,
        crate::modules::animals::controller::list_animals,
        crate::modules::animals::controller::get_animal_by_id,
    ),
    components(
        schemas(Animal, AnimalInput, MessageResponse, HealthResponse)
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Animals", description = "Create, list, and fetch animals")
    ),
    info(
        title = "Menagerie API",
        description = "A small JSON API over a MySQL `animals` table"
    )
)]
pub struct ApiDoc;
