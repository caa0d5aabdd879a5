pub mod controller;
pub mod repository;
pub mod router;

pub use repository::{AnimalRepository, MySqlAnimalRepository};
pub use router::init_animals_router;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::InMemoryAnimalRepository;
