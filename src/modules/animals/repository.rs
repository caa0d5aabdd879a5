use async_trait::async_trait;
use menagerie_core::AppError;
use menagerie_db::MySqlPool;
use menagerie_models::{Animal, AnimalInput};
use tracing::instrument;

/// Storage port for animals.
///
/// Identifiers are assigned by the store; callers never choose them.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// All animals ordered by id. An empty store yields an empty vector.
    async fn list(&self) -> Result<Vec<Animal>, AppError>;

    async fn find_by_id(&self, id: i16) -> Result<Option<Animal>, AppError>;

    /// Inserts a new animal and returns the id the store assigned.
    async fn create(&self, input: AnimalInput) -> Result<u64, AppError>;
}

#[derive(Clone, Debug)]
pub struct MySqlAnimalRepository {
    pool: MySqlPool,
}

impl MySqlAnimalRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimalRepository for MySqlAnimalRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Animal>, AppError> {
        let animals = sqlx::query_as::<_, Animal>("SELECT id, name FROM animals ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::database)?;

        Ok(animals)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i16) -> Result<Option<Animal>, AppError> {
        let animal = sqlx::query_as::<_, Animal>("SELECT id, name FROM animals WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::database)?;

        Ok(animal)
    }

    #[instrument(skip(self))]
    async fn create(&self, input: AnimalInput) -> Result<u64, AppError> {
        let result = sqlx::query("INSERT INTO animals (name) VALUES (?)")
            .bind(&input.name)
            .execute(&self.pool)
            .await
            .map_err(AppError::database)?;

        Ok(result.last_insert_id())
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use in_memory::InMemoryAnimalRepository;

#[cfg(any(test, feature = "test-utils"))]
mod in_memory {
    use std::sync::Arc;

    use anyhow::anyhow;
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Table {
        rows: Vec<Animal>,
        last_id: i32,
    }

    /// Test double that behaves like an AUTO_INCREMENT table.
    #[derive(Clone, Default)]
    pub struct InMemoryAnimalRepository {
        table: Arc<Mutex<Table>>,
        failing: bool,
    }

    impl InMemoryAnimalRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// A repository whose every call fails like a lost connection.
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub async fn seed(&self, name: &str) -> Animal {
            let mut table = self.table.lock().await;
            table.last_id += 1;
            let animal = Animal::new(table.last_id, name);
            table.rows.push(animal.clone());
            animal
        }

        pub async fn snapshot(&self) -> Vec<Animal> {
            self.table.lock().await.rows.clone()
        }

        fn check(&self) -> Result<(), AppError> {
            if self.failing {
                return Err(AppError::database(anyhow!("connection refused")));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AnimalRepository for InMemoryAnimalRepository {
        async fn list(&self) -> Result<Vec<Animal>, AppError> {
            self.check()?;
            Ok(self.snapshot().await)
        }

        async fn find_by_id(&self, id: i16) -> Result<Option<Animal>, AppError> {
            self.check()?;
            let table = self.table.lock().await;
            Ok(table.rows.iter().find(|a| a.id == i32::from(id)).cloned())
        }

        async fn create(&self, input: AnimalInput) -> Result<u64, AppError> {
            self.check()?;
            let animal = self.seed(&input.name).await;
            Ok(animal.id as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> AnimalInput {
        AnimalInput {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_in_memory_assigns_increasing_ids() {
        let repo = InMemoryAnimalRepository::new();

        let first = repo.create(input("Heron")).await.unwrap();
        let second = repo.create(input("Ibis")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(
            repo.list().await.unwrap(),
            vec![Animal::new(1, "Heron"), Animal::new(2, "Ibis")]
        );
    }

    #[tokio::test]
    async fn test_in_memory_find_missing_is_none() {
        let repo = InMemoryAnimalRepository::new();
        repo.seed("Quokka").await;

        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(Animal::new(1, "Quokka")));
        assert_eq!(repo.find_by_id(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failing_repository_reports_server_error() {
        let repo = InMemoryAnimalRepository::failing();
        let err = repo.list().await.unwrap_err();
        assert!(err.status.is_server_error());
    }
}
