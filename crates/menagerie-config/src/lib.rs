//! # Menagerie Config
//!
//! Configuration types for the Menagerie API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`database`]: MySQL connection settings and schema creation mode
//! - [`server`]: HTTP listener address
//! - [`animals`]: Behaviour of the animals endpoints
//!
//! Every type exposes `from_env()` and a `from_lookup()` variant that reads
//! through a caller-supplied function, so parsing can be exercised without
//! touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use menagerie_config::{AnimalsConfig, DatabaseConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env()?;
//! let server = ServerConfig::from_env()?;
//! let animals = AnimalsConfig::from_env()?;
//! ```

pub mod animals;
pub mod database;
pub mod server;

pub use animals::{AnimalsConfig, MissingAnimalPolicy};
pub use database::{DatabaseConfig, SchemaMode};
pub use server::ServerConfig;
