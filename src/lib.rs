//! # Menagerie API
//!
//! A small JSON API over a single MySQL table of animals, built with Axum and
//! SQLx.
//!
//! ## Endpoints
//!
//! | Method | Path            | Response                                             |
//! |--------|-----------------|------------------------------------------------------|
//! | any    | `/foo`          | `{"hello":true}`                                     |
//! | GET    | `/animals`      | every animal, `[{"Id":1,"Name":"Tiger"}]`            |
//! | POST   | `/animals`      | `{"message":"Animal created"}`                       |
//! | other  | `/animals`      | 404 `{"message":"The POST method is required ..."}`  |
//! | GET    | `/animals/{id}` | one animal, or `{"Id":0,"Name":""}` when missing     |
//!
//! OpenAPI is served at `/api-docs/openapi.json` and browsable at `/scalar`.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # Subscriber setup and request logging middleware
//! ├── modules/
//! │   ├── animals/    # controller, repository, router
//! │   └── health/     # controller, router
//! ├── router.rs        # Top-level router
//! └── state.rs         # Shared state and startup wiring
//! ```
//!
//! Supporting crates live under `crates/`:
//!
//! - `menagerie-core`: [`AppError`](menagerie_core::AppError)
//! - `menagerie-config`: environment-driven configuration
//! - `menagerie-db`: pool, ping, and schema creation
//! - `menagerie-models`: `Animal` and the request/response bodies
//!
//! ## Errors
//!
//! Startup failures (configuration, connection, schema) stop the process.
//! Once serving, failures become JSON responses: 400 for malformed input,
//! 404 for missing animals under the `not-found` policy, 500 for database
//! errors.
//!
//! ## Environment Variables
//!
//! ```bash
//! DBUSER=zoo
//! DBPASS=secret
//! DBADDR=127.0.0.1:3306
//! DBNAME=goapp
//! SCHEMA_MODE=if-not-exists          # or strict
//! MISSING_ANIMAL_POLICY=zero-value   # or not-found
//! PORT=8080
//! ```

pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;

pub use menagerie_config;
pub use menagerie_core;
pub use menagerie_db;
pub use menagerie_models;
