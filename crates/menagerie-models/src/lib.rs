//! # Menagerie Models
//!
//! Data structures shared by the Menagerie API: the persisted [`Animal`]
//! entity, the [`AnimalInput`] DTO accepted on create, and the small response
//! bodies the endpoints return.
//!
//! Animals serialize with capitalised keys, `{"Id": 1, "Name": "Tiger"}`,
//! which is the wire format existing clients expect.

pub mod animals;
pub mod responses;

pub use animals::{Animal, AnimalInput};
pub use responses::{HealthResponse, MessageResponse};
