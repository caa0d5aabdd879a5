//! # Menagerie Core
//!
//! Core types shared across the Menagerie API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use menagerie_core::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("invalid animal id"));
//! ```

pub mod errors;

pub use errors::AppError;
