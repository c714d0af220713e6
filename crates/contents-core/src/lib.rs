//! # Contents Core
//!
//! The domain layer of the contents service.
//! This crate holds the post model, the input validation contract and the
//! storage port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{FieldError, InputError, RepoError};
pub use validation::validate_post_input;
