//! # Contents Shared
//!
//! Wire types of the contents API, shared by the server and its clients.

pub mod dto;
pub mod response;

pub use dto::PostResponse;
pub use response::{DetailResponse, HealthResponse};
