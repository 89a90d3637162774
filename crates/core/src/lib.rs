//! Shared primitives for the cat API: id/timestamp aliases, the domain
//! error type, and input validation rules used by the HTTP layer.

pub mod error;
pub mod types;
pub mod validation;
