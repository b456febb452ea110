//! Domain models and operation parameters.
//!
//! Domain models are built from entity models at the repository boundary and converted into
//! DTOs by controllers. Parameter structs carry validated, normalized input into services and
//! repositories.

pub mod auth;
pub mod connection;
pub mod map;
pub mod motorbike;
pub mod ride;
pub mod user;
