//! Request and response DTOs shared by the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models convert into and
//! out of them at the controller boundary.

pub mod api;
pub mod auth;
pub mod connection;
pub mod map;
pub mod motorbike;
pub mod ride;
pub mod user;
