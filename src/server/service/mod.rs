//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the photo store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step rental operations in one transaction

pub mod auth;
pub mod connection;
pub mod map;
pub mod motorbike;
pub mod photo;
pub mod rental;
pub mod ride;
pub mod user;

#[cfg(test)]
mod test;
