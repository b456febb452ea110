//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the motorbike rental service: HTTP
//! endpoints, the rental workflow, data access and infrastructure. The backend uses Axum
//! as the web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, the rental workflow and its transactions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, the ride state machine and operation params
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - Tracing subscriber setup
//! - **State** (`state`) - Shared application state (DB, token signer, photo storage)
//! - **Startup** (`startup`) - Database, migrations, upload directory and shutdown signal
//! - **Router** (`router`) - Axum route table and HTTP layers
//! - **OpenAPI** (`openapi`) - API document served by Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the bearer token and checks permissions
//! 3. **Controller** validates the body, converts DTOs to params, calls service
//! 4. **Service** executes business logic, opening a transaction for multi-step workflows
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
