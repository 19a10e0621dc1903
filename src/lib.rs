//! School administration backend.
//!
//! This crate contains the complete backend implementation for the school manager
//! application, including API endpoints, business logic, document storage access,
//! and authentication. The backend uses Axum as the web framework, a pluggable
//! document store for persistence, and an identity-toolkit style provider for
//! account management.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, request validation, and response envelopes
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and storage
//! - **Store Layer** (`store/`) - Document persistence, id allocation, and collection queries
//! - **Identity Layer** (`identity/`) - Account creation, password verification, and resets
//! - **Model Layer** (`model/`) - Domain records and request/response DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, identity provider)
//! - **Startup** (`startup`) - Initialization of HTTP clients, backends, and CORS
//! - **Router** (`router`) - Axum route configuration
//! - **Utilities** (`util`) - Timestamp normalization and token parsing helpers
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** validates input, converts DTOs, calls service
//! 3. **Service** executes business logic, orchestrates store operations
//! 4. **Store** issues document reads and writes against the configured backend
//! 5. **Service** returns domain records to the controller
//! 6. **Controller** wraps the result in a response envelope and returns it

pub mod config;
pub mod controller;
pub mod error;
pub mod identity;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
pub mod util;
