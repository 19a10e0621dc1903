//! Domain logic between the HTTP handlers and the record store.
//!
//! Services are lightweight views over borrowed state, constructed per
//! request. They own the business rules: status transitions, duplicate
//! checks, field preservation on update, and the auth flows against the
//! identity provider.

pub mod admin;
pub mod auth;
pub mod document;
pub mod meeting;
pub mod parent;
pub mod payment;
pub mod student;
pub mod trip;
