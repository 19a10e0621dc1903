//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test records with sensible defaults,
//! reducing boilerplate in tests. Factories write straight to the record store, making
//! tests more concise and maintainable.
//!
//! # Overview
//!
//! Each record type has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), StoreError> {
//!     let store = /* ... */;
//!
//!     // Create with defaults
//!     let parent = factory::create_parent(&store).await?;
//!     let trip = factory::create_trip(&store).await?;
//!
//!     // Create a parent with a linked student
//!     let (parent, student) = factory::helpers::create_family(&store).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let student = factory::student::StudentFactory::new(&store)
//!     .name("Lerato")
//!     .surname("Dlamini")
//!     .grade("Grade 4")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let student = factory::student::create_student_for_parent(&store, &parent_id).await?;
//! let payment = factory::payment::create_payment(&store, &student_id, &trip_id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student records
//! - `parent` - Create parent records
//! - `trip` - Create trip records
//! - `payment` - Create payment records
//! - `meeting` - Create meeting records
//! - `announcement` - Create announcement records
//! - `document` - Create document records
//! - `document_request` - Create document request records
//! - `user` - Create user profile records
//! - `helpers` - Convenience methods for creating records with dependencies

pub mod announcement;
pub mod document;
pub mod document_request;
pub mod helpers;
pub mod meeting;
pub mod parent;
pub mod payment;
pub mod student;
pub mod trip;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use announcement::create_announcement;
pub use document::create_document;
pub use document_request::create_document_request;
pub use meeting::create_meeting;
pub use parent::create_parent;
pub use payment::create_payment;
pub use student::{create_student, create_student_for_parent};
pub use trip::create_trip;
pub use user::create_user;
