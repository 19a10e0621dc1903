//! School Manager Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! school manager backend. This crate offers a builder pattern for creating test
//! contexts with an in-memory document store and identity provider, plus factories
//! for seeding domain records.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the store and identity provider
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Factories for creating domain records with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context, then seed records through the
//! factories:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().build().await?;
//!     let store = test.store();
//!
//!     let parent = factory::create_parent(store).await?;
//!     let student = factory::student::StudentFactory::new(store)
//!         .parent_id(parent.parent_id.clone().unwrap())
//!         .build()
//!         .await?;
//!
//!     // Exercise services against the seeded store...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
