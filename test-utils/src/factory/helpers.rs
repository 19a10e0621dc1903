//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating records
//! with their dependencies.

use school_manager::{
    error::store::StoreError,
    model::{parent::Parent, student::Student, trip::Trip},
    store::RecordStore,
};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created record gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a parent with one linked student.
///
/// This is a convenience method that creates:
/// 1. Parent
/// 2. Student carrying the parent's ID
///
/// Both records are created with default values. Use the individual
/// factories if you need to customize specific records.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok((parent, student))` - Tuple of both created records
/// - `Err(StoreError)` - Store error during creation
pub async fn create_family(store: &RecordStore) -> Result<(Parent, Student), StoreError> {
    let parent = crate::factory::parent::create_parent(store).await?;
    let parent_id = parent.parent_id.clone().unwrap_or_default();
    let student = crate::factory::student::create_student_for_parent(store, &parent_id).await?;

    Ok((parent, student))
}

/// Creates a trip with one registered student.
///
/// This creates a parent, a student linked to that parent, and a trip whose
/// registration list already contains the student. Useful when testing trip
/// reports and unregistration without walking through the registration flow.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok((parent, student, trip))` - Tuple of all created records
/// - `Err(StoreError)` - Store error during creation
pub async fn create_trip_with_registration(
    store: &RecordStore,
) -> Result<(Parent, Student, Trip), StoreError> {
    let (parent, student) = create_family(store).await?;
    let student_id = student.student_id.clone().unwrap_or_default();
    let trip = crate::factory::trip::TripFactory::new(store)
        .registered_student(student_id)
        .build()
        .await?;

    Ok((parent, student, trip))
}
