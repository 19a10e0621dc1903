//! Trip factory for creating test trip records.
//!
//! This module provides factory methods for creating trip records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use school_manager::{error::store::StoreError, model::trip::Trip, store::RecordStore};

use crate::factory::helpers::next_id;

/// Factory for creating test trips with customizable fields.
///
/// Provides a builder pattern for creating trip records with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::trip::TripFactory;
///
/// let trip = TripFactory::new(&store)
///     .title("Aquarium Visit")
///     .price(180.0)
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    store: &'a RecordStore,
    title: String,
    destination: String,
    price: f64,
    active: bool,
    registered_students: Option<Vec<String>>,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Trip {id}"` where id is auto-incremented
    /// - destination: `"Destination {id}"`
    /// - price: `150.0`
    /// - active: `true`
    /// - registered_students: `None`
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `TripFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            title: format!("Trip {}", id),
            destination: format!("Destination {}", id),
            price: 150.0,
            active: true,
            registered_students: None,
        }
    }

    /// Sets the title for the trip.
    ///
    /// # Arguments
    /// - `title` - Trip title
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the destination for the trip.
    ///
    /// # Arguments
    /// - `destination` - Destination label
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Sets the price for the trip.
    ///
    /// # Arguments
    /// - `price` - Price per student
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets whether the trip is active.
    ///
    /// # Arguments
    /// - `active` - Whether the trip accepts registrations
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Adds a student to the trip's registration list.
    ///
    /// # Arguments
    /// - `student_id` - Document ID of the registered student
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn registered_student(mut self, student_id: impl Into<String>) -> Self {
        self.registered_students
            .get_or_insert_with(Vec::new)
            .push(student_id.into());
        self
    }

    /// Builds and inserts the trip record into the store.
    ///
    /// # Returns
    /// - `Ok(Trip)` - Created trip record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<Trip, StoreError> {
        let mut trip = Trip {
            title: self.title,
            destination: Some(self.destination),
            price: Some(self.price),
            active: self.active,
            registered_students: self.registered_students,
            ..Trip::default()
        };
        self.store.create(&mut trip).await?;
        Ok(trip)
    }
}

/// Creates a trip with default values.
///
/// Shorthand for `TripFactory::new(store).build().await`.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok(Trip)` - Created trip record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let trip = create_trip(&store).await?;
/// ```
pub async fn create_trip(store: &RecordStore) -> Result<Trip, StoreError> {
    TripFactory::new(store).build().await
}
