//! Payment factory for creating test payment records.
//!
//! This module provides factory methods for creating payment records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use school_manager::{
    error::store::StoreError,
    model::payment::{Payment, PaymentStatus},
    store::RecordStore,
};

use crate::factory::helpers::next_id;

/// Factory for creating test payments with customizable fields.
///
/// Provides a builder pattern for creating payment records with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::payment::PaymentFactory;
///
/// let payment = PaymentFactory::new(&store)
///     .student_id("student-1")
///     .trip_id("trip-1")
///     .status(PaymentStatus::Completed)
///     .build()
///     .await?;
/// ```
pub struct PaymentFactory<'a> {
    store: &'a RecordStore,
    student_id: Option<String>,
    trip_id: Option<String>,
    parent_id: Option<String>,
    amount: f64,
    status: PaymentStatus,
    transaction_reference: Option<String>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - student_id, trip_id, parent_id: `None`
    /// - amount: `150.0`
    /// - status: `PaymentStatus::Pending`
    /// - transaction_reference: `"TXN-TEST{id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `PaymentFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            student_id: None,
            trip_id: None,
            parent_id: None,
            amount: 150.0,
            status: PaymentStatus::Pending,
            transaction_reference: Some(format!("TXN-TEST{}", id)),
        }
    }

    /// Sets the student the payment was made for.
    ///
    /// # Arguments
    /// - `student_id` - Document ID of the student
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Sets the trip the payment covers.
    ///
    /// # Arguments
    /// - `trip_id` - Document ID of the trip
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn trip_id(mut self, trip_id: impl Into<String>) -> Self {
        self.trip_id = Some(trip_id.into());
        self
    }

    /// Sets the parent who made the payment.
    ///
    /// # Arguments
    /// - `parent_id` - Document ID of the parent
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the amount for the payment.
    ///
    /// # Arguments
    /// - `amount` - Amount paid
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the status for the payment.
    ///
    /// # Arguments
    /// - `status` - Payment status
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the transaction reference for the payment.
    ///
    /// # Arguments
    /// - `transaction_reference` - Gateway reference string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn transaction_reference(mut self, transaction_reference: impl Into<String>) -> Self {
        self.transaction_reference = Some(transaction_reference.into());
        self
    }

    /// Builds and inserts the payment record into the store.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Created payment record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<Payment, StoreError> {
        let mut payment = Payment {
            student_id: self.student_id,
            trip_id: self.trip_id,
            parent_id: self.parent_id,
            amount: Some(self.amount),
            status: self.status,
            transaction_reference: self.transaction_reference,
            ..Payment::default()
        };
        self.store.create(&mut payment).await?;
        Ok(payment)
    }
}

/// Creates a completed payment linking a student to a trip.
///
/// Shorthand for the common case of seeding a settled payment so paid
/// checks succeed.
///
/// # Arguments
/// - `store` - Record store
/// - `student_id` - Document ID of the student
/// - `trip_id` - Document ID of the trip
///
/// # Returns
/// - `Ok(Payment)` - Created payment record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let payment = create_payment(&store, &student_id, &trip_id).await?;
/// ```
pub async fn create_payment(
    store: &RecordStore,
    student_id: impl Into<String>,
    trip_id: impl Into<String>,
) -> Result<Payment, StoreError> {
    PaymentFactory::new(store)
        .student_id(student_id)
        .trip_id(trip_id)
        .status(PaymentStatus::Completed)
        .build()
        .await
}
