//! Payment service for business logic.
//!
//! This module provides the `PaymentService` for the mock payment gateway.
//! Payments are recorded as already settled, so the service mostly covers
//! bookkeeping: status transitions, scoped queries, and the paid check used
//! when gating trip features.

use uuid::Uuid;

use crate::{
    error::AppError,
    model::payment::{Payment, PaymentStatus},
    store::RecordStore,
    util::timestamp::Timestamp,
};

/// Service providing business logic for payment management.
///
/// This struct holds a reference to the record store and provides methods
/// for recording mock payments, querying them, and moving them between
/// statuses.
pub struct PaymentService<'a> {
    pub store: &'a RecordStore,
}

impl<'a> PaymentService<'a> {
    /// Creates a new PaymentService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    ///
    /// # Returns
    /// - `PaymentService` - New service instance
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Records a mock payment as immediately settled.
    ///
    /// There is no real gateway behind this flow, so the payment goes
    /// straight to completed with a settlement time of now. A transaction
    /// reference is generated unless the caller already supplied one.
    ///
    /// # Arguments
    /// - `payment` - Payment to record
    ///
    /// # Returns
    /// - `Ok(Payment)` - Stored payment with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn create_mock_payment(&self, mut payment: Payment) -> Result<Payment, AppError> {
        let needs_reference = payment
            .transaction_reference
            .as_deref()
            .is_none_or(|reference| reference.is_empty());
        if needs_reference {
            payment.transaction_reference = Some(generate_transaction_reference());
        }

        payment.status = PaymentStatus::Completed;
        payment.paid_at = Some(Timestamp::now());

        let id = self.store.create(&mut payment).await?;
        tracing::info!("Mock payment created successfully with ID: {id}");
        Ok(payment)
    }

    /// Retrieves all payments.
    ///
    /// # Returns
    /// - `Ok(Vec<Payment>)` - Every stored payment (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_all_payments(&self) -> Result<Vec<Payment>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Retrieves a payment by ID.
    ///
    /// # Arguments
    /// - `id` - Document ID of the payment
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - Payment found
    /// - `Ok(None)` - No payment with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_payment_by_id(&self, id: &str) -> Result<Option<Payment>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Retrieves all payments made for a student.
    pub async fn find_by_student_id(&self, student_id: &str) -> Result<Vec<Payment>, AppError> {
        Ok(self.store.get_by_field("studentId", &student_id).await?)
    }

    /// Retrieves all payments made by a parent.
    pub async fn find_by_parent_id(&self, parent_id: &str) -> Result<Vec<Payment>, AppError> {
        Ok(self.store.get_by_field("parentId", &parent_id).await?)
    }

    /// Retrieves all payments recorded against a trip.
    pub async fn find_by_trip_id(&self, trip_id: &str) -> Result<Vec<Payment>, AppError> {
        Ok(self.store.get_by_field("tripId", &trip_id).await?)
    }

    /// Retrieves all payments in a given status.
    pub async fn find_by_status(&self, status: PaymentStatus) -> Result<Vec<Payment>, AppError> {
        Ok(self.store.get_by_field("status", &status).await?)
    }

    /// Moves a payment to a new status.
    ///
    /// The settlement time is stamped when a payment first reaches
    /// completed; a payment that already carries one keeps it.
    ///
    /// # Arguments
    /// - `id` - Document ID of the payment
    /// - `status` - Status to move to
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment in its new status
    /// - `Err(AppError::NotFound)` - No payment with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_payment_status(
        &self,
        id: &str,
        status: PaymentStatus,
    ) -> Result<Payment, AppError> {
        let mut payment: Payment = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment not found with ID: {id}")))?;

        payment.status = status;
        if status == PaymentStatus::Completed && payment.paid_at.is_none() {
            payment.paid_at = Some(Timestamp::now());
        }

        self.store.upsert(id, &payment).await?;
        tracing::info!("Payment {id} status updated to {status:?}");
        Ok(payment)
    }

    /// Updates an existing payment.
    ///
    /// The original creation timestamp survives when the incoming record
    /// omits it.
    ///
    /// # Arguments
    /// - `id` - Document ID of the payment to update
    /// - `payment` - Replacement record
    ///
    /// # Returns
    /// - `Ok(Payment)` - Updated payment
    /// - `Err(AppError::NotFound)` - No payment with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_payment(&self, id: &str, mut payment: Payment) -> Result<Payment, AppError> {
        let existing: Payment = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment not found with ID: {id}")))?;

        payment.payment_id = Some(id.to_string());
        if payment.created_at.is_none() {
            payment.created_at = existing.created_at;
        }

        self.store.upsert(id, &payment).await?;
        tracing::info!("Payment updated successfully: {id}");
        Ok(payment)
    }

    /// Deletes a payment.
    ///
    /// # Arguments
    /// - `id` - Document ID of the payment
    ///
    /// # Returns
    /// - `Ok(())` - Payment removed
    /// - `Err(AppError::NotFound)` - No payment with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or delete
    pub async fn delete_payment(&self, id: &str) -> Result<(), AppError> {
        // Verify the payment exists
        let payment: Option<Payment> = self.store.get_by_id(id).await?;
        if payment.is_none() {
            return Err(AppError::NotFound(format!("Payment not found with ID: {id}")));
        }

        self.store.delete::<Payment>(id).await?;
        tracing::info!("Payment deleted successfully: {id}");
        Ok(())
    }

    /// Checks whether a student holds a completed payment for a trip.
    ///
    /// This check gates trip features, so store failures count as unpaid
    /// rather than surfacing an error to the caller.
    ///
    /// # Arguments
    /// - `student_id` - Document ID of the student
    /// - `trip_id` - Document ID of the trip
    ///
    /// # Returns
    /// - `bool` - True when a completed payment links the student to the trip
    pub async fn has_student_paid_for_trip(&self, student_id: &str, trip_id: &str) -> bool {
        let payments: Vec<Payment> = match self.store.get_by_field("studentId", &student_id).await {
            Ok(payments) => payments,
            Err(err) => {
                tracing::error!("Failed to check payment status for student {student_id}: {err}");
                return false;
            }
        };

        payments.iter().any(|payment| {
            payment.trip_id.as_deref() == Some(trip_id) && payment.status == PaymentStatus::Completed
        })
    }
}

/// Builds a short uppercase transaction reference for mock payments.
pub(crate) fn generate_transaction_reference() -> String {
    let token = Uuid::new_v4().to_string();
    format!("TXN-{}", token[..8].to_uppercase())
}
