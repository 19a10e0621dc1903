//! Trip service for business logic.
//!
//! This module provides the `TripService` for managing school trips. It
//! covers trip CRUD, the registration flow that records a payment alongside
//! each registration, availability toggles, and grade-grouped reporting.

use std::collections::HashMap;

use crate::{
    error::AppError,
    model::{
        payment::{Payment, PaymentStatus},
        student::Student,
        trip::Trip,
    },
    service::payment::generate_transaction_reference,
    store::RecordStore,
    util::timestamp::Timestamp,
};

/// Service providing business logic for trip management.
///
/// This struct holds a reference to the record store and provides methods
/// for trip CRUD, student registration, and paid-student reports.
pub struct TripService<'a> {
    pub store: &'a RecordStore,
}

impl<'a> TripService<'a> {
    /// Creates a new TripService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    ///
    /// # Returns
    /// - `TripService` - New service instance
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Creates a new trip.
    ///
    /// # Arguments
    /// - `trip` - Trip to store
    ///
    /// # Returns
    /// - `Ok(Trip)` - Stored trip with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn create_trip(&self, mut trip: Trip) -> Result<Trip, AppError> {
        let id = self.store.create(&mut trip).await?;
        tracing::info!("Trip created successfully with ID: {id}");
        Ok(trip)
    }

    /// Retrieves all trips.
    ///
    /// # Returns
    /// - `Ok(Vec<Trip>)` - Every stored trip (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Retrieves a trip by ID.
    ///
    /// # Arguments
    /// - `id` - Document ID of the trip
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - Trip found
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Trip>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Updates an existing trip.
    ///
    /// When the incoming record omits the creation timestamp or the
    /// registration list, the stored values survive the update. Everything
    /// else is replaced wholesale.
    ///
    /// # Arguments
    /// - `id` - Document ID of the trip to update
    /// - `trip` - Replacement record
    ///
    /// # Returns
    /// - `Ok(Trip)` - Updated trip
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_trip(&self, id: &str, mut trip: Trip) -> Result<Trip, AppError> {
        let existing: Trip = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip not found with ID: {id}")))?;

        trip.trip_id = Some(id.to_string());
        if trip.created_at.is_none() {
            trip.created_at = existing.created_at;
        }
        if trip.registered_students.is_none() {
            trip.registered_students = existing.registered_students;
        }

        self.store.upsert(id, &trip).await?;
        tracing::info!("Trip updated successfully: {id}");
        Ok(trip)
    }

    /// Deletes a trip.
    ///
    /// # Arguments
    /// - `id` - Document ID of the trip
    ///
    /// # Returns
    /// - `Ok(())` - Trip removed
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or delete
    pub async fn delete_trip(&self, id: &str) -> Result<(), AppError> {
        // Verify the trip exists
        let trip: Option<Trip> = self.store.get_by_id(id).await?;
        if trip.is_none() {
            return Err(AppError::NotFound(format!("Trip not found with ID: {id}")));
        }

        self.store.delete::<Trip>(id).await?;
        tracing::info!("Trip deleted successfully: {id}");
        Ok(())
    }

    /// Registers a student for a trip and records the matching payment.
    ///
    /// A student can register only once per trip. Registration immediately
    /// records a completed payment for the trip price, carrying a generated
    /// transaction reference.
    ///
    /// # Arguments
    /// - `trip_id` - Document ID of the trip
    /// - `student_id` - Document ID of the student registering
    /// - `parent_id` - Document ID of the paying parent
    /// - `payment_method` - Payment method, defaults to "Credit Card"
    ///
    /// # Returns
    /// - `Ok(())` - Student registered and payment recorded
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::BadRequest)` - Student already registered
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn register_student(
        &self,
        trip_id: &str,
        student_id: &str,
        parent_id: &str,
        payment_method: Option<String>,
    ) -> Result<(), AppError> {
        let mut trip: Trip = self
            .store
            .get_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip not found with ID: {trip_id}")))?;

        let registered = trip.registered_students.get_or_insert_with(Vec::new);
        if registered.iter().any(|entry| entry == student_id) {
            return Err(AppError::BadRequest(
                "Student already registered for this trip".to_string(),
            ));
        }
        registered.push(student_id.to_string());

        self.store.upsert(trip_id, &trip).await?;

        let mut payment = Payment {
            student_id: Some(student_id.to_string()),
            trip_id: Some(trip_id.to_string()),
            parent_id: Some(parent_id.to_string()),
            amount: trip.price,
            status: PaymentStatus::Completed,
            payment_method: Some(payment_method.unwrap_or_else(|| "Credit Card".to_string())),
            transaction_reference: Some(generate_transaction_reference()),
            paid_at: Some(Timestamp::now()),
            created_at: Some(Timestamp::now()),
            ..Payment::default()
        };
        self.store.create(&mut payment).await?;

        tracing::info!("Student {student_id} registered for trip {trip_id} with mock payment");
        Ok(())
    }

    /// Removes a student from a trip's registration list.
    ///
    /// Unregistering a student who never registered is not an error; the
    /// payment recorded at registration time is left untouched.
    ///
    /// # Arguments
    /// - `trip_id` - Document ID of the trip
    /// - `student_id` - Document ID of the student to remove
    ///
    /// # Returns
    /// - `Ok(())` - Registration list updated
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn unregister_student(&self, trip_id: &str, student_id: &str) -> Result<(), AppError> {
        let mut trip: Trip = self
            .store
            .get_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip not found with ID: {trip_id}")))?;

        if let Some(registered) = trip.registered_students.as_mut() {
            registered.retain(|entry| entry != student_id);
        }

        self.store.upsert(trip_id, &trip).await?;
        tracing::info!("Student {student_id} unregistered from trip {trip_id}");
        Ok(())
    }

    /// Takes a trip off the active list without deleting it.
    ///
    /// # Arguments
    /// - `id` - Document ID of the trip
    ///
    /// # Returns
    /// - `Ok(Trip)` - Trip marked inactive
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn hold_trip(&self, id: &str) -> Result<Trip, AppError> {
        let mut trip: Trip = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip not found with ID: {id}")))?;

        trip.active = false;
        self.store.upsert(id, &trip).await?;
        tracing::info!("Trip {id} put on hold");
        Ok(trip)
    }

    /// Returns a held trip to the active list.
    ///
    /// # Arguments
    /// - `id` - Document ID of the trip
    ///
    /// # Returns
    /// - `Ok(Trip)` - Trip marked active
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn activate_trip(&self, id: &str) -> Result<Trip, AppError> {
        let mut trip: Trip = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip not found with ID: {id}")))?;

        trip.active = true;
        self.store.upsert(id, &trip).await?;
        tracing::info!("Trip {id} activated");
        Ok(trip)
    }

    /// Replaces the image attached to a trip.
    ///
    /// # Arguments
    /// - `id` - Document ID of the trip
    /// - `image_data` - Image URL or data URI to store
    ///
    /// # Returns
    /// - `Ok(Trip)` - Trip with the new image
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_trip_image(&self, id: &str, image_data: String) -> Result<Trip, AppError> {
        let mut trip: Trip = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip not found with ID: {id}")))?;

        trip.image_url = Some(image_data);
        self.store.upsert(id, &trip).await?;
        tracing::info!("Trip {id} image updated");
        Ok(trip)
    }

    /// Groups a trip's registered students by grade.
    ///
    /// Registration always records a payment, so the registration list is
    /// the paid list. Students without a grade fall under "Unknown".
    ///
    /// # Arguments
    /// - `trip_id` - Document ID of the trip
    ///
    /// # Returns
    /// - `Ok(HashMap<String, Vec<Student>>)` - Registered students keyed by grade
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn paid_students_by_grade(
        &self,
        trip_id: &str,
    ) -> Result<HashMap<String, Vec<Student>>, AppError> {
        let trip: Trip = self
            .store
            .get_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip not found with ID: {trip_id}")))?;

        let registered = trip.registered_students.unwrap_or_default();
        if registered.is_empty() {
            return Ok(HashMap::new());
        }

        let students: Vec<Student> = self.store.get_all().await?;
        let mut by_grade: HashMap<String, Vec<Student>> = HashMap::new();
        for student in students {
            let is_registered = student
                .student_id
                .as_ref()
                .is_some_and(|id| registered.contains(id));
            if is_registered {
                let grade = student.grade.clone().unwrap_or_else(|| "Unknown".to_string());
                by_grade.entry(grade).or_default().push(student);
            }
        }

        Ok(by_grade)
    }
}
