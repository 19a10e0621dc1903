//! Student service for business logic.
//!
//! This module provides the `StudentService` for managing student admissions.
//! It owns the approval workflow (pending, approved, rejected), duplicate
//! detection on birth certificate IDs, and field preservation on update.

use crate::{
    error::AppError,
    model::student::{Student, StudentStatus},
    store::RecordStore,
};

/// Service providing business logic for student management.
///
/// This struct holds a reference to the record store and provides methods
/// for student CRUD, admission decisions, and parent-scoped queries.
pub struct StudentService<'a> {
    pub store: &'a RecordStore,
}

impl<'a> StudentService<'a> {
    /// Creates a new StudentService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    ///
    /// # Returns
    /// - `StudentService` - New service instance
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Registers a new student application.
    ///
    /// Rejects the application when another student already carries the same
    /// birth certificate ID. Every new application starts in pending status
    /// regardless of what the caller supplied.
    ///
    /// # Arguments
    /// - `student` - Student to register
    ///
    /// # Returns
    /// - `Ok(Student)` - Stored student with its generated ID
    /// - `Err(AppError::BadRequest)` - Birth certificate ID already registered
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn add_student(&self, mut student: Student) -> Result<Student, AppError> {
        // Duplicate check before anything is written
        let existing: Vec<Student> = self
            .store
            .get_by_field("birthCertificateId", &student.birth_certificate_id)
            .await?;
        if !existing.is_empty() {
            return Err(AppError::BadRequest(
                "A student with this birth certificate ID already exists".to_string(),
            ));
        }

        student.status = StudentStatus::Pending;
        self.store.create(&mut student).await?;
        Ok(student)
    }

    /// Retrieves all students.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Every stored student (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_all_students(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Retrieves a student by ID.
    ///
    /// # Arguments
    /// - `id` - Document ID of the student
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Retrieves all students linked to a parent.
    ///
    /// # Arguments
    /// - `parent_id` - Document ID of the parent
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Students whose parentId matches
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_by_parent_id(&self, parent_id: &str) -> Result<Vec<Student>, AppError> {
        Ok(self.store.get_by_field("parentId", &parent_id).await?)
    }

    /// Retrieves all students awaiting an admission decision.
    pub async fn find_pending(&self) -> Result<Vec<Student>, AppError> {
        Ok(self
            .store
            .get_by_field("status", &StudentStatus::Pending)
            .await?)
    }

    /// Retrieves all approved students.
    pub async fn find_approved(&self) -> Result<Vec<Student>, AppError> {
        Ok(self
            .store
            .get_by_field("status", &StudentStatus::Approved)
            .await?)
    }

    /// Retrieves all rejected students.
    pub async fn find_rejected(&self) -> Result<Vec<Student>, AppError> {
        Ok(self
            .store
            .get_by_field("status", &StudentStatus::Rejected)
            .await?)
    }

    /// Updates an existing student.
    ///
    /// Re-runs the birth certificate duplicate check only when the incoming
    /// record changes that field. The original creation timestamp always
    /// survives the update.
    ///
    /// # Arguments
    /// - `id` - Document ID of the student to update
    /// - `student` - Replacement record
    ///
    /// # Returns
    /// - `Ok(Student)` - Updated student
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::BadRequest)` - New birth certificate ID already registered
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_student(&self, id: &str, mut student: Student) -> Result<Student, AppError> {
        let existing: Student = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student not found with ID: {id}")))?;

        if student.birth_certificate_id != existing.birth_certificate_id {
            let duplicates: Vec<Student> = self
                .store
                .get_by_field("birthCertificateId", &student.birth_certificate_id)
                .await?;
            if !duplicates.is_empty() {
                return Err(AppError::BadRequest(
                    "A student with this birth certificate ID already exists".to_string(),
                ));
            }
        }

        student.student_id = Some(id.to_string());
        student.created_at = existing.created_at;
        self.store.upsert(id, &student).await?;
        Ok(student)
    }

    /// Approves a pending student application.
    ///
    /// Clears any earlier rejection reason so the record reflects only the
    /// final decision.
    ///
    /// # Arguments
    /// - `id` - Document ID of the student
    ///
    /// # Returns
    /// - `Ok(Student)` - Approved student
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn approve_student(&self, id: &str) -> Result<Student, AppError> {
        let mut student: Student = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student not found with ID: {id}")))?;

        student.status = StudentStatus::Approved;
        student.rejection_reason = None;
        self.store.upsert(id, &student).await?;
        Ok(student)
    }

    /// Approves a pending student and assigns them to a class.
    ///
    /// # Arguments
    /// - `id` - Document ID of the student
    /// - `class_name` - Class the student joins
    /// - `teacher` - Teacher responsible for that class
    ///
    /// # Returns
    /// - `Ok(Student)` - Approved student with class assignment
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn approve_student_with_class(
        &self,
        id: &str,
        class_name: &str,
        teacher: &str,
    ) -> Result<Student, AppError> {
        let mut student: Student = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student not found with ID: {id}")))?;

        student.status = StudentStatus::Approved;
        student.rejection_reason = None;
        student.class_name = Some(class_name.to_string());
        student.teacher = Some(teacher.to_string());
        self.store.upsert(id, &student).await?;
        Ok(student)
    }

    /// Rejects a pending student application.
    ///
    /// # Arguments
    /// - `id` - Document ID of the student
    /// - `reason` - Reason communicated back to the parent
    ///
    /// # Returns
    /// - `Ok(Student)` - Rejected student
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn reject_student(&self, id: &str, reason: &str) -> Result<Student, AppError> {
        let mut student: Student = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student not found with ID: {id}")))?;

        student.status = StudentStatus::Rejected;
        student.rejection_reason = Some(reason.to_string());
        self.store.upsert(id, &student).await?;
        Ok(student)
    }

    /// Deletes a student.
    ///
    /// # Arguments
    /// - `id` - Document ID of the student
    ///
    /// # Returns
    /// - `Ok(())` - Student removed
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or delete
    pub async fn delete_student(&self, id: &str) -> Result<(), AppError> {
        // Verify the student exists
        let student: Option<Student> = self.store.get_by_id(id).await?;
        if student.is_none() {
            return Err(AppError::NotFound(format!("Student not found with ID: {id}")));
        }

        self.store.delete::<Student>(id).await?;
        Ok(())
    }
}
