//! Student factory for creating test student records.
//!
//! This module provides factory methods for creating student records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use school_manager::{
    error::store::StoreError,
    model::student::{Student, StudentStatus},
    store::RecordStore,
};

use crate::factory::helpers::next_id;

/// Factory for creating test students with customizable fields.
///
/// Provides a builder pattern for creating student records with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&store)
///     .name("Lerato")
///     .surname("Dlamini")
///     .grade("Grade 4")
///     .status(StudentStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    store: &'a RecordStore,
    name: String,
    surname: String,
    birth_certificate_id: String,
    grade: String,
    parent_id: Option<String>,
    status: StudentStatus,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - surname: `"Surname {id}"`
    /// - birth_certificate_id: `"BC-{id}"`
    /// - grade: `"Grade 1"`
    /// - parent_id: `None`
    /// - status: `StudentStatus::Pending`
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            name: format!("Student {}", id),
            surname: format!("Surname {}", id),
            birth_certificate_id: format!("BC-{}", id),
            grade: "Grade 1".to_string(),
            parent_id: None,
            status: StudentStatus::Pending,
        }
    }

    /// Sets the first name for the student.
    ///
    /// # Arguments
    /// - `name` - First name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the surname for the student.
    ///
    /// # Arguments
    /// - `surname` - Family name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Sets the birth certificate ID for the student.
    ///
    /// # Arguments
    /// - `birth_certificate_id` - National birth certificate number
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn birth_certificate_id(mut self, birth_certificate_id: impl Into<String>) -> Self {
        self.birth_certificate_id = birth_certificate_id.into();
        self
    }

    /// Sets the grade for the student.
    ///
    /// # Arguments
    /// - `grade` - Grade label, e.g. `"Grade 4"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    /// Sets the parent ID for the student.
    ///
    /// # Arguments
    /// - `parent_id` - Document ID of the linked parent
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the admission status for the student.
    ///
    /// # Arguments
    /// - `status` - Admission status
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: StudentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the student record into the store.
    ///
    /// # Returns
    /// - `Ok(Student)` - Created student record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<Student, StoreError> {
        let mut student = Student {
            name: self.name,
            surname: self.surname,
            birth_certificate_id: Some(self.birth_certificate_id),
            grade: Some(self.grade),
            parent_id: self.parent_id,
            status: self.status,
            ..Student::default()
        };
        self.store.create(&mut student).await?;
        Ok(student)
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(store).build().await`.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok(Student)` - Created student record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let student = create_student(&store).await?;
/// ```
pub async fn create_student(store: &RecordStore) -> Result<Student, StoreError> {
    StudentFactory::new(store).build().await
}

/// Creates a student linked to a specific parent.
///
/// Shorthand for `StudentFactory::new(store).parent_id(parent_id).build().await`.
///
/// # Arguments
/// - `store` - Record store
/// - `parent_id` - Document ID of the linked parent
///
/// # Returns
/// - `Ok(Student)` - Created student record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let student = create_student_for_parent(&store, &parent_id).await?;
/// ```
pub async fn create_student_for_parent(
    store: &RecordStore,
    parent_id: impl Into<String>,
) -> Result<Student, StoreError> {
    StudentFactory::new(store).parent_id(parent_id).build().await
}
