use super::*;

/// Tests approving a pending application.
///
/// Verifies that approval flips the status and that the change is visible
/// on a fresh read.
///
/// Expected: Ok with status approved on both the returned and stored record
#[tokio::test]
async fn marks_student_approved() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let student = create_student(store).await?;
    let id = student.student_id.unwrap();

    let approved = service.approve_student(&id).await?;
    assert_eq!(approved.status, StudentStatus::Approved);

    let stored = service.get_student_by_id(&id).await?.unwrap();
    assert_eq!(stored.status, StudentStatus::Approved);

    Ok(())
}

/// Tests approving a previously rejected application.
///
/// Verifies that approval wipes the rejection reason left behind by the
/// earlier decision.
///
/// Expected: Ok with status approved and no rejection reason
#[tokio::test]
async fn clears_earlier_rejection_reason() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let student = create_student(store).await?;
    let id = student.student_id.unwrap();

    service.reject_student(&id, "Missing immunization record").await?;
    let approved = service.approve_student(&id).await?;

    assert_eq!(approved.status, StudentStatus::Approved);
    assert_eq!(approved.rejection_reason, None);

    Ok(())
}

/// Tests approval with a class assignment.
///
/// Verifies that the student is approved and carries the class name and
/// teacher handed in with the decision.
///
/// Expected: Ok with status approved, class name, and teacher set
#[tokio::test]
async fn assigns_class_on_approval() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let student = create_student(store).await?;
    let id = student.student_id.unwrap();

    let approved = service
        .approve_student_with_class(&id, "Grade 4B", "Mr Khumalo")
        .await?;

    assert_eq!(approved.status, StudentStatus::Approved);
    assert_eq!(approved.class_name.as_deref(), Some("Grade 4B"));
    assert_eq!(approved.teacher.as_deref(), Some("Mr Khumalo"));

    let stored = service.get_student_by_id(&id).await?.unwrap();
    assert_eq!(stored.class_name.as_deref(), Some("Grade 4B"));

    Ok(())
}

/// Tests approving an unknown student.
///
/// Verifies that the lookup miss surfaces as a not-found error naming the
/// requested id.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_student_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let err = service.approve_student("no-such-student").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Student not found with ID: no-such-student"
    ));

    Ok(())
}
