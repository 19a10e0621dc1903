use super::*;

/// Tests deleting a student.
///
/// Verifies that only the targeted record disappears.
///
/// Expected: Ok with the deleted student gone and the other one intact
#[tokio::test]
async fn removes_only_the_targeted_student() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let doomed = create_student(store).await?;
    let kept = create_student(store).await?;
    let doomed_id = doomed.student_id.unwrap();

    service.delete_student(&doomed_id).await?;

    assert!(service.get_student_by_id(&doomed_id).await?.is_none());
    let remaining = service.get_all_students().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].student_id, kept.student_id);

    Ok(())
}

/// Tests deleting an unknown student.
///
/// Verifies that the delete refuses to run against an id that was never
/// stored.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_student_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let err = service.delete_student("no-such-student").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Student not found with ID: no-such-student"
    ));

    Ok(())
}
