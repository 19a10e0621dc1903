use super::*;

/// Tests a full update of an existing student.
///
/// Verifies that the replacement record takes effect under the original id
/// and that the creation timestamp survives when the caller omits it.
///
/// Expected: Ok with updated fields and the original creation time
#[tokio::test]
async fn replaces_fields_and_keeps_creation_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let created_at = Timestamp::new(1_700_000_000, 0);
    let mut student = Student {
        name: "Naledi".to_string(),
        surname: "Dlamini".to_string(),
        birth_certificate_id: Some("BC-2016-0412".to_string()),
        created_at: Some(created_at),
        ..Default::default()
    };
    let id = store.create(&mut student).await?;

    let replacement = Student {
        name: "Naledi".to_string(),
        surname: "Mokoena".to_string(),
        birth_certificate_id: Some("BC-2016-0412".to_string()),
        grade: Some("Grade 4".to_string()),
        ..Default::default()
    };
    let updated = service.update_student(&id, replacement).await?;

    assert_eq!(updated.student_id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.surname, "Mokoena");
    assert_eq!(updated.created_at, Some(created_at));

    let stored = service.get_student_by_id(&id).await?.unwrap();
    assert_eq!(stored.surname, "Mokoena");
    assert_eq!(stored.created_at, Some(created_at));

    Ok(())
}

/// Tests that an update cannot rewrite the creation timestamp.
///
/// Verifies that a caller-supplied creation time is discarded in favor of
/// the one already on the stored record.
///
/// Expected: Ok with the original creation time, not the submitted one
#[tokio::test]
async fn ignores_caller_supplied_creation_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let original = Timestamp::new(1_690_000_000, 0);
    let mut student = Student {
        name: "Sipho".to_string(),
        created_at: Some(original),
        ..Default::default()
    };
    let id = store.create(&mut student).await?;

    let replacement = Student {
        name: "Sipho".to_string(),
        created_at: Some(Timestamp::new(1_799_999_999, 0)),
        ..Default::default()
    };
    let updated = service.update_student(&id, replacement).await?;

    assert_eq!(updated.created_at, Some(original));

    Ok(())
}

/// Tests changing the birth certificate ID to one already in use.
///
/// Verifies that the duplicate check fires when the update moves the field
/// onto another student's value.
///
/// Expected: Err BadRequest and the stored record untouched
#[tokio::test]
async fn rejects_duplicate_birth_certificate_id_on_change() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    StudentFactory::new(store)
        .birth_certificate_id("BC-2014-1111")
        .build()
        .await?;
    let second = StudentFactory::new(store)
        .birth_certificate_id("BC-2014-2222")
        .build()
        .await?;
    let id = second.student_id.unwrap();

    let replacement = Student {
        birth_certificate_id: Some("BC-2014-1111".to_string()),
        ..Default::default()
    };
    let err = service.update_student(&id, replacement).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::BadRequest(message)
            if message == "A student with this birth certificate ID already exists"
    ));

    let stored = service.get_student_by_id(&id).await?.unwrap();
    assert_eq!(stored.birth_certificate_id.as_deref(), Some("BC-2014-2222"));

    Ok(())
}

/// Tests updating a student without changing the birth certificate ID.
///
/// Verifies that keeping the student's own value does not trip the
/// duplicate check even though that value is already stored.
///
/// Expected: Ok with the other fields updated
#[tokio::test]
async fn keeps_own_birth_certificate_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = StudentService::new(store);

    let student = StudentFactory::new(store)
        .name("Lerato")
        .birth_certificate_id("BC-2013-9001")
        .build()
        .await?;
    let id = student.student_id.unwrap();

    let replacement = Student {
        name: "Lerato".to_string(),
        surname: "Updated".to_string(),
        birth_certificate_id: Some("BC-2013-9001".to_string()),
        ..Default::default()
    };
    let updated = service.update_student(&id, replacement).await?;

    assert_eq!(updated.surname, "Updated");

    Ok(())
}

/// Tests updating an unknown student.
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

    let err = service
        .update_student("no-such-student", Student::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Student not found with ID: no-such-student"
    ));

    Ok(())
}
