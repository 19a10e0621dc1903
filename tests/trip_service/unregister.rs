use super::*;

/// Tests removing a registered student from a trip.
///
/// Verifies that only the named student leaves the registration list.
///
/// Expected: Ok with the other registration still in place
#[tokio::test]
async fn removes_only_the_named_student() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let trip = TripFactory::new(store)
        .registered_student("student-1")
        .registered_student("student-2")
        .build()
        .await?;
    let id = trip.trip_id.unwrap();

    service.unregister_student(&id, "student-1").await?;

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(
        stored.registered_students,
        Some(vec!["student-2".to_string()])
    );

    Ok(())
}

/// Tests unregistering a student who never registered.
///
/// Verifies that the call succeeds without touching the list.
///
/// Expected: Ok with the registration list unchanged
#[tokio::test]
async fn unknown_student_is_a_noop() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let trip = TripFactory::new(store)
        .registered_student("student-1")
        .build()
        .await?;
    let id = trip.trip_id.unwrap();

    service.unregister_student(&id, "student-9").await?;

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(
        stored.registered_students,
        Some(vec!["student-1".to_string()])
    );

    Ok(())
}

/// Tests that unregistering does not reverse the payment.
///
/// Verifies that the payment recorded at registration time survives the
/// student's removal from the trip.
///
/// Expected: Ok with the payment still stored
#[tokio::test]
async fn leaves_recorded_payment_in_place() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let (parent, student) = create_family(store).await?;
    let trip = create_trip(store).await?;
    let trip_id = trip.trip_id.unwrap();
    let student_id = student.student_id.unwrap();

    service
        .register_student(
            &trip_id,
            &student_id,
            parent.parent_id.as_deref().unwrap(),
            None,
        )
        .await?;
    service.unregister_student(&trip_id, &student_id).await?;

    let stored = service.find_by_id(&trip_id).await?.unwrap();
    assert_eq!(stored.registered_students, Some(Vec::new()));
    let payments: Vec<Payment> = store.get_all().await?;
    assert_eq!(payments.len(), 1);

    Ok(())
}

/// Tests unregistering from an unknown trip.
///
/// Verifies that the lookup miss surfaces as a not-found error.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_trip_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let err = service
        .unregister_student("no-such-trip", "student-1")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message) if message == "Trip not found with ID: no-such-trip"
    ));

    Ok(())
}
