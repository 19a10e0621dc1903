use super::*;

/// Tests an update that omits the registration list and creation time.
///
/// Verifies that both stored values survive when the replacement record
/// leaves them unset.
///
/// Expected: Ok with the original registrations and creation time kept
#[tokio::test]
async fn preserves_registrations_and_creation_time_when_omitted() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let created_at = Timestamp::new(1_700_000_000, 0);
    let mut trip = Trip {
        title: "Museum Day".to_string(),
        registered_students: Some(vec!["student-1".to_string()]),
        created_at: Some(created_at),
        ..Default::default()
    };
    let id = store.create(&mut trip).await?;

    let replacement = Trip {
        title: "Museum Day (rescheduled)".to_string(),
        ..Default::default()
    };
    let updated = service.update_trip(&id, replacement).await?;

    assert_eq!(updated.title, "Museum Day (rescheduled)");
    assert_eq!(
        updated.registered_students,
        Some(vec!["student-1".to_string()])
    );
    assert_eq!(updated.created_at, Some(created_at));

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(
        stored.registered_students,
        Some(vec!["student-1".to_string()])
    );
    assert_eq!(stored.created_at, Some(created_at));

    Ok(())
}

/// Tests an update that supplies its own registration list.
///
/// Verifies that a present list replaces the stored one wholesale, so an
/// empty list clears the registrations rather than being ignored.
///
/// Expected: Ok with the stored list replaced by the empty one
#[tokio::test]
async fn replaces_registrations_when_supplied() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let trip = TripFactory::new(store)
        .registered_student("student-1")
        .registered_student("student-2")
        .build()
        .await?;
    let id = trip.trip_id.unwrap();

    let replacement = Trip {
        title: "Cleared".to_string(),
        registered_students: Some(Vec::new()),
        ..Default::default()
    };
    service.update_trip(&id, replacement).await?;

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(stored.registered_students, Some(Vec::new()));

    Ok(())
}

/// Tests replacing a trip's image.
///
/// Verifies that the new image lands on the stored record.
///
/// Expected: Ok with the image URL updated
#[tokio::test]
async fn stores_new_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let trip = create_trip(store).await?;
    let id = trip.trip_id.unwrap();

    let updated = service
        .update_trip_image(&id, "https://images.example.com/trip.jpg".to_string())
        .await?;

    assert_eq!(
        updated.image_url.as_deref(),
        Some("https://images.example.com/trip.jpg")
    );

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(
        stored.image_url.as_deref(),
        Some("https://images.example.com/trip.jpg")
    );

    Ok(())
}

/// Tests updating an unknown trip.
///
/// Verifies that the lookup miss surfaces as a not-found error naming the
/// requested id.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_trip_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = TripService::new(store);

    let err = service
        .update_trip("no-such-trip", Trip::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message) if message == "Trip not found with ID: no-such-trip"
    ));

    Ok(())
}
