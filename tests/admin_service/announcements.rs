use super::*;

/// Tests publishing an announcement.
///
/// Verifies that the stored announcement gets a generated identifier and
/// keeps the submitted type and active flag.
///
/// Expected: Ok with an id assigned and the fields round-tripped
#[tokio::test]
async fn stores_announcement_with_generated_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = AdminService::new(store);

    let announcement = Announcement {
        title: "School closed on Friday".to_string(),
        content: "The school closes early for the athletics meet.".to_string(),
        announcement_type: AnnouncementType::Urgent,
        ..Default::default()
    };
    let created = service.create_announcement(announcement).await?;

    assert!(created.announcement_id.is_some());

    let stored = service
        .get_announcement_by_id(created.announcement_id.as_deref().unwrap())
        .await?
        .unwrap();
    assert_eq!(stored.title, "School closed on Friday");
    assert_eq!(stored.announcement_type, AnnouncementType::Urgent);
    assert!(stored.active);

    Ok(())
}

/// Tests a full update of an existing announcement.
///
/// Verifies that the replacement record takes effect under the original id
/// and that the creation timestamp survives when the caller omits it.
///
/// Expected: Ok with updated fields and the original creation time
#[tokio::test]
async fn update_replaces_fields_and_keeps_creation_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = AdminService::new(store);

    let created_at = Timestamp::new(1_700_000_000, 0);
    let mut announcement = Announcement {
        title: "Sports day".to_string(),
        created_at: Some(created_at),
        ..Default::default()
    };
    let id = store.create(&mut announcement).await?;

    let replacement = Announcement {
        title: "Sports day postponed".to_string(),
        content: "Moved to the following week due to rain.".to_string(),
        ..Default::default()
    };
    let updated = service.update_announcement(&id, replacement).await?;

    assert_eq!(updated.announcement_id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.title, "Sports day postponed");
    assert_eq!(updated.created_at, Some(created_at));

    let stored = service.get_announcement_by_id(&id).await?.unwrap();
    assert_eq!(stored.title, "Sports day postponed");
    assert_eq!(stored.created_at, Some(created_at));

    Ok(())
}

/// Tests updating an unknown announcement.
///
/// Verifies that the lookup miss surfaces as a not-found error naming the
/// requested id.
///
/// Expected: Err NotFound
#[tokio::test]
async fn update_missing_announcement_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = AdminService::new(store);

    let err = service
        .update_announcement("no-such-announcement", Announcement::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Announcement not found with ID: no-such-announcement"
    ));

    Ok(())
}

/// Tests deleting an announcement.
///
/// Verifies that only the targeted record disappears and that deleting an
/// unknown id is refused.
///
/// Expected: Ok for the stored record, Err NotFound for the unknown one
#[tokio::test]
async fn delete_removes_stored_announcement() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = AdminService::new(store);

    let doomed = create_announcement(store).await?;
    create_announcement(store).await?;
    let doomed_id = doomed.announcement_id.unwrap();

    service.delete_announcement(&doomed_id).await?;

    assert!(service.get_announcement_by_id(&doomed_id).await?.is_none());
    assert_eq!(service.get_all_announcements().await?.len(), 1);

    let err = service
        .delete_announcement("no-such-announcement")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Announcement not found with ID: no-such-announcement"
    ));

    Ok(())
}
