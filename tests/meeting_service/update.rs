use super::*;

/// Tests a full update of an existing meeting.
///
/// Verifies that the replacement record takes effect under the original id
/// and that the creation timestamp survives when the caller omits it.
///
/// Expected: Ok with updated fields and the original creation time
#[tokio::test]
async fn replaces_fields_and_keeps_creation_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let created_at = Timestamp::new(1_700_000_000, 0);
    let mut meeting = Meeting {
        title: "Parents evening".to_string(),
        meeting_type: Some(MeetingType::GroupMeeting),
        created_at: Some(created_at),
        ..Default::default()
    };
    let id = store.create(&mut meeting).await?;

    let replacement = Meeting {
        title: "Parents evening (moved to the hall)".to_string(),
        meeting_type: Some(MeetingType::GroupMeeting),
        ..Default::default()
    };
    let updated = service.update_meeting(&id, replacement).await?;

    assert_eq!(updated.meeting_id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.title, "Parents evening (moved to the hall)");
    assert_eq!(updated.created_at, Some(created_at));

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(stored.title, "Parents evening (moved to the hall)");
    assert_eq!(stored.created_at, Some(created_at));

    Ok(())
}

/// Tests updating an unknown meeting.
///
/// Verifies that the lookup miss surfaces as a not-found error naming the
/// requested id.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_meeting_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let err = service
        .update_meeting("no-such-meeting", Meeting::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Meeting not found with ID: no-such-meeting"
    ));

    Ok(())
}
