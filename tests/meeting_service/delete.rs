use super::*;

/// Tests deleting a meeting.
///
/// Verifies that only the targeted record disappears.
///
/// Expected: Ok with the deleted meeting gone and the other one intact
#[tokio::test]
async fn removes_only_the_targeted_meeting() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let doomed = create_meeting(store).await?;
    let kept = create_meeting(store).await?;
    let doomed_id = doomed.meeting_id.unwrap();

    service.delete_meeting(&doomed_id).await?;

    assert!(service.find_by_id(&doomed_id).await?.is_none());
    let remaining = service.find_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].meeting_id, kept.meeting_id);

    Ok(())
}

/// Tests deleting an unknown meeting.
///
/// Verifies that the delete refuses to run against an id that was never
/// stored.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_meeting_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let err = service.delete_meeting("no-such-meeting").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Meeting not found with ID: no-such-meeting"
    ));

    Ok(())
}
