use super::*;

/// Tests approving a pending one-on-one request.
///
/// Verifies that approval flips the status and clears any rejection reason
/// from an earlier decision.
///
/// Expected: Ok with status approved and no rejection reason
#[tokio::test]
async fn marks_meeting_approved() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let meeting = MeetingFactory::new(store)
        .meeting_type(MeetingType::OneOnOne)
        .status(MeetingStatus::Pending)
        .build()
        .await?;
    let id = meeting.meeting_id.unwrap();

    service.reject_meeting(&id, "Teacher unavailable").await?;
    let approved = service.approve_meeting(&id).await?;

    assert_eq!(approved.status, Some(MeetingStatus::Approved));
    assert_eq!(approved.rejection_reason, None);

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(stored.status, Some(MeetingStatus::Approved));

    Ok(())
}

/// Tests rejecting a pending one-on-one request.
///
/// Verifies that rejection flips the status and records the reason given
/// to the parent.
///
/// Expected: Ok with status rejected and the reason stored
#[tokio::test]
async fn marks_meeting_rejected_with_reason() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let meeting = MeetingFactory::new(store)
        .meeting_type(MeetingType::OneOnOne)
        .status(MeetingStatus::Pending)
        .build()
        .await?;
    let id = meeting.meeting_id.unwrap();

    let rejected = service
        .reject_meeting(&id, "Teacher unavailable that week")
        .await?;

    assert_eq!(rejected.status, Some(MeetingStatus::Rejected));
    assert_eq!(
        rejected.rejection_reason.as_deref(),
        Some("Teacher unavailable that week")
    );

    Ok(())
}

/// Tests deciding on an unknown meeting.
///
/// Verifies that both approval and rejection surface the lookup miss as a
/// not-found error.
///
/// Expected: Err NotFound from both operations
#[tokio::test]
async fn missing_meeting_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let err = service.approve_meeting("no-such-meeting").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Meeting not found with ID: no-such-meeting"
    ));

    let err = service
        .reject_meeting("no-such-meeting", "reason")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Meeting not found with ID: no-such-meeting"
    ));

    Ok(())
}
