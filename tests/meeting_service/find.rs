use super::*;

/// Tests the parent-scoped meeting view.
///
/// Verifies that a parent sees every group meeting and their own one-on-one
/// meetings, but not another parent's one-on-ones or meetings without a
/// type.
///
/// Expected: Ok with the group meeting and the parent's own one-on-one
#[tokio::test]
async fn shows_group_and_own_one_on_ones() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let group = create_meeting(store).await?;
    let own = MeetingFactory::new(store)
        .meeting_type(MeetingType::OneOnOne)
        .parent_id("parent-1")
        .build()
        .await?;
    MeetingFactory::new(store)
        .meeting_type(MeetingType::OneOnOne)
        .parent_id("parent-2")
        .build()
        .await?;
    MeetingFactory::new(store).without_type().build().await?;

    let visible = service.find_by_parent_id("parent-1").await?;

    assert_eq!(visible.len(), 2);
    assert!(visible
        .iter()
        .any(|meeting| meeting.meeting_id == group.meeting_id));
    assert!(visible
        .iter()
        .any(|meeting| meeting.meeting_id == own.meeting_id));

    Ok(())
}

/// Tests the status-scoped meeting queries.
///
/// Verifies that pending, approved, and rejected lookups each return only
/// the meetings in that state.
///
/// Expected: Ok with one matching meeting per status
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    let pending = MeetingFactory::new(store)
        .status(MeetingStatus::Pending)
        .build()
        .await?;
    let approved = MeetingFactory::new(store)
        .status(MeetingStatus::Approved)
        .build()
        .await?;
    let rejected = MeetingFactory::new(store)
        .status(MeetingStatus::Rejected)
        .build()
        .await?;

    let found_pending = service.find_pending().await?;
    assert_eq!(found_pending.len(), 1);
    assert_eq!(found_pending[0].meeting_id, pending.meeting_id);

    let found_approved = service.find_approved().await?;
    assert_eq!(found_approved.len(), 1);
    assert_eq!(found_approved[0].meeting_id, approved.meeting_id);

    let found_rejected = service.find_rejected().await?;
    assert_eq!(found_rejected.len(), 1);
    assert_eq!(found_rejected[0].meeting_id, rejected.meeting_id);

    Ok(())
}

/// Tests listing and point lookups.
///
/// Verifies that every meeting is listed and that an unknown id reads back
/// as absent.
///
/// Expected: Ok with two listed meetings and None for the unknown id
#[tokio::test]
async fn lists_all_and_misses_unknown_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = MeetingService::new(store);

    create_meeting(store).await?;
    create_meeting(store).await?;

    assert_eq!(service.find_all().await?.len(), 2);
    assert!(service.find_by_id("no-such-meeting").await?.is_none());

    Ok(())
}
