use super::*;

/// Tests the pending document request queue.
///
/// Verifies that only requests still awaiting a decision come back.
///
/// Expected: Ok with the single pending request
#[tokio::test]
async fn pending_filter_returns_only_undecided() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = AdminService::new(store);

    let pending = create_document_request(store, "parent-1").await?;
    DocumentRequestFactory::new(store)
        .parent_id("parent-1")
        .status(RequestStatus::Approved)
        .build()
        .await?;

    assert_eq!(service.get_all_document_requests().await?.len(), 2);

    let queue = service.get_pending_document_requests().await?;
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].request_id, pending.request_id);

    Ok(())
}

/// Tests approving a document request.
///
/// Verifies that the approval lands on the stored record.
///
/// Expected: Ok with the request now approved
#[tokio::test]
async fn approve_marks_request_approved() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = AdminService::new(store);

    let request = create_document_request(store, "parent-1").await?;
    let id = request.request_id.unwrap();

    let approved = service.approve_document_request(&id).await?.unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);

    let queue = service.get_pending_document_requests().await?;
    assert!(queue.is_empty());

    Ok(())
}

/// Tests approving a request that does not exist.
///
/// Verifies that the miss is reported as an absent value rather than an
/// error.
///
/// Expected: Ok with None
#[tokio::test]
async fn approving_missing_request_returns_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = AdminService::new(store);

    let outcome = service.approve_document_request("no-such-request").await?;
    assert!(outcome.is_none());

    Ok(())
}
