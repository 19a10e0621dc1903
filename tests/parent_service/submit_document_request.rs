use super::*;

/// Tests submitting a document request.
///
/// Verifies that the stored request gets an id, a creation timestamp, and
/// starts out pending under the submitting parent.
///
/// Expected: Ok with parent id set, status pending, and created_at stamped
#[tokio::test]
async fn stores_pending_request_under_the_parent() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let request = DocumentRequest {
        student_id: Some("student-1".to_string()),
        document_type: Some(DocumentType::TransferLetter),
        reason: Some("Family moving to Cape Town".to_string()),
        ..Default::default()
    };
    let submitted = service.submit_document_request("parent-1", request).await?;

    assert!(submitted.request_id.is_some());
    assert_eq!(submitted.parent_id.as_deref(), Some("parent-1"));
    assert_eq!(submitted.status, RequestStatus::Pending);
    assert!(submitted.created_at.is_some());

    let stored: Option<DocumentRequest> = store
        .get_by_id(submitted.request_id.as_deref().unwrap())
        .await?;
    assert_eq!(stored, Some(submitted));

    Ok(())
}

/// Tests that the caller's parent id wins.
///
/// Verifies that a request body naming a different parent is filed under
/// the submitting parent anyway.
///
/// Expected: Ok with the body's parent id replaced
#[tokio::test]
async fn overrides_parent_id_from_the_body() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let request = DocumentRequest {
        parent_id: Some("someone-else".to_string()),
        document_type: Some(DocumentType::StudentReport),
        ..Default::default()
    };
    let submitted = service.submit_document_request("parent-1", request).await?;

    assert_eq!(submitted.parent_id.as_deref(), Some("parent-1"));

    Ok(())
}

/// Tests that a supplied creation time survives.
///
/// Verifies that the service only stamps created_at when the request omits
/// it.
///
/// Expected: Ok with the original timestamp preserved
#[tokio::test]
async fn keeps_supplied_creation_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let created_at = Timestamp::new(1_700_000_000, 0);
    let request = DocumentRequest {
        created_at: Some(created_at),
        ..Default::default()
    };
    let submitted = service.submit_document_request("parent-1", request).await?;

    assert_eq!(submitted.created_at, Some(created_at));

    Ok(())
}
