use super::*;

/// Tests creating a parent profile.
///
/// Verifies that the stored profile gets a generated identifier and can be
/// read back with the submitted fields intact.
///
/// Expected: Ok with an id assigned and the fields round-tripped
#[tokio::test]
async fn stores_parent_with_generated_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let parent = Parent {
        full_name: "Nomsa Dlamini".to_string(),
        email: "nomsa@example.com".to_string(),
        phone_number: Some("+27 82 000 0000".to_string()),
        ..Default::default()
    };
    let created = service.create_parent(parent).await?;

    assert!(created.parent_id.is_some());

    let stored = service
        .find_by_id(created.parent_id.as_deref().unwrap())
        .await?
        .unwrap();
    assert_eq!(stored.full_name, "Nomsa Dlamini");
    assert_eq!(stored.email, "nomsa@example.com");

    Ok(())
}

/// Tests a full update of an existing parent.
///
/// Verifies that the replacement record takes effect under the original id
/// and that the creation timestamp survives when the caller omits it.
///
/// Expected: Ok with updated fields and the original creation time
#[tokio::test]
async fn update_replaces_fields_and_keeps_creation_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let created_at = Timestamp::new(1_700_000_000, 0);
    let mut parent = Parent {
        full_name: "Nomsa Dlamini".to_string(),
        created_at: Some(created_at),
        ..Default::default()
    };
    let id = store.create(&mut parent).await?;

    let replacement = Parent {
        full_name: "Nomsa Dlamini".to_string(),
        address: Some("12 Vilakazi Street, Soweto".to_string()),
        ..Default::default()
    };
    let updated = service.update_parent(&id, replacement).await?;

    assert_eq!(updated.parent_id.as_deref(), Some(id.as_str()));
    assert_eq!(
        updated.address.as_deref(),
        Some("12 Vilakazi Street, Soweto")
    );
    assert_eq!(updated.created_at, Some(created_at));

    let stored = service.find_by_id(&id).await?.unwrap();
    assert_eq!(stored.created_at, Some(created_at));

    Ok(())
}

/// Tests updating an unknown parent.
///
/// Verifies that the lookup miss surfaces as a not-found error naming the
/// requested id.
///
/// Expected: Err NotFound
#[tokio::test]
async fn update_missing_parent_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let err = service
        .update_parent("no-such-parent", Parent::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Parent not found with ID: no-such-parent"
    ));

    Ok(())
}

/// Tests deleting a parent.
///
/// Verifies that only the targeted profile disappears.
///
/// Expected: Ok with the deleted parent gone and the other one intact
#[tokio::test]
async fn delete_removes_only_the_targeted_parent() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let doomed = create_parent(store).await?;
    let kept = create_parent(store).await?;
    let doomed_id = doomed.parent_id.unwrap();

    service.delete_parent(&doomed_id).await?;

    assert!(service.find_by_id(&doomed_id).await?.is_none());
    let remaining = service.get_all_parents().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].parent_id, kept.parent_id);

    Ok(())
}

/// Tests deleting an unknown parent.
///
/// Verifies that the delete refuses to run against an id that was never
/// stored.
///
/// Expected: Err NotFound
#[tokio::test]
async fn delete_missing_parent_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let err = service.delete_parent("no-such-parent").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Parent not found with ID: no-such-parent"
    ));

    Ok(())
}
