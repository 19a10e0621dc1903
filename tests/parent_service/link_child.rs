use super::*;

/// Tests linking a student to a parent.
///
/// Verifies that the student id lands on the children list and that linking
/// the same student twice does not duplicate the entry.
///
/// Expected: Ok with the student listed exactly once
#[tokio::test]
async fn links_student_once() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let parent = create_parent(store).await?;
    let parent_id = parent.parent_id.unwrap();

    let linked = service.link_child(&parent_id, "student-1").await?;
    assert_eq!(linked.children_ids, vec!["student-1".to_string()]);

    let linked_again = service.link_child(&parent_id, "student-1").await?;
    assert_eq!(linked_again.children_ids, vec!["student-1".to_string()]);

    let stored = service.find_by_id(&parent_id).await?.unwrap();
    assert_eq!(stored.children_ids, vec!["student-1".to_string()]);

    Ok(())
}

/// Tests linking a second student.
///
/// Verifies that existing children survive when another student joins the
/// list.
///
/// Expected: Ok with both students listed
#[tokio::test]
async fn keeps_existing_children() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let parent = ParentFactory::new(store).child("student-1").build().await?;
    let parent_id = parent.parent_id.unwrap();

    let linked = service.link_child(&parent_id, "student-2").await?;

    assert_eq!(
        linked.children_ids,
        vec!["student-1".to_string(), "student-2".to_string()]
    );

    Ok(())
}

/// Tests linking against an unknown parent.
///
/// Verifies that the lookup miss surfaces as a not-found error naming the
/// requested id.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_parent_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = ParentService::new(store);

    let err = service
        .link_child("no-such-parent", "student-1")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Parent not found with ID: no-such-parent"
    ));

    Ok(())
}
