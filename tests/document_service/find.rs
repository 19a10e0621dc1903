use super::*;

/// Tests the student and parent scoped lookups.
///
/// Verifies that documents are returned only for the student or parent they
/// are attached to.
///
/// Expected: Ok with the matching documents only
#[tokio::test]
async fn filters_by_student_and_parent() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = DocumentService::new(store);

    DocumentFactory::new(store)
        .student_id("student-1")
        .parent_id("parent-1")
        .build()
        .await?;
    DocumentFactory::new(store)
        .parent_id("parent-1")
        .build()
        .await?;
    DocumentFactory::new(store)
        .student_id("student-2")
        .build()
        .await?;

    let for_student = service.find_by_student_id("student-1").await?;
    assert_eq!(for_student.len(), 1);
    assert_eq!(for_student[0].student_id.as_deref(), Some("student-1"));

    let for_parent = service.find_by_parent_id("parent-1").await?;
    assert_eq!(for_parent.len(), 2);

    Ok(())
}

/// Tests the document type filter.
///
/// Verifies that only documents of the requested type are returned.
///
/// Expected: Ok with the timetable only
#[tokio::test]
async fn filters_by_type() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = DocumentService::new(store);

    let timetable = DocumentFactory::new(store)
        .file_name("term-3-timetable.pdf")
        .document_type(DocumentType::Timetable)
        .build()
        .await?;
    DocumentFactory::new(store)
        .document_type(DocumentType::StudentReport)
        .build()
        .await?;

    let found = service.find_by_type(DocumentType::Timetable).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].document_id, timetable.document_id);

    Ok(())
}

/// Tests the unverified document queue.
///
/// Verifies that documents an admin has already verified are excluded.
///
/// Expected: Ok with the unverified document only
#[tokio::test]
async fn unverified_filter_skips_verified() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = DocumentService::new(store);

    let pending = create_document(store, "student-1").await?;
    DocumentFactory::new(store)
        .student_id("student-1")
        .verified(true)
        .build()
        .await?;

    let unverified = service.find_unverified().await?;

    assert_eq!(unverified.len(), 1);
    assert_eq!(unverified[0].document_id, pending.document_id);

    Ok(())
}

/// Tests retrieving all documents and a lookup miss.
///
/// Verifies that the full listing includes every stored document and that
/// an unknown id resolves to None.
///
/// Expected: Ok with both documents, then Ok(None)
#[tokio::test]
async fn lists_all_and_misses_unknown_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = DocumentService::new(store);

    create_document(store, "student-1").await?;
    create_document(store, "student-2").await?;

    let all = service.get_all_documents().await?;
    assert_eq!(all.len(), 2);

    let missing = service.get_document_by_id("no-such-document").await?;
    assert!(missing.is_none());

    Ok(())
}
