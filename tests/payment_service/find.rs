use super::*;

/// Tests the scoped payment queries.
///
/// Verifies that student, parent, and trip lookups each return only the
/// payments linked to that id.
///
/// Expected: Ok with one matching payment per scope
#[tokio::test]
async fn filters_by_student_parent_and_trip() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let payment = PaymentFactory::new(store)
        .student_id("student-1")
        .parent_id("parent-1")
        .trip_id("trip-1")
        .build()
        .await?;
    PaymentFactory::new(store)
        .student_id("student-2")
        .parent_id("parent-2")
        .trip_id("trip-2")
        .build()
        .await?;

    let by_student = service.find_by_student_id("student-1").await?;
    assert_eq!(by_student.len(), 1);
    assert_eq!(by_student[0].payment_id, payment.payment_id);

    let by_parent = service.find_by_parent_id("parent-1").await?;
    assert_eq!(by_parent.len(), 1);
    assert_eq!(by_parent[0].payment_id, payment.payment_id);

    let by_trip = service.find_by_trip_id("trip-1").await?;
    assert_eq!(by_trip.len(), 1);
    assert_eq!(by_trip[0].payment_id, payment.payment_id);

    Ok(())
}

/// Tests the status-scoped payment query.
///
/// Verifies that only payments in the requested status come back.
///
/// Expected: Ok with the single pending payment
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let pending = PaymentFactory::new(store)
        .status(PaymentStatus::Pending)
        .build()
        .await?;
    PaymentFactory::new(store)
        .status(PaymentStatus::Completed)
        .build()
        .await?;

    let found = service.find_by_status(PaymentStatus::Pending).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].payment_id, pending.payment_id);

    Ok(())
}

/// Tests listing and point lookups.
///
/// Verifies that every payment is listed and that an unknown id reads back
/// as absent.
///
/// Expected: Ok with two listed payments and None for the unknown id
#[tokio::test]
async fn lists_all_and_misses_unknown_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    create_payment(store, "student-1", "trip-1").await?;
    create_payment(store, "student-2", "trip-1").await?;

    assert_eq!(service.get_all_payments().await?.len(), 2);
    assert!(service.get_payment_by_id("no-such-payment").await?.is_none());

    Ok(())
}
