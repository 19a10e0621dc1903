use super::*;

/// Tests the paid check for a settled payment.
///
/// Verifies that a completed payment linking the student to the trip makes
/// the check pass.
///
/// Expected: true
#[tokio::test]
async fn true_for_completed_payment() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    create_payment(store, "student-1", "trip-1").await?;

    assert!(service.has_student_paid_for_trip("student-1", "trip-1").await);

    Ok(())
}

/// Tests the paid check against an unsettled payment.
///
/// Verifies that a pending payment does not count as paid.
///
/// Expected: false
#[tokio::test]
async fn false_for_pending_payment() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    PaymentFactory::new(store)
        .student_id("student-1")
        .trip_id("trip-1")
        .status(PaymentStatus::Pending)
        .build()
        .await?;

    assert!(!service.has_student_paid_for_trip("student-1", "trip-1").await);

    Ok(())
}

/// Tests the paid check across trips.
///
/// Verifies that a completed payment for one trip does not satisfy the
/// check for another, and that a student with no payments fails it.
///
/// Expected: false for the other trip and for the unknown student
#[tokio::test]
async fn false_for_other_trip() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    create_payment(store, "student-1", "trip-1").await?;

    assert!(!service.has_student_paid_for_trip("student-1", "trip-2").await);
    assert!(!service.has_student_paid_for_trip("student-9", "trip-1").await);

    Ok(())
}
