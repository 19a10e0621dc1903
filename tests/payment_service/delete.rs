use super::*;

/// Tests deleting a payment.
///
/// Verifies that only the targeted record disappears.
///
/// Expected: Ok with the deleted payment gone and the other one intact
#[tokio::test]
async fn removes_only_the_targeted_payment() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let doomed = create_payment(store, "student-1", "trip-1").await?;
    let kept = create_payment(store, "student-2", "trip-1").await?;
    let doomed_id = doomed.payment_id.unwrap();

    service.delete_payment(&doomed_id).await?;

    assert!(service.get_payment_by_id(&doomed_id).await?.is_none());
    let remaining = service.get_all_payments().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].payment_id, kept.payment_id);

    Ok(())
}

/// Tests deleting an unknown payment.
///
/// Verifies that the delete refuses to run against an id that was never
/// stored.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_payment_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let err = service.delete_payment("no-such-payment").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Payment not found with ID: no-such-payment"
    ));

    Ok(())
}
