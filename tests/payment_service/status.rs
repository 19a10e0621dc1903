use super::*;

/// Tests moving a payment to completed.
///
/// Verifies that the first transition into completed stamps the settlement
/// time.
///
/// Expected: Ok with status completed and a settlement time set
#[tokio::test]
async fn stamps_settlement_time_on_completion() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let payment = PaymentFactory::new(store)
        .status(PaymentStatus::Pending)
        .build()
        .await?;
    let id = payment.payment_id.unwrap();
    assert!(payment.paid_at.is_none());

    let completed = service
        .update_payment_status(&id, PaymentStatus::Completed)
        .await?;

    assert_eq!(completed.status, PaymentStatus::Completed);
    assert!(completed.paid_at.is_some());

    let stored = service.get_payment_by_id(&id).await?.unwrap();
    assert!(stored.paid_at.is_some());

    Ok(())
}

/// Tests re-completing an already settled payment.
///
/// Verifies that a payment carrying a settlement time keeps it instead of
/// getting a fresh stamp.
///
/// Expected: Ok with the original settlement time unchanged
#[tokio::test]
async fn keeps_existing_settlement_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let settled_at = Timestamp::new(1_700_000_000, 0);
    let mut payment = Payment {
        status: PaymentStatus::Completed,
        paid_at: Some(settled_at),
        ..Default::default()
    };
    let id = store.create(&mut payment).await?;

    let updated = service
        .update_payment_status(&id, PaymentStatus::Completed)
        .await?;

    assert_eq!(updated.paid_at, Some(settled_at));

    Ok(())
}

/// Tests moving a payment to a non-completed status.
///
/// Verifies that the status changes without a settlement time appearing.
///
/// Expected: Ok with status refunded and no settlement time added
#[tokio::test]
async fn does_not_stamp_other_statuses() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let payment = PaymentFactory::new(store)
        .status(PaymentStatus::Pending)
        .build()
        .await?;
    let id = payment.payment_id.unwrap();

    let refunded = service
        .update_payment_status(&id, PaymentStatus::Refunded)
        .await?;

    assert_eq!(refunded.status, PaymentStatus::Refunded);
    assert!(refunded.paid_at.is_none());

    Ok(())
}

/// Tests updating the status of an unknown payment.
///
/// Verifies that the lookup miss surfaces as a not-found error naming the
/// requested id.
///
/// Expected: Err NotFound
#[tokio::test]
async fn missing_payment_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let err = service
        .update_payment_status("no-such-payment", PaymentStatus::Completed)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Payment not found with ID: no-such-payment"
    ));

    Ok(())
}
