use super::*;

/// Tests a full update of an existing payment.
///
/// Verifies that the replacement record takes effect under the original id
/// and that the creation timestamp survives when the caller omits it.
///
/// Expected: Ok with updated fields and the original creation time
#[tokio::test]
async fn replaces_fields_and_keeps_creation_time() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = test.store();
    let service = PaymentService::new(store);

    let created_at = Timestamp::new(1_700_000_000, 0);
    let mut payment = Payment {
        amount: Some(150.0),
        created_at: Some(created_at),
        ..Default::default()
    };
    let id = store.create(&mut payment).await?;

    let replacement = Payment {
        amount: Some(175.0),
        payment_note: Some("Adjusted for sibling discount".to_string()),
        ..Default::default()
    };
    let updated = service.update_payment(&id, replacement).await?;

    assert_eq!(updated.payment_id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.amount, Some(175.0));
    assert_eq!(updated.created_at, Some(created_at));

    let stored = service.get_payment_by_id(&id).await?.unwrap();
    assert_eq!(stored.amount, Some(175.0));
    assert_eq!(stored.created_at, Some(created_at));

    Ok(())
}

/// Tests updating an unknown payment.
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
        .update_payment("no-such-payment", Payment::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message)
            if message == "Payment not found with ID: no-such-payment"
    ));

    Ok(())
}
