use super::*;

/// Tests replacing a user's password.
///
/// Verifies that only the new password verifies afterwards.
///
/// Expected: Ok, with the old password rejected
#[tokio::test]
async fn replaces_password_for_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account("nomsa@example.com", "secret123", "Nomsa Dlamini")
        .build()
        .await
        .unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    let account = identity.find_by_email("nomsa@example.com").await?.unwrap();

    service.update_password(&account.uid, "changed789").await?;

    assert!(!identity
        .verify_password("nomsa@example.com", "secret123")
        .await?);
    assert!(identity
        .verify_password("nomsa@example.com", "changed789")
        .await?);

    Ok(())
}

/// Tests replacing the password of an unknown account.
///
/// Verifies that the provider's rejection surfaces as a bad request with
/// the update message prefix.
///
/// Expected: Err BadRequest
#[tokio::test]
async fn unknown_uid_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    let err = service
        .update_password("no-such-uid", "changed789")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::BadRequest(message)
            if message == "Failed to update password: No account found"
    ));

    Ok(())
}
