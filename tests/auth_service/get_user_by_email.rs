use super::*;

/// Tests looking up a user profile by email.
///
/// Verifies that the stored profile is returned.
///
/// Expected: Ok with the matching profile
#[tokio::test]
async fn returns_stored_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    let seeded = UserFactory::new(store)
        .email("nomsa@example.com")
        .full_name("Nomsa Dlamini")
        .build()
        .await?;

    let found = service.get_user_by_email("nomsa@example.com").await?;

    assert_eq!(found.uid, seeded.uid);
    assert_eq!(found.full_name, "Nomsa Dlamini");

    Ok(())
}

/// Tests looking up an email with no stored profile.
///
/// Verifies that the miss surfaces as a not-found error.
///
/// Expected: Err NotFound
#[tokio::test]
async fn unknown_email_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    let err = service
        .get_user_by_email("stranger@example.com")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound(message) if message == "User not found"
    ));

    Ok(())
}
