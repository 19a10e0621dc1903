use super::*;

/// Tests logging in as a parent.
///
/// Verifies that the returned profile comes from the store and carries the
/// id of the linked parent record.
///
/// Expected: Ok with the profile and parent id
#[tokio::test]
async fn returns_profile_with_parent_link() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account("nomsa@example.com", "secret123", "Nomsa Dlamini")
        .build()
        .await
        .unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    UserFactory::new(store)
        .uid("uid-nomsa")
        .email("nomsa@example.com")
        .full_name("Nomsa Dlamini")
        .build()
        .await?;
    let parent = ParentFactory::new(store).uid("uid-nomsa").build().await?;

    let request = LoginRequest {
        email: "nomsa@example.com".to_string(),
        password: "secret123".to_string(),
    };
    let logged_in = service.login(request).await?;

    assert_eq!(logged_in.uid, "uid-nomsa");
    assert_eq!(logged_in.email, "nomsa@example.com");
    assert_eq!(logged_in.full_name, "Nomsa Dlamini");
    assert_eq!(logged_in.role, Some(UserRole::Parent));
    assert_eq!(logged_in.parent_id, parent.parent_id);

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Verifies that the rejection uses the shared credentials message rather
/// than revealing which part failed.
///
/// Expected: Err BadRequest
#[tokio::test]
async fn wrong_password_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account("nomsa@example.com", "secret123", "Nomsa Dlamini")
        .build()
        .await
        .unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    UserFactory::new(store)
        .email("nomsa@example.com")
        .build()
        .await?;

    let request = LoginRequest {
        email: "nomsa@example.com".to_string(),
        password: "wrong".to_string(),
    };
    let err = service.login(request).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::BadRequest(message)
            if message == "Authentication failed: Invalid email or password"
    ));

    Ok(())
}

/// Tests logging in with an email the provider has never seen.
///
/// Verifies that the rejection uses the shared credentials message.
///
/// Expected: Err BadRequest
#[tokio::test]
async fn unknown_email_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    let request = LoginRequest {
        email: "stranger@example.com".to_string(),
        password: "secret123".to_string(),
    };
    let err = service.login(request).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::BadRequest(message)
            if message == "Authentication failed: Invalid email or password"
    ));

    Ok(())
}

/// Tests logging in when the account exists but its profile is missing.
///
/// Verifies that a provider account without a stored profile is treated as
/// a credential failure, again with the shared message.
///
/// Expected: Err BadRequest
#[tokio::test]
async fn missing_profile_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account("nomsa@example.com", "secret123", "Nomsa Dlamini")
        .build()
        .await
        .unwrap();
    let (store, identity) = test.store_and_identity();
    let service = AuthService::new(store, identity.as_ref());

    let request = LoginRequest {
        email: "nomsa@example.com".to_string(),
        password: "secret123".to_string(),
    };
    let err = service.login(request).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::BadRequest(message)
            if message == "Authentication failed: Invalid email or password"
    ));

    Ok(())
}
