mod common;

use citsite::{
    auth::{AuthEvent, AuthService, SessionState},
    error::AppError,
};

#[tokio::test]
async fn test_password_hashing() -> anyhow::Result<()> {
    let hash = AuthService::hash_password("s3cret-password").await?;
    assert_ne!(hash, "s3cret-password");
    assert!(AuthService::verify_password("s3cret-password", &hash).await?);
    assert!(!AuthService::verify_password("wrong-password", &hash).await?);
    Ok(())
}

#[tokio::test]
async fn test_create_admin_validation() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let auth = &services.auth_service;

    assert!(!auth.has_admin().await?);

    let short = auth.create_admin("admin@cit.edu.ph", "short").await;
    assert!(matches!(short, Err(AppError::Validation(_))));

    let no_at = auth.create_admin("admin", common::ADMIN_PASSWORD).await;
    assert!(matches!(no_at, Err(AppError::Validation(_))));

    let admin = auth
        .create_admin("  Admin@CIT.edu.ph ", common::ADMIN_PASSWORD)
        .await?;
    assert_eq!(admin.email, common::ADMIN_EMAIL);
    assert!(auth.has_admin().await?);

    // Emails are unique
    let duplicate = auth.create_admin(common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;
    assert!(duplicate.is_err());

    Ok(())
}

#[tokio::test]
async fn test_login_and_logout() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let auth = &services.auth_service;
    auth.create_admin(common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await?;

    let mut events = auth.subscribe();

    // Wrong password and unknown email fail the same way
    let wrong = auth.login(common::ADMIN_EMAIL, "not-the-password").await;
    assert!(matches!(wrong, Err(AppError::Unauthorized)));
    let unknown = auth.login("nobody@cit.edu.ph", common::ADMIN_PASSWORD).await;
    assert!(matches!(unknown, Err(AppError::Unauthorized)));

    let (session, token, admin) = auth
        .login("ADMIN@cit.edu.ph", common::ADMIN_PASSWORD)
        .await?;
    assert_eq!(session.admin_id, admin.id);
    assert_eq!(
        events.recv().await?,
        AuthEvent::SignedIn {
            admin_id: admin.id.clone(),
            email: admin.email.clone(),
        }
    );

    match auth.session_state(Some(&token)).await? {
        SessionState::SignedIn { admin: signed_in, .. } => assert_eq!(signed_in.id, admin.id),
        SessionState::SignedOut => panic!("expected a signed-in session"),
    }

    auth.logout(&token).await?;
    assert_eq!(
        events.recv().await?,
        AuthEvent::SignedOut {
            admin_id: admin.id.clone(),
        }
    );
    assert!(matches!(
        auth.session_state(Some(&token)).await?,
        SessionState::SignedOut
    ));

    // No cookie and unknown tokens are simply signed out
    assert!(matches!(auth.session_state(None).await?, SessionState::SignedOut));
    assert!(matches!(
        auth.session_state(Some("bogus")).await?,
        SessionState::SignedOut
    ));

    Ok(())
}

#[tokio::test]
async fn test_csrf_token_is_bound_to_session() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let auth = &services.auth_service;
    auth.create_admin(common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await?;

    let (session, _token, _admin) = auth.login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await?;
    let csrf = &services.csrf_service;

    let token = csrf.generate_token(&session.id).await?;
    assert!(csrf.validate_token(&session.id, &token).await?);
    assert!(!csrf.validate_token(&session.id, "forged").await?);
    assert!(matches!(
        csrf.verify(&session.id, "forged").await,
        Err(AppError::Forbidden)
    ));

    // A fresh token replaces the old one
    let rotated = csrf.generate_token(&session.id).await?;
    assert!(!csrf.validate_token(&session.id, &token).await?);
    assert!(csrf.validate_token(&session.id, &rotated).await?);

    csrf.delete_token(&session.id).await?;
    assert!(!csrf.validate_token(&session.id, &rotated).await?);

    Ok(())
}
