use crate::core::errors::RecipeBoxError;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_create_user_success() {
    let service = create_test_service();
    let user = service
        .create_user("Test@Example.com", "testpass", "Testy McTester")
        .await
        .unwrap();

    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.name, "Testy McTester");
    assert!(service.check_password(&user, "testpass"));
    assert_ne!(user.password, "testpass");
    assert!(!user.is_staff);
    assert!(!user.is_superuser);
}

#[tokio::test]
async fn test_create_user_email_normalized() {
    let service = create_test_service();
    let user = service
        .create_user("test@EXAMPLE.com", "testpass123", "")
        .await
        .unwrap();
    assert_eq!(user.email, "test@example.com");
}

#[tokio::test]
async fn test_create_user_missing_email() {
    let service = create_test_service();
    let result = service.create_user("", "testpass", "").await;
    assert!(matches!(result, Err(RecipeBoxError::MissingEmail)));
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let service = create_test_service();
    let result = service.create_user("invalid", "testpass", "").await;
    assert!(matches!(result, Err(RecipeBoxError::InvalidEmail(_))));
}

#[tokio::test]
async fn test_create_user_short_password() {
    let service = create_test_service();
    let result = service.create_user("test@example.com", "pw", "").await;
    assert!(matches!(result, Err(RecipeBoxError::PasswordTooShort(_))));

    // Nothing was stored: the same email is still free.
    service
        .create_user("test@example.com", "testpass", "")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_user_duplicate_email_case_insensitive() {
    let service = create_test_service();
    service
        .create_user("test@example.com", "testpass", "")
        .await
        .unwrap();
    let result = service.create_user("Test@EXAMPLE.com", "otherpass", "").await;
    assert!(matches!(
        result,
        Err(RecipeBoxError::EmailAlreadyRegistered(_))
    ));
}

#[tokio::test]
async fn test_create_superuser() {
    let service = create_test_service();
    let user = service
        .create_superuser("admin@example.com", "adminpass")
        .await
        .unwrap();
    assert!(user.is_staff);
    assert!(user.is_superuser);
    assert!(service.check_password(&user, "adminpass"));
}
