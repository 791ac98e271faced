//! User service tests over the in-memory store.

use domain::{UserData, NAME_AND_EMAIL_REQUIRED, USER_NOT_FOUND_NAME};
use user_service_lib::service::UserService;

#[tokio::test]
async fn test_created_user_name_is_readable() {
    let service = user_service_lib::in_memory();

    let user = service
        .create_user(UserData::new().name("Alex").email("alex@example.com").password("hashed"))
        .await
        .unwrap();

    assert_eq!(service.get_user_name(user.id).await.unwrap(), "Alex");
    assert_eq!(service.get_user_name(user.id + 1).await.unwrap(), USER_NOT_FOUND_NAME);
}

#[tokio::test]
async fn test_rejected_create_writes_nothing() {
    let service = user_service_lib::in_memory();

    let err = service
        .create_user(UserData::new().email("a@b.com"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), NAME_AND_EMAIL_REQUIRED);
    assert!(service.get_all_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_from_json_mapping() {
    let service = user_service_lib::in_memory();
    let data: UserData = serde_json::from_value(serde_json::json!({
        "name": "João Silva",
        "email": "joao@example.com",
        "password": "hashed",
    }))
    .unwrap();

    let user = service.create_user(data).await.unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["name"], "João Silva");
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn test_update_round_trip() {
    let service = user_service_lib::in_memory();
    let user = service
        .create_user(UserData::new().name("Carlos").email("carlos@example.com").password("hashed"))
        .await
        .unwrap();

    let updated = service
        .update_user(
            user.id,
            UserData::new().name("Carlos Silva").email("carlos.novo@example.com"),
        )
        .await
        .unwrap()
        .expect("user exists");

    let all = service.get_all_users().await.unwrap();
    assert_eq!(all, vec![updated.clone()]);
    assert_eq!(updated.name, "Carlos Silva");
    assert_eq!(updated.email, "carlos.novo@example.com");
    assert_eq!(updated.password, "hashed");
}

#[tokio::test]
async fn test_missing_user_is_not_an_error() {
    let service = user_service_lib::in_memory();

    assert!(service
        .update_user(42, UserData::new().name("Teste"))
        .await
        .unwrap()
        .is_none());
    assert!(!service.delete_user(42).await.unwrap());
}

#[tokio::test]
async fn test_delete_user_removes_it() {
    let service = user_service_lib::in_memory();
    let user = service
        .create_user(UserData::new().name("Ana").email("ana@example.com").password("hashed"))
        .await
        .unwrap();

    assert!(service.delete_user(user.id).await.unwrap());
    assert_eq!(service.get_user_name(user.id).await.unwrap(), USER_NOT_FOUND_NAME);
    assert!(service.get_all_users().await.unwrap().is_empty());
}
