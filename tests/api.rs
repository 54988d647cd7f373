mod helpers;

use helpers::setup::spawn_app;
use sharealarm_sdk::{CreateOrgInput, CreateUserInput, ShareAlarmSDK};

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_create_org() {
    let (app, sdk, _) = spawn_app().await;
    assert!(sdk
        .org
        .create(CreateOrgInput {
            code: app.config.create_org_secret_code.clone(),
            name: "acme".into(),
        })
        .await
        .is_ok());
}

#[actix_web::test]
async fn test_create_org_with_invalid_code() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk
        .org
        .create(CreateOrgInput {
            code: "definitely-not-the-code".into(),
            name: "acme".into(),
        })
        .await
        .is_err());
}

#[actix_web::test]
async fn test_get_org() {
    let (app, sdk, address) = spawn_app().await;
    let res = sdk
        .org
        .create(CreateOrgInput {
            code: app.config.create_org_secret_code.clone(),
            name: "acme".into(),
        })
        .await
        .expect("Expected to create org");

    let admin_client = ShareAlarmSDK::new(address, res.secret_api_key);
    assert!(admin_client.org.get().await.is_ok());
    assert!(sdk.org.get().await.is_err());
}

#[actix_web::test]
async fn test_set_and_delete_org_webhook() {
    let (app, sdk, address) = spawn_app().await;
    let res = sdk
        .org
        .create(CreateOrgInput {
            code: app.config.create_org_secret_code.clone(),
            name: "acme".into(),
        })
        .await
        .expect("Expected to create org");
    let admin_client = ShareAlarmSDK::new(address, res.secret_api_key);

    assert!(admin_client
        .org
        .update_webhook("ftp://invalid.example.com".into())
        .await
        .is_err());

    let res = admin_client
        .org
        .update_webhook("https://example.com/hooks/alerts".into())
        .await
        .expect("Expected to set org webhook");
    assert_eq!(
        res.org.settings.webhook.expect("Webhook to be set").url,
        "https://example.com/hooks/alerts"
    );

    let res = admin_client
        .org
        .delete_webhook()
        .await
        .expect("Expected to delete org webhook");
    assert!(res.org.settings.webhook.is_none());
}

#[actix_web::test]
async fn test_crud_user() {
    let (app, sdk, address) = spawn_app().await;
    let res = sdk
        .org
        .create(CreateOrgInput {
            code: app.config.create_org_secret_code.clone(),
            name: "acme".into(),
        })
        .await
        .expect("Expected to create org");
    let org = res.org;
    let admin_client = ShareAlarmSDK::new(address, res.secret_api_key);

    let res = admin_client
        .user
        .create(CreateUserInput { name: "Ada".into() })
        .await
        .expect("Expected to create user");
    assert_eq!(res.user.org_id, org.id);
    assert_eq!(res.user.name, "Ada");

    let user_id = res.user.id.clone();
    let res = admin_client
        .user
        .get(user_id.clone())
        .await
        .expect("Expected to get user");
    assert_eq!(res.user.id, user_id);

    assert!(admin_client.user.delete(user_id.clone()).await.is_ok());
    assert!(admin_client.user.get(user_id).await.is_err());
}
