use crate::base::{APIResponse, BaseClient};
use crate::shared::StatusCode;
use serde::Serialize;
use sharealarm_api_structs::{create_org, delete_org_webhook, get_org, set_org_pub_key, set_org_webhook};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrganizationClient {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrgInput {
    pub code: String,
    pub name: String,
}

impl OrganizationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateOrgInput) -> APIResponse<create_org::APIResponse> {
        let body = create_org::RequestBody {
            code: input.code,
            name: input.name,
        };
        self.base
            .post(body, "org".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self) -> APIResponse<get_org::APIResponse> {
        self.base.get("org".into(), StatusCode::OK).await
    }

    pub async fn set_pub_key(
        &self,
        public_jwt_key: Option<String>,
    ) -> APIResponse<set_org_pub_key::APIResponse> {
        let body = set_org_pub_key::RequestBody { public_jwt_key };
        self.base
            .put(body, "org/pubkey".into(), StatusCode::OK)
            .await
    }

    pub async fn update_webhook(
        &self,
        webhook_url: String,
    ) -> APIResponse<set_org_webhook::APIResponse> {
        let body = set_org_webhook::RequestBody { webhook_url };
        self.base
            .put(body, "org/webhook".into(), StatusCode::OK)
            .await
    }

    pub async fn delete_webhook(&self) -> APIResponse<delete_org_webhook::APIResponse> {
        self.base.delete("org/webhook".into(), StatusCode::OK).await
    }
}
