use crate::base::{APIResponse, BaseClient};
use crate::shared::StatusCode;
use sharealarm_api_structs::{create_user, delete_user, get_user, get_user_reminders};
use sharealarm_domain::ID;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct CreateUserInput {
    pub name: String,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        let body = create_user::RequestBody { name: input.name };
        self.base
            .post(body, "user".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, user_id: ID) -> APIResponse<get_user::APIResponse> {
        self.base
            .get(format!("user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, user_id: ID) -> APIResponse<delete_user::APIResponse> {
        self.base
            .delete(format!("user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn reminders(&self, user_id: ID) -> APIResponse<get_user_reminders::APIResponse> {
        self.base
            .get(format!("user/{}/reminders", user_id), StatusCode::OK)
            .await
    }
}
