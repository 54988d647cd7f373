use crate::error::ShareAlarmError;
use crate::shared::auth::{org_can_modify_user, protect_org_route};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::delete_user::{APIResponse, PathParams};
use sharealarm_domain::{User, ID};
use sharealarm_infra::ShareAlarmContext;

pub async fn delete_user_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let user = org_can_modify_user(&org, &path_params.user_id, &ctx).await?;

    let usecase = DeleteUserUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(ShareAlarmError::from)
}

#[derive(Debug)]
struct DeleteUserUseCase {
    user_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for ShareAlarmError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(user_id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", user_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteUser";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.users.delete(&self.user_id).await {
            Some(user) => Ok(user),
            None => Err(UseCaseError::NotFound(self.user_id.clone())),
        }
    }
}
