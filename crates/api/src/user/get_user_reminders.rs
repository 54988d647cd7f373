use crate::error::ShareAlarmError;
use crate::shared::auth::{org_can_modify_user, protect_org_route};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::get_user_reminders::{APIResponse, PathParams};
use sharealarm_domain::{Reminder, ID};
use sharealarm_infra::ShareAlarmContext;

pub async fn get_user_reminders_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let user = org_can_modify_user(&org, &path_params.user_id, &ctx).await?;

    let usecase = GetUserRemindersUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|_| ShareAlarmError::InternalError)
}

#[derive(Debug)]
struct GetUserRemindersUseCase {
    user_id: ID,
}

#[derive(Debug)]
enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUserReminders";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.reminders.find_by_participant(&self.user_id).await)
    }
}
