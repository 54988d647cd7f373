use crate::error::ShareAlarmError;
use crate::shared::auth::{org_can_modify_reminder, protect_org_route, protect_route};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::get_reminder::{APIResponse, PathParams};
use sharealarm_domain::{Reminder, ID};
use sharealarm_infra::ShareAlarmContext;

fn handle_error(e: UseCaseError) -> ShareAlarmError {
    match e {
        UseCaseError::NotFound(reminder_id) => ShareAlarmError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
    }
}

pub async fn get_reminder_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let reminder = org_can_modify_reminder(&org, &path_params.reminder_id, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(reminder)))
}

pub async fn get_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let (user, _policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        user_id: user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct GetReminderUseCase {
    reminder_id: ID,
    user_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder)
                if reminder.creator_id == self.user_id
                    || reminder.participants.contains(&self.user_id) =>
            {
                Ok(reminder)
            }
            _ => Err(UseCaseError::NotFound(self.reminder_id.clone())),
        }
    }
}
