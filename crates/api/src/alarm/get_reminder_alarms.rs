use crate::error::ShareAlarmError;
use crate::shared::auth::{org_can_modify_reminder, protect_org_route};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::get_reminder_alarms::{APIResponse, PathParams};
use sharealarm_domain::{ScheduledAlarm, ID};
use sharealarm_infra::ShareAlarmContext;

pub async fn get_reminder_alarms_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let reminder = org_can_modify_reminder(&org, &path_params.reminder_id, &ctx).await?;

    let usecase = GetReminderAlarmsUseCase {
        reminder_id: reminder.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|alarms| HttpResponse::Ok().json(APIResponse::new(alarms)))
        .map_err(|_| ShareAlarmError::InternalError)
}

/// The live timer registrations of a `Reminder`
#[derive(Debug)]
struct GetReminderAlarmsUseCase {
    reminder_id: ID,
}

#[derive(Debug)]
enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderAlarmsUseCase {
    type Response = Vec<ScheduledAlarm>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminderAlarms";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx
            .repos
            .scheduled_alarms
            .find_by_reminder(&self.reminder_id)
            .await)
    }
}
