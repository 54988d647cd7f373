use crate::alarm::sync_reminder_alarms::{
    ReminderOperation, SyncReminderAlarmsTrigger, SyncReminderAlarmsUseCase,
};
use crate::error::ShareAlarmError;
use crate::shared::{
    auth::{org_can_modify_reminder, protect_org_route, protect_route, Permission},
    usecase::{
        execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::delete_reminder::{APIResponse, PathParams};
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

pub async fn delete_reminder_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let reminder = org_can_modify_reminder(&org, &path_params.reminder_id, &ctx).await?;

    let usecase = DeleteReminderUseCase {
        user_id: reminder.creator_id,
        reminder_id: reminder.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

pub async fn delete_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteReminderUseCase {
        user_id: user.id.clone(),
        reminder_id: path_params.reminder_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => ShareAlarmError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => handle_error(e),
        })
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) if reminder.creator_id == self.user_id => {
                ctx.repos.reminders.delete(&reminder.id).await;

                let sync_reminder_alarms = SyncReminderAlarmsUseCase {
                    request: SyncReminderAlarmsTrigger::ReminderModified(
                        &reminder,
                        ReminderOperation::Deleted,
                    ),
                };

                // Sideeffect, ignore result
                let _ = execute(sync_reminder_alarms, ctx).await;

                Ok(reminder)
            }
            _ => Err(UseCaseError::NotFound(self.reminder_id.clone())),
        }
    }
}

impl PermissionBoundary for DeleteReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteReminder]
    }
}
