use super::scheduler;
use crate::error::ShareAlarmError;
use crate::shared::auth::{
    org_can_modify_reminder, protect_org_route, protect_route, Permission,
};
use crate::shared::usecase::{
    execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer,
};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::dismiss_reminder_alert::{APIResponse, PathParams};
use sharealarm_domain::{Reminder, ID};
use sharealarm_infra::ShareAlarmContext;

fn handle_error(e: UseCaseError) -> ShareAlarmError {
    match e {
        UseCaseError::NotFound(reminder_id) => ShareAlarmError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseError::StorageError => ShareAlarmError::InternalError,
    }
}

pub async fn dismiss_reminder_alert_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let reminder = org_can_modify_reminder(&org, &path_params.reminder_id, &ctx).await?;

    let usecase = DismissReminderAlertUseCase {
        reminder_id: reminder.id,
        user_id: None,
    };

    execute(usecase, &ctx)
        .await
        .map(|dismissed| {
            HttpResponse::Ok().json(APIResponse::new(
                dismissed.reminder,
                dismissed.cancelled_alarms,
            ))
        })
        .map_err(handle_error)
}

pub async fn dismiss_reminder_alert_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = DismissReminderAlertUseCase {
        reminder_id: path_params.reminder_id.clone(),
        user_id: Some(user.id),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|dismissed| {
            HttpResponse::Ok().json(APIResponse::new(
                dismissed.reminder,
                dismissed.cancelled_alarms,
            ))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => ShareAlarmError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => handle_error(e),
        })
}

/// Dismissing an alert stops the remaining not yet fired alarms of the
/// `Reminder` and marks it as read.
#[derive(Debug)]
pub struct DismissReminderAlertUseCase {
    pub reminder_id: ID,
    /// The `User` dismissing the alert when it happens through a user
    /// token. Organization admins dismiss without one.
    pub user_id: Option<ID>,
}

#[derive(Debug)]
pub struct DismissedReminderAlert {
    pub reminder: Reminder,
    pub cancelled_alarms: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DismissReminderAlertUseCase {
    type Response = DismissedReminderAlert;

    type Error = UseCaseError;

    const NAME: &'static str = "DismissReminderAlert";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };
        if let Some(user_id) = &self.user_id {
            if reminder.creator_id != *user_id && !reminder.participants.contains(user_id) {
                return Err(UseCaseError::NotFound(self.reminder_id.clone()));
            }
        }

        let cancelled_alarms = scheduler::cancel_reminder_alarms(ctx, &reminder.id).await;

        reminder.is_read = true;
        reminder.updated = ctx.sys.get_timestamp_millis();
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(DismissedReminderAlert {
            reminder,
            cancelled_alarms,
        })
    }
}

impl PermissionBoundary for DismissReminderAlertUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DismissReminderAlert]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alarm::scheduler::schedule_reminder_alarms;
    use sharealarm_infra::{setup_context, ISys, InMemoryAlarmClock};
    use std::sync::Arc;

    struct StaticSys {
        time: i64,
    }
    impl ISys for StaticSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.time
        }
    }

    #[actix_web::test]
    async fn dismiss_cancels_remaining_alarms_and_marks_the_reminder_read() {
        let event_time = 1000 * 60 * 60 * 24;
        let mut ctx = setup_context().await;
        let clock = Arc::new(InMemoryAlarmClock::new(true));
        ctx.sys = Arc::new(StaticSys { time: 0 });
        ctx.alarm_clock = clock.clone();

        let reminder = Reminder {
            id: Default::default(),
            org_id: ID::new(),
            title: "Board meeting".into(),
            description: "".into(),
            event_time,
            location: "".into(),
            alert_offsets: vec![15, 30],
            participants: Vec::new(),
            creator_id: ID::new(),
            is_read: false,
            created: 0,
            updated: 0,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        assert_eq!(schedule_reminder_alarms(&ctx, &reminder).await, 2);

        let usecase = DismissReminderAlertUseCase {
            reminder_id: reminder.id.clone(),
            user_id: None,
        };
        let dismissed = execute(usecase, &ctx).await.expect("To dismiss alert");

        assert_eq!(dismissed.cancelled_alarms, 2);
        assert!(dismissed.reminder.is_read);
        assert!(clock.registered().is_empty());
        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert!(stored.is_read);
    }

    #[actix_web::test]
    async fn only_participants_or_the_creator_can_dismiss() {
        let mut ctx = setup_context().await;
        ctx.alarm_clock = Arc::new(InMemoryAlarmClock::new(true));

        let participant = ID::new();
        let reminder = Reminder {
            id: Default::default(),
            org_id: ID::new(),
            title: "Lunch".into(),
            description: "".into(),
            event_time: 0,
            location: "".into(),
            alert_offsets: Vec::new(),
            participants: vec![participant.clone()],
            creator_id: ID::new(),
            is_read: false,
            created: 0,
            updated: 0,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let usecase = DismissReminderAlertUseCase {
            reminder_id: reminder.id.clone(),
            user_id: Some(ID::new()),
        };
        assert!(execute(usecase, &ctx).await.is_err());

        let usecase = DismissReminderAlertUseCase {
            reminder_id: reminder.id.clone(),
            user_id: Some(participant),
        };
        assert!(execute(usecase, &ctx).await.is_ok());
    }
}
