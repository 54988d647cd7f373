use super::create_reminder::{dedup_participants, participants_exist_in_org};
use super::subscribers::SyncAlarmsOnReminderUpdated;
use crate::error::ShareAlarmError;
use crate::shared::{
    auth::{org_can_modify_reminder, protect_org_route, protect_route, Permission},
    usecase::{
        execute, execute_with_policy, PermissionBoundary, Subscriber, UseCase,
        UseCaseErrorContainer,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::update_reminder::{APIResponse, PathParams, RequestBody};
use sharealarm_domain::{Reminder, ID};
use sharealarm_infra::ShareAlarmContext;

fn handle_error(e: UseCaseError) -> ShareAlarmError {
    match e {
        UseCaseError::NotFound(reminder_id) => ShareAlarmError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseError::InvalidAlertOffset => {
            ShareAlarmError::BadClientData("Invalid alert offset specified for the reminder".into())
        }
        UseCaseError::InvalidParticipants => ShareAlarmError::BadClientData(
            "One or more participants does not exist in the organization".into(),
        ),
        UseCaseError::StorageError => ShareAlarmError::InternalError,
    }
}

pub async fn update_reminder_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let reminder = org_can_modify_reminder(&org, &path_params.reminder_id, &ctx).await?;

    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: reminder.id,
        user_id: reminder.creator_id,
        title: body.title,
        description: body.description,
        event_time: body.event_time,
        location: body.location,
        alert_offsets: body.alert_offsets,
        participants: body.participants,
        is_read: body.is_read,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

pub async fn update_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        user_id: user.id,
        title: body.title,
        description: body.description,
        event_time: body.event_time,
        location: body.location,
        alert_offsets: body.alert_offsets,
        participants: body.participants,
        is_read: body.is_read,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => ShareAlarmError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => handle_error(e),
        })
}

/// Only the creator can edit a `Reminder`
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub user_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_time: Option<i64>,
    pub location: Option<String>,
    pub alert_offsets: Option<Vec<i64>>,
    pub participants: Option<Vec<ID>>,
    pub is_read: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidAlertOffset,
    InvalidParticipants,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) if reminder.creator_id == self.user_id => reminder,
            _ => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        if let Some(title) = &self.title {
            reminder.title = title.clone();
        }
        if let Some(description) = &self.description {
            reminder.description = description.clone();
        }
        if let Some(event_time) = self.event_time {
            reminder.event_time = event_time;
        }
        if let Some(location) = &self.location {
            reminder.location = location.clone();
        }
        if let Some(alert_offsets) = &self.alert_offsets {
            if !Reminder::valid_alert_offsets(alert_offsets) {
                return Err(UseCaseError::InvalidAlertOffset);
            }
            reminder.alert_offsets = alert_offsets.clone();
        }
        if let Some(participants) = &self.participants {
            let participants = dedup_participants(participants);
            if !participants_exist_in_org(&participants, &reminder.org_id, ctx).await {
                return Err(UseCaseError::InvalidParticipants);
            }
            reminder.participants = participants;
        }
        if let Some(is_read) = self.is_read {
            reminder.is_read = is_read;
        }
        reminder.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncAlarmsOnReminderUpdated)]
    }
}

impl PermissionBoundary for UpdateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateReminder]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sharealarm_domain::{Organization, User};
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
    async fn moving_the_event_reschedules_the_alarms() {
        let mut ctx = setup_context().await;
        let clock = Arc::new(InMemoryAlarmClock::new(true));
        ctx.sys = Arc::new(StaticSys { time: 0 });
        ctx.alarm_clock = clock.clone();

        let org = Organization::new("acme");
        ctx.repos.organizations.insert(&org).await.unwrap();
        let creator = User::new(org.id.clone(), "Ada");
        ctx.repos.users.insert(&creator).await.unwrap();

        let event_time = 1000 * 60 * 60;
        let reminder = Reminder {
            id: Default::default(),
            org_id: org.id.clone(),
            title: "Standup".into(),
            description: "".into(),
            event_time,
            location: "".into(),
            alert_offsets: vec![10],
            participants: Vec::new(),
            creator_id: creator.id.clone(),
            is_read: false,
            created: 0,
            updated: 0,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        assert_eq!(
            crate::alarm::scheduler::schedule_reminder_alarms(&ctx, &reminder).await,
            1
        );

        let new_event_time = event_time * 2;
        let usecase = UpdateReminderUseCase {
            reminder_id: reminder.id.clone(),
            user_id: creator.id.clone(),
            title: None,
            description: None,
            event_time: Some(new_event_time),
            location: None,
            alert_offsets: None,
            participants: None,
            is_read: None,
        };
        let updated = execute(usecase, &ctx).await.expect("To update reminder");
        assert_eq!(updated.event_time, new_event_time);

        let registered = clock.registered();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].1, new_event_time - 10 * 60 * 1000);
    }

    #[actix_web::test]
    async fn only_the_creator_can_update() {
        let mut ctx = setup_context().await;
        ctx.alarm_clock = Arc::new(InMemoryAlarmClock::new(true));

        let org = Organization::new("acme");
        ctx.repos.organizations.insert(&org).await.unwrap();
        let creator = User::new(org.id.clone(), "Ada");
        ctx.repos.users.insert(&creator).await.unwrap();

        let reminder = Reminder {
            id: Default::default(),
            org_id: org.id.clone(),
            title: "Standup".into(),
            description: "".into(),
            event_time: 0,
            location: "".into(),
            alert_offsets: Vec::new(),
            participants: Vec::new(),
            creator_id: creator.id.clone(),
            is_read: false,
            created: 0,
            updated: 0,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = UpdateReminderUseCase {
            reminder_id: reminder.id.clone(),
            user_id: ID::new(),
            title: Some("Hijacked".into()),
            description: None,
            event_time: None,
            location: None,
            alert_offsets: None,
            participants: None,
            is_read: None,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(reminder.id))
        );
    }
}
