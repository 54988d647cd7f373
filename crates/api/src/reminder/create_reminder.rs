use super::subscribers::ScheduleAlarmsOnReminderCreated;
use crate::error::ShareAlarmError;
use crate::shared::{
    auth::{org_can_modify_user, protect_org_route, protect_route, Permission},
    usecase::{
        execute, execute_with_policy, PermissionBoundary, Subscriber, UseCase,
        UseCaseErrorContainer,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::create_reminder::{APIResponse, PathParams, RequestBody};
use sharealarm_domain::{Reminder, User, ID};
use sharealarm_infra::ShareAlarmContext;

fn handle_error(e: UseCaseError) -> ShareAlarmError {
    match e {
        UseCaseError::InvalidAlertOffset => {
            ShareAlarmError::BadClientData("Invalid alert offset specified for the reminder".into())
        }
        UseCaseError::InvalidParticipants => ShareAlarmError::BadClientData(
            "One or more participants does not exist in the organization".into(),
        ),
        UseCaseError::StorageError => ShareAlarmError::InternalError,
    }
}

pub async fn create_reminder_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let user = org_can_modify_user(&org, &path_params.user_id, &ctx).await?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        creator: user,
        title: body.title,
        description: body.description.unwrap_or_default(),
        event_time: body.event_time,
        location: body.location.unwrap_or_default(),
        alert_offsets: body.alert_offsets,
        participants: body.participants,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        creator: user,
        title: body.title,
        description: body.description.unwrap_or_default(),
        event_time: body.event_time,
        location: body.location.unwrap_or_default(),
        alert_offsets: body.alert_offsets,
        participants: body.participants,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => ShareAlarmError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => handle_error(e),
        })
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub creator: User,
    pub title: String,
    pub description: String,
    pub event_time: i64,
    pub location: String,
    pub alert_offsets: Vec<i64>,
    pub participants: Vec<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidAlertOffset,
    InvalidParticipants,
    StorageError,
}

/// Participants are a set, repeated ids collapse to one
pub(crate) fn dedup_participants(participants: &[ID]) -> Vec<ID> {
    let mut deduped: Vec<ID> = Vec::with_capacity(participants.len());
    for participant in participants {
        if !deduped.contains(participant) {
            deduped.push(participant.clone());
        }
    }
    deduped
}

pub(crate) async fn participants_exist_in_org(
    participants: &[ID],
    org_id: &ID,
    ctx: &ShareAlarmContext,
) -> bool {
    let users = match ctx.repos.users.find_many(participants).await {
        Ok(users) => users,
        Err(_) => return false,
    };
    users.len() == participants.len() && users.iter().all(|user| user.org_id == *org_id)
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        if !Reminder::valid_alert_offsets(&self.alert_offsets) {
            return Err(UseCaseError::InvalidAlertOffset);
        }

        let participants = dedup_participants(&self.participants);
        if !participants_exist_in_org(&participants, &self.creator.org_id, ctx).await {
            return Err(UseCaseError::InvalidParticipants);
        }

        let reminder = Reminder {
            id: Default::default(),
            org_id: self.creator.org_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            event_time: self.event_time,
            location: self.location.clone(),
            alert_offsets: self.alert_offsets.clone(),
            participants,
            creator_id: self.creator.id.clone(),
            is_read: false,
            created: ctx.sys.get_timestamp_millis(),
            updated: ctx.sys.get_timestamp_millis(),
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleAlarmsOnReminderCreated)]
    }
}

impl PermissionBoundary for CreateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateReminder]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sharealarm_domain::Organization;
    use sharealarm_infra::{setup_context, ISys, InMemoryAlarmClock, ShareAlarmContext};
    use std::sync::Arc;

    struct StaticSys {
        time: i64,
    }
    impl ISys for StaticSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.time
        }
    }

    struct TestContext {
        ctx: ShareAlarmContext,
        clock: Arc<InMemoryAlarmClock>,
        creator: User,
        participant: User,
    }

    async fn setup() -> TestContext {
        let mut ctx = setup_context().await;
        let clock = Arc::new(InMemoryAlarmClock::new(true));
        ctx.sys = Arc::new(StaticSys { time: 0 });
        ctx.alarm_clock = clock.clone();

        let org = Organization::new("acme");
        ctx.repos.organizations.insert(&org).await.unwrap();
        let creator = User::new(org.id.clone(), "Ada");
        ctx.repos.users.insert(&creator).await.unwrap();
        let participant = User::new(org.id.clone(), "Grace");
        ctx.repos.users.insert(&participant).await.unwrap();

        TestContext {
            ctx,
            clock,
            creator,
            participant,
        }
    }

    fn usecase_with(test_ctx: &TestContext, alert_offsets: Vec<i64>) -> CreateReminderUseCase {
        CreateReminderUseCase {
            creator: test_ctx.creator.clone(),
            title: "Standup".into(),
            description: "Daily standup".into(),
            event_time: 1000 * 60 * 30,
            location: "Room 2".into(),
            alert_offsets,
            participants: vec![
                test_ctx.participant.id.clone(),
                test_ctx.participant.id.clone(),
            ],
        }
    }

    #[actix_web::test]
    async fn creates_reminder_and_schedules_its_alarms() {
        let test_ctx = setup().await;
        let usecase = usecase_with(&test_ctx, vec![5, 10]);

        let reminder = execute(usecase, &test_ctx.ctx)
            .await
            .expect("To create reminder");

        assert_eq!(reminder.participants, vec![test_ctx.participant.id.clone()]);
        assert!(test_ctx
            .ctx
            .repos
            .reminders
            .find(&reminder.id)
            .await
            .is_some());
        // Alarm per offset, registered by the create subscriber
        assert_eq!(test_ctx.clock.registered().len(), 2);
    }

    #[actix_web::test]
    async fn rejects_invalid_alert_offsets() {
        let test_ctx = setup().await;
        let mut usecase = usecase_with(&test_ctx, vec![-5]);

        assert_eq!(
            usecase.execute(&test_ctx.ctx).await,
            Err(UseCaseError::InvalidAlertOffset)
        );
    }

    #[actix_web::test]
    async fn rejects_unknown_participants() {
        let test_ctx = setup().await;
        let mut usecase = usecase_with(&test_ctx, vec![5]);
        usecase.participants.push(ID::new());

        assert_eq!(
            usecase.execute(&test_ctx.ctx).await,
            Err(UseCaseError::InvalidParticipants)
        );
    }
}
