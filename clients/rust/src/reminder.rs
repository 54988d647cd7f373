use crate::base::{APIResponse, BaseClient};
use crate::shared::StatusCode;
use sharealarm_api_structs::{
    create_reminder, delete_reminder, dismiss_reminder_alert, get_reminder, get_reminder_alarms,
    update_reminder,
};
use sharealarm_domain::ID;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    /// The `User` that will be the creator of the reminder
    pub user_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub event_time: i64,
    pub location: Option<String>,
    pub alert_offsets: Vec<i64>,
    pub participants: Vec<ID>,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_time: Option<i64>,
    pub location: Option<String>,
    pub alert_offsets: Option<Vec<i64>>,
    pub participants: Option<Vec<ID>>,
    pub is_read: Option<bool>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            title: input.title,
            description: input.description,
            event_time: input.event_time,
            location: input.location,
            alert_offsets: input.alert_offsets,
            participants: input.participants,
        };
        self.base
            .post(
                body,
                format!("user/{}/reminders", input.user_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("user/reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            title: input.title,
            description: input.description,
            event_time: input.event_time,
            location: input.location,
            alert_offsets: input.alert_offsets,
            participants: input.participants,
            is_read: input.is_read,
        };
        self.base
            .put(
                body,
                format!("user/reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("user/reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn dismiss(
        &self,
        reminder_id: ID,
    ) -> APIResponse<dismiss_reminder_alert::APIResponse> {
        self.base
            .post(
                (),
                format!("user/reminders/{}/dismiss", reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn alarms(&self, reminder_id: ID) -> APIResponse<get_reminder_alarms::APIResponse> {
        self.base
            .get(
                format!("user/reminders/{}/alarms", reminder_id),
                StatusCode::OK,
            )
            .await
    }
}
