use crate::dtos::{ReminderDTO, ScheduledAlarmDTO, UserDTO};
use serde::{Deserialize, Serialize};
use sharealarm_domain::{Reminder, ScheduledAlarm, User, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub description: Option<String>,
        pub event_time: i64,
        pub location: Option<String>,
        pub alert_offsets: Vec<i64>,
        pub participants: Vec<ID>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: Option<String>,
        pub description: Option<String>,
        pub event_time: Option<i64>,
        pub location: Option<String>,
        pub alert_offsets: Option<Vec<i64>>,
        pub participants: Option<Vec<ID>>,
        pub is_read: Option<bool>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod dismiss_reminder_alert {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: ReminderDTO,
        pub cancelled_alarms: usize,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder, cancelled_alarms: usize) -> Self {
            Self {
                reminder: ReminderDTO::new(reminder),
                cancelled_alarms,
            }
        }
    }
}

pub mod get_reminder_alarms {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub alarms: Vec<ScheduledAlarmDTO>,
    }

    impl APIResponse {
        pub fn new(alarms: Vec<ScheduledAlarm>) -> Self {
            Self {
                alarms: alarms.into_iter().map(ScheduledAlarmDTO::new).collect(),
            }
        }
    }
}

pub mod send_reminder_alerts {
    use super::*;

    /// Payload delivered to an `Organization`s webhook when an alarm
    /// fires.
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReminderAlertDTO {
        pub fired_at: i64,
        pub reminder: ReminderDTO,
        pub creator: Option<UserDTO>,
    }

    impl ReminderAlertDTO {
        pub fn new(fired_at: i64, reminder: Reminder, creator: Option<User>) -> Self {
            Self {
                fired_at,
                reminder: ReminderDTO::new(reminder),
                creator: creator.map(UserDTO::new),
            }
        }
    }
}
