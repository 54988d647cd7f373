use serde::{Deserialize, Serialize};
use sharealarm_domain::{AlarmId, Reminder, ScheduledAlarm, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub org_id: ID,
    pub title: String,
    pub description: String,
    pub event_time: i64,
    pub location: String,
    pub alert_offsets: Vec<i64>,
    pub participants: Vec<ID>,
    pub creator_id: ID,
    pub is_read: bool,
    pub created: i64,
    pub updated: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            org_id: reminder.org_id.clone(),
            title: reminder.title,
            description: reminder.description,
            event_time: reminder.event_time,
            location: reminder.location,
            alert_offsets: reminder.alert_offsets,
            participants: reminder.participants,
            creator_id: reminder.creator_id.clone(),
            is_read: reminder.is_read,
            created: reminder.created,
            updated: reminder.updated,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAlarmDTO {
    pub id: AlarmId,
    pub reminder_id: ID,
    pub fire_at: i64,
}

impl ScheduledAlarmDTO {
    pub fn new(alarm: ScheduledAlarm) -> Self {
        Self {
            reminder_id: alarm.id.reminder_id.clone(),
            id: alarm.id,
            fire_at: alarm.fire_at,
        }
    }
}
