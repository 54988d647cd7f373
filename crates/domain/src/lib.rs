mod alarm;
mod organization;
mod reminder;
mod shared;
mod user;

pub use alarm::{AlarmId, InvalidAlarmIdError, ScheduledAlarm};
pub use organization::{
    Organization, OrganizationSettings, OrganizationWebhookSettings, PEMKey,
};
pub use reminder::{derive_alert_times, Reminder, MAX_ALERT_OFFSET_MINUTES};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;
