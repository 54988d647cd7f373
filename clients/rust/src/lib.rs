mod base;
mod organization;
mod reminder;
mod shared;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use organization::OrganizationClient;
pub use organization::CreateOrgInput;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
pub use sharealarm_api_structs::dtos::*;
pub use sharealarm_api_structs::send_reminder_alerts::ReminderAlertDTO as ReminderAlert;
pub use sharealarm_domain::{AlarmId, ID};
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::CreateUserInput;

// Domain
pub use sharealarm_api_structs::dtos::OrganizationDTO as Organization;
pub use sharealarm_api_structs::dtos::OrganizationSettingsDTO as OrganizationSettings;
pub use sharealarm_api_structs::dtos::OrganizationWebhookSettingsDTO as OrganizationWebhookSettings;
pub use sharealarm_api_structs::dtos::ReminderDTO as Reminder;
pub use sharealarm_api_structs::dtos::ScheduledAlarmDTO as ScheduledAlarm;
pub use sharealarm_api_structs::dtos::UserDTO as User;

/// ShareAlarm Server SDK
///
/// The SDK is a wrapper around the HTTP api exposed by the server. All
/// operations require the `Organization`s secret api key.
pub struct ShareAlarmSDK {
    pub org: OrganizationClient,
    pub user: UserClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl ShareAlarmSDK {
    pub fn new<A: Into<String>, K: Into<String>>(address: A, api_key: K) -> Self {
        let mut base = BaseClient::new(address.into());
        let api_key: String = api_key.into();
        if !api_key.is_empty() {
            base.set_api_key(api_key);
        }
        let base = Arc::new(base);
        Self {
            org: OrganizationClient::new(base.clone()),
            user: UserClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base),
        }
    }
}
