use super::{create_reminder::CreateReminderUseCase, update_reminder::UpdateReminderUseCase};
use crate::alarm::sync_reminder_alarms::{
    ReminderOperation, SyncReminderAlarmsTrigger, SyncReminderAlarmsUseCase,
};
use crate::shared::usecase::{execute, Subscriber};
use sharealarm_domain::Reminder;

pub struct ScheduleAlarmsOnReminderCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for ScheduleAlarmsOnReminderCreated {
    async fn notify(&self, reminder: &Reminder, ctx: &sharealarm_infra::ShareAlarmContext) {
        let sync_reminder_alarms = SyncReminderAlarmsUseCase {
            request: SyncReminderAlarmsTrigger::ReminderModified(
                reminder,
                ReminderOperation::Created,
            ),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_reminder_alarms, ctx).await;
    }
}

pub struct SyncAlarmsOnReminderUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateReminderUseCase> for SyncAlarmsOnReminderUpdated {
    async fn notify(&self, reminder: &Reminder, ctx: &sharealarm_infra::ShareAlarmContext) {
        let sync_reminder_alarms = SyncReminderAlarmsUseCase {
            request: SyncReminderAlarmsTrigger::ReminderModified(
                reminder,
                ReminderOperation::Updated,
            ),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_reminder_alarms, ctx).await;
    }
}
