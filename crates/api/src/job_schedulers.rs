use crate::alarm::{
    scheduler,
    sync_reminder_alarms::{SyncReminderAlarmsTrigger, SyncReminderAlarmsUseCase},
};
use crate::shared::usecase::execute;
use awc::Client;
use sharealarm_api_structs::send_reminder_alerts::ReminderAlertDTO;
use sharealarm_domain::{AlarmId, Reminder};
use sharealarm_infra::{FiredAlarm, ShareAlarmContext};
use tracing::{debug, error};

/// Hands the persisted timer registrations back to the alarm clock
/// after a restart.
pub fn start_alarm_resync_job(ctx: ShareAlarmContext) {
    actix_web::rt::spawn(async move {
        let usecase = SyncReminderAlarmsUseCase {
            request: SyncReminderAlarmsTrigger::Boot,
        };
        let _ = execute(usecase, &ctx).await;
    });
}

/// Consumes fired timer signals and turns each one into an alert
/// delivery.
pub fn start_alarm_dispatcher(ctx: ShareAlarmContext) {
    actix_web::rt::spawn(async move {
        let mut fired_alarms = match ctx.alarm_clock.take_fired_channel() {
            Some(receiver) => receiver,
            None => {
                error!("Unable to start alarm dispatcher, the fired alarm channel is already taken");
                return;
            }
        };
        while let Some(fired) = fired_alarms.recv().await {
            handle_fired_alarm(fired, &ctx).await;
        }
    });
}

pub(crate) async fn handle_fired_alarm(fired: FiredAlarm, ctx: &ShareAlarmContext) {
    let alarm_id = match fired.callback_id.parse::<AlarmId>() {
        Ok(alarm_id) => alarm_id,
        Err(_) => {
            // Malformed signals are dropped, not reported
            debug!(
                "Dropping fired alarm with malformed callback id: {}",
                fired.callback_id
            );
            return;
        }
    };

    // The timer is spent, clear its registration
    let _ = scheduler::cancel(ctx, &alarm_id).await;

    let reminder = match ctx.repos.reminders.find(&alarm_id.reminder_id).await {
        Some(reminder) => reminder,
        None => {
            debug!(
                "Dropping fired alarm: {}, the reminder no longer exists",
                alarm_id
            );
            return;
        }
    };

    deliver_alert(reminder, fired.fired_at, ctx).await;
}

async fn deliver_alert(reminder: Reminder, fired_at: i64, ctx: &ShareAlarmContext) {
    let org = match ctx.repos.organizations.find(&reminder.org_id).await {
        Some(org) => org,
        None => return,
    };
    let webhook = match org.settings.webhook {
        Some(webhook) => webhook,
        None => {
            debug!(
                "Organization: {} has no webhook registered, alert for reminder: {} is not delivered",
                org.id, reminder.id
            );
            return;
        }
    };
    let creator = ctx.repos.users.find(&reminder.creator_id).await;

    let client = Client::new();
    if let Err(e) = client
        .post(webhook.url)
        .insert_header(("sharealarm-webhook-key", webhook.key))
        .send_json(&ReminderAlertDTO::new(fired_at, reminder, creator))
        .await
    {
        error!("Error informing organization of fired alert: {:?}", e);
    }
}
