use super::scheduler;
use crate::shared::usecase::UseCase;
use sharealarm_domain::Reminder;
use sharealarm_infra::ShareAlarmContext;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum ReminderOperation {
    Created,
    Updated,
    Deleted,
}

/// Synchronizes the registered alarms of a `Reminder` with its alert
/// offsets.
#[derive(Debug)]
pub struct SyncReminderAlarmsUseCase<'a> {
    pub request: SyncReminderAlarmsTrigger<'a>,
}

#[derive(Debug)]
pub enum SyncReminderAlarmsTrigger<'a> {
    /// A `Reminder` has been modified, e.g. deleted, updated or created.
    ReminderModified(&'a Reminder, ReminderOperation),
    /// The process has restarted and the persisted registrations have
    /// to be handed to the alarm clock again.
    Boot,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl<'a> UseCase for SyncReminderAlarmsUseCase<'a> {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "SyncReminderAlarms";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        match &self.request {
            SyncReminderAlarmsTrigger::ReminderModified(reminder, op) => {
                match op {
                    ReminderOperation::Created => {
                        scheduler::schedule_reminder_alarms(ctx, reminder).await;
                    }
                    ReminderOperation::Updated => {
                        scheduler::cancel_reminder_alarms(ctx, &reminder.id).await;
                        scheduler::schedule_reminder_alarms(ctx, reminder).await;
                    }
                    ReminderOperation::Deleted => {
                        scheduler::cancel_reminder_alarms(ctx, &reminder.id).await;
                    }
                }
                Ok(())
            }
            SyncReminderAlarmsTrigger::Boot => {
                let now = ctx.sys.get_timestamp_millis();
                let stale = ctx.repos.scheduled_alarms.delete_all_before(now).await;
                if !stale.is_empty() {
                    // Fire times that passed while the process was down
                    // are dropped, never fired late
                    warn!(
                        "Dropped {} alarms with fire times in the past",
                        stale.len()
                    );
                }

                let alarms = ctx.repos.scheduled_alarms.find_all().await;
                if alarms.is_empty() {
                    return Ok(());
                }
                if !ctx.alarm_clock.can_schedule_exact() {
                    warn!("Unable to restore {} persisted alarms, the exact timer capability is not granted", alarms.len());
                    ctx.alarm_clock.request_exact_capability();
                    return Ok(());
                }

                let mut restored = 0;
                for alarm in alarms {
                    match ctx
                        .alarm_clock
                        .register_one_shot(alarm.fire_at, alarm.id.to_string())
                    {
                        Ok(_) => restored += 1,
                        Err(e) => error!(
                            "Unable to restore timer for alarm: {}. Error: {:?}",
                            alarm.id, e
                        ),
                    }
                }
                info!("Restored {} persisted alarm registrations", restored);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use sharealarm_domain::{AlarmId, ScheduledAlarm, ID};
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
    async fn boot_restores_future_alarms_and_drops_passed_ones() {
        let now = 1000 * 60 * 60;
        let mut ctx = setup_context().await;
        let clock = Arc::new(InMemoryAlarmClock::new(true));
        ctx.sys = Arc::new(StaticSys { time: now });
        ctx.alarm_clock = clock.clone();

        let reminder_id = ID::new();
        let passed = ScheduledAlarm {
            id: AlarmId::new(reminder_id.clone(), 0),
            org_id: ID::new(),
            fire_at: now - 1000,
        };
        let upcoming = ScheduledAlarm {
            id: AlarmId::new(reminder_id.clone(), 1),
            org_id: ID::new(),
            fire_at: now + 1000,
        };
        ctx.repos.scheduled_alarms.insert(&passed).await.unwrap();
        ctx.repos.scheduled_alarms.insert(&upcoming).await.unwrap();

        let usecase = SyncReminderAlarmsUseCase {
            request: SyncReminderAlarmsTrigger::Boot,
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        let registered = clock.registered();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].0, upcoming.id.to_string());
        let remaining = ctx
            .repos
            .scheduled_alarms
            .find_by_reminder(&reminder_id)
            .await;
        assert_eq!(remaining, vec![upcoming]);
    }

    #[actix_web::test]
    async fn boot_without_capability_restores_nothing_and_requests_it() {
        let now = 1000 * 60 * 60;
        let mut ctx = setup_context().await;
        let clock = Arc::new(InMemoryAlarmClock::new(false));
        ctx.sys = Arc::new(StaticSys { time: now });
        ctx.alarm_clock = clock.clone();

        let upcoming = ScheduledAlarm {
            id: AlarmId::new(ID::new(), 0),
            org_id: ID::new(),
            fire_at: now + 1000,
        };
        ctx.repos.scheduled_alarms.insert(&upcoming).await.unwrap();

        let usecase = SyncReminderAlarmsUseCase {
            request: SyncReminderAlarmsTrigger::Boot,
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        assert!(clock.registered().is_empty());
        assert_eq!(clock.capability_requests(), 1);
    }
}
