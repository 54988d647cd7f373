use sharealarm_domain::{AlarmId, Reminder, ScheduledAlarm, ID};
use sharealarm_infra::ShareAlarmContext;
use tracing::{error, warn};

/// Expected ways a schedule or cancel call can fail. None of them are
/// propagated further than the caller, a failed alarm never takes the
/// process down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlarmScheduleError {
    /// The fire time is not strictly between now and the scheduling
    /// horizon. Fire times in the past are rejected, not fired
    /// immediately.
    InvalidAlertTime,
    /// The exact timer capability has not been granted to this process
    MissingCapability,
    /// The alarm clock rejected the operation
    Platform,
}

/// Registers one one-shot timer for the given alarm and records the
/// registration. Failures are logged and returned, there are no
/// retries.
pub async fn schedule(
    ctx: &ShareAlarmContext,
    alarm: ScheduledAlarm,
) -> Result<(), AlarmScheduleError> {
    let now = ctx.sys.get_timestamp_millis();
    if alarm.fire_at <= now || alarm.fire_at >= now + ctx.config.alarm_horizon_limit {
        warn!(
            "Rejected alarm: {} with fire time: {} outside of the valid scheduling window",
            alarm.id, alarm.fire_at
        );
        return Err(AlarmScheduleError::InvalidAlertTime);
    }

    if !ctx.alarm_clock.can_schedule_exact() {
        warn!(
            "Unable to schedule alarm: {}, the exact timer capability is not granted",
            alarm.id
        );
        ctx.alarm_clock.request_exact_capability();
        return Err(AlarmScheduleError::MissingCapability);
    }

    if let Err(e) = ctx
        .alarm_clock
        .register_one_shot(alarm.fire_at, alarm.id.to_string())
    {
        error!(
            "Unable to register timer for alarm: {}. Error: {:?}",
            alarm.id, e
        );
        return Err(AlarmScheduleError::Platform);
    }

    if ctx.repos.scheduled_alarms.insert(&alarm).await.is_err() {
        error!("Unable to store registration for alarm: {}", alarm.id);
        // Keep the clock and the registry in agreement
        let _ = ctx.alarm_clock.cancel(&alarm.id.to_string());
        return Err(AlarmScheduleError::Platform);
    }

    Ok(())
}

/// Schedules one alarm per alert offset of the `Reminder` and returns
/// how many of them were accepted. A rejected alert time does not roll
/// back alarms that were already registered.
pub async fn schedule_reminder_alarms(ctx: &ShareAlarmContext, reminder: &Reminder) -> usize {
    let mut scheduled = 0;
    for (index, fire_at) in reminder.alert_times().into_iter().enumerate() {
        let alarm = ScheduledAlarm {
            id: AlarmId::new(reminder.id.clone(), index),
            org_id: reminder.org_id.clone(),
            fire_at,
        };
        if schedule(ctx, alarm).await.is_ok() {
            scheduled += 1;
        }
    }
    scheduled
}

/// Unregisters the timer and removes its registration. Cancelling an
/// alarm that is not registered is not an error.
pub async fn cancel(ctx: &ShareAlarmContext, alarm_id: &AlarmId) -> Result<(), AlarmScheduleError> {
    if let Err(e) = ctx.alarm_clock.cancel(&alarm_id.to_string()) {
        error!(
            "Unable to cancel timer for alarm: {}. Error: {:?}",
            alarm_id, e
        );
        return Err(AlarmScheduleError::Platform);
    }
    ctx.repos.scheduled_alarms.delete(alarm_id).await;
    Ok(())
}

/// Cancels every live alarm of the `Reminder` and returns how many
/// cancels were issued.
pub async fn cancel_reminder_alarms(ctx: &ShareAlarmContext, reminder_id: &ID) -> usize {
    let alarms = ctx.repos.scheduled_alarms.find_by_reminder(reminder_id).await;
    let mut cancelled = 0;
    for alarm in alarms {
        if cancel(ctx, &alarm.id).await.is_ok() {
            cancelled += 1;
        }
    }
    cancelled
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
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

    async fn setup(now: i64, exact_capability: bool) -> (ShareAlarmContext, Arc<InMemoryAlarmClock>) {
        let mut ctx = setup_context().await;
        let clock = Arc::new(InMemoryAlarmClock::new(exact_capability));
        ctx.sys = Arc::new(StaticSys { time: now });
        ctx.alarm_clock = clock.clone();
        (ctx, clock)
    }

    fn alarm(reminder_id: &ID, index: usize, fire_at: i64) -> ScheduledAlarm {
        ScheduledAlarm {
            id: AlarmId::new(reminder_id.clone(), index),
            org_id: ID::new(),
            fire_at,
        }
    }

    fn reminder_with(event_time: i64, alert_offsets: Vec<i64>) -> Reminder {
        Reminder {
            id: Default::default(),
            org_id: ID::new(),
            title: "Standup".into(),
            description: "".into(),
            event_time,
            location: "".into(),
            alert_offsets,
            participants: Vec::new(),
            creator_id: ID::new(),
            is_read: false,
            created: 0,
            updated: 0,
        }
    }

    #[actix_web::test]
    async fn schedules_alarm_inside_the_valid_window() {
        let now = 1000 * 60 * 60;
        let (ctx, clock) = setup(now, true).await;
        let reminder_id = ID::new();

        assert!(schedule(&ctx, alarm(&reminder_id, 0, now + 1)).await.is_ok());
        assert!(
            schedule(&ctx, alarm(&reminder_id, 1, now + ctx.config.alarm_horizon_limit - 1))
                .await
                .is_ok()
        );

        let registered = clock.registered();
        assert_eq!(registered.len(), 2);
        assert_eq!(registered[0].0, format!("{}-0", reminder_id));
        assert_eq!(registered[1].0, format!("{}-1", reminder_id));
        assert_eq!(
            ctx.repos
                .scheduled_alarms
                .find_by_reminder(&reminder_id)
                .await
                .len(),
            2
        );
    }

    #[actix_web::test]
    async fn rejects_fire_times_outside_the_window() {
        let now = 1000 * 60 * 60;
        let (ctx, clock) = setup(now, true).await;
        let reminder_id = ID::new();

        let rejected = vec![
            now - 1,
            now,
            now + ctx.config.alarm_horizon_limit,
            now + ctx.config.alarm_horizon_limit + 1,
        ];
        for fire_at in rejected {
            assert_eq!(
                schedule(&ctx, alarm(&reminder_id, 0, fire_at)).await,
                Err(AlarmScheduleError::InvalidAlertTime)
            );
        }
        assert!(clock.registered().is_empty());
        assert!(ctx
            .repos
            .scheduled_alarms
            .find_by_reminder(&reminder_id)
            .await
            .is_empty());
    }

    #[actix_web::test]
    async fn missing_capability_fails_the_call_and_requests_the_capability() {
        let now = 0;
        let (ctx, clock) = setup(now, false).await;
        let reminder_id = ID::new();

        assert_eq!(
            schedule(&ctx, alarm(&reminder_id, 0, now + 1000)).await,
            Err(AlarmScheduleError::MissingCapability)
        );
        assert_eq!(clock.capability_requests(), 1);
        assert!(clock.registered().is_empty());
        assert!(ctx
            .repos
            .scheduled_alarms
            .find_by_reminder(&reminder_id)
            .await
            .is_empty());

        // Granting the capability makes the same call succeed
        clock.set_exact_capability(true);
        assert!(schedule(&ctx, alarm(&reminder_id, 0, now + 1000)).await.is_ok());
        assert_eq!(clock.registered().len(), 1);
    }

    #[actix_web::test]
    async fn cancel_is_idempotent() {
        let now = 0;
        let (ctx, clock) = setup(now, true).await;
        let reminder_id = ID::new();
        let alarm_id = AlarmId::new(reminder_id.clone(), 0);

        assert!(schedule(&ctx, alarm(&reminder_id, 0, now + 1000)).await.is_ok());
        assert!(cancel(&ctx, &alarm_id).await.is_ok());
        assert!(cancel(&ctx, &alarm_id).await.is_ok());

        assert!(clock.registered().is_empty());
        assert_eq!(clock.cancellations().len(), 2);
    }

    #[actix_web::test]
    async fn schedules_only_the_valid_alert_times_of_a_reminder() {
        // 20 minutes before the event: the 15 minute alert is still
        // ahead, the 30 minute alert has already passed
        let event_time = 1000 * 60 * 60 * 24;
        let now = event_time - 20 * 60 * 1000;
        let (ctx, clock) = setup(now, true).await;
        let reminder = reminder_with(event_time, vec![15, 30]);

        assert_eq!(schedule_reminder_alarms(&ctx, &reminder).await, 1);
        let registered = clock.registered();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].0, format!("{}-0", reminder.id));
        assert_eq!(registered[0].1, event_time - 15 * 60 * 1000);
    }

    #[actix_web::test]
    async fn schedules_both_alerts_a_month_ahead_and_none_after_they_passed() {
        let event_time = Utc
            .with_ymd_and_hms(2025, 6, 1, 10, 0, 0)
            .unwrap()
            .timestamp_millis();
        let reminder = reminder_with(event_time, vec![15, 30]);

        let month_before = Utc
            .with_ymd_and_hms(2025, 5, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        let (ctx, _) = setup(month_before, true).await;
        assert_eq!(schedule_reminder_alarms(&ctx, &reminder).await, 2);

        let ten_minutes_before = Utc
            .with_ymd_and_hms(2025, 6, 1, 9, 50, 0)
            .unwrap()
            .timestamp_millis();
        let (ctx, _) = setup(ten_minutes_before, true).await;
        assert_eq!(schedule_reminder_alarms(&ctx, &reminder).await, 0);
    }

    #[actix_web::test]
    async fn cancelling_a_reminder_issues_one_cancel_per_live_alarm() {
        let now = 0;
        let (ctx, clock) = setup(now, true).await;
        let reminder = reminder_with(1000 * 60 * 40, vec![10, 20, 30]);

        assert_eq!(schedule_reminder_alarms(&ctx, &reminder).await, 3);
        assert_eq!(cancel_reminder_alarms(&ctx, &reminder.id).await, 3);

        assert_eq!(
            clock.cancellations(),
            vec![
                format!("{}-0", reminder.id),
                format!("{}-1", reminder.id),
                format!("{}-2", reminder.id),
            ]
        );
        assert!(clock.registered().is_empty());
        assert!(ctx
            .repos
            .scheduled_alarms
            .find_by_reminder(&reminder.id)
            .await
            .is_empty());

        // Nothing left to cancel
        assert_eq!(cancel_reminder_alarms(&ctx, &reminder.id).await, 0);
    }
}
