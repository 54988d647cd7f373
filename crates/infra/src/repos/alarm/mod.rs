mod inmemory;
mod postgres;

pub use inmemory::InMemoryScheduledAlarmRepo;
pub use postgres::PostgresScheduledAlarmRepo;
use sharealarm_domain::{AlarmId, ScheduledAlarm, ID};

use crate::repos::shared::repo::DeleteResult;

/// Registry of timers currently registered with the alarm clock. Rows
/// are inserted when a timer is registered and removed when it fires or
/// is cancelled, so the live alarms of a `Reminder` can always be
/// enumerated.
#[async_trait::async_trait]
pub trait IScheduledAlarmRepo: Send + Sync {
    async fn insert(&self, alarm: &ScheduledAlarm) -> anyhow::Result<()>;
    async fn find(&self, alarm_id: &AlarmId) -> Option<ScheduledAlarm>;
    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<ScheduledAlarm>;
    async fn find_all(&self) -> Vec<ScheduledAlarm>;
    async fn delete(&self, alarm_id: &AlarmId) -> Option<ScheduledAlarm>;
    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<DeleteResult>;
    async fn delete_all_before(&self, before: i64) -> Vec<ScheduledAlarm>;
}
