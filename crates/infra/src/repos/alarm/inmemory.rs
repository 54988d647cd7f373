use super::IScheduledAlarmRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use sharealarm_domain::{AlarmId, ScheduledAlarm, ID};

pub struct InMemoryScheduledAlarmRepo {
    alarms: std::sync::Mutex<Vec<ScheduledAlarm>>,
}

impl InMemoryScheduledAlarmRepo {
    pub fn new() -> Self {
        Self {
            alarms: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IScheduledAlarmRepo for InMemoryScheduledAlarmRepo {
    async fn insert(&self, alarm: &ScheduledAlarm) -> anyhow::Result<()> {
        insert(alarm, &self.alarms);
        Ok(())
    }

    async fn find(&self, alarm_id: &AlarmId) -> Option<ScheduledAlarm> {
        find_by(&self.alarms, |alarm| alarm.id == *alarm_id)
            .into_iter()
            .next()
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<ScheduledAlarm> {
        find_by(&self.alarms, |alarm| {
            alarm.id.reminder_id == *reminder_id
        })
    }

    async fn find_all(&self) -> Vec<ScheduledAlarm> {
        find_by(&self.alarms, |_| true)
    }

    async fn delete(&self, alarm_id: &AlarmId) -> Option<ScheduledAlarm> {
        find_and_delete_by(&self.alarms, |alarm| alarm.id == *alarm_id)
            .into_iter()
            .next()
    }

    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = delete_by(&self.alarms, |alarm| {
            alarm.id.reminder_id == *reminder_id
        });
        Ok(res)
    }

    async fn delete_all_before(&self, before: i64) -> Vec<ScheduledAlarm> {
        find_and_delete_by(&self.alarms, |alarm| alarm.fire_at <= before)
    }
}
