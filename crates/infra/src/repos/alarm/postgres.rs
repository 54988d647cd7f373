use super::IScheduledAlarmRepo;
use crate::repos::shared::repo::DeleteResult;
use sharealarm_domain::{AlarmId, ScheduledAlarm, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresScheduledAlarmRepo {
    pool: PgPool,
}

impl PostgresScheduledAlarmRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ScheduledAlarmRaw {
    reminder_uid: Uuid,
    alarm_index: i64,
    org_uid: Uuid,
    fire_at: i64,
}

impl Into<ScheduledAlarm> for ScheduledAlarmRaw {
    fn into(self) -> ScheduledAlarm {
        ScheduledAlarm {
            id: AlarmId::new(self.reminder_uid.into(), self.alarm_index as usize),
            org_id: self.org_uid.into(),
            fire_at: self.fire_at,
        }
    }
}

#[async_trait::async_trait]
impl IScheduledAlarmRepo for PostgresScheduledAlarmRepo {
    async fn insert(&self, alarm: &ScheduledAlarm) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO scheduled_alarms
            (reminder_uid, alarm_index, org_uid, fire_at)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(alarm.id.reminder_id.inner_ref())
        .bind(alarm.id.index as i64)
        .bind(alarm.org_id.inner_ref())
        .bind(alarm.fire_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, alarm_id: &AlarmId) -> Option<ScheduledAlarm> {
        sqlx::query_as::<_, ScheduledAlarmRaw>(
            r#"
            SELECT * FROM scheduled_alarms
            WHERE reminder_uid = $1 AND alarm_index = $2
            "#,
        )
        .bind(alarm_id.reminder_id.inner_ref())
        .bind(alarm_id.index as i64)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|alarm| alarm.into())
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<ScheduledAlarm> {
        sqlx::query_as::<_, ScheduledAlarmRaw>(
            r#"
            SELECT * FROM scheduled_alarms
            WHERE reminder_uid = $1
            ORDER BY alarm_index
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|alarm| alarm.into())
        .collect()
    }

    async fn find_all(&self) -> Vec<ScheduledAlarm> {
        sqlx::query_as::<_, ScheduledAlarmRaw>(
            r#"
            SELECT * FROM scheduled_alarms
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|alarm| alarm.into())
        .collect()
    }

    async fn delete(&self, alarm_id: &AlarmId) -> Option<ScheduledAlarm> {
        sqlx::query_as::<_, ScheduledAlarmRaw>(
            r#"
            DELETE FROM scheduled_alarms
            WHERE reminder_uid = $1 AND alarm_index = $2
            RETURNING *
            "#,
        )
        .bind(alarm_id.reminder_id.inner_ref())
        .bind(alarm_id.index as i64)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|alarm| alarm.into())
    }

    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM scheduled_alarms
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }

    async fn delete_all_before(&self, before: i64) -> Vec<ScheduledAlarm> {
        sqlx::query_as::<_, ScheduledAlarmRaw>(
            r#"
            DELETE FROM scheduled_alarms AS a
            WHERE a.fire_at <= $1
            RETURNING *
            "#,
        )
        .bind(before)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|alarm| alarm.into())
        .collect()
    }
}
