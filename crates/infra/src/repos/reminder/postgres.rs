use super::IReminderRepo;
use sharealarm_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    org_uid: Uuid,
    title: String,
    description: String,
    event_time: i64,
    location: String,
    alert_offsets: Vec<i64>,
    participants: Vec<Uuid>,
    creator_uid: Uuid,
    is_read: bool,
    created: i64,
    updated: i64,
}

impl Into<Reminder> for ReminderRaw {
    fn into(self) -> Reminder {
        Reminder {
            id: self.reminder_uid.into(),
            org_id: self.org_uid.into(),
            title: self.title,
            description: self.description,
            event_time: self.event_time,
            location: self.location,
            alert_offsets: self.alert_offsets,
            participants: self.participants.into_iter().map(|uid| uid.into()).collect(),
            creator_id: self.creator_uid.into(),
            is_read: self.is_read,
            created: self.created,
            updated: self.updated,
        }
    }
}

fn participant_uids(reminder: &Reminder) -> Vec<Uuid> {
    reminder
        .participants
        .iter()
        .map(|id| *id.inner_ref())
        .collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, org_uid, title, description, event_time, location, alert_offsets, participants, creator_uid, is_read, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.org_id.inner_ref())
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.event_time)
        .bind(&reminder.location)
        .bind(&reminder.alert_offsets)
        .bind(participant_uids(reminder))
        .bind(reminder.creator_id.inner_ref())
        .bind(reminder.is_read)
        .bind(reminder.created)
        .bind(reminder.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET title = $2, description = $3, event_time = $4, location = $5,
                alert_offsets = $6, participants = $7, is_read = $8, updated = $9
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.event_time)
        .bind(&reminder.location)
        .bind(&reminder.alert_offsets)
        .bind(participant_uids(reminder))
        .bind(reminder.is_read)
        .bind(reminder.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|reminder| reminder.into())
    }

    async fn find_many(&self, reminder_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        let reminder_uids = reminder_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = ANY($1)
            "#,
        )
        .bind(&reminder_uids)
        .fetch_all(&self.pool)
        .await?;
        Ok(reminders.into_iter().map(|reminder| reminder.into()).collect())
    }

    async fn find_by_participant(&self, user_id: &ID) -> Vec<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE $1 = ANY(participants)
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|reminder| reminder.into())
        .collect()
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|reminder| reminder.into())
    }
}
