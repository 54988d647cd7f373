mod alarm;
mod organization;
mod reminder;
mod shared;
mod user;

use alarm::{InMemoryScheduledAlarmRepo, PostgresScheduledAlarmRepo};
pub use alarm::IScheduledAlarmRepo;
use organization::{InMemoryOrganizationRepo, PostgresOrganizationRepo};
pub use organization::IOrganizationRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
pub use reminder::IReminderRepo;
pub use shared::repo::DeleteResult;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use user::{InMemoryUserRepo, PostgresUserRepo};
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub organizations: Arc<dyn IOrganizationRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub scheduled_alarms: Arc<dyn IScheduledAlarmRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        Ok(Self {
            organizations: Arc::new(PostgresOrganizationRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            scheduled_alarms: Arc::new(PostgresScheduledAlarmRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            organizations: Arc::new(InMemoryOrganizationRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
            scheduled_alarms: Arc::new(InMemoryScheduledAlarmRepo::new()),
        }
    }
}
