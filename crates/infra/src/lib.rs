mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
use repos::Repos;
pub use repos::{
    DeleteResult, IOrganizationRepo, IReminderRepo, IScheduledAlarmRepo, IUserRepo,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct ShareAlarmContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub alarm_clock: Arc<dyn IAlarmClock>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl ShareAlarmContext {
    async fn create(params: ContextParams) -> Self {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string)
                .await
                .expect("Postgres credentials must be set and valid"),
            None => {
                info!("Did not find DATABASE_URL environment variable. Going to use inmemory repositories, nothing will be persisted across restarts.");
                Repos::create_inmemory()
            }
        };
        let config = Config::new();
        let sys: Arc<dyn ISys> = Arc::new(RealSys {});
        let alarm_clock = Arc::new(TokioAlarmClock::new(
            sys.clone(),
            config.exact_alarm_capability,
        ));
        Self {
            repos,
            config,
            sys,
            alarm_clock,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> ShareAlarmContext {
    ShareAlarmContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let connection_string =
        get_psql_connection_string().expect("DATABASE_URL env var to be present.");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
