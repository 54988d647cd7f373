mod inmemory;
mod postgres;

pub use inmemory::InMemoryOrganizationRepo;
pub use postgres::PostgresOrganizationRepo;
use sharealarm_domain::{Organization, ID};

#[async_trait::async_trait]
pub trait IOrganizationRepo: Send + Sync {
    async fn insert(&self, org: &Organization) -> anyhow::Result<()>;
    async fn save(&self, org: &Organization) -> anyhow::Result<()>;
    async fn find(&self, org_id: &ID) -> Option<Organization>;
    async fn find_by_apikey(&self, api_key: &str) -> Option<Organization>;
    async fn delete(&self, org_id: &ID) -> Option<Organization>;
}
