use super::IOrganizationRepo;
use crate::repos::shared::inmemory_repo::*;
use sharealarm_domain::{Organization, ID};

pub struct InMemoryOrganizationRepo {
    organizations: std::sync::Mutex<Vec<Organization>>,
}

impl InMemoryOrganizationRepo {
    pub fn new() -> Self {
        Self {
            organizations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IOrganizationRepo for InMemoryOrganizationRepo {
    async fn insert(&self, org: &Organization) -> anyhow::Result<()> {
        insert(org, &self.organizations);
        Ok(())
    }

    async fn save(&self, org: &Organization) -> anyhow::Result<()> {
        save(org, &self.organizations);
        Ok(())
    }

    async fn find(&self, org_id: &ID) -> Option<Organization> {
        find(org_id, &self.organizations)
    }

    async fn find_by_apikey(&self, api_key: &str) -> Option<Organization> {
        find_by(&self.organizations, |org| org.secret_api_key == api_key)
            .into_iter()
            .next()
    }

    async fn delete(&self, org_id: &ID) -> Option<Organization> {
        delete(org_id, &self.organizations)
    }
}
