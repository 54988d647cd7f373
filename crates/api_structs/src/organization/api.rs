use crate::dtos::OrganizationDTO;
use serde::{Deserialize, Serialize};
use sharealarm_domain::Organization;

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub org: OrganizationDTO,
}

impl OrganizationResponse {
    pub fn new(org: Organization) -> Self {
        Self {
            org: OrganizationDTO::new(org),
        }
    }
}

pub mod create_org {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub code: String,
        pub name: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub org: OrganizationDTO,
        pub secret_api_key: String,
    }

    impl APIResponse {
        pub fn new(org: Organization) -> Self {
            Self {
                secret_api_key: org.secret_api_key.clone(),
                org: OrganizationDTO::new(org),
            }
        }
    }
}

pub mod get_org {
    use super::*;

    pub type APIResponse = OrganizationResponse;
}

pub mod set_org_pub_key {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub public_jwt_key: Option<String>,
    }

    pub type APIResponse = OrganizationResponse;
}

pub mod set_org_webhook {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub webhook_url: String,
    }

    pub type APIResponse = OrganizationResponse;
}

pub mod delete_org_webhook {
    use super::*;

    pub type APIResponse = OrganizationResponse;
}
