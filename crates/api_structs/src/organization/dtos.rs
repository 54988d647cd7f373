use serde::{Deserialize, Serialize};
use sharealarm_domain::{Organization, OrganizationSettings, OrganizationWebhookSettings, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDTO {
    pub id: ID,
    pub name: String,
    pub public_jwt_key: Option<String>,
    pub settings: OrganizationSettingsDTO,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettingsDTO {
    pub webhook: Option<OrganizationWebhookSettingsDTO>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationWebhookSettingsDTO {
    pub url: String,
    pub key: String,
}

impl OrganizationDTO {
    pub fn new(org: Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name,
            public_jwt_key: org.public_jwt_key.map(|key| key.as_str().to_string()),
            settings: OrganizationSettingsDTO::new(org.settings),
        }
    }
}

impl OrganizationSettingsDTO {
    pub fn new(settings: OrganizationSettings) -> Self {
        Self {
            webhook: settings
                .webhook
                .map(OrganizationWebhookSettingsDTO::new),
        }
    }
}

impl OrganizationWebhookSettingsDTO {
    pub fn new(webhook: OrganizationWebhookSettings) -> Self {
        Self {
            url: webhook.url,
            key: webhook.key,
        }
    }
}
