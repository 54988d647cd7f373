use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use sharealarm_utils::create_random_secret;

const API_KEY_LEN: usize = 30;

/// An `Organization` acts as a namespace for `User`s and `Reminder`s and
/// lets multiple different groups of contacts use the same instance of
/// this server without interfering with each other.
#[derive(Debug, Clone)]
pub struct Organization {
    pub id: ID,
    pub name: String,
    pub secret_api_key: String,
    pub public_jwt_key: Option<PEMKey>,
    pub settings: OrganizationSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PEMKey(String);

impl PEMKey {
    pub fn new(key: String) -> anyhow::Result<Self> {
        jsonwebtoken::DecodingKey::from_rsa_pem(key.as_bytes())?;
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrganizationSettings {
    pub webhook: Option<OrganizationWebhookSettings>,
}

/// Where fired reminder alerts for this `Organization` are delivered.
/// The `key` is sent along with every delivery so the receiver can
/// verify that the request came from this server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrganizationWebhookSettings {
    pub url: String,
    pub key: String,
}

impl OrganizationSettings {
    pub fn set_webhook_url(&mut self, webhook_url: Option<String>) -> bool {
        match webhook_url {
            Some(url) => {
                if let Ok(parsed_url) = url::Url::parse(&url) {
                    // TODO: in the future, only https endpoints will be allowed
                    let allowed_schemes = vec!["https", "http"];
                    if !allowed_schemes.contains(&parsed_url.scheme()) {
                        return false;
                    }
                } else {
                    return false;
                }

                if let Some(webhook_settings) = self.webhook.as_mut() {
                    webhook_settings.url = url;
                } else {
                    self.webhook = Some(OrganizationWebhookSettings {
                        url,
                        key: Organization::generate_secret_api_key(),
                    });
                }
            }
            None => {
                self.webhook = None;
            }
        };
        true
    }
}

impl Default for OrganizationSettings {
    fn default() -> Self {
        Self { webhook: None }
    }
}

impl Organization {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            secret_api_key: Self::generate_secret_api_key(),
            public_jwt_key: None,
            settings: Default::default(),
        }
    }

    pub fn generate_secret_api_key() -> String {
        let rand_secret = create_random_secret(API_KEY_LEN);
        format!("sk_{}", rand_secret)
    }

    pub fn set_public_jwt_key(&mut self, key: Option<PEMKey>) {
        self.public_jwt_key = key;
    }
}

impl Entity for Organization {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn api_key_has_expected_prefix() {
        let org = Organization::new("acme");
        assert!(org.secret_api_key.starts_with("sk_"));
        assert_ne!(
            org.secret_api_key,
            Organization::new("acme").secret_api_key
        );
    }

    #[test]
    fn webhook_url_must_be_http_or_https() {
        let mut settings = OrganizationSettings::default();
        assert!(!settings.set_webhook_url(Some("ftp://example.com/hook".into())));
        assert!(!settings.set_webhook_url(Some("not a url".into())));
        assert!(settings.webhook.is_none());

        assert!(settings.set_webhook_url(Some("https://example.com/hook".into())));
        let key = settings.webhook.clone().unwrap().key;

        // Updating the url keeps the previously generated key
        assert!(settings.set_webhook_url(Some("https://example.com/hook2".into())));
        let webhook = settings.webhook.clone().unwrap();
        assert_eq!(webhook.url, "https://example.com/hook2");
        assert_eq!(webhook.key, key);

        assert!(settings.set_webhook_url(None));
        assert!(settings.webhook.is_none());
    }
}
