mod policy;

pub use policy::{Permission, Policy};

use crate::error::ShareAlarmError;
use actix_web::HttpRequest;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use sharealarm_domain::{Organization, Reminder, User, ID};
use sharealarm_infra::ShareAlarmContext;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    /// Expiration time (as UTC timestamp)
    exp: usize,
    /// Issued at (as UTC timestamp)
    iat: usize,
    /// The `User` this token was issued for
    user_id: ID,
    /// Restrictions on what actions this token can perform
    sharealarm_policy: Option<Policy>,
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .replace("Bearer", "")
        .replace("bearer", "")
        .trim()
        .to_string()
}

fn decode_token(org: &Organization, token: &str) -> anyhow::Result<Claims> {
    let public_jwt_key = match &org.public_jwt_key {
        Some(key) => key,
        None => {
            return Err(anyhow::anyhow!(
                "Organization: {} does not support user tokens",
                org.id
            ))
        }
    };
    let decoding_key = DecodingKey::from_rsa_pem(public_jwt_key.as_bytes())?;
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::RS256))?;

    Ok(token_data.claims)
}

async fn auth_user_req(
    req: &HttpRequest,
    org: &Organization,
    ctx: &ShareAlarmContext,
) -> Option<(User, Policy)> {
    let token = req.headers().get("authorization")?;
    let token = match token.to_str() {
        Ok(token) => parse_authtoken_header(token),
        Err(_) => return None,
    };
    let claims = match decode_token(org, &token) {
        Ok(claims) => claims,
        Err(_) => return None,
    };
    match ctx.repos.users.find(&claims.user_id).await {
        Some(user) if user.org_id == org.id => {
            Some((user, claims.sharealarm_policy.unwrap_or_default()))
        }
        _ => None,
    }
}

/// Resolves the `Organization` the request acts on behalf of from the
/// `sharealarm-org` header.
async fn get_client_org(
    req: &HttpRequest,
    ctx: &ShareAlarmContext,
) -> Result<Organization, ShareAlarmError> {
    let org_id = req
        .headers()
        .get("sharealarm-org")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            ShareAlarmError::UnidentifiableClient(
                "Could not find org id in sharealarm-org header".into(),
            )
        })?;
    let org_id = org_id.parse::<ID>().map_err(|e| {
        ShareAlarmError::BadClientData(format!("{}", e))
    })?;
    ctx.repos.organizations.find(&org_id).await.ok_or_else(|| {
        ShareAlarmError::UnidentifiableClient(format!(
            "Could not find the organization with id: {}",
            org_id
        ))
    })
}

/// Protects a route that can only be accessed by a `User` with a valid
/// token signed by its `Organization`s private key.
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &ShareAlarmContext,
) -> Result<(User, Policy), ShareAlarmError> {
    let org = get_client_org(req, ctx).await?;
    auth_user_req(req, &org, ctx).await.ok_or_else(|| {
        ShareAlarmError::Unauthorized(
            "Missing or invalid token in the authorization header".into(),
        )
    })
}

/// Protects a route that can only be accessed with the `Organization`s
/// secret api key.
pub async fn protect_org_route(
    req: &HttpRequest,
    ctx: &ShareAlarmContext,
) -> Result<Organization, ShareAlarmError> {
    let api_key = req
        .headers()
        .get("sharealarm-api-key")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            ShareAlarmError::UnidentifiableClient(
                "Could not find api key in sharealarm-api-key header".into(),
            )
        })?;

    ctx.repos
        .organizations
        .find_by_apikey(api_key)
        .await
        .ok_or_else(|| {
            ShareAlarmError::Unauthorized("Malformed api key provided".into())
        })
}

pub async fn org_can_modify_user(
    org: &Organization,
    user_id: &ID,
    ctx: &ShareAlarmContext,
) -> Result<User, ShareAlarmError> {
    match ctx.repos.users.find(user_id).await {
        Some(user) if user.org_id == org.id => Ok(user),
        _ => Err(ShareAlarmError::NotFound(format!(
            "The user with id: {}, was not found.",
            user_id
        ))),
    }
}

pub async fn org_can_modify_reminder(
    org: &Organization,
    reminder_id: &ID,
    ctx: &ShareAlarmContext,
) -> Result<Reminder, ShareAlarmError> {
    match ctx.repos.reminders.find(reminder_id).await {
        Some(reminder) if reminder.org_id == org.id => Ok(reminder),
        _ => Err(ShareAlarmError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_bearer_prefixes() {
        assert_eq!(parse_authtoken_header("Bearer abc123"), "abc123");
        assert_eq!(parse_authtoken_header("bearer abc123"), "abc123");
        assert_eq!(parse_authtoken_header("  abc123  "), "abc123");
    }

    #[test]
    fn rejects_token_for_org_without_public_key() {
        let org = Organization::new("acme");
        assert!(decode_token(&org, "some.jwt.token").is_err());
    }
}
