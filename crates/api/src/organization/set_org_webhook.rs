use crate::shared::usecase::{execute, UseCase};
use crate::{error::ShareAlarmError, shared::auth::protect_org_route};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::set_org_webhook::{APIResponse, RequestBody};
use sharealarm_domain::Organization;
use sharealarm_infra::ShareAlarmContext;

pub async fn set_org_webhook_controller(
    http_req: HttpRequest,
    ctx: web::Data<ShareAlarmContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;

    let usecase = SetOrgWebhookUseCase {
        org,
        webhook_url: Some(body.webhook_url.clone()),
    };

    execute(usecase, &ctx)
        .await
        .map(|org| HttpResponse::Ok().json(APIResponse::new(org)))
        .map_err(ShareAlarmError::from)
}

#[derive(Debug)]
pub struct SetOrgWebhookUseCase {
    pub org: Organization,
    pub webhook_url: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidURI(String),
    StorageError,
}

impl From<UseCaseError> for ShareAlarmError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidURI(err) => {
                Self::BadClientData(format!("Invalid URI provided. Error message: {}", err))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetOrgWebhookUseCase {
    type Response = Organization;

    type Error = UseCaseError;

    const NAME: &'static str = "SetOrgWebhook";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        let success = self.org.settings.set_webhook_url(self.webhook_url.clone());

        if !success {
            return Err(UseCaseError::InvalidURI(format!(
                "Malformed url or scheme is not https: {:?}",
                self.webhook_url
            )));
        }

        match ctx.repos.organizations.save(&self.org).await {
            Ok(_) => Ok(self.org.clone()),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
