use crate::shared::usecase::{execute, UseCase};
use crate::{error::ShareAlarmError, shared::auth::protect_org_route};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::set_org_pub_key::{APIResponse, RequestBody};
use sharealarm_domain::{Organization, PEMKey};
use sharealarm_infra::ShareAlarmContext;

pub async fn set_org_pub_key_controller(
    http_req: HttpRequest,
    ctx: web::Data<ShareAlarmContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;

    let usecase = SetOrgPubKeyUseCase {
        org,
        public_jwt_key: body.0.public_jwt_key,
    };

    execute(usecase, &ctx)
        .await
        .map(|org| HttpResponse::Ok().json(APIResponse::new(org)))
        .map_err(ShareAlarmError::from)
}

#[derive(Debug)]
struct SetOrgPubKeyUseCase {
    pub org: Organization,
    pub public_jwt_key: Option<String>,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidPemKey,
    StorageError,
}

impl From<UseCaseError> for ShareAlarmError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidPemKey => {
                Self::BadClientData("Malformed public pem key provided".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetOrgPubKeyUseCase {
    type Response = Organization;

    type Error = UseCaseError;

    const NAME: &'static str = "SetOrgPubKey";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        let key = if let Some(key) = &self.public_jwt_key {
            match PEMKey::new(key.clone()) {
                Ok(key) => Some(key),
                Err(_) => return Err(UseCaseError::InvalidPemKey),
            }
        } else {
            None
        };

        self.org.set_public_jwt_key(key);

        match ctx.repos.organizations.save(&self.org).await {
            Ok(_) => Ok(self.org.clone()),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
