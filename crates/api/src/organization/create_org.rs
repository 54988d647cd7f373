use crate::{
    error::ShareAlarmError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use sharealarm_api_structs::create_org::{APIResponse, RequestBody};
use sharealarm_domain::Organization;
use sharealarm_infra::ShareAlarmContext;

pub async fn create_org_controller(
    ctx: web::Data<ShareAlarmContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, ShareAlarmError> {
    let usecase = CreateOrgUseCase {
        code: body.0.code,
        name: body.0.name,
    };
    execute(usecase, &ctx)
        .await
        .map(|org| HttpResponse::Created().json(APIResponse::new(org)))
        .map_err(ShareAlarmError::from)
}

#[derive(Debug)]
struct CreateOrgUseCase {
    code: String,
    name: String,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    InvalidCreateOrgCode,
}

impl From<UseCaseError> for ShareAlarmError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCreateOrgCode => {
                Self::Unauthorized("Invalid code provided".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateOrgUseCase {
    type Response = Organization;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateOrg";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        if self.code != ctx.config.create_org_secret_code {
            return Err(UseCaseError::InvalidCreateOrgCode);
        }
        let org = Organization::new(&self.name);
        let res = ctx.repos.organizations.insert(&org).await;

        res.map(|_| org).map_err(|_| UseCaseError::StorageError)
    }
}
