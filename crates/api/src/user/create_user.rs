use crate::error::ShareAlarmError;
use crate::shared::auth::protect_org_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::create_user::{APIResponse, RequestBody};
use sharealarm_domain::{User, ID};
use sharealarm_infra::ShareAlarmContext;

pub async fn create_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;

    let usecase = CreateUserUseCase {
        org_id: org.id,
        name: body.0.name,
    };
    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::new(user)))
        .map_err(ShareAlarmError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub org_id: ID,
    pub name: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ShareAlarmError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &ShareAlarmContext) -> Result<Self::Response, Self::Error> {
        let user = User::new(self.org_id.clone(), &self.name);
        let res = ctx.repos.users.insert(&user).await;

        res.map(|_| user).map_err(|_| UseCaseError::StorageError)
    }
}
