use super::set_org_webhook::SetOrgWebhookUseCase;
use crate::shared::usecase::execute;
use crate::{error::ShareAlarmError, shared::auth::protect_org_route};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::delete_org_webhook::APIResponse;
use sharealarm_infra::ShareAlarmContext;

pub async fn delete_org_webhook_controller(
    http_req: HttpRequest,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;

    let usecase = SetOrgWebhookUseCase {
        org,
        webhook_url: None,
    };

    execute(usecase, &ctx)
        .await
        .map(|org| HttpResponse::Ok().json(APIResponse::new(org)))
        .map_err(ShareAlarmError::from)
}
