use crate::{error::ShareAlarmError, shared::auth::protect_org_route};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::get_org::APIResponse;
use sharealarm_infra::ShareAlarmContext;

pub async fn get_org_controller(
    http_req: HttpRequest,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(org)))
}
