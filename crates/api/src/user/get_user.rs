use crate::error::ShareAlarmError;
use crate::shared::auth::{org_can_modify_user, protect_org_route};
use actix_web::{web, HttpRequest, HttpResponse};
use sharealarm_api_structs::get_user::{APIResponse, PathParams};
use sharealarm_infra::ShareAlarmContext;

pub async fn get_user_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ShareAlarmContext>,
) -> Result<HttpResponse, ShareAlarmError> {
    let org = protect_org_route(&http_req, &ctx).await?;
    let user = org_can_modify_user(&org, &path_params.user_id, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
