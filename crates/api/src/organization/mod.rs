mod create_org;
mod delete_org_webhook;
mod get_org;
mod set_org_pub_key;
mod set_org_webhook;

use actix_web::web;
use create_org::create_org_controller;
use delete_org_webhook::delete_org_webhook_controller;
use get_org::get_org_controller;
use set_org_pub_key::set_org_pub_key_controller;
use set_org_webhook::set_org_webhook_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/org", web::post().to(create_org_controller));
    cfg.route("/org", web::get().to(get_org_controller));
    cfg.route("/org/pubkey", web::put().to(set_org_pub_key_controller));
    cfg.route("/org/webhook", web::put().to(set_org_webhook_controller));
    cfg.route(
        "/org/webhook",
        web::delete().to(delete_org_webhook_controller),
    );
}
