mod create_reminder;
mod delete_reminder;
mod get_reminder;
mod subscribers;
mod update_reminder;

use actix_web::web;
use create_reminder::{create_reminder_admin_controller, create_reminder_controller};
use delete_reminder::{delete_reminder_admin_controller, delete_reminder_controller};
use get_reminder::{get_reminder_admin_controller, get_reminder_controller};
use update_reminder::{update_reminder_admin_controller, update_reminder_controller};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route(
        "/user/{user_id}/reminders",
        web::post().to(create_reminder_admin_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/user/reminders/{reminder_id}",
        web::get().to(get_reminder_admin_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/user/reminders/{reminder_id}",
        web::put().to(update_reminder_admin_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/user/reminders/{reminder_id}",
        web::delete().to(delete_reminder_admin_controller),
    );
}
