mod dismiss_reminder_alert;
mod get_reminder_alarms;
pub mod scheduler;
pub mod sync_reminder_alarms;

use actix_web::web;
use dismiss_reminder_alert::{
    dismiss_reminder_alert_admin_controller, dismiss_reminder_alert_controller,
};
use get_reminder_alarms::get_reminder_alarms_admin_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders/{reminder_id}/dismiss",
        web::post().to(dismiss_reminder_alert_controller),
    );
    cfg.route(
        "/user/reminders/{reminder_id}/dismiss",
        web::post().to(dismiss_reminder_alert_admin_controller),
    );

    cfg.route(
        "/user/reminders/{reminder_id}/alarms",
        web::get().to(get_reminder_alarms_admin_controller),
    );
}
