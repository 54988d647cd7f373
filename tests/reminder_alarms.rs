mod helpers;

use chrono::Utc;
use helpers::setup::spawn_app;
use sharealarm_sdk::{
    CreateOrgInput, CreateReminderInput, CreateUserInput, ShareAlarmSDK, UpdateReminderInput,
};

async fn spawn_admin_app() -> ShareAlarmSDK {
    let (app, sdk, address) = spawn_app().await;
    let res = sdk
        .org
        .create(CreateOrgInput {
            code: app.config.create_org_secret_code.clone(),
            name: "acme".into(),
        })
        .await
        .expect("Expected to create org");
    ShareAlarmSDK::new(address, res.secret_api_key)
}

#[actix_web::test]
async fn test_reminder_lifecycle_keeps_alarms_in_sync() {
    let admin_client = spawn_admin_app().await;
    let creator = admin_client
        .user
        .create(CreateUserInput { name: "Ada".into() })
        .await
        .expect("Expected to create user")
        .user;
    let participant = admin_client
        .user
        .create(CreateUserInput {
            name: "Grace".into(),
        })
        .await
        .expect("Expected to create user")
        .user;

    let event_time = Utc::now().timestamp_millis() + 1000 * 60 * 60 * 2;
    let res = admin_client
        .reminder
        .create(CreateReminderInput {
            user_id: creator.id.clone(),
            title: "Quarterly review".into(),
            description: Some("Bring the numbers".into()),
            event_time,
            location: Some("Room 4".into()),
            alert_offsets: vec![15, 30],
            participants: vec![participant.id.clone()],
        })
        .await
        .expect("Expected to create reminder");
    let reminder = res.reminder;
    assert_eq!(reminder.creator_id, creator.id);
    assert_eq!(reminder.alert_offsets, vec![15, 30]);
    assert!(!reminder.is_read);

    // One alarm per alert offset
    let res = admin_client
        .reminder
        .alarms(reminder.id.clone())
        .await
        .expect("Expected to list alarms");
    assert_eq!(res.alarms.len(), 2);
    assert_eq!(res.alarms[0].fire_at, event_time - 15 * 60 * 1000);
    assert_eq!(res.alarms[1].fire_at, event_time - 30 * 60 * 1000);

    // The participant sees the shared reminder
    let res = admin_client
        .user
        .reminders(participant.id.clone())
        .await
        .expect("Expected to list user reminders");
    assert_eq!(res.reminders.len(), 1);
    assert_eq!(res.reminders[0].id, reminder.id);

    // Moving the event reschedules the alarms
    let new_event_time = event_time + 1000 * 60 * 60;
    let res = admin_client
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            title: None,
            description: None,
            event_time: Some(new_event_time),
            location: None,
            alert_offsets: None,
            participants: None,
            is_read: None,
        })
        .await
        .expect("Expected to update reminder");
    assert_eq!(res.reminder.event_time, new_event_time);

    let res = admin_client
        .reminder
        .alarms(reminder.id.clone())
        .await
        .expect("Expected to list alarms");
    assert_eq!(res.alarms.len(), 2);
    assert_eq!(res.alarms[0].fire_at, new_event_time - 15 * 60 * 1000);

    // Dismissing stops the remaining alarms and marks the reminder read
    let res = admin_client
        .reminder
        .dismiss(reminder.id.clone())
        .await
        .expect("Expected to dismiss reminder alert");
    assert_eq!(res.cancelled_alarms, 2);
    assert!(res.reminder.is_read);

    let res = admin_client
        .reminder
        .alarms(reminder.id.clone())
        .await
        .expect("Expected to list alarms");
    assert!(res.alarms.is_empty());

    assert!(admin_client.reminder.delete(reminder.id.clone()).await.is_ok());
    assert!(admin_client.reminder.get(reminder.id).await.is_err());
}

#[actix_web::test]
async fn test_alert_times_in_the_past_are_not_scheduled() {
    let admin_client = spawn_admin_app().await;
    let creator = admin_client
        .user
        .create(CreateUserInput { name: "Ada".into() })
        .await
        .expect("Expected to create user")
        .user;

    // Event in five minutes: the 10 minute alert has already passed,
    // the 1 minute alert is still ahead
    let event_time = Utc::now().timestamp_millis() + 1000 * 60 * 5;
    let res = admin_client
        .reminder
        .create(CreateReminderInput {
            user_id: creator.id.clone(),
            title: "Leaving soon".into(),
            description: None,
            event_time,
            location: None,
            alert_offsets: vec![10, 1],
            participants: Vec::new(),
        })
        .await
        .expect("Expected to create reminder");

    let res = admin_client
        .reminder
        .alarms(res.reminder.id.clone())
        .await
        .expect("Expected to list alarms");
    assert_eq!(res.alarms.len(), 1);
    assert_eq!(res.alarms[0].fire_at, event_time - 60 * 1000);
    assert_eq!(res.alarms[0].id.to_string(), format!("{}-1", res.alarms[0].reminder_id));
}

#[actix_web::test]
async fn test_rejects_negative_alert_offsets() {
    let admin_client = spawn_admin_app().await;
    let creator = admin_client
        .user
        .create(CreateUserInput { name: "Ada".into() })
        .await
        .expect("Expected to create user")
        .user;

    assert!(admin_client
        .reminder
        .create(CreateReminderInput {
            user_id: creator.id,
            title: "Bad offsets".into(),
            description: None,
            event_time: Utc::now().timestamp_millis() + 1000 * 60 * 60,
            location: None,
            alert_offsets: vec![-15],
            participants: Vec::new(),
        })
        .await
        .is_err());
}

#[actix_web::test]
async fn test_rejects_participants_outside_the_org() {
    let admin_client = spawn_admin_app().await;
    let creator = admin_client
        .user
        .create(CreateUserInput { name: "Ada".into() })
        .await
        .expect("Expected to create user")
        .user;

    assert!(admin_client
        .reminder
        .create(CreateReminderInput {
            user_id: creator.id,
            title: "Stranger danger".into(),
            description: None,
            event_time: Utc::now().timestamp_millis() + 1000 * 60 * 60,
            location: None,
            alert_offsets: vec![5],
            participants: vec![sharealarm_sdk::ID::new()],
        })
        .await
        .is_err());
}
