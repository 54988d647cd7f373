use crate::shared::entity::ID;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Identifies a single one-shot alarm: the owning `Reminder` and the
/// index of the alert offset it was derived from. The string form
/// `"<reminder-id>-<index>"` is the callback id handed to the alarm
/// clock, so the same id can always be recomputed for cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlarmId {
    pub reminder_id: ID,
    pub index: usize,
}

impl AlarmId {
    pub fn new(reminder_id: ID, index: usize) -> Self {
        Self { reminder_id, index }
    }
}

impl Display for AlarmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.reminder_id, self.index)
    }
}

#[derive(Error, Debug)]
pub enum InvalidAlarmIdError {
    #[error("Alarm id: {0} is malformed")]
    Malformed(String),
}

impl FromStr for AlarmId {
    type Err = InvalidAlarmIdError;

    // The reminder id itself contains dashes, so the alert index is
    // everything after the last one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidAlarmIdError::Malformed(s.to_string());
        let (reminder_id, index) = s.rsplit_once('-').ok_or_else(malformed)?;
        let reminder_id = reminder_id.parse::<ID>().map_err(|_| malformed())?;
        let index = index.parse::<usize>().map_err(|_| malformed())?;
        Ok(Self { reminder_id, index })
    }
}

impl Serialize for AlarmId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AlarmId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AlarmIdVisitor;

        impl<'de> Visitor<'de> for AlarmIdVisitor {
            type Value = AlarmId;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid alarm id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<AlarmId, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<AlarmId>()
                    .map_err(|_| E::custom(format!("Malformed alarm id: {}", value)))
            }
        }

        deserializer.deserialize_str(AlarmIdVisitor)
    }
}

/// A single live timer registration. A row exists exactly while the
/// timer is registered with the alarm clock: it is inserted at
/// registration and removed at fire time or cancellation, so
/// cancelling a `Reminder`s alarms never depends on remembering how
/// many offsets it had when they were scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledAlarm {
    pub id: AlarmId,
    /// The `Organization` the owning `Reminder` belongs to
    pub org_id: ID,
    /// When the timer fires, in unix millis
    pub fire_at: i64,
}
