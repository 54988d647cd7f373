use crate::shared::entity::{Entity, ID};

/// Upper bound on how far before an event an alert can be requested
pub const MAX_ALERT_OFFSET_MINUTES: i64 = 60 * 24 * 365;

/// A `Reminder` is a time-based notice for an event, shared among a set
/// of participating `User`s within one `Organization`. Each entry in
/// `alert_offsets` describes one alert: the number of minutes before
/// `event_time` at which it should fire.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The `Organization` this `Reminder` belongs to
    pub org_id: ID,
    pub title: String,
    pub description: String,
    /// When the event itself takes place, in unix millis
    pub event_time: i64,
    pub location: String,
    /// Minutes before `event_time` at which alerts fire. Order is
    /// preserved and duplicates are kept, each entry maps to exactly
    /// one scheduled alarm.
    pub alert_offsets: Vec<i64>,
    /// The `User`s this `Reminder` is shared with
    pub participants: Vec<ID>,
    /// The `User` that created this `Reminder`
    pub creator_id: ID,
    pub is_read: bool,
    pub created: i64,
    pub updated: i64,
}

impl Reminder {
    pub fn valid_alert_offsets(offsets: &[i64]) -> bool {
        offsets
            .iter()
            .all(|minutes| (0..=MAX_ALERT_OFFSET_MINUTES).contains(minutes))
    }

    /// The absolute timestamps at which this `Reminder`s alerts fire
    pub fn alert_times(&self) -> Vec<i64> {
        derive_alert_times(self.event_time, &self.alert_offsets)
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Derives the absolute alert timestamp for each offset: the event time
/// minus the offset in minutes. Output order mirrors the input, nothing
/// is deduplicated or sorted, and timestamps in the past are returned
/// as-is. Whether a timestamp is still schedulable is decided at
/// registration time.
pub fn derive_alert_times(event_time: i64, offsets_minutes: &[i64]) -> Vec<i64> {
    offsets_minutes
        .iter()
        .map(|minutes| event_time - minutes * 60 * 1000)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn derives_one_alert_time_per_offset() {
        let event_time = 1000 * 60 * 60;
        let offsets = vec![15, 30, 0, 15, -5];
        let alert_times = derive_alert_times(event_time, &offsets);
        assert_eq!(alert_times.len(), offsets.len());
        for (i, offset) in offsets.iter().enumerate() {
            assert_eq!(alert_times[i], event_time - offset * 60 * 1000);
        }
    }

    #[test]
    fn derive_preserves_order_and_duplicates() {
        let alert_times = derive_alert_times(600_000, &[5, 5, 1]);
        assert_eq!(alert_times, vec![300_000, 300_000, 540_000]);
    }

    #[test]
    fn derive_of_empty_offsets_is_empty() {
        assert!(derive_alert_times(123_456, &[]).is_empty());
    }

    #[test]
    fn derives_wall_clock_alert_times() {
        let event_time = Utc
            .with_ymd_and_hms(2025, 6, 1, 10, 0, 0)
            .unwrap()
            .timestamp_millis();
        let alert_times = derive_alert_times(event_time, &[15, 30]);
        assert_eq!(
            alert_times[0],
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 45, 0)
                .unwrap()
                .timestamp_millis()
        );
        assert_eq!(
            alert_times[1],
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
                .unwrap()
                .timestamp_millis()
        );
    }

    #[test]
    fn validates_alert_offsets() {
        assert!(Reminder::valid_alert_offsets(&[]));
        assert!(Reminder::valid_alert_offsets(&[0, 15, 60 * 24]));
        assert!(!Reminder::valid_alert_offsets(&[-1]));
        assert!(!Reminder::valid_alert_offsets(&[MAX_ALERT_OFFSET_MINUTES + 1]));
    }
}
