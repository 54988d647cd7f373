mod alarm_clock;

pub use alarm_clock::{FiredAlarm, IAlarmClock, InMemoryAlarmClock, TokioAlarmClock};
