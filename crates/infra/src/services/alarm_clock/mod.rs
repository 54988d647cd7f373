mod inmemory;
mod tokio_clock;

pub use inmemory::InMemoryAlarmClock;
use tokio::sync::mpsc::UnboundedReceiver;
pub use tokio_clock::TokioAlarmClock;

/// Signal emitted when a registered one-shot timer reaches its fire
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct FiredAlarm {
    /// The callback id the timer was registered under
    pub callback_id: String,
    /// The timestamp in millis at which the timer actually fired
    pub fired_at: i64,
}

/// Boundary to the timer facility this process schedules against. One
/// callback id maps to at most one registered timer; registering an id
/// again replaces the previous timer. Cancelling an id with no live
/// timer is not an error, and cancellation is atomic with respect to a
/// concurrent fire: after `cancel` returns, the id will not be emitted
/// on the fired channel.
pub trait IAlarmClock: Send + Sync {
    /// Whether this process has been granted the capability to register
    /// exact timers. Callers must not schedule when this is false.
    fn can_schedule_exact(&self) -> bool;

    /// Ask the surrounding system to grant the exact timer capability.
    /// Fire-and-forget, the outcome is observed through
    /// `can_schedule_exact` on later calls.
    fn request_exact_capability(&self);

    fn register_one_shot(&self, fire_at: i64, callback_id: String) -> anyhow::Result<()>;

    fn cancel(&self, callback_id: &str) -> anyhow::Result<()>;

    /// The receiving end of the fired timer signals. There is exactly
    /// one consumer, subsequent calls return `None`.
    fn take_fired_channel(&self) -> Option<UnboundedReceiver<FiredAlarm>>;
}
