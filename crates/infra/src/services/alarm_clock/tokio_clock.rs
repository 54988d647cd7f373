use super::{FiredAlarm, IAlarmClock};
use crate::system::ISys;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::warn;

/// Alarm clock backed by one spawned sleep task per registered timer.
/// Aborting the task under the same lock that owns the registration map
/// is what makes cancellation atomic with respect to a concurrent fire.
pub struct TokioAlarmClock {
    sys: Arc<dyn ISys>,
    exact_capability: bool,
    timers: Mutex<HashMap<String, JoinHandle<()>>>,
    fired_tx: UnboundedSender<FiredAlarm>,
    fired_rx: Mutex<Option<UnboundedReceiver<FiredAlarm>>>,
}

impl TokioAlarmClock {
    pub fn new(sys: Arc<dyn ISys>, exact_capability: bool) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            sys,
            exact_capability,
            timers: Mutex::new(HashMap::new()),
            fired_tx,
            fired_rx: Mutex::new(Some(fired_rx)),
        }
    }
}

impl IAlarmClock for TokioAlarmClock {
    fn can_schedule_exact(&self) -> bool {
        self.exact_capability
    }

    fn request_exact_capability(&self) {
        warn!("Exact alarm capability requested. Set the EXACT_ALARM_CAPABILITY environment variable to true and restart to grant it.");
    }

    fn register_one_shot(&self, fire_at: i64, callback_id: String) -> anyhow::Result<()> {
        let mut timers = self.timers.lock().unwrap();
        if let Some(replaced) = timers.remove(&callback_id) {
            replaced.abort();
        }

        let delay = fire_at - self.sys.get_timestamp_millis();
        let fired_tx = self.fired_tx.clone();
        let sys = self.sys.clone();
        let fired_callback_id = callback_id.clone();
        let handle = tokio::spawn(async move {
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay as u64)).await;
            }
            // The consumer may be gone during shutdown
            let _ = fired_tx.send(FiredAlarm {
                callback_id: fired_callback_id,
                fired_at: sys.get_timestamp_millis(),
            });
        });
        timers.insert(callback_id, handle);
        Ok(())
    }

    fn cancel(&self, callback_id: &str) -> anyhow::Result<()> {
        if let Some(handle) = self.timers.lock().unwrap().remove(callback_id) {
            handle.abort();
        }
        Ok(())
    }

    fn take_fired_channel(&self) -> Option<UnboundedReceiver<FiredAlarm>> {
        self.fired_rx.lock().unwrap().take()
    }
}
