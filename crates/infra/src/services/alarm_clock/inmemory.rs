use super::{FiredAlarm, IAlarmClock};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Alarm clock that records registrations instead of keeping real
/// timers, used in tests. Timers fire only when `fire` is called.
pub struct InMemoryAlarmClock {
    exact_capability: AtomicBool,
    registrations: Mutex<Vec<(String, i64)>>,
    cancellations: Mutex<Vec<String>>,
    capability_requests: AtomicUsize,
    fired_tx: UnboundedSender<FiredAlarm>,
    fired_rx: Mutex<Option<UnboundedReceiver<FiredAlarm>>>,
}

impl InMemoryAlarmClock {
    pub fn new(exact_capability: bool) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            exact_capability: AtomicBool::new(exact_capability),
            registrations: Mutex::new(Vec::new()),
            cancellations: Mutex::new(Vec::new()),
            capability_requests: AtomicUsize::new(0),
            fired_tx,
            fired_rx: Mutex::new(Some(fired_rx)),
        }
    }

    pub fn set_exact_capability(&self, granted: bool) {
        self.exact_capability.store(granted, Ordering::SeqCst);
    }

    /// Callback ids with a live registration, in registration order
    pub fn registered(&self) -> Vec<(String, i64)> {
        self.registrations.lock().unwrap().clone()
    }

    /// Every cancel call this clock has received, live timer or not
    pub fn cancellations(&self) -> Vec<String> {
        self.cancellations.lock().unwrap().clone()
    }

    pub fn capability_requests(&self) -> usize {
        self.capability_requests.load(Ordering::SeqCst)
    }

    /// Fires a registered timer now, as if its fire time was reached
    pub fn fire(&self, callback_id: &str, fired_at: i64) {
        let mut registrations = self.registrations.lock().unwrap();
        if let Some(pos) = registrations.iter().position(|(id, _)| id == callback_id) {
            registrations.remove(pos);
            let _ = self.fired_tx.send(FiredAlarm {
                callback_id: callback_id.to_string(),
                fired_at,
            });
        }
    }
}

impl IAlarmClock for InMemoryAlarmClock {
    fn can_schedule_exact(&self) -> bool {
        self.exact_capability.load(Ordering::SeqCst)
    }

    fn request_exact_capability(&self) {
        self.capability_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn register_one_shot(&self, fire_at: i64, callback_id: String) -> anyhow::Result<()> {
        let mut registrations = self.registrations.lock().unwrap();
        registrations.retain(|(id, _)| *id != callback_id);
        registrations.push((callback_id, fire_at));
        Ok(())
    }

    fn cancel(&self, callback_id: &str) -> anyhow::Result<()> {
        self.cancellations
            .lock()
            .unwrap()
            .push(callback_id.to_string());
        self.registrations
            .lock()
            .unwrap()
            .retain(|(id, _)| id != callback_id);
        Ok(())
    }

    fn take_fired_channel(&self) -> Option<UnboundedReceiver<FiredAlarm>> {
        self.fired_rx.lock().unwrap().take()
    }
}
