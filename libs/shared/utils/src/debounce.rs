//! Debounce utility backing the "check while typing" duplicate lookup.
//! Scheduling a new task supersedes any pending one; `cancel` drops whatever
//! is pending. Last scheduled call wins, nothing stronger.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::trace;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run `task` after the delay unless another `schedule` or `cancel`
    /// happens first.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;
        thread::spawn(move || {
            thread::sleep(delay);
            if generation.load(Ordering::SeqCst) == scheduled {
                task();
            } else {
                trace!("debounced task superseded before firing");
            }
        });
    }

    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn fires_after_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let (tx, rx) = mpsc::channel();
        debouncer.schedule(move || tx.send(1).unwrap());
        assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), 1);
    }

    #[test]
    fn last_scheduled_call_wins() {
        let debouncer = Debouncer::new(Duration::from_millis(50));
        let (tx, rx) = mpsc::channel();
        for n in 0..5 {
            let tx = tx.clone();
            debouncer.schedule(move || tx.send(n).unwrap());
        }
        assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), 4);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn cancel_drops_pending_task() {
        let debouncer = Debouncer::new(Duration::from_millis(50));
        let (tx, rx) = mpsc::channel();
        debouncer.schedule(move || tx.send(()).unwrap());
        debouncer.cancel();
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }
}
