//! Notification delivery on the `vita-notify` thread.

use std::sync::Arc;

use crossbeam_channel::Receiver;
use vita_core::{Notification, Observer};

/// Deliver notifications in arrival order until every sender is gone.
pub(crate) fn run(rx: Receiver<Notification>, observer: Arc<dyn Observer>) {
    let mut delivered: u64 = 0;
    for notification in rx {
        observer.notify(&notification);
        delivered += 1;
    }
    tracing::debug!(delivered, "notification dispatcher exited");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use vita_core::{Generation, Snapshot, StepStats, Trigger};

    fn notification(generation: u64) -> Notification {
        Notification {
            generation: Generation(generation),
            running: true,
            cells: Snapshot::dead(8, 8),
            trigger: Trigger::Tick,
            stats: StepStats::default(),
        }
    }

    #[test]
    fn delivers_in_order_then_exits_on_disconnect() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let observer: Arc<dyn Observer> = Arc::new(move |n: &Notification| {
            sink.lock().unwrap().push(n.generation.0);
        });

        let (tx, rx) = crossbeam_channel::unbounded();
        for g in 1..=5 {
            tx.send(notification(g)).unwrap();
        }
        drop(tx);
        run(rx, observer);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 4, 5]);
    }
}
