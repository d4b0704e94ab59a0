//! Ready-made observers.

use crossbeam_channel::{Receiver, Sender};
use vita_core::{Notification, Observer};

/// Forwards every notification into a channel, for presentation layers
/// that run their own event loop and poll for frames.
///
/// Notifications are dropped silently once the receiver is gone.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: Sender<Notification>,
}

impl ChannelObserver {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<Notification>) -> Self {
        Self { tx }
    }

    /// An observer paired with the unbounded receiver it feeds.
    pub fn pair() -> (Self, Receiver<Notification>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }
}

impl Observer for ChannelObserver {
    fn notify(&self, notification: &Notification) {
        let _ = self.tx.send(notification.clone());
    }
}
