//! In-process notice feed.
//!
//! A storefront session owns one of these and publishes every toast-worthy
//! outcome into it as an `EventEnvelope<Notice>`. The presentation layer
//! subscribes once and drains after each interaction, so toasts render in the
//! order the session raised them. Several views (a toast strip and an audit
//! log, say) can subscribe side by side.

use std::sync::{Mutex, mpsc};

use crate::bus::{EventBus, Subscription};

#[derive(Debug)]
pub enum InMemoryBusError {
    /// The subscriber list lock was poisoned by a panicking publisher.
    Poisoned,
}

/// Fan-out feed over `std::sync::mpsc` channels.
///
/// Publishing never blocks the session: each subscriber has an unbounded
/// inbox, and a subscription whose receiver has been dropped (a closed view)
/// is forgotten on the next publish.
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    senders: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Views still attached as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        match self.senders.lock() {
            Ok(senders) => senders.len(),
            Err(_) => 0,
        }
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut senders = self.senders.lock().map_err(|_| InMemoryBusError::Poisoned)?;
        senders.retain(|sender| sender.send(message.clone()).is_ok());
        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (sender, inbox) = mpsc::channel();
        match self.senders.lock() {
            Ok(mut senders) => senders.push(sender),
            Err(_) => tracing::warn!("notice bus lock poisoned; subscription will stay silent"),
        }
        Subscription::new(inbox)
    }
}
