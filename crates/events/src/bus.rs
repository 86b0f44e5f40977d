//! Notice feed: how the storefront core hands discrete, user-visible outcomes
//! ("added to cart", "stock exceeded", "order placed") to whatever renders them.
//!
//! Every subscriber gets its own copy of each message, in publish order.
//! Nothing is retained: a subscriber sees only what is published after it
//! subscribed.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Receiving end of a feed.
///
/// ```ignore
/// let feed = session.subscribe();
/// session.add_to_cart(ProductId::new(7));
/// for envelope in feed.drain() {
///     toast(envelope.payload());
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    inbox: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(inbox: Receiver<M>) -> Self {
        Self { inbox }
    }

    /// Next queued message, if any. Never blocks.
    pub fn poll(&self) -> Option<M> {
        self.inbox.try_recv().ok()
    }

    /// Wait up to `timeout` for the next message.
    ///
    /// `None` on timeout or once the publisher is gone.
    pub fn wait(&self, timeout: Duration) -> Option<M> {
        match self.inbox.recv_timeout(timeout) {
            Ok(message) => Some(message),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Everything queued right now, oldest first.
    pub fn drain(&self) -> Vec<M> {
        self.inbox.try_iter().collect()
    }
}

/// Publish side of a feed.
///
/// Publishing can fail (a poisoned lock, say); notices are informational, so
/// callers log the failure and keep going.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        B::publish(self, message)
    }

    fn subscribe(&self) -> Subscription<M> {
        B::subscribe(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn poll_and_wait_return_none_when_idle() {
        let (tx, rx) = mpsc::channel::<u8>();
        let feed = Subscription::new(rx);
        assert_eq!(feed.poll(), None);
        assert_eq!(feed.wait(Duration::from_millis(5)), None);

        tx.send(3).unwrap();
        assert_eq!(feed.wait(Duration::from_millis(5)), Some(3));
        drop(tx);
        assert_eq!(feed.wait(Duration::from_millis(5)), None);
    }
}
