/// Something a session wants the outside world to know about.
///
/// Payloads carry no timestamp; [`EventEnvelope`](crate::EventEnvelope) stamps
/// them when they are published.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name such as `"cart.item.added"`, stable across releases.
    fn event_type(&self) -> &'static str;

    /// Payload schema revision.
    fn version(&self) -> u32 {
        1
    }
}
