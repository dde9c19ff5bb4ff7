//! The single choke point for reporting to the owning application.

use tracing::trace;

use crate::effect::ControllerEvent;

/// Receiver of controller events.
///
/// Implemented for any `FnMut(&ControllerEvent) + Send`, so a closure is
/// usually enough.
pub trait ChangeSink: Send {
    fn deliver(&mut self, event: &ControllerEvent);
}

impl<F> ChangeSink for F
where
    F: FnMut(&ControllerEvent) + Send,
{
    fn deliver(&mut self, event: &ControllerEvent) {
        self(event)
    }
}

/// Delivers every event to the sink, one call per event.
///
/// No batching and no deduplication: two equal configurations emitted by two
/// triggering events are delivered twice.
pub struct ChangeEmitter {
    sink: Box<dyn ChangeSink>,
    emitted: u64,
}

impl ChangeEmitter {
    pub fn new(sink: impl ChangeSink + 'static) -> Self {
        Self { sink: Box::new(sink), emitted: 0 }
    }

    pub fn emit(&mut self, event: &ControllerEvent) {
        self.emitted += 1;
        trace!(
            seq = self.emitted,
            leaf = ?event.leaf_id(),
            "emitting controller event"
        );
        self.sink.deliver(event);
    }

    /// Number of events delivered so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl std::fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEmitter").field("emitted", &self.emitted).finish()
    }
}
