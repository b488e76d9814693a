//! Drawing listener interface
//!
//! Defines the listener trait for drawing events and the ordered registry
//! a drawing uses to fan them out.

use super::event::DrawingEvent;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Handle for a registered drawing listener.
///
/// Uniquely identifies a listener subscription. Can be used to unsubscribe
/// from drawing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(Uuid);

impl ListenerHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Listener trait for drawing events
///
/// Called synchronously on the mutating thread. A listener only sees the
/// event kind; it reacts by repainting or refreshing menu state, never by
/// mutating the drawing that notified it.
pub trait DrawingListener: Send + Sync {
    fn on_drawing_event(&self, event: &DrawingEvent);
}

impl<F> DrawingListener for F
where
    F: Fn(&DrawingEvent) + Send + Sync,
{
    fn on_drawing_event(&self, event: &DrawingEvent) {
        self(event)
    }
}

/// Shared, type-erased listener.
pub type SharedListener = Arc<dyn DrawingListener>;

/// Ordered listener registry.
///
/// Listeners are notified in registration order.
#[derive(Default, Clone)]
pub struct DrawingListeners {
    entries: Vec<(ListenerHandle, SharedListener)>,
}

impl DrawingListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return the handle that removes it.
    pub fn add(&mut self, listener: SharedListener) -> ListenerHandle {
        let handle = ListenerHandle::new();
        self.entries.push((handle, listener));
        tracing::debug!("Listener {} added", handle);
        handle
    }

    /// Returns true if the listener was found and removed.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(h, _)| *h != handle);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!("Listener {} removed", handle);
        }
        removed
    }

    pub fn notify(&self, event: DrawingEvent) {
        tracing::trace!("notify {} to {} listener(s)", event, self.entries.len());
        for (_, listener) in &self.entries {
            listener.on_drawing_event(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for DrawingListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingListeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
