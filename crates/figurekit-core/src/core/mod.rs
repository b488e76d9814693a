//! Drawing notification model
//!
//! - [`event`]: the kinds of change a drawing announces
//! - [`listener`]: listener trait and the ordered registry a drawing owns

pub mod event;
pub mod listener;

pub use event::DrawingEvent;
pub use listener::{DrawingListener, DrawingListeners, ListenerHandle, SharedListener};
