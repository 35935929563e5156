//! dock-keycode: Logical hotkeys reported by the keyboard dock.
//!
//! - [`HotKey`]: Enum of the dock's hardware function keys, mapped from the
//!   decoded input codes the dock driver reports.
//! - [`KeyAction`] and [`KeyEvent`]: the per-press event delivered to the
//!   dispatcher, including the auto-repeat count.
//! - Spec helpers: [`HotKey::from_spec`] and [`HotKey::to_spec`] for
//!   human-readable key names used by tools.
//!
//! The raw codes are the already-decoded values from the embedded
//! controller's input driver; nothing here speaks the EC wire protocol.

mod event;
mod key;
mod spec;

pub use event::{KeyAction, KeyEvent};
pub use key::HotKey;
