use crate::HotKey;

/// Key transition direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAction {
    /// Key was pressed.
    Down,
    /// Key was released.
    Up,
}

/// A single key transition delivered by the input layer.
///
/// Supplied per dispatch call and not retained by the dispatcher. The
/// repeat count is the driver's auto-repeat counter: 0 for the initial
/// press, incrementing for each synthetic repeat while held.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    /// The logical hotkey.
    pub key: HotKey,
    /// Press or release.
    pub action: KeyAction,
    /// Auto-repeat counter; 0 for a fresh press.
    pub repeat_count: u32,
}

impl KeyEvent {
    /// A fresh key press.
    pub fn down(key: HotKey) -> Self {
        Self {
            key,
            action: KeyAction::Down,
            repeat_count: 0,
        }
    }

    /// A key release.
    pub fn up(key: HotKey) -> Self {
        Self {
            key,
            action: KeyAction::Up,
            repeat_count: 0,
        }
    }

    /// An auto-repeat press with the given repeat counter.
    pub fn repeat(key: HotKey, count: u32) -> Self {
        Self {
            key,
            action: KeyAction::Down,
            repeat_count: count,
        }
    }
}
