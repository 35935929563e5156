use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for the engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for platform capability calls.
///
/// None of these cross the dispatch boundary; every variant is absorbed
/// with a documented default or logged and dropped.
#[derive(Debug, Error)]
pub enum Error {
    /// The brightness setting has never been written and cannot be read.
    #[error("brightness setting has no stored value")]
    SettingUnread,

    /// The low-level backlight write was rejected.
    #[error("backlight write failed: {0}")]
    Backlight(String),

    /// The settings screen could not be launched.
    #[error("settings screen unavailable: {0}")]
    SettingsLaunch(String),
}
