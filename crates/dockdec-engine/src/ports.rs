use crate::Result;

// ---- Platform capability abstraction ----

/// Discrete state of a radio-class capability (wifi station, wifi access
/// point, bluetooth).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RadioState {
    /// Radio is off and settled.
    Disabled,
    /// Radio is turning on.
    Enabling,
    /// Radio is on and settled.
    Enabled,
    /// Radio is turning off.
    Disabling,
}

impl RadioState {
    /// True while a state change is still in flight.
    pub fn is_transitional(self) -> bool {
        matches!(self, Self::Enabling | Self::Disabling)
    }
}

/// Display brightness mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BrightnessMode {
    /// Brightness follows the stored value.
    Manual,
    /// Brightness follows the ambient light sensor.
    Automatic,
}

/// Read-only probes of platform capability state.
///
/// Radio states must be read fresh for every decision; the engine never
/// caches them. Object-safe so tests and tools can substitute an
/// in-memory fake.
pub trait CapabilityQuery: Send + Sync {
    /// Current state of the wifi station radio.
    fn station_state(&self) -> RadioState;
    /// Current state of the wifi access-point radio.
    fn access_point_state(&self) -> RadioState;
    /// Current state of the bluetooth radio.
    fn bluetooth_state(&self) -> RadioState;
    /// Stored brightness value, or [`crate::Error::SettingUnread`] if the
    /// setting was never written.
    fn brightness_value(&self) -> Result<i32>;
    /// Whether the platform supports automatic brightness. Consulted once,
    /// at engine construction.
    fn automatic_brightness_available(&self) -> bool;
}

/// Imperative platform capability setters.
///
/// The radio setters start an asynchronous platform transition and report
/// nothing back; the engine observes progress only through fresh
/// [`CapabilityQuery`] reads on later keypresses.
pub trait CapabilityControl: Send + Sync {
    /// Enable or disable the wifi station radio.
    fn set_station_enabled(&self, enabled: bool);
    /// Enable or disable the wifi access-point radio.
    fn set_access_point_enabled(&self, enabled: bool);
    /// Enable or disable the bluetooth radio.
    fn set_bluetooth_enabled(&self, enabled: bool);
    /// Write the low-level backlight power value. May fail.
    fn set_backlight(&self, value: i32) -> Result<()>;
    /// Mirror the brightness value into settings storage. Always succeeds.
    fn set_brightness_setting(&self, value: i32);
    /// Switch between manual and automatic brightness.
    fn set_brightness_mode(&self, mode: BrightnessMode);
    /// Native touchpad power call; returns whether the driver accepted it.
    fn set_touchpad_enabled(&self, enabled: bool) -> bool;
    /// Open the system settings screen.
    fn launch_settings(&self) -> Result<()>;
}
