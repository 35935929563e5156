//! In-memory fake platform for engine tests and tools.
//!
//! `FakePlatform` implements both capability ports over scripted state,
//! records every control call in order, and can inject the failures the
//! engine must absorb (backlight write, touchpad native call, missing
//! settings screen, unset brightness).

use parking_lot::Mutex;

use crate::{BrightnessMode, CapabilityControl, CapabilityQuery, Error, RadioState, Result};

/// One recorded capability-control invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlCall {
    /// `set_station_enabled`
    StationEnabled(bool),
    /// `set_access_point_enabled`
    AccessPointEnabled(bool),
    /// `set_bluetooth_enabled`
    BluetoothEnabled(bool),
    /// `set_backlight`
    Backlight(i32),
    /// `set_brightness_setting`
    BrightnessSetting(i32),
    /// `set_brightness_mode`
    BrightnessMode(BrightnessMode),
    /// `set_touchpad_enabled`
    TouchpadEnabled(bool),
    /// `launch_settings`
    LaunchSettings,
}

/// Mutable fake state behind one lock.
struct Inner {
    /// Wifi station radio state.
    station: RadioState,
    /// Wifi access-point radio state.
    access_point: RadioState,
    /// Bluetooth radio state.
    bluetooth: RadioState,
    /// Stored brightness value; `None` means never written.
    brightness: Option<i32>,
    /// Automatic-brightness capability flag reported at construction.
    automatic_available: bool,
    /// When true, `set_backlight` fails.
    backlight_fails: bool,
    /// When true, the touchpad native call reports rejection.
    touchpad_fails: bool,
    /// When true, `launch_settings` fails.
    settings_missing: bool,
    /// Ordered log of control calls.
    calls: Vec<ControlCall>,
}

/// Scripted in-memory platform implementing both capability ports.
///
/// Radio setters settle instantly: `set_station_enabled(true)` reads back
/// as `Enabled` on the next query. Use the radio state setters directly to
/// park a fake radio in a transitional state.
pub struct FakePlatform {
    /// Shared fake state.
    inner: Mutex<Inner>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePlatform {
    /// Everything disabled and settled, brightness unset, automatic
    /// brightness available, no injected failures.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                station: RadioState::Disabled,
                access_point: RadioState::Disabled,
                bluetooth: RadioState::Disabled,
                brightness: None,
                automatic_available: true,
                backlight_fails: false,
                touchpad_fails: false,
                settings_missing: false,
                calls: Vec::new(),
            }),
        }
    }

    /// Set the wifi station radio state.
    pub fn set_station(&self, state: RadioState) {
        self.inner.lock().station = state;
    }

    /// Set the wifi access-point radio state.
    pub fn set_access_point(&self, state: RadioState) {
        self.inner.lock().access_point = state;
    }

    /// Set the bluetooth radio state.
    pub fn set_bluetooth(&self, state: RadioState) {
        self.inner.lock().bluetooth = state;
    }

    /// Set or clear the stored brightness value.
    pub fn set_stored_brightness(&self, value: Option<i32>) {
        self.inner.lock().brightness = value;
    }

    /// Set the automatic-brightness capability flag. Only observed by
    /// engines constructed afterwards.
    pub fn set_automatic_available(&self, available: bool) {
        self.inner.lock().automatic_available = available;
    }

    /// Make `set_backlight` fail (or succeed again).
    pub fn fail_backlight(&self, fail: bool) {
        self.inner.lock().backlight_fails = fail;
    }

    /// Make the touchpad native call report rejection (or acceptance).
    pub fn fail_touchpad(&self, fail: bool) {
        self.inner.lock().touchpad_fails = fail;
    }

    /// Make `launch_settings` fail (or succeed again).
    pub fn fail_settings_launch(&self, fail: bool) {
        self.inner.lock().settings_missing = fail;
    }

    /// Snapshot of the ordered control-call log.
    pub fn calls(&self) -> Vec<ControlCall> {
        self.inner.lock().calls.clone()
    }

    /// Clear the control-call log.
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }
}

impl CapabilityQuery for FakePlatform {
    fn station_state(&self) -> RadioState {
        self.inner.lock().station
    }

    fn access_point_state(&self) -> RadioState {
        self.inner.lock().access_point
    }

    fn bluetooth_state(&self) -> RadioState {
        self.inner.lock().bluetooth
    }

    fn brightness_value(&self) -> Result<i32> {
        self.inner.lock().brightness.ok_or(Error::SettingUnread)
    }

    fn automatic_brightness_available(&self) -> bool {
        self.inner.lock().automatic_available
    }
}

impl CapabilityControl for FakePlatform {
    fn set_station_enabled(&self, enabled: bool) {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlCall::StationEnabled(enabled));
        inner.station = if enabled {
            RadioState::Enabled
        } else {
            RadioState::Disabled
        };
    }

    fn set_access_point_enabled(&self, enabled: bool) {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlCall::AccessPointEnabled(enabled));
        inner.access_point = if enabled {
            RadioState::Enabled
        } else {
            RadioState::Disabled
        };
    }

    fn set_bluetooth_enabled(&self, enabled: bool) {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlCall::BluetoothEnabled(enabled));
        inner.bluetooth = if enabled {
            RadioState::Enabled
        } else {
            RadioState::Disabled
        };
    }

    fn set_backlight(&self, value: i32) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlCall::Backlight(value));
        if inner.backlight_fails {
            return Err(Error::Backlight("injected failure".into()));
        }
        Ok(())
    }

    fn set_brightness_setting(&self, value: i32) {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlCall::BrightnessSetting(value));
        inner.brightness = Some(value);
    }

    fn set_brightness_mode(&self, mode: BrightnessMode) {
        self.inner.lock().calls.push(ControlCall::BrightnessMode(mode));
    }

    fn set_touchpad_enabled(&self, enabled: bool) -> bool {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlCall::TouchpadEnabled(enabled));
        !inner.touchpad_fails
    }

    fn launch_settings(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlCall::LaunchSettings);
        if inner.settings_missing {
            return Err(Error::SettingsLaunch("injected failure".into()));
        }
        Ok(())
    }
}
