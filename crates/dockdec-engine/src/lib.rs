//! Dockdec Engine
//!
//! The engine turns decoded dock hotkey events into capability changes:
//! - toggles the wifi pair (station + access point) and bluetooth with
//!   transitional-state guards
//! - toggles touchpad power through the native driver call
//! - steps display brightness and switches the brightness mode
//!
//! The platform is reached only through the injectable [`CapabilityQuery`]
//! and [`CapabilityControl`] ports, so tests and tools can substitute the
//! in-memory [`test_support::FakePlatform`].
//!
//! Dispatch is synchronous call-and-return: the owning input layer
//! serializes key delivery, so the engine holds no locks. No failure
//! escapes [`Engine::dispatch`]; every press resolves to a
//! [`DispatchResult`].

use std::sync::Arc;

mod brightness;
mod error;
mod ports;
mod radio;
pub mod test_support;

use dock_keycode::{HotKey, KeyAction, KeyEvent};
use tracing::{debug, warn};

pub use brightness::{MAXIMUM_BACKLIGHT, MINIMUM_BACKLIGHT};
pub use error::{Error, Result};
pub use ports::{BrightnessMode, CapabilityControl, CapabilityQuery, RadioState};
use radio::WifiPlan;

/// Outcome of dispatching one key event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchResult {
    /// The event mapped to a hotkey action and was handled.
    Caught,
    /// The event was not for this dispatcher; the caller should pass it on.
    Uncaught,
}

/// Dispatch facade: routes key events to capability toggles.
///
/// Construct one per device-control session via [`Engine::new`] and feed
/// it events through [`Engine::dispatch`]. The engine owns the cached
/// touchpad state for its lifetime; the platform exposes no touchpad
/// query, so this cache is the only source of truth for that capability.
pub struct Engine {
    /// Read-only platform probes.
    query: Arc<dyn CapabilityQuery>,
    /// Imperative platform setters.
    control: Arc<dyn CapabilityControl>,
    /// Cached touchpad power state; flipped once per accepted toggle.
    touchpad_enabled: bool,
    /// Whether automatic brightness exists on this device. Queried once at
    /// construction and fixed thereafter.
    automatic_available: bool,
}

impl Engine {
    /// Create a new engine over the given platform ports.
    ///
    /// The touchpad cache starts enabled, matching the hardware state at
    /// dock attach. Automatic-brightness availability is probed here and
    /// never re-checked.
    pub fn new(query: Arc<dyn CapabilityQuery>, control: Arc<dyn CapabilityControl>) -> Self {
        let automatic_available = query.automatic_brightness_available();
        Self {
            query,
            control,
            touchpad_enabled: true,
            automatic_available,
        }
    }

    /// Route one key event to zero-or-one capability action.
    ///
    /// Key releases and auto-repeats are filtered out so each physical
    /// press acts exactly once; both return [`DispatchResult::Uncaught`]
    /// with no side effects, as do unrecognized keys. Side effects only
    /// ever occur on the `Caught` path.
    pub fn dispatch(&mut self, event: &KeyEvent) -> DispatchResult {
        if event.action != KeyAction::Down || event.repeat_count != 0 {
            return DispatchResult::Uncaught;
        }

        match event.key {
            HotKey::ToggleWifi => self.toggle_wifi(),
            HotKey::ToggleBluetooth => self.toggle_bluetooth(),
            HotKey::ToggleTouchpad => self.toggle_touchpad(),
            HotKey::BrightnessDown => self.brightness_down(),
            HotKey::BrightnessUp => self.brightness_up(),
            HotKey::BrightnessAuto => self.brightness_auto(),
            HotKey::Screenshot => self.take_screenshot(),
            HotKey::Settings => self.launch_settings(),
            HotKey::Other => return DispatchResult::Uncaught,
        }

        DispatchResult::Caught
    }

    /// Cached touchpad power state.
    pub fn touchpad_enabled(&self) -> bool {
        self.touchpad_enabled
    }

    /// Toggle the wifi pair from a fresh state read.
    fn toggle_wifi(&self) {
        let station = self.query.station_state();
        let access_point = self.query.access_point_state();

        match radio::wifi_plan(station, access_point) {
            Some(WifiPlan::AllOff) => {
                debug!(?station, ?access_point, "wifi hotkey: disabling radios");
                self.control.set_station_enabled(false);
                self.control.set_access_point_enabled(false);
            }
            Some(WifiPlan::StationOn) => {
                debug!("wifi hotkey: enabling station");
                self.control.set_station_enabled(true);
            }
            None => {
                debug!(?station, ?access_point, "wifi hotkey: change in flight, dropped");
            }
        }
    }

    /// Toggle bluetooth from a fresh state read.
    fn toggle_bluetooth(&self) {
        let state = self.query.bluetooth_state();

        match radio::bluetooth_plan(state) {
            Some(enabled) => {
                debug!(?state, enabled, "bluetooth hotkey");
                self.control.set_bluetooth_enabled(enabled);
            }
            None => {
                debug!(?state, "bluetooth hotkey: change in flight, dropped");
            }
        }
    }

    /// Flip the cached touchpad state and push it to the driver.
    ///
    /// The cache flips before the native call and is not rolled back on
    /// failure, so cache and hardware can drift until a later toggle lands.
    /// Observed behavior of the shipped driver stack, kept as-is pending
    /// product review.
    fn toggle_touchpad(&mut self) {
        self.touchpad_enabled = !self.touchpad_enabled;
        debug!(enabled = self.touchpad_enabled, "setting touchpad");
        if !self.control.set_touchpad_enabled(self.touchpad_enabled) {
            warn!(
                enabled = self.touchpad_enabled,
                "touchpad driver rejected state change; cached state kept"
            );
        }
    }

    /// Step brightness down; forces manual mode first.
    fn brightness_down(&self) {
        self.control.set_brightness_mode(BrightnessMode::Manual);
        let current = self
            .query
            .brightness_value()
            .unwrap_or(brightness::MINIMUM_BACKLIGHT);
        self.apply_brightness(brightness::step_down(current));
    }

    /// Step brightness up; forces manual mode first.
    fn brightness_up(&self) {
        self.control.set_brightness_mode(BrightnessMode::Manual);
        let current = self
            .query
            .brightness_value()
            .unwrap_or(brightness::MAXIMUM_BACKLIGHT);
        self.apply_brightness(brightness::step_up(current));
    }

    /// Write a clamped brightness value to the backlight and mirror it
    /// into settings storage. The settings write is attempted even when
    /// the backlight write fails.
    fn apply_brightness(&self, value: i32) {
        if let Err(e) = self.control.set_backlight(value) {
            warn!(value, error = %e, "could not set backlight brightness");
        }
        self.control.set_brightness_setting(value);
    }

    /// Switch to automatic brightness, if the device supports it.
    fn brightness_auto(&self) {
        if !self.automatic_available {
            return;
        }
        self.control.set_brightness_mode(BrightnessMode::Automatic);
    }

    /// Screenshot hotkey stub; capture is not wired up.
    fn take_screenshot(&self) {
        // TODO: wire up screenshot capture once the platform exposes one.
        debug!("screenshot hotkey pressed; capture not implemented");
    }

    /// Launch the system settings screen, swallowing launch failures.
    fn launch_settings(&self) {
        if let Err(e) = self.control.launch_settings() {
            warn!(error = %e, "could not launch settings");
        }
    }
}
