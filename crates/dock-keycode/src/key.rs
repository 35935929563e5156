/// Decoded input code for the wifi toggle key.
const CODE_TOGGLE_WIFI: u16 = 238;
/// Decoded input code for the bluetooth toggle key.
const CODE_TOGGLE_BLUETOOTH: u16 = 237;
/// Decoded input code for the touchpad toggle key.
const CODE_TOGGLE_TOUCHPAD: u16 = 530;
/// Decoded input code for the brightness-down key.
const CODE_BRIGHTNESS_DOWN: u16 = 224;
/// Decoded input code for the brightness-up key.
const CODE_BRIGHTNESS_UP: u16 = 225;
/// Decoded input code for the automatic-brightness key.
const CODE_BRIGHTNESS_AUTO: u16 = 244;
/// Decoded input code for the screenshot key.
const CODE_SCREENSHOT: u16 = 210;
/// Decoded input code for the settings key.
const CODE_SETTINGS: u16 = 171;

/// A logical hotkey on the dock's hardware function row.
///
/// Any input code outside the known set maps to [`HotKey::Other`]; the
/// dispatcher treats those as uncaught.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HotKey {
    /// Toggle the wifi radios (station and access point as a pair).
    ToggleWifi,
    /// Toggle the bluetooth radio.
    ToggleBluetooth,
    /// Toggle touchpad power.
    ToggleTouchpad,
    /// Step display brightness down.
    BrightnessDown,
    /// Step display brightness up.
    BrightnessUp,
    /// Switch to automatic brightness.
    BrightnessAuto,
    /// Capture a screenshot.
    Screenshot,
    /// Open the system settings screen.
    Settings,
    /// Any key the dock reports that is not a recognized hotkey.
    Other,
}

impl HotKey {
    /// Map a decoded input code to a hotkey. Unknown codes yield `Other`.
    pub fn from_code(code: u16) -> Self {
        match code {
            CODE_TOGGLE_WIFI => Self::ToggleWifi,
            CODE_TOGGLE_BLUETOOTH => Self::ToggleBluetooth,
            CODE_TOGGLE_TOUCHPAD => Self::ToggleTouchpad,
            CODE_BRIGHTNESS_DOWN => Self::BrightnessDown,
            CODE_BRIGHTNESS_UP => Self::BrightnessUp,
            CODE_BRIGHTNESS_AUTO => Self::BrightnessAuto,
            CODE_SCREENSHOT => Self::Screenshot,
            CODE_SETTINGS => Self::Settings,
            _ => Self::Other,
        }
    }

    /// The input code for this hotkey, if it has one (`Other` does not).
    pub fn code(self) -> Option<u16> {
        match self {
            Self::ToggleWifi => Some(CODE_TOGGLE_WIFI),
            Self::ToggleBluetooth => Some(CODE_TOGGLE_BLUETOOTH),
            Self::ToggleTouchpad => Some(CODE_TOGGLE_TOUCHPAD),
            Self::BrightnessDown => Some(CODE_BRIGHTNESS_DOWN),
            Self::BrightnessUp => Some(CODE_BRIGHTNESS_UP),
            Self::BrightnessAuto => Some(CODE_BRIGHTNESS_AUTO),
            Self::Screenshot => Some(CODE_SCREENSHOT),
            Self::Settings => Some(CODE_SETTINGS),
            Self::Other => None,
        }
    }
}
