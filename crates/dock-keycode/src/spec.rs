use std::fmt;

use crate::HotKey;

impl HotKey {
    /// Parses a hotkey spec string such as "wifi" or "brightness-up".
    ///
    /// - Case-insensitive.
    /// - Accepts the canonical names emitted by [`HotKey::to_spec`] plus a
    ///   few shorthand aliases (e.g. "bt", "br-up").
    pub fn from_spec(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wifi" => Some(Self::ToggleWifi),
            "bluetooth" | "bt" => Some(Self::ToggleBluetooth),
            "touchpad" => Some(Self::ToggleTouchpad),
            "brightness-down" | "br-down" => Some(Self::BrightnessDown),
            "brightness-up" | "br-up" => Some(Self::BrightnessUp),
            "brightness-auto" | "br-auto" => Some(Self::BrightnessAuto),
            "screenshot" => Some(Self::Screenshot),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// Returns the canonical spec name for this hotkey.
    pub fn to_spec(self) -> &'static str {
        match self {
            Self::ToggleWifi => "wifi",
            Self::ToggleBluetooth => "bluetooth",
            Self::ToggleTouchpad => "touchpad",
            Self::BrightnessDown => "brightness-down",
            Self::BrightnessUp => "brightness-up",
            Self::BrightnessAuto => "brightness-auto",
            Self::Screenshot => "screenshot",
            Self::Settings => "settings",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_and_aliases() {
        assert_eq!(HotKey::from_spec("wifi"), Some(HotKey::ToggleWifi));
        assert_eq!(HotKey::from_spec("BT"), Some(HotKey::ToggleBluetooth));
        assert_eq!(HotKey::from_spec(" br-up "), Some(HotKey::BrightnessUp));
        assert_eq!(HotKey::from_spec("bogus"), None);
        // "other" is not parseable; it only exists as a mapping target.
        assert_eq!(HotKey::from_spec("other"), None);
    }

    #[test]
    fn spec_roundtrip() {
        for key in [
            HotKey::ToggleWifi,
            HotKey::ToggleBluetooth,
            HotKey::ToggleTouchpad,
            HotKey::BrightnessDown,
            HotKey::BrightnessUp,
            HotKey::BrightnessAuto,
            HotKey::Screenshot,
            HotKey::Settings,
        ] {
            assert_eq!(HotKey::from_spec(key.to_spec()), Some(key));
        }
    }
}
