use crate::RadioState;

/// Control calls to issue for one wifi hotkey press.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WifiPlan {
    /// Disable both station and access point.
    AllOff,
    /// Enable the station radio only.
    StationOn,
}

/// Decide the wifi transition from a fresh (station, access point) pair.
///
/// A transitional state on either radio always wins: the press is dropped
/// rather than racing the in-flight change, and the settled state is acted
/// on at the next press. When anything is on, a single press lands on
/// fully-off; a partial state is never produced. The access point is never
/// auto-enabled by this key.
pub(crate) fn wifi_plan(station: RadioState, access_point: RadioState) -> Option<WifiPlan> {
    if station.is_transitional() || access_point.is_transitional() {
        return None;
    }
    if station == RadioState::Enabled || access_point == RadioState::Enabled {
        return Some(WifiPlan::AllOff);
    }
    if station == RadioState::Disabled && access_point == RadioState::Disabled {
        return Some(WifiPlan::StationOn);
    }
    None
}

/// Decide the bluetooth transition: `Some(enabled)` for the setter call,
/// `None` to drop the press while a change is in flight.
pub(crate) fn bluetooth_plan(state: RadioState) -> Option<bool> {
    match state {
        RadioState::Disabled => Some(true),
        RadioState::Enabled => Some(false),
        RadioState::Enabling | RadioState::Disabling => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadioState::{Disabled, Disabling, Enabled, Enabling};

    #[test]
    fn wifi_both_off_enables_station_only() {
        assert_eq!(wifi_plan(Disabled, Disabled), Some(WifiPlan::StationOn));
    }

    #[test]
    fn wifi_anything_on_disables_everything() {
        assert_eq!(wifi_plan(Enabled, Disabled), Some(WifiPlan::AllOff));
        assert_eq!(wifi_plan(Disabled, Enabled), Some(WifiPlan::AllOff));
        assert_eq!(wifi_plan(Enabled, Enabled), Some(WifiPlan::AllOff));
    }

    #[test]
    fn wifi_transitional_always_wins() {
        for other in [Disabled, Enabling, Enabled, Disabling] {
            assert_eq!(wifi_plan(Enabling, other), None);
            assert_eq!(wifi_plan(Disabling, other), None);
            assert_eq!(wifi_plan(other, Enabling), None);
            assert_eq!(wifi_plan(other, Disabling), None);
        }
    }

    #[test]
    fn bluetooth_settled_states_flip() {
        assert_eq!(bluetooth_plan(Disabled), Some(true));
        assert_eq!(bluetooth_plan(Enabled), Some(false));
    }

    #[test]
    fn bluetooth_transitional_is_dropped() {
        assert_eq!(bluetooth_plan(Enabling), None);
        assert_eq!(bluetooth_plan(Disabling), None);
    }
}
