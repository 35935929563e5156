/// Backlight value at which the panel is considered dimmed.
const BRIGHTNESS_DIM: i32 = 20;
/// Backlight value for full brightness.
const BRIGHTNESS_ON: i32 = 255;
/// Amount one hotkey press moves the backlight.
const BRIGHTNESS_STEP: i32 = 10;

/// Lowest value the hotkeys will set: the dim floor plus headroom so a
/// press never blanks the panel.
pub const MINIMUM_BACKLIGHT: i32 = BRIGHTNESS_DIM + 10;
/// Highest value the hotkeys will set.
pub const MAXIMUM_BACKLIGHT: i32 = BRIGHTNESS_ON;

/// Clamp a backlight value into the hotkey-adjustable range.
pub(crate) fn clamp(value: i32) -> i32 {
    value.clamp(MINIMUM_BACKLIGHT, MAXIMUM_BACKLIGHT)
}

/// One step down from `current`, clamped.
pub(crate) fn step_down(current: i32) -> i32 {
    clamp(current - BRIGHTNESS_STEP)
}

/// One step up from `current`, clamped.
pub(crate) fn step_up(current: i32) -> i32 {
    clamp(current + BRIGHTNESS_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_down_clamps_at_floor() {
        assert_eq!(step_down(MINIMUM_BACKLIGHT), MINIMUM_BACKLIGHT);
        assert_eq!(step_down(MINIMUM_BACKLIGHT + 5), MINIMUM_BACKLIGHT);
        assert_eq!(step_down(MINIMUM_BACKLIGHT + 15), MINIMUM_BACKLIGHT + 5);
    }

    #[test]
    fn step_up_clamps_at_ceiling() {
        assert_eq!(step_up(MAXIMUM_BACKLIGHT), MAXIMUM_BACKLIGHT);
        assert_eq!(step_up(MAXIMUM_BACKLIGHT - 4), MAXIMUM_BACKLIGHT);
        assert_eq!(step_up(100), 110);
    }

    #[test]
    fn out_of_range_inputs_are_pulled_in() {
        // Stored settings can hold values outside the hotkey range.
        assert_eq!(step_down(0), MINIMUM_BACKLIGHT);
        assert_eq!(step_up(1000), MAXIMUM_BACKLIGHT);
    }
}
