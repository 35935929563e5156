//! Scripted driver for the dockdec engine.
//!
//! Dispatches a sequence of key events against the in-memory fake
//! platform and prints per-event results plus the control calls issued,
//! so toggle and clamping behavior can be inspected without hardware.

use std::sync::Arc;

use clap::Parser;
use dock_keycode::{HotKey, KeyEvent};
use dockdec_engine::{Engine, test_support::FakePlatform};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "dockdec-tester", about = "Dockdec dispatch tester", version)]
struct Cli {
    #[command(flatten)]
    logs: logging::LogArgs,

    /// Report automatic brightness as unavailable
    #[arg(long)]
    no_auto_brightness: bool,

    /// Make the native touchpad call report rejection
    #[arg(long)]
    fail_touchpad: bool,

    /// Make the low-level backlight write fail
    #[arg(long)]
    fail_backlight: bool,

    /// Initial stored brightness value (unset when omitted)
    #[arg(long)]
    brightness: Option<i32>,

    /// Events to dispatch, in order: a key name ("wifi", "bluetooth",
    /// "touchpad", "brightness-up", ...), optionally prefixed with "up:"
    /// for a release or "repeat:" for an auto-repeat press. Unknown key
    /// names dispatch as an unrecognized key.
    #[arg(required = true)]
    events: Vec<String>,
}

/// Parse one event spec from the command line.
fn parse_event(spec: &str) -> KeyEvent {
    let (prefix, name) = match spec.split_once(':') {
        Some((p, n)) => (Some(p), n),
        None => (None, spec),
    };
    let key = HotKey::from_spec(name).unwrap_or(HotKey::Other);
    match prefix {
        Some("up") => KeyEvent::up(key),
        Some("repeat") => KeyEvent::repeat(key, 1),
        _ => KeyEvent::down(key),
    }
}

fn main() {
    let cli = Cli::parse();

    let spec = cli.logs.spec();
    tracing_subscriber::registry()
        .with(logging::env_filter_from_spec(&spec))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let fake = Arc::new(FakePlatform::new());
    fake.set_automatic_available(!cli.no_auto_brightness);
    fake.fail_touchpad(cli.fail_touchpad);
    fake.fail_backlight(cli.fail_backlight);
    fake.set_stored_brightness(cli.brightness);

    let mut engine = Engine::new(fake.clone(), fake.clone());

    for spec in &cli.events {
        let event = parse_event(spec);
        let result = engine.dispatch(&event);
        println!("{:<24} -> {:?}", spec, result);
    }

    println!("\ncontrol calls:");
    for call in fake.calls() {
        println!("  {:?}", call);
    }
    println!("touchpad cache: {}", engine.touchpad_enabled());
}

#[cfg(test)]
mod tests {
    use dock_keycode::KeyAction;

    use super::*;

    #[test]
    fn event_spec_prefixes() {
        let down = parse_event("wifi");
        assert_eq!(down.key, HotKey::ToggleWifi);
        assert_eq!(down.action, KeyAction::Down);
        assert_eq!(down.repeat_count, 0);

        let up = parse_event("up:bt");
        assert_eq!(up.key, HotKey::ToggleBluetooth);
        assert_eq!(up.action, KeyAction::Up);

        let rep = parse_event("repeat:brightness-up");
        assert_eq!(rep.key, HotKey::BrightnessUp);
        assert_eq!(rep.repeat_count, 1);

        assert_eq!(parse_event("zzz").key, HotKey::Other);
    }
}
