// Host-side tests for the colour simulator state and its ink presets.

use ink_core::simulator::*;
use ink_core::{ColorError, Motion, Rgb};

#[test]
fn selecting_hex_syncs_every_control() {
    let mut sim = ColorSimulator::new();
    assert_eq!(sim.fill(), None);
    let sync = sim.select_hex("#00D0FF").expect("valid hex");
    assert_eq!(sync.hex, "#00d0ff");
    assert_eq!(sync.label, "#00D0FF");
    assert_eq!(sync.rgb, Rgb::new(0, 208, 255));
    assert_eq!(sim.fill().as_deref(), Some("#00d0ff"));
}

#[test]
fn hex_text_is_trimmed_and_prefixed() {
    let mut sim = ColorSimulator::new();
    let sync = sim.hex_input("  78ff00 ").expect("valid hex");
    assert_eq!(sync.hex, "#78ff00");
    assert_eq!(sim.hex_input("#FF7A00").map(|s| s.rgb), Ok(Rgb::new(255, 122, 0)));
}

#[test]
fn invalid_hex_leaves_colour_unchanged() {
    let mut sim = ColorSimulator::new();
    sim.select_hex("#ff2bbb").expect("valid hex");
    assert!(matches!(
        sim.hex_input("nope"),
        Err(ColorError::MalformedHex(_))
    ));
    assert!(sim.select_hex("#12").is_err());
    assert_eq!(sim.fill().as_deref(), Some("#ff2bbb"));
}

#[test]
fn rgb_inputs_recompose_hex() {
    let mut sim = ColorSimulator::new();
    let sync = sim
        .rgb_input(("255", ""), ("", "128"), ("0", "0"))
        .expect("valid channels");
    assert_eq!(sync.hex, "#ff8000");
    assert_eq!(sync.label, "#FF8000");
    assert_eq!(sim.fill().as_deref(), Some("#ff8000"));
}

#[test]
fn fill_follows_whichever_editor_changed_last() {
    let mut sim = ColorSimulator::new();
    sim.select_hex("#FF2BBB").expect("valid hex");
    assert_eq!(sim.fill().as_deref(), Some("#ff2bbb"));
    sim.hex_input("00d0ff").expect("valid hex");
    assert_eq!(sim.fill().as_deref(), Some("#00d0ff"));
    sim.rgb_input(("120", ""), ("255", ""), ("0", ""))
        .expect("valid channels");
    assert_eq!(sim.fill().as_deref(), Some("#78ff00"));
}

#[test]
fn bad_rgb_input_is_ignored() {
    let mut sim = ColorSimulator::new();
    sim.select_hex("#000000").expect("valid hex");
    assert!(sim.rgb_input(("x", ""), ("1", ""), ("2", "")).is_err());
    assert_eq!(sim.fill().as_deref(), Some("#000000"));
}

#[test]
fn ink_presets_per_control() {
    let swatch = swatch_burst("#abcdef");
    assert_eq!(swatch.color.as_deref(), Some("#abcdef"));
    assert_eq!(swatch.size_max, Some(28.0));
    assert_eq!(swatch.count, None);
    // no explicit count: swatches follow the motion preference
    assert_eq!(swatch.resolve(Motion::Reduced).count, 6);

    let input = color_input_burst("#abcdef");
    assert_eq!(input.count, Some(10));
    assert_eq!(input.size_max, Some(26.0));

    let palette = palette_burst("#abcdef");
    assert_eq!(palette.count, Some(10));
    assert_eq!(palette.size_max, Some(24.0));
    assert_eq!(palette.resolve(Motion::Reduced).count, 10);
}
