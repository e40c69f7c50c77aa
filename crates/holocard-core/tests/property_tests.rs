//! Property-based tests for tilt clamping and the shading compositor
//!
//! Uses proptest to verify invariants that must hold for every input.

use holocard_core::shading::{compute_layers, Layer, ShadingLayers};
use holocard_core::tilt::{clamp_axis, TiltSignal, TILT_LIMIT};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Raw orientation-like readings, well beyond the clamp range
fn raw_axis_strategy() -> impl Strategy<Value = f64> {
    -360.0f64..360.0
}

/// Values already inside the clamp range
fn clamped_axis_strategy() -> impl Strategy<Value = f64> {
    -TILT_LIMIT..=TILT_LIMIT
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Whatever the sensor reports, the compositor sees [-45, 45]
    #[test]
    fn clamped_tilt_is_bounded(pitch in raw_axis_strategy(), roll in raw_axis_strategy()) {
        let tilt = TiltSignal::new(pitch, roll).clamped();
        prop_assert!((-TILT_LIMIT..=TILT_LIMIT).contains(&tilt.x));
        prop_assert!((-TILT_LIMIT..=TILT_LIMIT).contains(&tilt.y));
    }

    /// In-range values pass through clamping untouched
    #[test]
    fn clamp_is_identity_in_range(value in clamped_axis_strategy()) {
        prop_assert_eq!(clamp_axis(value), value);
    }

    /// Same tilt, same layers: no hidden state between calls
    #[test]
    fn compute_layers_is_deterministic(x in clamped_axis_strategy(), y in clamped_axis_strategy()) {
        let first = compute_layers(x, y);
        let _other = compute_layers(y, x);
        let second = compute_layers(x, y);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.styles(), second.styles());
    }

    /// Raw signals composite exactly like their clamped values
    #[test]
    fn from_signal_matches_clamped(pitch in raw_axis_strategy(), roll in raw_axis_strategy()) {
        let signal = TiltSignal::new(pitch, roll);
        let tilt = signal.clamped();
        prop_assert_eq!(ShadingLayers::from_signal(signal), compute_layers(tilt.x, tilt.y));
    }

    /// Angle formulas hold for every in-range tilt
    #[test]
    fn layer_angles_follow_tilt(x in clamped_axis_strategy(), y in clamped_axis_strategy()) {
        let layers = compute_layers(x, y);
        prop_assert_eq!(layers.border.angle, 45.0 + x * 2.0);
        prop_assert_eq!(layers.prism.angle, 60.0 + x * 3.0);
        prop_assert_eq!(layers.shine.angle, 135.0 + x * 4.0);
        prop_assert_eq!(layers.conic.from, x * 6.0);
        prop_assert_eq!(layers.conic.center, (50.0 + x / 4.0, 50.0 + y / 4.0));
        prop_assert_eq!(layers.border.position, (50.0 + x, 50.0 + y));
    }

    /// Pointer positions inside the viewport stay within ±30 degrees
    #[test]
    fn pointer_tilt_is_bounded(fx in 0.0f64..=1.0, fy in 0.0f64..=1.0, w in 1.0f64..4000.0, h in 1.0f64..4000.0) {
        let signal = TiltSignal::from_pointer(fx * w, fy * h, w, h).unwrap();
        prop_assert!(signal.roll.abs() <= 30.0 + 1e-9);
        prop_assert!(signal.pitch.abs() <= 30.0 + 1e-9);
    }
}

// ============================================================================
// Fixed-point checks
// ============================================================================

#[test]
fn level_styles_match_base_css() {
    let layers = ShadingLayers::default();
    assert!(layers.prism.background_image().starts_with(
        "linear-gradient(60deg, transparent 10%, rgba(255, 0, 150, 0.4) 25%"
    ));
    assert_eq!(
        layers.shine.background_image(),
        "linear-gradient(135deg, transparent 20%, rgba(255, 255, 255, 0.6) 40%, \
         rgba(255, 200, 100, 0.4) 50%, rgba(255, 255, 255, 0.6) 60%, transparent 80%)"
    );
}

#[test]
fn extreme_signal_saturates() {
    let layers = ShadingLayers::from_raw(1e9, -1e9);
    assert_eq!(layers, compute_layers(45.0, -45.0));
}
