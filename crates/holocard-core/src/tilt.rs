//! Two-axis tilt signal and the raw-input mappings that feed it.

use serde::{Deserialize, Serialize};

/// Bound applied to each axis before shading
pub const TILT_LIMIT: f64 = 45.0;

/// Degrees of tilt a pointer at the viewport edge is treated as
pub const POINTER_TILT_RANGE: f64 = 30.0;

/// Raw tilt as last written by an input source.
///
/// Values are stored unclamped; [`TiltSignal::clamped`] bounds them when the
/// compositor reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltSignal {
    /// Front/back tilt (orientation `beta`, pointer vertical offset)
    pub pitch: f64,
    /// Left/right tilt (orientation `gamma`, pointer horizontal offset)
    pub roll: f64,
}

/// Tilt as consumed by the compositor: `x` follows roll, `y` follows pitch,
/// both within `[-TILT_LIMIT, TILT_LIMIT]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

/// Clamp one axis into `[-TILT_LIMIT, TILT_LIMIT]`. NaN collapses to 0.
pub fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-TILT_LIMIT, TILT_LIMIT)
    }
}

impl TiltSignal {
    pub fn new(pitch: f64, roll: f64) -> Self {
        Self { pitch, roll }
    }

    /// Signal from a device-orientation reading. Missing axes read as 0.
    pub fn from_orientation(beta: Option<f64>, gamma: Option<f64>) -> Self {
        Self {
            pitch: beta.unwrap_or(0.0),
            roll: gamma.unwrap_or(0.0),
        }
    }

    /// Signal from a pointer position within a viewport.
    ///
    /// The position is normalized to `-1..1` on each axis and scaled to
    /// `±POINTER_TILT_RANGE` degrees. Returns `None` for an empty viewport.
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let x = (client_x / width) * 2.0 - 1.0;
        let y = (client_y / height) * 2.0 - 1.0;
        Some(Self {
            pitch: y * POINTER_TILT_RANGE,
            roll: x * POINTER_TILT_RANGE,
        })
    }

    /// Bounded view of the signal for shading
    pub fn clamped(&self) -> Tilt {
        Tilt {
            x: clamp_axis(self.roll),
            y: clamp_axis(self.pitch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_at_center_is_level() {
        let signal = TiltSignal::from_pointer(400.0, 300.0, 800.0, 600.0).unwrap();
        assert_eq!(signal.roll, 0.0);
        assert_eq!(signal.pitch, 0.0);
    }

    #[test]
    fn test_pointer_at_origin() {
        let signal = TiltSignal::from_pointer(0.0, 0.0, 1024.0, 768.0).unwrap();
        assert_eq!(signal.roll, -30.0);
        assert_eq!(signal.pitch, -30.0);
    }

    #[test]
    fn test_pointer_in_empty_viewport() {
        assert!(TiltSignal::from_pointer(10.0, 10.0, 0.0, 600.0).is_none());
        assert!(TiltSignal::from_pointer(10.0, 10.0, 800.0, f64::NAN).is_none());
    }

    #[test]
    fn test_orientation_defaults_missing_axes() {
        let signal = TiltSignal::from_orientation(None, Some(12.5));
        assert_eq!(signal, TiltSignal::new(0.0, 12.5));
    }

    #[test]
    fn test_clamped_keeps_raw_signal() {
        let signal = TiltSignal::new(170.0, -80.0);
        let tilt = signal.clamped();
        assert_eq!(tilt, Tilt { x: -45.0, y: 45.0 });
        assert_eq!(signal.pitch, 170.0);
    }

    #[test]
    fn test_nan_axis_reads_as_level() {
        assert_eq!(clamp_axis(f64::NAN), 0.0);
    }
}
