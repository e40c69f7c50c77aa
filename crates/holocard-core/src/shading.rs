//! Holographic shading compositor.
//!
//! Maps a clamped tilt `(x, y)` to the five overlay layers stacked above the
//! card artwork. Everything here is a closed-form function of the two tilt
//! values: no state, no side effects, identical inputs give identical output.
//!
//! ## Layer stack (bottom to top)
//!
//! | layer | driven by |
//! |-------|-----------|
//! | border gradient | angle `45 + 2x`, hue shifts `±2x`/`±2y`, position `50+x`, `50+y` |
//! | sparkle field | eight points nudged by `0..2×` of `x`/`y` |
//! | prismatic sweep | angle `60 + 3x` |
//! | shine band | angle `135 + 4x` |
//! | conic wash | rotation `6x`, centre offset `x/4`, `y/4` |

use std::fmt;

use serde::Serialize;

use crate::tilt::{clamp_axis, TiltSignal};

/// Format a number for CSS, folding negative zero into `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// RGB colour with alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Rgba {
    Rgba { r, g, b, a }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, Num(self.a))
    }
}

/// HSL colour; saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            Num(self.hue),
            self.saturation,
            self.lightness
        )
    }
}

/// Fill of a gradient stop
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Paint {
    Transparent,
    Color(Rgba),
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Transparent => write!(f, "transparent"),
            Paint::Color(c) => write!(f, "{}", c),
        }
    }
}

/// Gradient stop at a percentage (linear/radial) or degree (conic) offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub paint: Paint,
    pub at: f64,
}

const fn stop(paint: Paint, at: f64) -> ColorStop {
    ColorStop { paint, at }
}

const fn clear(at: f64) -> ColorStop {
    stop(Paint::Transparent, at)
}

const fn tint(r: u8, g: u8, b: u8, a: f64, at: f64) -> ColorStop {
    stop(Paint::Color(rgba(r, g, b, a)), at)
}

fn join_stops(stops: &[ColorStop], unit: &str) -> String {
    stops
        .iter()
        .map(|s| format!("{} {}{}", s.paint, Num(s.at), unit))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Opacity of a mask stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaskTone {
    Clear,
    Opaque,
}

/// Centred radial alpha mask
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadialMask {
    pub stops: [(MaskTone, f64); 3],
}

impl RadialMask {
    /// Whether the last stop reached at `radius` percent is opaque.
    pub fn is_opaque_at(&self, radius: f64) -> bool {
        let mut tone = self.stops[0].0;
        for (t, at) in self.stops {
            if radius >= at {
                tone = t;
            }
        }
        tone == MaskTone::Opaque
    }
}

impl fmt::Display for RadialMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stops = self
            .stops
            .iter()
            .map(|(tone, at)| {
                let tone = match tone {
                    MaskTone::Clear => "transparent",
                    MaskTone::Opaque => "black",
                };
                format!("{} {}%", tone, Num(*at))
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "radial-gradient(circle at center, {})", stops)
    }
}

/// Annular band: hidden inside 85%, opaque from 88% to the edge
pub const BORDER_MASK: RadialMask = RadialMask {
    stops: [
        (MaskTone::Clear, 85.0),
        (MaskTone::Opaque, 88.0),
        (MaskTone::Opaque, 100.0),
    ],
};

/// Disk: opaque to 70%, fully faded by 85%
pub const DISK_MASK: RadialMask = RadialMask {
    stops: [
        (MaskTone::Opaque, 0.0),
        (MaskTone::Opaque, 70.0),
        (MaskTone::Clear, 85.0),
    ],
};

/// A single overlay in the stack.
pub trait Layer {
    /// Stable identifier, also used as the overlay's CSS modifier class
    fn name(&self) -> &'static str;

    /// Value of the `background-image` property
    fn background_image(&self) -> String;

    /// Layer opacity
    fn opacity(&self) -> f64;

    /// Declarations beyond image and opacity (size, position, mask)
    fn extra_declarations(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Complete inline style. Overlays never intercept pointer input.
    fn to_style(&self) -> String {
        let mut style = format!(
            "background-image: {}; opacity: {}; pointer-events: none;",
            self.background_image(),
            Num(self.opacity())
        );
        for (property, value) in self.extra_declarations() {
            style.push_str(&format!(" {}: {};", property, value));
        }
        style
    }
}

// ============================================================================
// Border gradient
// ============================================================================

/// Which tilt axis shifts a hue, and in which direction
#[derive(Debug, Clone, Copy)]
enum HueShift {
    PlusY,
    MinusY,
    PlusX,
    MinusX,
}

/// (base hue, shift, lightness) per border stop
const BORDER_HUES: [(f64, HueShift, u8); 5] = [
    (280.0, HueShift::PlusY, 60),
    (200.0, HueShift::MinusY, 50),
    (120.0, HueShift::PlusX, 60),
    (60.0, HueShift::MinusX, 55),
    (320.0, HueShift::PlusY, 65),
];

/// Rainbow rim visible only in the outer band of the card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderGradient {
    pub angle: f64,
    pub stops: [Hsl; 5],
    /// Background position in percent (horizontal, vertical)
    pub position: (f64, f64),
    pub mask: RadialMask,
    pub opacity: f64,
}

impl BorderGradient {
    pub fn compute(x: f64, y: f64) -> Self {
        let stops = BORDER_HUES.map(|(base, shift, lightness)| {
            let hue = match shift {
                HueShift::PlusY => base + y * 2.0,
                HueShift::MinusY => base - y * 2.0,
                HueShift::PlusX => base + x * 2.0,
                HueShift::MinusX => base - x * 2.0,
            };
            Hsl {
                hue,
                saturation: 100,
                lightness,
            }
        });

        Self {
            angle: 45.0 + x * 2.0,
            stops,
            position: (50.0 + x, 50.0 + y),
            mask: BORDER_MASK,
            opacity: 0.8,
        }
    }
}

impl Layer for BorderGradient {
    fn name(&self) -> &'static str {
        "border"
    }

    fn background_image(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({}deg, {})", Num(self.angle), stops)
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn extra_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("background-size", "400% 400%".to_string()),
            (
                "background-position",
                format!("{}% {}%", Num(self.position.0), Num(self.position.1)),
            ),
            ("mask", self.mask.to_string()),
            ("-webkit-mask", self.mask.to_string()),
        ]
    }
}

// ============================================================================
// Sparkle field
// ============================================================================

struct SparkleSeed {
    base: (f64, f64),
    gain: (f64, f64),
    color: Rgba,
    tile: u32,
}

const SPARKLE_SEEDS: [SparkleSeed; 8] = [
    SparkleSeed { base: (25.0, 15.0), gain: (2.0, 2.0), color: rgba(255, 215, 0, 0.8), tile: 15 },
    SparkleSeed { base: (75.0, 85.0), gain: (-2.0, -2.0), color: rgba(0, 255, 255, 0.7), tile: 20 },
    SparkleSeed { base: (45.0, 35.0), gain: (1.0, 1.0), color: rgba(255, 105, 180, 0.6), tile: 25 },
    SparkleSeed { base: (15.0, 65.0), gain: (-1.0, 2.0), color: rgba(50, 205, 50, 0.7), tile: 30 },
    SparkleSeed { base: (85.0, 25.0), gain: (2.0, -1.0), color: rgba(255, 69, 0, 0.8), tile: 18 },
    SparkleSeed { base: (35.0, 75.0), gain: (-1.0, 1.0), color: rgba(138, 43, 226, 0.6), tile: 22 },
    SparkleSeed { base: (60.0, 45.0), gain: (1.0, -1.0), color: rgba(255, 20, 147, 0.7), tile: 28 },
    SparkleSeed { base: (20.0, 80.0), gain: (-1.0, 1.0), color: rgba(0, 191, 255, 0.6), tile: 35 },
];

/// Sparkle core radius in px
pub const SPARKLE_CORE: u32 = 1;
/// Radius in px at which a sparkle has faded out
pub const SPARKLE_FADE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SparklePoint {
    /// Centre in percent of the tile
    pub x: f64,
    pub y: f64,
    pub color: Rgba,
    /// Square tile edge in px
    pub tile: u32,
}

/// Eight tiled pin-point highlights drifting with the tilt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparkleField {
    pub points: [SparklePoint; 8],
    pub opacity: f64,
}

impl SparkleField {
    pub fn compute(x: f64, y: f64) -> Self {
        let points = SPARKLE_SEEDS.map(|seed| SparklePoint {
            x: seed.base.0 + seed.gain.0 * x,
            y: seed.base.1 + seed.gain.1 * y,
            color: seed.color,
            tile: seed.tile,
        });
        Self {
            points,
            opacity: 0.6,
        }
    }
}

impl Layer for SparkleField {
    fn name(&self) -> &'static str {
        "sparkle"
    }

    fn background_image(&self) -> String {
        self.points
            .iter()
            .map(|p| {
                format!(
                    "radial-gradient(circle at {}% {}%, {} {}px, transparent {}px)",
                    Num(p.x),
                    Num(p.y),
                    p.color,
                    SPARKLE_CORE,
                    SPARKLE_FADE
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn extra_declarations(&self) -> Vec<(&'static str, String)> {
        let sizes = self
            .points
            .iter()
            .map(|p| format!("{0}px {0}px", p.tile))
            .collect::<Vec<_>>()
            .join(", ");
        vec![("background-size", sizes)]
    }
}

// ============================================================================
// Prismatic sweep and shine band
// ============================================================================

const PRISM_STOPS: [ColorStop; 8] = [
    clear(10.0),
    tint(255, 0, 150, 0.4, 25.0),
    tint(0, 255, 255, 0.4, 35.0),
    tint(255, 255, 0, 0.4, 45.0),
    tint(150, 0, 255, 0.4, 55.0),
    tint(255, 100, 0, 0.4, 65.0),
    tint(0, 255, 150, 0.4, 75.0),
    clear(90.0),
];

const SHINE_STOPS: [ColorStop; 5] = [
    clear(20.0),
    tint(255, 255, 255, 0.6, 40.0),
    tint(255, 200, 100, 0.4, 50.0),
    tint(255, 255, 255, 0.6, 60.0),
    clear(80.0),
];

/// Diagonal rainbow sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrismaticSweep {
    pub angle: f64,
    pub stops: [ColorStop; 8],
    pub opacity: f64,
}

impl PrismaticSweep {
    pub fn compute(x: f64) -> Self {
        Self {
            angle: 60.0 + x * 3.0,
            stops: PRISM_STOPS,
            opacity: 0.4,
        }
    }
}

impl Layer for PrismaticSweep {
    fn name(&self) -> &'static str {
        "prism"
    }

    fn background_image(&self) -> String {
        format!(
            "linear-gradient({}deg, {})",
            Num(self.angle),
            join_stops(&self.stops, "%")
        )
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }
}

/// White/warm specular band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShineBand {
    pub angle: f64,
    pub stops: [ColorStop; 5],
    pub opacity: f64,
}

impl ShineBand {
    pub fn compute(x: f64) -> Self {
        Self {
            angle: 135.0 + x * 4.0,
            stops: SHINE_STOPS,
            opacity: 0.5,
        }
    }
}

impl Layer for ShineBand {
    fn name(&self) -> &'static str {
        "shine"
    }

    fn background_image(&self) -> String {
        format!(
            "linear-gradient({}deg, {})",
            Num(self.angle),
            join_stops(&self.stops, "%")
        )
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }
}

// ============================================================================
// Conic wash
// ============================================================================

const CONIC_STOPS: [ColorStop; 9] = [
    clear(0.0),
    tint(255, 0, 150, 0.5, 45.0),
    tint(0, 255, 255, 0.5, 90.0),
    tint(255, 255, 0, 0.5, 135.0),
    tint(255, 100, 0, 0.5, 180.0),
    tint(150, 0, 255, 0.5, 225.0),
    tint(0, 255, 100, 0.5, 270.0),
    tint(255, 0, 150, 0.5, 315.0),
    clear(360.0),
];

/// Rotating colour wheel confined to a central disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConicWash {
    /// Rotation of the conic origin in degrees
    pub from: f64,
    /// Centre in percent (horizontal, vertical)
    pub center: (f64, f64),
    /// Offsets in degrees
    pub stops: [ColorStop; 9],
    pub mask: RadialMask,
    pub opacity: f64,
}

impl ConicWash {
    pub fn compute(x: f64, y: f64) -> Self {
        Self {
            from: x * 6.0,
            center: (50.0 + x / 4.0, 50.0 + y / 4.0),
            stops: CONIC_STOPS,
            mask: DISK_MASK,
            opacity: 0.3,
        }
    }
}

impl Layer for ConicWash {
    fn name(&self) -> &'static str {
        "conic"
    }

    fn background_image(&self) -> String {
        format!(
            "conic-gradient(from {}deg at {}% {}%, {})",
            Num(self.from),
            Num(self.center.0),
            Num(self.center.1),
            join_stops(&self.stops, "deg")
        )
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn extra_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("mask", self.mask.to_string()),
            ("-webkit-mask", self.mask.to_string()),
        ]
    }
}

// ============================================================================
// Stack
// ============================================================================

/// The five overlays for one tilt value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadingLayers {
    pub border: BorderGradient,
    pub sparkle: SparkleField,
    pub prism: PrismaticSweep,
    pub shine: ShineBand,
    pub conic: ConicWash,
}

/// Compute all layers for an already-clamped tilt.
///
/// `tilt_x` follows roll and `tilt_y` follows pitch. Callers holding a raw
/// [`TiltSignal`] should use [`ShadingLayers::from_signal`], which clamps.
pub fn compute_layers(tilt_x: f64, tilt_y: f64) -> ShadingLayers {
    ShadingLayers {
        border: BorderGradient::compute(tilt_x, tilt_y),
        sparkle: SparkleField::compute(tilt_x, tilt_y),
        prism: PrismaticSweep::compute(tilt_x),
        shine: ShineBand::compute(tilt_x),
        conic: ConicWash::compute(tilt_x, tilt_y),
    }
}

impl ShadingLayers {
    /// Clamp a raw signal and compute its layers
    pub fn from_signal(signal: TiltSignal) -> Self {
        let tilt = signal.clamped();
        compute_layers(tilt.x, tilt.y)
    }

    /// Clamp arbitrary axis values and compute layers
    pub fn from_raw(tilt_x: f64, tilt_y: f64) -> Self {
        compute_layers(clamp_axis(tilt_x), clamp_axis(tilt_y))
    }

    /// Layers in paint order, bottom first
    pub fn stack(&self) -> [&dyn Layer; 5] {
        [
            &self.border,
            &self.sparkle,
            &self.prism,
            &self.shine,
            &self.conic,
        ]
    }

    /// `(name, inline style)` per layer in paint order
    pub fn styles(&self) -> Vec<(&'static str, String)> {
        self.stack()
            .iter()
            .map(|layer| (layer.name(), layer.to_style()))
            .collect()
    }
}

impl Default for ShadingLayers {
    fn default() -> Self {
        compute_layers(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tilt_uses_base_values() {
        let layers = compute_layers(0.0, 0.0);

        assert_eq!(layers.border.angle, 45.0);
        assert_eq!(layers.border.position, (50.0, 50.0));
        let hues: Vec<f64> = layers.border.stops.iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![280.0, 200.0, 120.0, 60.0, 320.0]);

        let bases: Vec<(f64, f64)> = layers.sparkle.points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            bases,
            vec![
                (25.0, 15.0),
                (75.0, 85.0),
                (45.0, 35.0),
                (15.0, 65.0),
                (85.0, 25.0),
                (35.0, 75.0),
                (60.0, 45.0),
                (20.0, 80.0),
            ]
        );

        assert_eq!(layers.prism.angle, 60.0);
        assert_eq!(layers.shine.angle, 135.0);
        assert_eq!(layers.conic.from, 0.0);
        assert_eq!(layers.conic.center, (50.0, 50.0));
    }

    #[test]
    fn test_tilted_coefficients() {
        let layers = compute_layers(10.0, -5.0);

        assert_eq!(layers.border.angle, 65.0);
        let hues: Vec<f64> = layers.border.stops.iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![270.0, 210.0, 140.0, 40.0, 310.0]);
        assert_eq!(layers.border.position, (60.0, 45.0));

        assert_eq!((layers.sparkle.points[0].x, layers.sparkle.points[0].y), (45.0, 5.0));
        assert_eq!((layers.sparkle.points[3].x, layers.sparkle.points[3].y), (5.0, 55.0));
        assert_eq!((layers.sparkle.points[4].x, layers.sparkle.points[4].y), (105.0, 30.0));

        assert_eq!(layers.prism.angle, 90.0);
        assert_eq!(layers.shine.angle, 175.0);
        assert_eq!(layers.conic.from, 60.0);
        assert_eq!(layers.conic.center, (52.5, 48.75));
    }

    #[test]
    fn test_border_css() {
        let border = BorderGradient::compute(0.0, 0.0);
        assert_eq!(
            border.background_image(),
            "linear-gradient(45deg, hsl(280, 100%, 60%), hsl(200, 100%, 50%), \
             hsl(120, 100%, 60%), hsl(60, 100%, 55%), hsl(320, 100%, 65%))"
        );
        let style = border.to_style();
        assert!(style.contains("background-size: 400% 400%;"));
        assert!(style.contains("background-position: 50% 50%;"));
        assert!(style.contains(
            "-webkit-mask: radial-gradient(circle at center, transparent 85%, black 88%, black 100%);"
        ));
        assert!(style.contains("opacity: 0.8;"));
    }

    #[test]
    fn test_sparkle_css() {
        let field = SparkleField::compute(0.0, 0.0);
        let image = field.background_image();
        assert!(image.starts_with(
            "radial-gradient(circle at 25% 15%, rgba(255, 215, 0, 0.8) 1px, transparent 3px)"
        ));
        assert_eq!(image.matches("radial-gradient").count(), 8);
        assert!(field
            .to_style()
            .contains("background-size: 15px 15px, 20px 20px, 25px 25px, 30px 30px, 18px 18px, 22px 22px, 28px 28px, 35px 35px;"));
    }

    #[test]
    fn test_conic_css() {
        let conic = ConicWash::compute(-2.0, 4.0);
        let image = conic.background_image();
        assert!(image.starts_with("conic-gradient(from -12deg at 49.5% 51%, transparent 0deg, "));
        assert!(image.ends_with("rgba(255, 0, 150, 0.5) 315deg, transparent 360deg)"));
        assert!(conic
            .to_style()
            .contains("mask: radial-gradient(circle at center, black 0%, black 70%, transparent 85%);"));
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let conic = ConicWash::compute(-0.0, 0.0);
        assert!(conic.background_image().starts_with("conic-gradient(from 0deg at 50% 50%"));
    }

    #[test]
    fn test_masks() {
        assert!(!BORDER_MASK.is_opaque_at(0.0));
        assert!(!BORDER_MASK.is_opaque_at(84.0));
        assert!(BORDER_MASK.is_opaque_at(90.0));
        assert!(DISK_MASK.is_opaque_at(0.0));
        assert!(DISK_MASK.is_opaque_at(70.0));
        assert!(!DISK_MASK.is_opaque_at(90.0));
    }

    #[test]
    fn test_stack_order_and_pointer_transparency() {
        let layers = ShadingLayers::default();
        let names: Vec<&str> = layers.styles().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["border", "sparkle", "prism", "shine", "conic"]);
        assert!(layers
            .styles()
            .iter()
            .all(|(_, style)| style.contains("pointer-events: none;")));
    }

    #[test]
    fn test_from_signal_clamps() {
        let layers = ShadingLayers::from_signal(TiltSignal::new(-120.0, 90.0));
        assert_eq!(layers, compute_layers(45.0, -45.0));
        assert_eq!(layers.border.angle, 135.0);
    }
}
