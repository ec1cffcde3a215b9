//! Trigonometric functions with a degrees/radians mode.
//!
//! The mode lives in a [`TrigContext`] value owned by the caller. Forward
//! functions (`sin`, `cos`, ...) convert their argument into radians before
//! evaluating; inverse functions (`asin`, `acos`, ...) convert their radian
//! result back out. In [`AngleMode::Radians`] both conversions are the
//! identity.
//!
//! # Examples
//! ```
//! use u_mathkit::trig::{AngleMode, TrigContext};
//! let deg = TrigContext::default();
//! assert!((deg.sin(30.0) - 0.5).abs() < 1e-12);
//!
//! let rad = TrigContext::new(AngleMode::Radians);
//! assert!((rad.cos(std::f64::consts::PI) + 1.0).abs() < 1e-12);
//! ```

use std::str::FromStr;

use crate::error::MathError;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Unit in which angles are passed to and returned from a [`TrigContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }
}

impl FromStr for AngleMode {
    type Err = MathError;

    /// Accepts `deg`/`degrees` and `rad`/`radians`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleMode::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleMode::Radians),
            _ => Err(MathError::InvalidAngleMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AngleMode::Degrees => f.write_str("deg"),
            AngleMode::Radians => f.write_str("rad"),
        }
    }
}

/// Trigonometric evaluator bound to an [`AngleMode`].
///
/// Defaults to degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrigContext {
    mode: AngleMode,
}

impl TrigContext {
    /// Creates a context in the given mode.
    pub fn new(mode: AngleMode) -> Self {
        Self { mode }
    }

    /// A context that reads and returns angles in degrees.
    pub fn degrees() -> Self {
        Self::new(AngleMode::Degrees)
    }

    /// A context that reads and returns angles in radians.
    pub fn radians() -> Self {
        Self::new(AngleMode::Radians)
    }

    /// The current angle mode.
    pub fn mode(&self) -> AngleMode {
        self.mode
    }

    /// Switches to `mode`.
    pub fn set_mode(&mut self, mode: AngleMode) {
        self.mode = mode;
    }

    /// Flips between degrees and radians and returns the new mode.
    pub fn toggle(&mut self) -> AngleMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Converts an angle given in this context's unit into radians.
    #[inline]
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self.mode {
            AngleMode::Degrees => angle * DEG_TO_RAD,
            AngleMode::Radians => angle,
        }
    }

    /// Converts an angle in radians into this context's unit.
    #[inline]
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self.mode {
            AngleMode::Degrees => radians * RAD_TO_DEG,
            AngleMode::Radians => radians,
        }
    }

    /// Sine of an angle in this context's unit.
    pub fn sin(&self, x: f64) -> f64 {
        self.to_radians(x).sin()
    }

    /// Cosine of an angle in this context's unit.
    pub fn cos(&self, x: f64) -> f64 {
        self.to_radians(x).cos()
    }

    /// Tangent of an angle in this context's unit.
    pub fn tan(&self, x: f64) -> f64 {
        self.to_radians(x).tan()
    }

    /// Cosecant, `1 / sin(x)`. Infinite where `sin(x) == 0`.
    pub fn csc(&self, x: f64) -> f64 {
        1.0 / self.sin(x)
    }

    /// Secant, `1 / cos(x)`.
    pub fn sec(&self, x: f64) -> f64 {
        1.0 / self.cos(x)
    }

    /// Cotangent, `1 / tan(x)`.
    pub fn cot(&self, x: f64) -> f64 {
        1.0 / self.tan(x)
    }

    /// Arcsine. NaN outside `[-1, 1]`.
    pub fn asin(&self, x: f64) -> f64 {
        self.from_radians(x.asin())
    }

    /// Arccosine. NaN outside `[-1, 1]`.
    pub fn acos(&self, x: f64) -> f64 {
        self.from_radians(x.acos())
    }

    /// Arctangent, in this context's unit.
    pub fn atan(&self, x: f64) -> f64 {
        self.from_radians(x.atan())
    }

    /// Four-quadrant arctangent of `y / x`.
    pub fn atan2(&self, y: f64, x: f64) -> f64 {
        self.from_radians(y.atan2(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_default_is_degrees() {
        assert_eq!(TrigContext::default().mode(), AngleMode::Degrees);
    }

    #[test]
    fn test_degrees_forward() {
        let t = TrigContext::degrees();
        assert!((t.sin(90.0) - 1.0).abs() < EPS);
        assert!((t.cos(60.0) - 0.5).abs() < EPS);
        assert!((t.tan(45.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_radians_forward_is_identity_conversion() {
        let t = TrigContext::radians();
        let x = 0.7_f64;
        assert_eq!(t.sin(x), x.sin());
        assert_eq!(t.cos(x), x.cos());
        assert_eq!(t.tan(x), x.tan());
    }

    #[test]
    fn test_reciprocals() {
        let t = TrigContext::degrees();
        assert!((t.csc(30.0) - 2.0).abs() < 1e-10);
        assert!((t.sec(60.0) - 2.0).abs() < 1e-10);
        assert!((t.cot(45.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_reciprocal_at_zero_is_infinite() {
        let t = TrigContext::degrees();
        assert_eq!(t.csc(0.0), f64::INFINITY);
        assert_eq!(t.cot(0.0), f64::INFINITY);
    }

    #[test]
    fn test_inverse_degrees() {
        let t = TrigContext::degrees();
        assert!((t.asin(0.5) - 30.0).abs() < 1e-10);
        assert!((t.acos(0.5) - 60.0).abs() < 1e-10);
        assert!((t.atan(1.0) - 45.0).abs() < 1e-10);
        assert!((t.atan2(1.0, -1.0) - 135.0).abs() < 1e-10);
    }

    #[test]
    fn test_inverse_radians() {
        let t = TrigContext::radians();
        assert!((t.atan2(1.0, 0.0) - std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_asin_out_of_domain_is_nan() {
        assert!(TrigContext::degrees().asin(2.0).is_nan());
    }

    #[test]
    fn test_toggle() {
        let mut t = TrigContext::default();
        assert_eq!(t.toggle(), AngleMode::Radians);
        assert_eq!(t.mode(), AngleMode::Radians);
        assert_eq!(t.toggle(), AngleMode::Degrees);
        t.set_mode(AngleMode::Radians);
        assert_eq!(t.mode(), AngleMode::Radians);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("deg".parse::<AngleMode>(), Ok(AngleMode::Degrees));
        assert_eq!(" Radians ".parse::<AngleMode>(), Ok(AngleMode::Radians));
        assert!(matches!(
            "grad".parse::<AngleMode>(),
            Err(MathError::InvalidAngleMode(_))
        ));
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [AngleMode::Degrees, AngleMode::Radians] {
            assert_eq!(mode.to_string().parse::<AngleMode>(), Ok(mode));
        }
    }
}
