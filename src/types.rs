//! Strongly-typed physical measurements for poster layout (zero-cost newtypes).
//!
//! All lengths are normalized to PDF points (72 per inch) on construction;
//! nothing downstream knows which unit a value was originally given in.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::{DAffine2, DVec2, dvec2};
use thiserror::Error;

const POINTS_PER_INCH: f64 = 72.0;
const METERS_PER_INCH: f64 = 0.0254;

/// Error type for invalid numeric values
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    NaN,
    #[error("value is infinite")]
    Infinite,
    #[error("value is zero")]
    Zero,
    #[error("value is negative")]
    Negative,
}

/// A one-dimensional physical length, stored in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    #[inline]
    pub const fn from_points(points: f64) -> Length {
        Length(points)
    }

    #[inline]
    pub const fn from_inches(inches: f64) -> Length {
        Length(inches * POINTS_PER_INCH)
    }

    #[inline]
    pub const fn from_centimeters(cm: f64) -> Length {
        Length::from_inches(cm / 100.0 / METERS_PER_INCH)
    }

    /// Create a Length in points with validation (rejects NaN/infinite)
    pub fn try_new(points: f64) -> Result<Length, NumericError> {
        if points.is_nan() {
            Err(NumericError::NaN)
        } else if points.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(points))
        }
    }

    /// Create a non-negative Length with validation
    pub fn try_non_negative(points: f64) -> Result<Length, NumericError> {
        let len = Length::try_new(points)?;
        if points < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Create a strictly positive Length with validation
    pub fn try_positive(points: f64) -> Result<Length, NumericError> {
        let len = Length::try_non_negative(points)?;
        if points == 0.0 {
            Err(NumericError::Zero)
        } else {
            Ok(len)
        }
    }

    /// The length in points.
    #[inline]
    pub fn points(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Length {
        Length(self.0 * factor)
    }

}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { self + -rhs }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { self.scale(rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

// No Length / Length: layout only scales lengths by unitless factors.

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length { Length(-self.0) }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// A 2D point or displacement made of two lengths.
///
/// Coordinates follow PDF conventions: origin at the bottom-left of the page,
/// y grows upwards.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LengthVector {
    pub x: Length,
    pub y: Length,
}

impl LengthVector {
    pub fn new(x: Length, y: Length) -> Self {
        LengthVector { x, y }
    }

    pub fn scale(self, factor: f64) -> LengthVector {
        LengthVector { x: self.x.scale(factor), y: self.y.scale(factor) }
    }

    pub fn midpoint(self, other: LengthVector) -> LengthVector {
        (self + other).scale(0.5)
    }

    /// Raw point coordinates for handing to a backend.
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x.points(), self.y.points())
    }

    /// Affine transform that moves the origin to this vector (identity linear part).
    pub fn to_translation(self) -> DAffine2 {
        DAffine2::from_translation(self.to_dvec2())
    }
}

impl Add for LengthVector {
    type Output = LengthVector;
    fn add(self, rhs: LengthVector) -> LengthVector {
        LengthVector { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for LengthVector {
    type Output = LengthVector;
    fn sub(self, rhs: LengthVector) -> LengthVector {
        self + -rhs
    }
}

impl Neg for LengthVector {
    type Output = LengthVector;
    fn neg(self) -> LengthVector {
        self.scale(-1.0)
    }
}

impl Mul<f64> for LengthVector {
    type Output = LengthVector;
    fn mul(self, rhs: f64) -> LengthVector {
        self.scale(rhs)
    }
}

impl fmt::Display for LengthVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// RGB #D52B1E, the usual approximation of Pantone 485 for the Swiss flag.
    pub const SWISS_RED: Color = Color::rgb(0xD5, 0x2B, 0x1E);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Channels as fractions in `0.0..=1.0`.
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ==================== Length tests ====================

    #[test]
    fn length_units_normalize_to_points() {
        assert_eq!(Length::from_inches(1.0).points(), 72.0);
        assert_eq!(Length::from_points(10.0).points(), 10.0);
        assert!(close(Length::from_centimeters(2.54).points(), 72.0));
    }

    #[test]
    fn centimeters_match_inches_over_range() {
        for x in [0.1, 1.0, 2.54, 7.5, 21.0, 29.7, 1000.0] {
            let cm = Length::from_centimeters(x).points();
            let inch = Length::from_inches(x / 2.54).points();
            assert!((cm - inch).abs() < 1e-9 * cm.max(1.0), "{x}cm: {cm} vs {inch}");
        }
    }

    #[test]
    fn length_arithmetic() {
        let a = Length::from_points(3.0);
        let b = Length::from_points(2.0);

        assert_eq!(a + b, Length::from_points(5.0));
        assert_eq!(a - b, Length::from_points(1.0));
        assert_eq!(a * 2.0, Length::from_points(6.0));
        assert_eq!(a / 2.0, Length::from_points(1.5));
        assert_eq!(-a, Length::from_points(-3.0));
        assert_eq!(a.scale(-1.0), -a);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn length_assign_ops() {
        let mut a = Length::from_points(1.0);
        a += Length::from_points(2.0);
        assert_eq!(a, Length::from_points(3.0));
        a -= Length::from_points(0.5);
        assert_eq!(a, Length::from_points(2.5));
    }

    #[test]
    fn length_try_new_rejects_nan_and_infinity() {
        assert_eq!(Length::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Length::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert!(Length::try_new(-1.0).is_ok());
    }

    #[test]
    fn length_try_positive() {
        assert!(Length::try_positive(0.5).is_ok());
        assert_eq!(Length::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Length::try_positive(-2.0), Err(NumericError::Negative));
        assert_eq!(Length::try_non_negative(0.0), Ok(Length::ZERO));
    }

    // ==================== LengthVector tests ====================

    #[test]
    fn vector_ops_are_componentwise() {
        let p = LengthVector::new(Length::from_points(1.0), Length::from_points(2.0));
        let q = LengthVector::new(Length::from_points(3.0), Length::from_points(5.0));

        assert_eq!(p + q, LengthVector::new(Length::from_points(4.0), Length::from_points(7.0)));
        assert_eq!(q - p, LengthVector::new(Length::from_points(2.0), Length::from_points(3.0)));
        assert_eq!(q - p, q + p.scale(-1.0));
        assert_eq!(p * 2.0, LengthVector::new(Length::from_points(2.0), Length::from_points(4.0)));
        assert_eq!(p.midpoint(q), LengthVector::new(Length::from_points(2.0), Length::from_points(3.5)));
    }

    #[test]
    fn translation_has_identity_linear_part() {
        let v = LengthVector::new(Length::from_points(12.5), Length::from_points(-4.0));
        let t = v.to_translation();

        assert_eq!(t.matrix2, glam::DMat2::IDENTITY);
        assert_eq!(t.translation, dvec2(12.5, -4.0));
        assert_eq!(t.transform_point2(dvec2(1.0, 1.0)), dvec2(13.5, -3.0));
    }

    #[test]
    fn color_display_and_unit_channels() {
        assert_eq!(Color::SWISS_RED.to_string(), "rgb(213,43,30)");
        assert_eq!(Color::WHITE.to_unit_rgb(), (1.0, 1.0, 1.0));
        assert_eq!(Color::BLACK.to_unit_rgb(), (0.0, 0.0, 0.0));
    }
}
