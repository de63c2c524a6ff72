//! Complex probability amplitudes
//!
//! [`Amplitude`] is a `Copy` value: every arithmetic operation returns a new
//! amplitude and leaves both operands untouched, so accumulating into a
//! running sum can never observe a half-updated receiver.

use crate::error::{Result, StateError};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// Default per-component tolerance for [`Amplitude::equals`]
pub const AMPLITUDE_TOLERANCE: f64 = 1e-14;

/// A complex number whose squared magnitude is a measurement probability
///
/// # Example
/// ```
/// use shorq_state::Amplitude;
///
/// let a = Amplitude::new(1.0, 2.0);
/// let b = Amplitude::new(3.0, 4.0);
/// assert!(a.multiply(b).equals(Amplitude::new(-5.0, 10.0)));
/// // operands are unchanged
/// assert_eq!(a.re(), 1.0);
/// assert_eq!(a.im(), 2.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Amplitude {
    re: f64,
    im: f64,
}

impl Amplitude {
    /// The zero amplitude `(0, 0)`
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// The unit amplitude `(1, 0)`
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Create an amplitude from its components
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create an amplitude, rejecting NaN or infinite components
    pub fn try_new(re: f64, im: f64) -> Result<Self> {
        if re.is_finite() && im.is_finite() {
            Ok(Self { re, im })
        } else {
            Err(StateError::NonFinite { re, im })
        }
    }

    /// Create an amplitude `magnitude * e^{i*phase}`
    #[inline]
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Complex64::from_polar(magnitude, phase).into()
    }

    /// Real component
    #[inline]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// Imaginary component
    #[inline]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Componentwise sum
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    /// Complex product
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Multiply both components by a real factor
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Squared magnitude `re^2 + im^2`
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Both components finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Equality within [`AMPLITUDE_TOLERANCE`] per component
    #[inline]
    pub fn equals(&self, other: Self) -> bool {
        self.approx_eq(other, AMPLITUDE_TOLERANCE)
    }

    /// Equality within `tolerance` per component
    #[inline]
    pub fn approx_eq(&self, other: Self, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }
}

impl Add for Amplitude {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Amplitude::add(self, rhs)
    }
}

impl Mul for Amplitude {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Neg for Amplitude {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl From<Complex64> for Amplitude {
    #[inline]
    fn from(c: Complex64) -> Self {
        Self::new(c.re, c.im)
    }
}

impl From<Amplitude> for Complex64 {
    #[inline]
    fn from(a: Amplitude) -> Self {
        Complex64::new(a.re, a.im)
    }
}

impl fmt::Display for Amplitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
