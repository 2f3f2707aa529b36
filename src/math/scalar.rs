//! Complex scalar arithmetic.
//!
//! `Scalar` stores the real and imaginary parts as two `f64` components.
//! Real inputs are the special case `im = 0`; every operation here keeps an
//! exactly-zero imaginary part at zero for real operands.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::LinalgError;

/// A complex number `re + im·i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scalar {
    pub re: f64,
    pub im: f64,
}

impl Scalar {
    pub const ZERO: Scalar = Scalar { re: 0.0, im: 0.0 };
    pub const ONE: Scalar = Scalar { re: 1.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Same real part, negated imaginary part.
    pub fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Multiplicative inverse `conj(s) / |s|²`.
    ///
    /// Only an exact zero is rejected. The parts are scaled by their larger
    /// magnitude before squaring, so `|s|²` does not underflow for tiny but
    /// nonzero `s`; the result still overflows to infinity once `1/|s|`
    /// exceeds `f64::MAX` (subnormal `s`).
    pub fn inverse(self) -> Result<Self, LinalgError> {
        if self == Scalar::ZERO {
            return Err(LinalgError::DivisionByZero);
        }
        let scale = self.re.abs().max(self.im.abs());
        let (re, im) = (self.re / scale, self.im / scale);
        let denom = (re * re + im * im) * scale;
        Ok(Self {
            re: re / denom,
            im: -im / denom,
        })
    }

    /// Complex modulus `|s|`.
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Integer power by square-and-multiply. `s^0 = 1` for every `s`, zero included.
    pub fn powi(self, exp: u32) -> Self {
        let mut result = Scalar::ONE;
        let mut base = self;
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            e >>= 1;
            if e > 0 {
                base = base * base;
            }
        }
        result
    }

    pub fn is_real(self) -> bool {
        self.im == 0.0
    }
}

impl From<f64> for Scalar {
    fn from(re: f64) -> Self {
        Scalar::real(re)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::new(-self.re, -self.im)
    }
}

impl std::iter::Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::ZERO, |acc, s| acc + s)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        match f.precision() {
            Some(p) if self.is_real() => write!(f, "{:.*}", p, self.re),
            Some(p) => write!(f, "({:.*}{}{:.*}i)", p, self.re, sign, p, self.im.abs()),
            None if self.is_real() => write!(f, "{}", self.re),
            None => write!(f, "({}{}{}i)", self.re, sign, self.im.abs()),
        }
    }
}

/// Error returned when a string is not a recognizable complex literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid scalar literal '{input}'")]
pub struct ParseScalarError {
    input: String,
}

impl FromStr for Scalar {
    type Err = ParseScalarError;

    /// Accepts `a`, `bi`, `a+bi` and `a-bi` (the suffix may be `i` or `j`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseScalarError { input: s.to_string() };
        let t = s.trim();
        if t.is_empty() {
            return Err(err());
        }

        let Some(body) = t.strip_suffix('i').or_else(|| t.strip_suffix('j')) else {
            return t.parse::<f64>().map(Scalar::real).map_err(|_| err());
        };

        // The real/imaginary split is the last sign that is not an exponent sign.
        let bytes = body.as_bytes();
        let split = body
            .char_indices()
            .skip(1)
            .filter(|&(k, c)| (c == '+' || c == '-') && !matches!(bytes[k - 1], b'e' | b'E'))
            .map(|(k, _)| k)
            .last();

        let parse_imag = |part: &str| match part {
            "" | "+" => Ok(1.0),
            "-" => Ok(-1.0),
            other => other.parse::<f64>().map_err(|_| err()),
        };

        match split {
            Some(k) => {
                let re = body[..k].parse::<f64>().map_err(|_| err())?;
                let im = parse_imag(&body[k..])?;
                Ok(Scalar::new(re, im))
            }
            None => Ok(Scalar::new(0.0, parse_imag(body)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjugate_negates_only_imaginary_part() {
        let s = Scalar::new(3.0, 4.0);
        assert_eq!(s.conjugate(), Scalar::new(3.0, -4.0));
        // The buggy form `re - im` would give -1 here.
        assert_eq!(Scalar::new(2.0, 3.0).conjugate().re, 2.0);

        let r = Scalar::real(-1.5);
        assert_eq!(r.conjugate(), r);
        assert!(r.conjugate().is_real());
    }

    #[test]
    fn conjugate_is_an_involution() {
        for &(re, im) in &[(0.0, 0.0), (1.0, -2.0), (-3.5, 7.25), (1e-300, -1e300)] {
            let s = Scalar::new(re, im);
            assert_eq!(s.conjugate().conjugate(), s);
        }
    }

    #[test]
    fn inverse_times_self_is_one() {
        for &(re, im) in &[(2.0, 0.0), (0.0, 3.0), (1.0, 1.0), (-4.0, 2.5)] {
            let s = Scalar::new(re, im);
            let p = s * s.inverse().unwrap();
            assert!((p.re - 1.0).abs() < 1e-15, "{s} -> {p}");
            assert!(p.im.abs() < 1e-15, "{s} -> {p}");
        }
        assert_eq!(Scalar::real(4.0).inverse().unwrap(), Scalar::real(0.25));
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert_eq!(Scalar::ZERO.inverse(), Err(LinalgError::DivisionByZero));
        assert_eq!(Scalar::new(-0.0, 0.0).inverse(), Err(LinalgError::DivisionByZero));
    }

    #[test]
    fn inverse_of_tiny_values_does_not_underflow() {
        let s = Scalar::new(3e-170, -4e-170);
        let inv = s.inverse().unwrap();
        // 1 / (3 - 4i) = (3 + 4i) / 25
        assert!((inv.re / 1.2e169 - 1.0).abs() < 1e-12, "{inv}");
        assert!((inv.im / 1.6e169 - 1.0).abs() < 1e-12, "{inv}");

        let r = Scalar::real(1e-200).inverse().unwrap();
        assert!((r.re / 1e200 - 1.0).abs() < 1e-12);
        assert_eq!(r.im, 0.0);
    }

    #[test]
    fn abs_is_the_modulus() {
        assert_eq!(Scalar::new(3.0, 4.0).abs(), 5.0);
        assert_eq!(Scalar::real(-2.0).abs(), 2.0);
    }

    #[test]
    fn powi_matches_repeated_multiplication() {
        let s = Scalar::new(0.5, -1.25);
        let mut expected = Scalar::ONE;
        for n in 0..8 {
            let got = s.powi(n);
            assert!((got - expected).abs() < 1e-12, "n={n}: {got} vs {expected}");
            expected = expected * s;
        }
        assert_eq!(Scalar::ZERO.powi(0), Scalar::ONE);
        assert_eq!(Scalar::ZERO.powi(3), Scalar::ZERO);
        assert_eq!(Scalar::real(-0.69583).powi(2).im, 0.0);
    }

    #[test]
    fn parses_complex_literals() {
        assert_eq!("1.5".parse::<Scalar>().unwrap(), Scalar::real(1.5));
        assert_eq!("-2i".parse::<Scalar>().unwrap(), Scalar::new(0.0, -2.0));
        assert_eq!("i".parse::<Scalar>().unwrap(), Scalar::new(0.0, 1.0));
        assert_eq!("3+4i".parse::<Scalar>().unwrap(), Scalar::new(3.0, 4.0));
        assert_eq!(" 3-4j ".parse::<Scalar>().unwrap(), Scalar::new(3.0, -4.0));
        assert_eq!("1e-3-i".parse::<Scalar>().unwrap(), Scalar::new(1e-3, -1.0));
        assert_eq!("2+1e-5i".parse::<Scalar>().unwrap(), Scalar::new(2.0, 1e-5));
        assert!("".parse::<Scalar>().is_err());
        assert!("abc".parse::<Scalar>().is_err());
        assert!("1+xi".parse::<Scalar>().is_err());
    }

    #[test]
    fn display_formats_real_and_complex() {
        assert_eq!(format!("{}", Scalar::real(2.5)), "2.5");
        assert_eq!(format!("{:.2}", Scalar::new(1.0, -0.5)), "(1.00-0.50i)");
        assert_eq!(format!("{}", Scalar::new(0.0, 1.0)), "(0+1i)");
    }
}
