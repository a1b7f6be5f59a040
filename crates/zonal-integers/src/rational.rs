//! Arbitrary precision rational numbers.
//!
//! `Rational` is the coefficient type of every algebraic number. Values are
//! kept in lowest terms with a positive denominator, so structural equality
//! is numeric equality. Division is the only partial operation and is exposed
//! through [`Rational::checked_div`] and [`Rational::checked_recip`] rather
//! than the `Div` operator.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{ArithmeticError, Integer};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let negative = denominator.is_negative();
        let value = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        Ok(Self(if negative { -value } else { value }))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn checked_recip(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Nearest `f64` to the exact quotient, rounding ties to even.
    ///
    /// Numerator and denominator may each lie far outside `f64` range; only
    /// the quotient has to fit.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.as_inner().to_f64().value()
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    /// Parses `"n"`, `"n/d"` or a finite decimal such as `"-1.25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ArithmeticError::InvalidLiteral(s.to_string());

        if let Some((num, den)) = s.split_once('/') {
            let num: Integer = num.parse().map_err(|_| invalid())?;
            let den: Integer = den.parse().map_err(|_| invalid())?;
            return Self::new(num, den);
        }

        if let Some((whole, frac)) = s.split_once('.') {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let digits = match whole {
                "" | "+" | "-" => format!("{whole}0{frac}"),
                _ => format!("{whole}{frac}"),
            };
            let num: Integer = digits.parse().map_err(|_| invalid())?;
            return Self::new(num, Integer::power_of_ten(frac.len()));
        }

        s.parse::<Integer>()
            .map(Self::from_integer)
            .map_err(|_| invalid())
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}
