// Copyright (c) The Hummanta Authors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Exact fraction values.
//!
//! [`Rational`] is the only numeric currency of the conversion core: every
//! displayed value, multiplier and offset becomes one before any arithmetic
//! happens, and nothing in this module approximates. Values are normalized
//! on construction (lowest terms, strictly positive denominator, sign in the
//! numerator, zero as `0/1`) and never mutated afterwards.

use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use thiserror::Error;

use crate::format;

/// An error thrown by rational arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A value with a zero denominator was about to be built.
    #[error("denominator is zero")]
    InvalidValue,

    /// An explicit division by an exact zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

/// An immutable exact fraction of arbitrary-precision integers.
///
/// Invariants, established by [`Rational::new`] and preserved by every
/// operation: the denominator is strictly positive and shares no common
/// factor with the numerator, which carries the sign. Exact zero is `0/1`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// Builds a normalized value from a numerator and denominator.
    ///
    /// Fails with [`ArithmeticError::InvalidValue`] when the denominator is
    /// zero. A negative denominator moves its sign into the numerator.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, ArithmeticError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ArithmeticError::InvalidValue);
        }
        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    /// The exact integer `value/1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// The distinguished exact zero, `0/1`.
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Exact division. Fails with [`ArithmeticError::DivisionByZero`] when
    /// the divisor is zero; a zero dividend yields exact zero without
    /// touching the divisor.
    pub fn checked_div(&self, divisor: &Rational) -> Result<Rational, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Rational::zero());
        }
        Ok(Self(&self.0 / &divisor.0))
    }

    /// Lossy float approximation for non-authoritative display, e.g.
    /// seeding a numeric input widget. Never feed the result back into a
    /// conversion; the canonical serialization is [`Rational::to_decimal_string`].
    pub fn to_approx_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(if self.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    /// Canonical decimal text form, see [`format::to_decimal_string`].
    pub fn to_decimal_string(&self) -> String {
        format::to_decimal_string(self)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        // Exact zero absorbs; skip the big-integer multiplication.
        if self.is_zero() || rhs.is_zero() {
            return Rational::zero();
        }
        Rational(&self.0 * &rhs.0)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::to_decimal_string(self))
    }
}

/// Adds two optional values. A missing operand is the identity: the present
/// operand is returned normalized, and two missing operands are no value.
pub fn add(a: Option<&Rational>, b: Option<&Rational>) -> Option<Rational> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + b),
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

/// Subtracts `b` from `a`, with the same missing-operand rule as [`add`].
pub fn subtract(a: Option<&Rational>, b: Option<&Rational>) -> Option<Rational> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a - b),
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

/// Multiplies two optional values, with the same missing-operand rule as
/// [`add`]. A present zero operand short-circuits to exact zero.
pub fn multiply(a: Option<&Rational>, b: Option<&Rational>) -> Option<Rational> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a * b),
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

/// Divides `a` by `b`, with the same missing-operand rule as [`add`]. With
/// both operands present, a zero divisor fails with
/// [`ArithmeticError::DivisionByZero`] and a zero dividend yields exact zero.
pub fn divide(
    a: Option<&Rational>,
    b: Option<&Rational>,
) -> Result<Option<Rational>, ArithmeticError> {
    match (a, b) {
        (Some(a), Some(b)) => a.checked_div(b).map(Some),
        (Some(a), None) => Ok(Some(a.clone())),
        (None, Some(b)) => Ok(Some(b.clone())),
        (None, None) => Ok(None),
    }
}
