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

//! Numeric literal parsing.
//!
//! Turns user text and native floats into exact [`Rational`] values. The
//! grammar is `literal := term ( '/' term )?`, where each term is a full
//! decimal literal with its own sign, decimal point and exponent, so
//! `1.5e1/3` is a valid spelling of `5`. Parsing never fails hard: input
//! that denotes no value (empty or malformed text, or a fraction with a
//! zero denominator) yields `None`, which callers must keep distinct from
//! an exact zero.

use logos::Logos;
use num_bigint::BigInt;

use crate::{rational::Rational, token::Token};

/// A value as the caller holds it, before it has been given to the exact
/// arithmetic engine. This is the single entry point for everything the
/// surrounding widget layer hands in, whatever its shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Numeric {
    /// Already exact; passes through unchanged.
    Rational(Rational),
    /// Raw text, typically from an input field.
    Text(String),
    /// A native float, typically from a numeric form control.
    Float(f64),
}

impl Numeric {
    /// Resolves to an exact rational, or `None` when the carried value does
    /// not denote a number.
    ///
    /// Floats deserve a note: a non-finite float is no value, an exact
    /// float zero short-cuts to `0/1`, and every other finite float is
    /// rendered to its shortest round-trip decimal text and re-parsed.
    /// That last step deliberately accepts whatever error the float
    /// representation already carries instead of inventing precision.
    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Numeric::Rational(value) => Some(value.clone()),
            Numeric::Text(text) => parse(text),
            Numeric::Float(value) => parse_float(*value),
        }
    }
}

impl From<Rational> for Numeric {
    fn from(value: Rational) -> Self {
        Numeric::Rational(value)
    }
}

impl From<&str> for Numeric {
    fn from(text: &str) -> Self {
        Numeric::Text(text.to_string())
    }
}

impl From<String> for Numeric {
    fn from(text: String) -> Self {
        Numeric::Text(text)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

/// Parses a numeric literal into an exact rational.
///
/// Returns `None` for input that denotes no value; a fraction whose
/// denominator parses to zero is in that category, the hard
/// division-by-zero failure is reserved for the arithmetic operator.
pub fn parse(text: &str) -> Option<Rational> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut lexer = Token::lexer(text);

    let numerator = match lexer.next()? {
        Ok(Token::Number(literal)) => parse_term(&literal)?,
        _ => return None,
    };

    match lexer.next() {
        None => Some(numerator),
        Some(Ok(Token::Slash)) => {
            let denominator = match lexer.next() {
                Some(Ok(Token::Number(literal))) => parse_term(&literal)?,
                _ => return None,
            };
            if lexer.next().is_some() || denominator.is_zero() {
                return None;
            }
            numerator.checked_div(&denominator).ok()
        }
        Some(_) => None,
    }
}

fn parse_float(value: f64) -> Option<Rational> {
    if !value.is_finite() {
        return None;
    }
    // Float zero short-cuts to exact zero instead of round-tripping
    // through its text form.
    if value == 0.0 {
        return Some(Rational::zero());
    }
    parse(&value.to_string())
}

/// Parses one decimal term. The lexer has already validated the shape, so
/// the only failure left is an exponent outside the supported `i32` range.
fn parse_term(literal: &str) -> Option<Rational> {
    let (negative, rest) = extract_sign(literal);
    let (mantissa, exponent) = split_exponent(rest);
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // No non-zero digit means exact zero, no matter how many leading
    // zeros or how large an exponent the literal declares.
    if int_digits.bytes().chain(frac_digits.bytes()).all(|b| b == b'0') {
        return Some(Rational::zero());
    }

    let exponent = match exponent {
        Some(text) => text.parse::<i32>().ok()?,
        None => 0,
    };

    let mut numerator = [int_digits, frac_digits].concat().parse::<BigInt>().ok()?;
    if negative {
        numerator = -numerator;
    }

    // With `d` fraction digits and exponent `e`, the literal scales the
    // digit string by `10^(e - d)`.
    let scale = exponent.checked_sub(i32::try_from(frac_digits.len()).ok()?)?;
    if scale >= 0 {
        Some(Rational::from_integer(numerator * pow10(scale.unsigned_abs())))
    } else {
        Rational::new(numerator, pow10(scale.unsigned_abs())).ok()
    }
}

fn extract_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

fn split_exponent(s: &str) -> (&str, Option<&str>) {
    match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    }
}

/// `10^exp` over big integers; `BigInt::pow` is exponentiation by
/// squaring, no floating point anywhere on this path.
fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

#[cfg(test)]
mod test {
    use super::*;

    fn rational(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn parses_integers_and_signs() {
        assert_eq!(parse("15"), Some(rational(15, 1)));
        assert_eq!(parse("+7"), Some(rational(7, 1)));
        assert_eq!(parse("-42"), Some(rational(-42, 1)));
        assert_eq!(parse("007"), Some(rational(7, 1)));
    }

    #[test]
    fn parses_decimal_points() {
        assert_eq!(parse("1.5"), Some(rational(3, 2)));
        assert_eq!(parse(".5"), Some(rational(1, 2)));
        assert_eq!(parse("1."), Some(rational(1, 1)));
        assert_eq!(parse("-0.25"), Some(rational(-1, 4)));
    }

    #[test]
    fn parses_exponents() {
        assert_eq!(parse("2e3"), Some(rational(2000, 1)));
        assert_eq!(parse("2E3"), Some(rational(2000, 1)));
        assert_eq!(parse("2e-3"), Some(rational(1, 500)));
        assert_eq!(parse("1.5e1"), Some(rational(15, 1)));
        assert_eq!(parse("12.34e1"), Some(rational(617, 5)));
        assert_eq!(parse("25e-4"), Some(rational(1, 400)));
    }

    #[test]
    fn parses_fraction_literals() {
        assert_eq!(parse("1/3"), Some(rational(1, 3)));
        assert_eq!(parse("-4/6"), Some(rational(-2, 3)));
        assert_eq!(parse("5/-10"), Some(rational(-1, 2)));
        // Terms of a fraction carry their own points and exponents.
        assert_eq!(parse("1.5e1/3"), Some(rational(5, 1)));
    }

    #[test]
    fn zero_spellings_collapse_to_exact_zero() {
        for input in ["0", "-0", "0.000", "000", "0e99", "0.0e999999999999"] {
            assert_eq!(parse(input), Some(Rational::zero()), "{input}");
        }
    }

    #[test]
    fn absence_of_value_is_none() {
        for input in ["", "   ", "abc", "1,5", "--1", ".", "e5", "1e", "1/2/3", "5/", "0x10"] {
            assert_eq!(parse(input), None, "{input:?}");
        }
    }

    #[test]
    fn fraction_with_zero_denominator_is_no_value() {
        assert_eq!(parse("5/0"), None);
        assert_eq!(parse("5/0.000"), None);
        assert_eq!(parse("5/0e3"), None);
    }

    #[test]
    fn out_of_range_exponent_is_no_value() {
        assert_eq!(parse("1e99999999999"), None);
        assert_eq!(parse("1e-99999999999"), None);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse("  1.5 "), Some(rational(3, 2)));
        assert_eq!(parse("1 .5"), None);
    }

    #[test]
    fn floats_resolve_through_their_text_form() {
        assert_eq!(Numeric::Float(0.1).to_rational(), Some(rational(1, 10)));
        assert_eq!(Numeric::Float(-2.5).to_rational(), Some(rational(-5, 2)));
    }

    #[test]
    fn float_zero_short_cuts_to_exact_zero() {
        assert_eq!(Numeric::Float(0.0).to_rational(), Some(Rational::zero()));
        assert_eq!(Numeric::Float(-0.0).to_rational(), Some(Rational::zero()));
    }

    #[test]
    fn non_finite_floats_are_no_value() {
        assert_eq!(Numeric::Float(f64::NAN).to_rational(), None);
        assert_eq!(Numeric::Float(f64::INFINITY).to_rational(), None);
        assert_eq!(Numeric::Float(f64::NEG_INFINITY).to_rational(), None);
    }

    #[test]
    fn numeric_passes_rationals_through() {
        let value = rational(5, 9);
        assert_eq!(Numeric::Rational(value.clone()).to_rational(), Some(value));
    }
}
