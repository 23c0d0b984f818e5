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

//! Canonical decimal rendering.
//!
//! [`to_decimal_string`] is the single serialization of a [`Rational`]
//! shown to a user or stored in display state. Nothing in the crate goes
//! through a raw float `to_string` instead.

use num_traits::{Signed, ToPrimitive, Zero};

use crate::rational::Rational;

/// Upper bound on generated fraction digits. The bound guarantees
/// termination for repeating expansions such as thirds.
pub const MAX_FRACTION_DIGITS: usize = 24;

/// Renders the value as a minimal decimal string.
///
/// Long division of `|numerator|` by the denominator: the integer part
/// first, then fraction digits up to [`MAX_FRACTION_DIGITS`], stopping
/// early when the remainder hits exactly zero. A remainder that survives
/// the cap decides rounding: one more digit is computed and, at five or
/// above, a carry runs back through the generated digits and into the
/// integer part if it outlives them all. Trailing zeros are trimmed after
/// rounding and a bare integer carries no decimal point. A magnitude that
/// rounds away to `"0"` never keeps its minus sign.
pub fn to_decimal_string(value: &Rational) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let negative = value.is_negative();
    let numerator = value.numer().abs();
    let denominator = value.denom();

    let mut integer = &numerator / denominator;
    let mut remainder = &numerator % denominator;

    let mut digits: Vec<u8> = Vec::with_capacity(MAX_FRACTION_DIGITS);
    while !remainder.is_zero() && digits.len() < MAX_FRACTION_DIGITS {
        remainder *= 10u32;
        let digit = (&remainder / denominator).to_u8().unwrap_or(0);
        remainder -= denominator * u32::from(digit);
        digits.push(digit);
    }

    if !remainder.is_zero() {
        let next = ((remainder * 10u32) / denominator).to_u8().unwrap_or(0);
        if next >= 5 {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                integer += 1u32;
            }
        }
    }

    while digits.last() == Some(&0) {
        digits.pop();
    }

    let mut out = String::new();
    if negative && !(integer.is_zero() && digits.is_empty()) {
        out.push('-');
    }
    out.push_str(&integer.to_string());
    if !digits.is_empty() {
        out.push('.');
        out.extend(digits.iter().map(|digit| char::from(b'0' + digit)));
    }
    out
}
