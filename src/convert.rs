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

//! Affine unit conversion.
//!
//! Every unit relates to its family's reference unit by
//! `reference = value * multiplier + offset`. The two directed operations
//! here, and their composition [`convert`], are pure and exact; they never
//! touch floating point and never mutate a caller-visible surface.

use crate::{catalog::Unit, error::ConvertError, parser::Numeric, rational::Rational};

/// Converts a displayed value into the unit's reference quantity.
pub fn to_reference(value: &Numeric, unit: &Unit) -> Result<Rational, ConvertError> {
    reject_logarithmic(unit)?;
    let value = value.to_rational().ok_or(ConvertError::InvalidNumber)?;
    Ok(&(&value * &unit.multiplier) + &unit.offset)
}

/// Inverse of [`to_reference`]: `value = (reference - offset) / multiplier`.
///
/// A zero multiplier in a unit record is a catalog defect; it surfaces as
/// [`ConvertError::DivisionByZero`] instead of being swallowed.
pub fn from_reference(reference: &Numeric, unit: &Unit) -> Result<Rational, ConvertError> {
    reject_logarithmic(unit)?;
    let reference = reference.to_rational().ok_or(ConvertError::InvalidNumber)?;
    Ok((&reference - &unit.offset).checked_div(&unit.multiplier)?)
}

/// Converts between two units of the same family through the reference
/// quantity.
///
/// The presentation layer checks convertibility before offering the pair;
/// the check is repeated here so an incompatible pair can never produce a
/// number.
pub fn convert(value: &Numeric, from: &Unit, to: &Unit) -> Result<Rational, ConvertError> {
    if !from.is_convertible_to(to) {
        return Err(ConvertError::IncompatibleUnits {
            from: from.id.clone(),
            to: to.id.clone(),
        });
    }
    let reference = to_reference(value, from)?;
    from_reference(&Numeric::Rational(reference), to)
}

fn reject_logarithmic(unit: &Unit) -> Result<(), ConvertError> {
    if unit.logarithmic {
        return Err(ConvertError::UnsupportedUnitKind(unit.id.clone()));
    }
    Ok(())
}
