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

use thiserror::Error;

use crate::rational::ArithmeticError;

/// An error thrown by the conversion protocol.
///
/// None of these is fatal: each one is recoverable by re-prompting for
/// input or re-selecting a unit, and how to surface it is the presentation
/// layer's call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The value could not be parsed into a rational.
    #[error("value is not a number")]
    InvalidNumber,

    /// A conversion divided by an exact zero, e.g. a unit record carrying
    /// a zero multiplier.
    #[error("division by zero")]
    DivisionByZero,

    /// The units belong to different families and share no reference.
    #[error("units '{from}' and '{to}' are not convertible")]
    IncompatibleUnits { from: String, to: String },

    /// The unit is logarithmic and has no affine conversion.
    #[error("unit '{0}' is logarithmic and cannot be converted")]
    UnsupportedUnitKind(String),
}

impl From<ArithmeticError> for ConvertError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => ConvertError::DivisionByZero,
            ArithmeticError::InvalidValue => ConvertError::InvalidNumber,
        }
    }
}
