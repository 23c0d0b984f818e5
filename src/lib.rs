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

//! Exact rational arithmetic and affine unit conversion over the
//! QUDT/UCUM unit catalog.
//!
//! Displayed values are parsed into exact [`Rational`]s, converted to and
//! from a unit-independent reference quantity with
//! `reference = value * multiplier + offset`, and rendered back through
//! one canonical decimal formatter, so repeated round trips never
//! accumulate floating point error. The catalog, alias and cache modules
//! cover the boundary to the widget layer that feeds the engine; the
//! engine itself is pure and does no I/O.

pub mod alias;
pub mod catalog;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod parser;
pub mod rational;
pub mod token;

pub use catalog::{Catalog, CatalogCache, CatalogError, Unit};
pub use convert::{convert, from_reference, to_reference};
pub use error::ConvertError;
pub use format::to_decimal_string;
pub use parser::{parse, Numeric};
pub use rational::{ArithmeticError, Rational};
