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

//! Unit catalog records and resolution.
//!
//! The catalog arrives as a JSON object keyed by unit identifier, as the
//! QUDT ontology converter emits it:
//!
//! ```json
//! "MilliJ-PER-M2": {
//!   "uri": "http://qudt.org/vocab/unit/MilliJ-PER-M2",
//!   "ucumCode": "mJ.m-2",
//!   "label": "Millijoule per Square Metre",
//!   "quantityKind": ["EnergyFluence", "EnergyPerArea"],
//!   "dimension": "A0E0L0I0M1H0T-2D0",
//!   "multiplier": 0.001,
//!   "offset": 0,
//!   "baseUnit": "KiloGM-SEC2",
//!   "logarithmic": false
//! }
//! ```
//!
//! `multiplier` and `offset` may also arrive as literal strings so that
//! values with no exact float form, such as `"5/9"`, survive the trip.
//! Resolution turns every record into an immutable [`Unit`] with exact
//! rational multiplier and offset; malformed records are skipped and
//! reported as diagnostics instead of taking the catalog down.

use std::{collections::HashMap, sync::Arc};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Deserialize;
use thiserror::Error;

use crate::{alias::AliasTable, diagnostics::Diagnostic, parser, rational::Rational};

/// An error thrown when loading a unit catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog text is not well-formed JSON of the expected shape.
    #[error("malformed unit catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog source could not be fetched.
    #[error("catalog source unavailable: {0}")]
    Source(String),
}

/// A resolved unit, immutable for the life of the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// Catalog identifier, the last segment of the QUDT IRI.
    pub id: String,
    /// Full IRI of the unit; opaque to conversion.
    pub uri: String,
    /// UCUM display code, e.g. `Cel` or `mJ.m-2`.
    pub ucum_code: String,
    /// Human-readable label; opaque to conversion.
    pub label: String,
    /// Sorted, deduplicated quantity kind identifiers.
    pub quantity_kinds: Vec<String>,
    /// Dimension vector string; opaque to conversion.
    pub dimension: String,
    /// Scale against the reference unit.
    pub multiplier: Rational,
    /// Shift against the reference unit.
    pub offset: Rational,
    /// Identifier of the family's reference unit, when the catalog knows
    /// one. A unit without a reference converts to nothing.
    pub reference_id: Option<String>,
    /// Logarithmic units have no affine conversion and are rejected by
    /// the protocol.
    pub logarithmic: bool,
}

impl Unit {
    /// Two units convert into one another iff both know their reference
    /// unit, the references are equal, and they share a quantity kind.
    pub fn is_convertible_to(&self, other: &Unit) -> bool {
        match (&self.reference_id, &other.reference_id) {
            (Some(a), Some(b)) if a == b => {
                self.quantity_kinds.iter().any(|kind| other.quantity_kinds.contains(kind))
            }
            _ => false,
        }
    }
}

/// Wire form of a catalog entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUnit {
    #[serde(default)]
    uri: String,
    ucum_code: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    quantity_kind: Vec<String>,
    #[serde(default)]
    dimension: String,
    #[serde(default)]
    multiplier: Option<RawNumber>,
    #[serde(default)]
    offset: Option<RawNumber>,
    #[serde(default)]
    base_unit: Option<String>,
    #[serde(default)]
    logarithmic: bool,
}

/// A JSON number or an exact literal string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumber {
    /// Funnels both wire forms through the exact literal parser. JSON
    /// numbers go by their textual form, so integers never take a float
    /// detour.
    fn to_rational(&self) -> Option<Rational> {
        match self {
            RawNumber::Number(number) => parser::parse(&number.to_string()),
            RawNumber::Text(text) => parser::parse(text),
        }
    }
}

/// A fully resolved, immutable unit catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    units: IndexMap<String, Unit>,
    aliases: AliasTable,
    diagnostics: Vec<Diagnostic>,
}

impl Catalog {
    /// Parses and resolves a catalog from its JSON text.
    ///
    /// Only unreadable JSON fails the load; individual malformed records
    /// are skipped and reported through [`Catalog::diagnostics`].
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: IndexMap<String, RawUnit> = serde_json::from_str(text)?;
        Ok(Self::resolve(raw))
    }

    fn resolve(raw: IndexMap<String, RawUnit>) -> Self {
        let mut units = IndexMap::with_capacity(raw.len());
        let mut aliases = AliasTable::default();
        let mut diagnostics = Vec::new();

        for (id, record) in raw {
            if record.quantity_kind.is_empty() {
                diagnostics.push(Diagnostic::warning(&id, "no quantity kind, skipped"));
                continue;
            }
            let Some(multiplier) = &record.multiplier else {
                diagnostics.push(Diagnostic::error(&id, "missing conversion multiplier"));
                continue;
            };
            let Some(multiplier) = multiplier.to_rational() else {
                diagnostics.push(Diagnostic::error(&id, "malformed conversion multiplier"));
                continue;
            };
            let offset = match &record.offset {
                None => Rational::zero(),
                Some(raw) => match raw.to_rational() {
                    Some(offset) => offset,
                    None => {
                        diagnostics.push(Diagnostic::error(&id, "malformed conversion offset"));
                        continue;
                    }
                },
            };

            let quantity_kinds =
                record.quantity_kind.iter().cloned().sorted().dedup().collect::<Vec<_>>();

            if let Some(previous) = aliases.insert(&record.ucum_code, &id) {
                diagnostics.push(Diagnostic::warning(
                    &id,
                    format!("ucum code '{}' already registered by '{previous}'", record.ucum_code),
                ));
            }

            units.insert(
                id.clone(),
                Unit {
                    id,
                    uri: record.uri,
                    ucum_code: record.ucum_code,
                    label: record.label,
                    quantity_kinds,
                    dimension: record.dimension,
                    multiplier,
                    offset,
                    reference_id: record.base_unit,
                    logarithmic: record.logarithmic,
                },
            );
        }

        Self { units, aliases, diagnostics }
    }

    /// Looks a unit up by its catalog identifier.
    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.units.get(id)
    }

    /// Looks a unit up by its UCUM display code, tolerating the Unicode
    /// micro sign spelling variants.
    pub fn by_code(&self, code: &str) -> Option<&Unit> {
        self.aliases.resolve(code).and_then(|id| self.units.get(id))
    }

    /// Resolved units in catalog order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// What resolution skipped or defaulted, in catalog order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Memoizes fully resolved catalogs by their source identifier.
///
/// An entry is only ever a complete catalog behind an [`Arc`]; a failed
/// load leaves nothing behind, so requesters observe either "not yet
/// available" or "fully available", never a half-parsed result.
#[derive(Debug, Default)]
pub struct CatalogCache {
    resolved: HashMap<String, Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached catalog for `source`, if a load already completed.
    pub fn get(&self, source: &str) -> Option<Arc<Catalog>> {
        self.resolved.get(source).cloned()
    }

    /// Returns the catalog for `source`, fetching and resolving it on the
    /// first request. `fetch` yields the raw JSON text.
    pub fn get_or_load<F>(&mut self, source: &str, fetch: F) -> Result<Arc<Catalog>, CatalogError>
    where
        F: FnOnce() -> Result<String, CatalogError>,
    {
        if let Some(catalog) = self.resolved.get(source) {
            return Ok(catalog.clone());
        }
        let catalog = Arc::new(Catalog::from_json(&fetch()?)?);
        self.resolved.insert(source.to_string(), catalog.clone());
        Ok(catalog)
    }
}
