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

//! UCUM display code resolution.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Character folds applied to a code before lookup. The deprecated MICRO
/// SIGN (U+00B5) and the Greek small mu (U+03BC) both appear in the wild
/// for micro prefixes.
static CHAR_FOLDS: Lazy<HashMap<char, char>> =
    Lazy::new(|| HashMap::from([('\u{00B5}', '\u{03BC}')]));

/// Maps UCUM display codes to catalog identifiers.
///
/// The table is an opaque lookup as far as the conversion core is
/// concerned; it is built once at catalog resolution and read-only after.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    by_code: HashMap<String, String>,
}

impl AliasTable {
    /// Registers `code -> id`. The first registration of a code wins;
    /// the previously registered identifier is returned when the folded
    /// code is already taken.
    pub fn insert(&mut self, code: &str, id: &str) -> Option<String> {
        let key = fold(code);
        if let Some(existing) = self.by_code.get(&key) {
            return Some(existing.clone());
        }
        self.by_code.insert(key, id.to_string());
        None
    }

    /// Resolves a display code, tolerating micro sign spelling variants.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.by_code.get(&fold(code)).map(String::as_str)
    }
}

fn fold(code: &str) -> String {
    code.chars().map(|c| CHAR_FOLDS.get(&c).copied().unwrap_or(c)).collect()
}
