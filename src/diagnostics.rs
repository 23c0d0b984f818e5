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

//! Catalog resolution diagnostics.
//!
//! A malformed unit record should not take the rest of the catalog down
//! with it; resolution skips the record and reports what happened here.

use std::fmt;

use strum::{AsRefStr, Display, EnumString};

/// The level of a diagnostic.
#[derive(Clone, Debug, Hash, PartialOrd, Ord, PartialEq, Eq, EnumString, AsRefStr, Display)]
pub enum Level {
    /// Warning diagnostic level.
    #[strum(serialize = "warning")]
    Warning,
    /// Error diagnostic level.
    #[strum(serialize = "error")]
    Error,
}

/// A unit resolution diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Identifier of the unit the diagnostic is about.
    pub unit: String,
    /// The level of the diagnostic.
    pub level: Level,
    /// The message of the diagnostic.
    pub message: String,
}

impl Diagnostic {
    /// Instantiate a new warning Diagnostic.
    pub fn warning(unit: impl Into<String>, message: impl Into<String>) -> Self {
        Self { unit: unit.into(), level: Level::Warning, message: message.into() }
    }

    /// Instantiate a new error Diagnostic.
    pub fn error(unit: impl Into<String>, message: impl Into<String>) -> Self {
        Self { unit: unit.into(), level: Level::Error, message: message.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.level, self.unit, self.message)
    }
}
