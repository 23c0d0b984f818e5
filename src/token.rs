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

use logos::Logos;

/// Lexical form of a numeric literal.
///
/// The literal alphabet is exactly `0-9 + - . / e E`. There are no skip
/// patterns: whitespace or any foreign character is a lexing error, which
/// the parser reports as absence of a value.
#[derive(Logos, Clone, Debug, PartialEq)]
pub enum Token {
    /// A decimal literal: optional sign, integer digits, optional `.` and
    /// fraction digits, optional `e`/`E` exponent with its own sign.
    /// `1`, `-2.5`, `.5`, `1.`, `+6.02e23` all lex as one token.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    /// Separates the numerator and denominator of a fraction literal.
    #[token("/")]
    Slash,
}
