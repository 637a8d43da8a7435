// Copyright (C) 2022-2026 The Faber Team.
// This file is part of the Faber library.

// The Faber library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Faber library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Faber library. If not, see <https://www.gnu.org/licenses/>.

use faber_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value carried by a literal expression.
///
/// Numeric literals keep their source text: the compiler never needs their
/// numeric value, and the text survives into every target unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// `verum` or `falsum`.
    Bool(bool),
    /// The `nihil` literal.
    Nihil,
    /// An integer literal, decimal or hex, e.g. `42`, `0xFF`.
    Integer(String),
    /// A decimal literal, e.g. `3.14159`.
    Float(String),
    /// A bigint literal, e.g. `9007199254740993n`.
    BigInt(String),
    /// A string literal, stored without its quotes, escapes resolved.
    String(String),
    /// A template string, stored verbatim without its backticks.
    Template(String),
}

/// A literal expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpression {
    pub value: LiteralValue,
    pub span: Span,
}

impl fmt::Display for LiteralExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            LiteralValue::Bool(true) => f.write_str("verum"),
            LiteralValue::Bool(false) => f.write_str("falsum"),
            LiteralValue::Nihil => f.write_str("nihil"),
            LiteralValue::Integer(text) | LiteralValue::Float(text) => f.write_str(text),
            LiteralValue::BigInt(text) => write!(f, "{text}n"),
            LiteralValue::String(text) => write!(f, "\"{}\"", text.escape_default()),
            LiteralValue::Template(text) => write!(f, "`{text}`"),
        }
    }
}

crate::simple_node_impl!(LiteralExpression);
