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

use super::*;

use itertools::Itertools;

/// One entry of an object literal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ObjectEntry {
    /// A field, possibly shorthand: `nomen: "anon"` or just `nomen`.
    Field {
        key: Identifier,
        value: Option<Expression>,
    },
    /// A spread entry, e.g. `ceteri basis`.
    Spread(Expression),
}

impl fmt::Display for ObjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { key, value: None } => key.fmt(f),
            Self::Field { key, value: Some(value) } => write!(f, "{key}: {value}"),
            Self::Spread(e) => write!(f, "ceteri {e}"),
        }
    }
}

/// An object literal, e.g. `{ nomen: "anon", aetas }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpression {
    pub entries: Vec<ObjectEntry>,
    pub span: Span,
}

impl fmt::Display for ObjectExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("{}");
        }
        write!(f, "{{ {} }}", self.entries.iter().format(", "))
    }
}

crate::simple_node_impl!(ObjectExpression);
