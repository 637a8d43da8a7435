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

/// One `casus` arm of an `elige` statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EligeCase {
    /// The matched values; several may share one body.
    pub values: Vec<Expression>,
    /// The arm body.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for EligeCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "casus {} {}", self.values.iter().format(", "), self.body)
    }
}

crate::simple_node_impl!(EligeCase);

/// A switch over a value: `elige status { casus 1 { ... } aliter { ... } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EligeStatement {
    /// The scrutinized value.
    pub subject: Expression,
    /// The `casus` arms, in source order.
    pub cases: Vec<EligeCase>,
    /// The `aliter` fallback, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Block>,
    pub span: Span,
}

impl fmt::Display for EligeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elige {} {{\n", self.subject)?;
        for case in &self.cases {
            writeln!(f, "{case}")?;
        }
        if let Some(default) = &self.default {
            writeln!(f, "aliter {default}")?;
        }
        f.write_str("}")
    }
}

crate::simple_node_impl!(EligeStatement);
