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

/// A construction: `novum persona`, `novum persona(args)`,
/// `novum persona { aetas: 30 }`, or `novum persona de exemplo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExpression {
    /// The constructed type name.
    pub callee: Identifier,
    /// Positional constructor arguments, when the `(args)` form was used.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub arguments: Option<Vec<Argument>>,
    /// Field overrides, when the `{ ... }` form was used.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub overrides: Option<ObjectExpression>,
    /// The override source, when the `de <expr>` form was used.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<Box<Expression>>,
    pub span: Span,
}

impl fmt::Display for NewExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "novum {}", self.callee)?;
        if let Some(arguments) = &self.arguments {
            write!(f, "({})", arguments.iter().format(", "))?;
        }
        if let Some(overrides) = &self.overrides {
            write!(f, " {overrides}")?;
        }
        if let Some(source) = &self.source {
            write!(f, " de {source}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(NewExpression);
