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

/// A `si`/`aliter` conditional, optionally guarded by a `cape` clause.
///
/// With a `cape` clause, the whole conditional runs inside a protected
/// region: `si p { ... } cape e { ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionalStatement {
    /// The condition after `si`.
    pub condition: Expression,
    /// The consequent block.
    pub then: Block,
    /// The `aliter` branch: either another conditional or a block.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub otherwise: Option<Box<Statement>>,
    /// The optional `cape` clause guarding the conditional.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub catch: Option<CatchClause>,
    pub span: Span,
}

impl fmt::Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "si {} {}", self.condition, self.then)?;
        if let Some(otherwise) = &self.otherwise {
            write!(f, " aliter {otherwise}")?;
        }
        if let Some(catch) = &self.catch {
            write!(f, " {catch}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(ConditionalStatement);
