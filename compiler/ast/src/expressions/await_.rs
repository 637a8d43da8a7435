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

/// An await expression, e.g. `cede responsum`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AwaitExpression {
    /// The awaited operand.
    pub operand: Box<Expression>,
    pub span: Span,
}

impl fmt::Display for AwaitExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cede {}", self.operand)
    }
}

crate::simple_node_impl!(AwaitExpression);
