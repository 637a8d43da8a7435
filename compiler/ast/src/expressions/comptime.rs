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

use crate::Block;

/// What follows the `praefixum` keyword.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PraefixumBody {
    /// A single expression, e.g. `praefixum 2 * 21`.
    Expression(Box<Expression>),
    /// A block, e.g. `praefixum { ... }`.
    Block(Block),
}

impl fmt::Display for PraefixumBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(e) => e.fmt(f),
            Self::Block(b) => b.fmt(f),
        }
    }
}

/// A compile-time evaluation, lowered to the target's compile-time feature
/// where one exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PraefixumExpression {
    pub body: PraefixumBody,
    pub span: Span,
}

impl fmt::Display for PraefixumExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "praefixum {}", self.body)
    }
}

crate::simple_node_impl!(PraefixumExpression);
