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

/// A unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// Arithmetic negation, i.e. `-x`.
    Negate,
    /// Bitwise complement, i.e. `~x`.
    BitNot,
    /// Logical negation, i.e. `non x`.
    Not,
    /// The null predicate, i.e. `nulla x`.
    Nulla,
    /// The not-null predicate, i.e. `nonnulla x`.
    Nonnulla,
    /// The nothing predicate, i.e. `nihil x`.
    Nihil,
    /// The not-nothing predicate, i.e. `nonnihil x`.
    Nonnihil,
    /// The negative predicate, i.e. `negativum x`.
    Negativum,
    /// The positive predicate, i.e. `positivum x`.
    Positivum,
    /// The postfix non-null assertion, i.e. `x!`.
    NonNullAssert,
}

impl UnaryOperation {
    /// Returns true for the operator written after its operand.
    pub fn is_postfix(&self) -> bool {
        matches!(self, Self::NonNullAssert)
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Negate => "-",
            Self::BitNot => "~",
            Self::Not => "non",
            Self::Nulla => "nulla",
            Self::Nonnulla => "nonnulla",
            Self::Nihil => "nihil",
            Self::Nonnihil => "nonnihil",
            Self::Negativum => "negativum",
            Self::Positivum => "positivum",
            Self::NonNullAssert => "!",
        })
    }
}

/// A unary expression, prefix except for the `!` assertion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// The operand.
    pub operand: Box<Expression>,
    /// The operator.
    pub op: UnaryOperation,
    pub span: Span,
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op.is_postfix() {
            write!(f, "{}{}", self.operand, self.op)
        } else if matches!(self.op, UnaryOperation::Negate | UnaryOperation::BitNot) {
            write!(f, "{}{}", self.op, self.operand)
        } else {
            write!(f, "{} {}", self.op, self.operand)
        }
    }
}

crate::simple_node_impl!(UnaryExpression);
