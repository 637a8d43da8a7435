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

/// A binary operator.
///
/// Precedence is defined in the parser. Note that bitwise operators bind
/// tighter than comparisons, unlike C.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// Addition, i.e. `+`.
    Add,
    /// Subtraction, i.e. `-`.
    Sub,
    /// Multiplication, i.e. `*`.
    Mul,
    /// Division, i.e. `/`.
    Div,
    /// Remainder, i.e. `%`.
    Rem,
    /// Equality, i.e. `==`, or `est` between values.
    Eq,
    /// Inequality, i.e. `!=`.
    Neq,
    /// Strict equality, i.e. `===`.
    StrictEq,
    /// Strict inequality, i.e. `!==`.
    StrictNeq,
    /// Lesser-than relation, i.e. `<`.
    Lt,
    /// Lesser-or-equal relation, i.e. `<=`.
    Le,
    /// Greater-than relation, i.e. `>`.
    Gt,
    /// Greater-or-equal relation, i.e. `>=`.
    Ge,
    /// Logical AND, i.e. `et` or `&&`.
    And,
    /// Logical OR, i.e. `aut` or `||`.
    Or,
    /// Nullish coalescing, i.e. `vel`.
    Nullish,
    /// Bitwise AND, i.e. `&`.
    BitwiseAnd,
    /// Bitwise OR, i.e. `|`.
    BitwiseOr,
    /// Bitwise XOR, i.e. `^`.
    Xor,
    /// Shift left, i.e. `<<`.
    Shl,
    /// Shift right, i.e. `>>`.
    Shr,
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::StrictEq => "===",
            Self::StrictNeq => "!==",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "et",
            Self::Or => "aut",
            Self::Nullish => "vel",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
        })
    }
}

/// A binary expression, e.g. `summa + 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// The left operand.
    pub left: Box<Expression>,
    /// The right operand.
    pub right: Box<Expression>,
    /// The operator.
    pub op: BinaryOperation,
    /// Set by the annotator when both operands are known to be strings, so
    /// equality lowers to a library comparison where the target needs one.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub string_operands: bool,
    pub span: Span,
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

crate::simple_node_impl!(BinaryExpression);
