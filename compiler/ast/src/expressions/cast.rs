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

use crate::TypeAnnotation;

/// A type cast, e.g. `valor qua textus`.
///
/// Binds looser than call and member chains, so `a.b qua T` casts `a.b`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CastExpression {
    /// The cast operand.
    pub expression: Box<Expression>,
    /// The target type.
    pub target_type: TypeAnnotation,
    pub span: Span,
}

impl fmt::Display for CastExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} qua {}", self.expression, self.target_type)
    }
}

crate::simple_node_impl!(CastExpression);

/// A type test, e.g. `valor est textus` or `valor non est textus`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeTestExpression {
    /// The tested operand.
    pub expression: Box<Expression>,
    /// The type tested against.
    pub target_type: TypeAnnotation,
    /// True for the `non est` form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub negated: bool,
    pub span: Span,
}

impl fmt::Display for TypeTestExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.negated { "non est" } else { "est" };
        write!(f, "{} {op} {}", self.expression, self.target_type)
    }
}

crate::simple_node_impl!(TypeTestExpression);
