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

/// An argument of a call, array, or construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Argument {
    /// A plain expression argument.
    Expression(Expression),
    /// A spread argument, e.g. `ceteri valores`.
    Spread(Expression),
}

impl Argument {
    pub fn span(&self) -> Span {
        match self {
            Self::Expression(e) | Self::Spread(e) => e.span(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(e) => e.fmt(f),
            Self::Spread(e) => write!(f, "ceteri {e}"),
        }
    }
}

/// A call: `salve(nomen)`, `registra?.()`, `para!(valor)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    /// The called expression.
    pub callee: Box<Expression>,
    /// The arguments between the parentheses.
    pub arguments: Vec<Argument>,
    /// True for the `?(` optional-chain form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub optional: bool,
    /// True for the `!(` non-null form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub non_null: bool,
    pub span: Span,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.optional {
            "?("
        } else if self.non_null {
            "!("
        } else {
            "("
        };
        write!(f, "{}{open}{})", self.callee, self.arguments.iter().format(", "))
    }
}

crate::simple_node_impl!(CallExpression);
