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

/// A ternary conditional, written `c ? a : b` or `c sic a secus b`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TernaryExpression {
    /// The condition.
    pub condition: Box<Expression>,
    /// The value when the condition holds.
    pub if_true: Box<Expression>,
    /// The value otherwise.
    pub if_false: Box<Expression>,
    /// True for the `sic ... secus` surface form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub latin: bool,
    pub span: Span,
}

impl fmt::Display for TernaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.latin {
            write!(f, "{} sic {} secus {}", self.condition, self.if_true, self.if_false)
        } else {
            write!(f, "{} ? {} : {}", self.condition, self.if_true, self.if_false)
        }
    }
}

crate::simple_node_impl!(TernaryExpression);
