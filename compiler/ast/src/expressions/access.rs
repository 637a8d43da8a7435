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

/// A member access: `persona.nomen`, `persona?.nomen`, `persona!.nomen`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberExpression {
    /// The accessed object.
    pub object: Box<Expression>,
    /// The member name.
    pub member: Identifier,
    /// True for the `?.` optional-chain form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub optional: bool,
    /// True for the `!.` non-null form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub non_null: bool,
    pub span: Span,
}

impl fmt::Display for MemberExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dot = if self.optional {
            "?."
        } else if self.non_null {
            "!."
        } else {
            "."
        };
        write!(f, "{}{dot}{}", self.object, self.member)
    }
}

crate::simple_node_impl!(MemberExpression);

/// An index access: `lista[0]`, `lista?[0]`, `lista![0]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedMemberExpression {
    /// The accessed object.
    pub object: Box<Expression>,
    /// The index expression between the brackets.
    pub index: Box<Expression>,
    /// True for the `?[` optional-chain form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub optional: bool,
    /// True for the `![` non-null form.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub non_null: bool,
    pub span: Span,
}

impl fmt::Display for ComputedMemberExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.optional {
            "?["
        } else if self.non_null {
            "!["
        } else {
            "["
        };
        write!(f, "{}{open}{}]", self.object, self.index)
    }
}

crate::simple_node_impl!(ComputedMemberExpression);
