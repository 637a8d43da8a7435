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

/// One `casus` arm of a `discerne` statement.
///
/// Bindings are plain identifiers matched positionally against the
/// variant's declared fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscerneArm {
    /// The variant name.
    pub variant: Identifier,
    /// The positional bindings, possibly empty.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub bindings: Vec<Identifier>,
    /// The arm body.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for DiscerneArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "casus {}", self.variant)?;
        if !self.bindings.is_empty() {
            write!(f, "({})", self.bindings.iter().format(", "))?;
        }
        write!(f, " {}", self.body)
    }
}

crate::simple_node_impl!(DiscerneArm);

/// A switch over the variants of a `discretio`:
/// `discerne forma { casus circulus(r) { ... } aliter { ... } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscerneStatement {
    /// The scrutinized union value.
    pub subject: Expression,
    /// The variant arms, in source order.
    pub arms: Vec<DiscerneArm>,
    /// The `aliter` fallback, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Block>,
    pub span: Span,
}

impl fmt::Display for DiscerneStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "discerne {} {{\n", self.subject)?;
        for arm in &self.arms {
            writeln!(f, "{arm}")?;
        }
        if let Some(default) = &self.default {
            writeln!(f, "aliter {default}")?;
        }
        f.write_str("}")
    }
}

crate::simple_node_impl!(DiscerneStatement);
