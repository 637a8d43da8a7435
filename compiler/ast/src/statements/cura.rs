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

/// A scoped-resource acquisition: `cura aperi(via) ut f { ... }`.
///
/// The resource is released when the block exits, by whatever idiom the
/// target provides (try/finally, `defer`, `with`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CuraStatement {
    /// The acquired resource.
    pub resource: Expression,
    /// The `ut` binding, if one was named.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub binding: Option<Identifier>,
    /// The scope of the acquisition.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for CuraStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cura {}", self.resource)?;
        if let Some(binding) = &self.binding {
            write!(f, " ut {binding}")?;
        }
        write!(f, " {}", self.body)
    }
}

crate::simple_node_impl!(CuraStatement);
