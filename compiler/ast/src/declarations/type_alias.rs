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

/// A type alias, e.g. `typus Nomen = textus`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasDeclaration {
    /// The introduced name.
    pub name: Identifier,
    /// Generic parameters, if any.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<Identifier>,
    /// The aliased type.
    pub aliased: TypeAnnotation,
    pub span: Span,
}

impl fmt::Display for TypeAliasDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "typus {}", self.name)?;
        if !self.type_parameters.is_empty() {
            write!(f, "<{}>", self.type_parameters.iter().format(", "))?;
        }
        write!(f, " = {}", self.aliased)
    }
}

crate::simple_node_impl!(TypeAliasDeclaration);
