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

/// The explicit value of an `ordo` member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum OrdoValue {
    /// An integer value, e.g. `ruber = 1`.
    Integer(String),
    /// A string value, e.g. `ruber = "red"`.
    String(String),
}

impl fmt::Display for OrdoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(text) => f.write_str(text),
            Self::String(text) => write!(f, "\"{}\"", text.escape_default()),
        }
    }
}

/// One member of an `ordo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrdoMember {
    /// The member name.
    pub name: Identifier,
    /// The explicit value, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<OrdoValue>,
    pub span: Span,
}

impl fmt::Display for OrdoMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)?;
        if let Some(value) = &self.value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(OrdoMember);

/// An enumeration of named constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrdoDeclaration {
    /// The enumeration name.
    pub name: Identifier,
    /// The members in source order.
    pub members: Vec<OrdoMember>,
    pub span: Span,
}

impl fmt::Display for OrdoDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ordo {} {{\n", self.name)?;
        for member in &self.members {
            writeln!(f, "{member}")?;
        }
        f.write_str("}")
    }
}

crate::simple_node_impl!(OrdoDeclaration);
