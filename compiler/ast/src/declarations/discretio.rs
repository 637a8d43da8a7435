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

/// One named field of a `discretio` variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantField {
    /// The field type.
    pub type_annotation: TypeAnnotation,
    /// The field name.
    pub name: Identifier,
    pub span: Span,
}

impl fmt::Display for VariantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_annotation, self.name)
    }
}

crate::simple_node_impl!(VariantField);

/// One variant of a `discretio`, with optional named fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscretioVariant {
    /// The variant name.
    pub name: Identifier,
    /// The carried fields, possibly empty.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<VariantField>,
    pub span: Span,
}

impl fmt::Display for DiscretioVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)?;
        if !self.fields.is_empty() {
            write!(f, "({})", self.fields.iter().format(", "))?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(DiscretioVariant);

/// A tagged union declaration.
///
/// An empty `discretio` parses without complaint; what downstream tooling
/// makes of it is its own business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscretioDeclaration {
    /// The union name.
    pub name: Identifier,
    /// Generic parameters, if any.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<Identifier>,
    /// The variants in source order.
    pub variants: Vec<DiscretioVariant>,
    pub span: Span,
}

impl fmt::Display for DiscretioDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "discretio {}", self.name)?;
        if !self.type_parameters.is_empty() {
            write!(f, "<{}>", self.type_parameters.iter().format(", "))?;
        }
        f.write_str(" {\n")?;
        for variant in &self.variants {
            writeln!(f, "{variant}")?;
        }
        f.write_str("}")
    }
}

crate::simple_node_impl!(DiscretioDeclaration);
