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

use crate::ReturnVerb;

use itertools::Itertools;

/// A required method of a `pactum`: a signature without a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PactumMethod {
    /// The method name.
    pub name: Identifier,
    /// The parameters.
    pub parameters: Vec<Parameter>,
    /// The verb or arrow before the return type, if one was written.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub return_verb: Option<ReturnVerb>,
    /// The declared return type, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub return_type: Option<TypeAnnotation>,
    pub span: Span,
}

impl fmt::Display for PactumMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "functio {}({})", self.name, self.parameters.iter().format(", "))?;
        if let Some(verb) = &self.return_verb {
            write!(f, " {verb}")?;
        }
        if let Some(return_type) = &self.return_type {
            write!(f, " {return_type}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(PactumMethod);

/// An interface declaration: named method signatures, no bodies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PactumDeclaration {
    /// The interface name.
    pub name: Identifier,
    /// Generic parameters, if any.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<Identifier>,
    /// The required methods.
    pub methods: Vec<PactumMethod>,
    pub span: Span,
}

impl fmt::Display for PactumDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pactum {}", self.name)?;
        if !self.type_parameters.is_empty() {
            write!(f, "<{}>", self.type_parameters.iter().format(", "))?;
        }
        f.write_str(" {\n")?;
        for method in &self.methods {
            writeln!(f, "{method}")?;
        }
        f.write_str("}")
    }
}

crate::simple_node_impl!(PactumDeclaration);
