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

use crate::Identifier;

use faber_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ownership preposition prefixed to a type annotation, e.g. the `de` in
/// `de textus nomen`.
///
/// Recorded faithfully but not acted on by any current target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preposition {
    De,
    Ex,
    In,
}

impl fmt::Display for Preposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::De => "de",
            Self::Ex => "ex",
            Self::In => "in",
        })
    }
}

/// An argument inside a type's angle brackets.
///
/// Beyond nested types, Faber permits numeric parameters (bit widths) and
/// bare modifier identifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeParameterArg {
    /// A nested type annotation, e.g. `lista<textus>`.
    Type(TypeAnnotation),
    /// A numeric literal, e.g. `numerus<32>`.
    Number(String),
    /// A bare modifier, e.g. `numerus<brevis>`.
    Modifier(Identifier),
}

impl fmt::Display for TypeParameterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => ty.fmt(f),
            Self::Number(n) => f.write_str(n),
            Self::Modifier(id) => id.fmt(f),
        }
    }
}

/// A type annotation, e.g. `lista<textus>?` or `textus | numerus`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAnnotation {
    /// The head type name.
    pub name: Identifier,
    /// Arguments inside `<...>`, if any.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<TypeParameterArg>,
    /// True if the annotation carries a trailing `?`.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub nullable: bool,
    /// The ownership preposition, if one was written.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub preposition: Option<Preposition>,
    /// True for the `textus[]` array shorthand.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub array_shorthand: bool,
    /// Further alternatives of a `|` union, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub union: Vec<TypeAnnotation>,
    pub span: Span,
}

impl TypeAnnotation {
    /// Returns a plain annotation around `name` with no decorations.
    pub fn plain(name: Identifier) -> Self {
        let span = name.span;
        Self {
            name,
            type_parameters: Vec::new(),
            nullable: false,
            preposition: None,
            array_shorthand: false,
            union: Vec::new(),
            span,
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prep) = &self.preposition {
            write!(f, "{prep} ")?;
        }
        self.name.fmt(f)?;
        if !self.type_parameters.is_empty() {
            write!(f, "<{}>", self.type_parameters.iter().format(", "))?;
        }
        if self.array_shorthand {
            f.write_str("[]")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        for alternative in &self.union {
            write!(f, " | {alternative}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(TypeAnnotation);
