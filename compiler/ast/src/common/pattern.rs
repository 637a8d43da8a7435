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

/// A binding pattern on the left side of a declaration.
///
/// Patterns never contain general expressions: only names, renames, rests,
/// and skips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    /// A single name, e.g. `fixum x = ...`.
    Identifier(Identifier),
    /// An object pattern, e.g. `fixum { nomen: n, ceteri rest } = ...`.
    Object(ObjectPattern),
    /// An array pattern, e.g. `fixum [primus, _, ceteri rest] = ...`.
    Array(ArrayPattern),
}

impl Pattern {
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(id) => id.span,
            Self::Object(pat) => pat.span,
            Self::Array(pat) => pat.span,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(id) => id.fmt(f),
            Self::Object(pat) => pat.fmt(f),
            Self::Array(pat) => pat.fmt(f),
        }
    }
}

/// An object destructuring pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectPattern {
    pub entries: Vec<ObjectPatternEntry>,
    pub span: Span,
}

impl fmt::Display for ObjectPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} }}", self.entries.iter().format(", "))
    }
}

crate::simple_node_impl!(ObjectPattern);

/// One entry of an [`ObjectPattern`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ObjectPatternEntry {
    /// A field, optionally renamed: `nomen`, `nomen: localis`, `nomen ut localis`.
    Field {
        key: Identifier,
        alias: Option<Identifier>,
    },
    /// `ceteri rest`: collects the remaining fields.
    Rest(Identifier),
}

impl fmt::Display for ObjectPatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { key, alias: None } => key.fmt(f),
            Self::Field { key, alias: Some(alias) } => write!(f, "{key} ut {alias}"),
            Self::Rest(name) => write!(f, "ceteri {name}"),
        }
    }
}

/// An array destructuring pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayPattern {
    pub elements: Vec<ArrayPatternElement>,
    pub span: Span,
}

impl fmt::Display for ArrayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.elements.iter().format(", "))
    }
}

crate::simple_node_impl!(ArrayPattern);

/// One element of an [`ArrayPattern`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArrayPatternElement {
    /// A name binding the element at this position.
    Identifier(Identifier),
    /// `_`: the element at this position is ignored.
    Skip,
    /// `ceteri rest`: collects the remaining elements.
    Rest(Identifier),
}

impl fmt::Display for ArrayPatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(id) => id.fmt(f),
            Self::Skip => f.write_str("_"),
            Self::Rest(name) => write!(f, "ceteri {name}"),
        }
    }
}
