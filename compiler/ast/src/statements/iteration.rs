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

use crate::Transform;

use itertools::Itertools;

/// The preposition opening an iteration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterationKind {
    /// `ex coll ... x`: iterates values.
    Ex,
    /// `de coll ... k`: iterates keys.
    De,
    /// `in coll ... x`: iterates values, like `ex`.
    In,
}

impl fmt::Display for IterationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ex => "ex",
            Self::De => "de",
            Self::In => "in",
        })
    }
}

/// The verb binding the loop variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterationVerb {
    /// `pro`: neutral synchronous iteration.
    Pro,
    /// `fit`: explicitly synchronous iteration.
    Fit,
    /// `fiet`: asynchronous iteration.
    Fiet,
}

impl IterationVerb {
    /// Returns true if the verb makes the loop asynchronous.
    pub fn is_async(&self) -> bool {
        matches!(self, Self::Fiet)
    }
}

impl fmt::Display for IterationVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pro => "pro",
            Self::Fit => "fit",
            Self::Fiet => "fiet",
        })
    }
}

/// An iteration statement, e.g. `ex 0..10 per 2 pro i { ... }` or
/// `de persona pro clavis ergo scribe(clavis)`.
///
/// A one-liner `ergo` body arrives here wrapped in a synthetic one-element
/// block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationStatement {
    /// The opening preposition.
    pub kind: IterationKind,
    /// The iterated collection or range.
    pub source: Expression,
    /// DSL transforms applied to the source before the loop runs.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub transforms: Vec<Transform>,
    /// The binding verb.
    pub verb: IterationVerb,
    /// The loop variable.
    pub binding: Identifier,
    /// The loop body.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for IterationStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.source)?;
        if !self.transforms.is_empty() {
            write!(f, " {}", self.transforms.iter().format(" "))?;
        }
        write!(f, " {} {} {}", self.verb, self.binding, self.body)
    }
}

crate::simple_node_impl!(IterationStatement);
