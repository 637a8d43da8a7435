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

/// One step of an `ex` pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    /// `prima N`: keeps the first N elements.
    Prima(Expression),
    /// `ultima N`: keeps the last N elements.
    Ultima(Expression),
    /// `summa`: folds the elements with `+`.
    Summa,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prima(n) => write!(f, "prima {n}"),
            Self::Ultima(n) => write!(f, "ultima {n}"),
            Self::Summa => f.write_str("summa"),
        }
    }
}

/// A DSL pipeline in expression position, e.g. `ex pretia prima 3 summa`.
///
/// The same transforms attached to an iteration statement run before the
/// loop; here they produce a value directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineExpression {
    /// The source collection.
    pub source: Box<Expression>,
    /// The transforms, applied in order.
    pub transforms: Vec<Transform>,
    pub span: Span,
}

impl fmt::Display for PipelineExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ex {} {}", self.source, self.transforms.iter().format(" "))
    }
}

crate::simple_node_impl!(PipelineExpression);
