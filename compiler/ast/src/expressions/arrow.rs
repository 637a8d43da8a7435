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

use crate::Parameter;

use itertools::Itertools;

/// A symbolic arrow function, e.g. `(a, b) => a + b`.
///
/// Unlike the verb lambdas, `=>` encodes neither asyncness nor
/// generatorness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunction {
    /// The parenthesized parameter list.
    pub parameters: Vec<Parameter>,
    /// The body after `=>`.
    pub body: LambdaBody,
    pub span: Span,
}

impl fmt::Display for ArrowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) => {}", self.parameters.iter().format(", "), self.body)
    }
}

crate::simple_node_impl!(ArrowFunction);
