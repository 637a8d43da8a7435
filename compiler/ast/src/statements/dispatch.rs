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

/// A dispatch: `ad tracta(nuntius)`: hands control to the callee,
/// returning its result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdStatement {
    /// The dispatched expression.
    pub expression: Expression,
    pub span: Span,
}

impl fmt::Display for AdStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ad {}", self.expression)
    }
}

crate::simple_node_impl!(AdStatement);
