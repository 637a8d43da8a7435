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

/// An assignment statement.
///
/// Compound assignments are desugared by the parser: `x += 1` arrives here
/// as `place = x`, `value = x + 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignStatement {
    /// The assigned place: a name, member access, or index access.
    pub place: Expression,
    /// The assigned value.
    pub value: Expression,
    pub span: Span,
}

impl fmt::Display for AssignStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.place, self.value)
    }
}

crate::simple_node_impl!(AssignStatement);
