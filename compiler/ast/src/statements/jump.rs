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

/// A `rumpe` statement, leaving the innermost loop or switch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakStatement {
    pub span: Span,
}

impl fmt::Display for BreakStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rumpe")
    }
}

crate::simple_node_impl!(BreakStatement);

/// A `perge` statement, continuing the innermost loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContinueStatement {
    pub span: Span,
}

impl fmt::Display for ContinueStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("perge")
    }
}

crate::simple_node_impl!(ContinueStatement);
