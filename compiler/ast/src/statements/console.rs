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

/// The console verb used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleFunction {
    /// `scribe`: ordinary output.
    Scribe,
    /// `vide`: debug output.
    Vide,
    /// `mone`: warning output.
    Mone,
}

impl fmt::Display for ConsoleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scribe => "scribe",
            Self::Vide => "vide",
            Self::Mone => "mone",
        })
    }
}

/// A console statement, e.g. `scribe("salve")` or `mone valor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsoleStatement {
    /// Which verb was written.
    pub function: ConsoleFunction,
    /// The printed arguments.
    pub arguments: Vec<Expression>,
    pub span: Span,
}

impl fmt::Display for ConsoleStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.arguments.iter().format(", "))
    }
}

crate::simple_node_impl!(ConsoleStatement);
