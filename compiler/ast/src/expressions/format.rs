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

/// A format string, e.g. `scriptum("salve, {}!", nomen)`.
///
/// Arguments are substituted for `{}` placeholders in order; surplus
/// placeholders are left verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptumExpression {
    /// The format text, without quotes.
    pub format: String,
    /// The substituted arguments, in placeholder order.
    pub arguments: Vec<Expression>,
    pub span: Span,
}

impl fmt::Display for ScriptumExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scriptum(\"{}\"", self.format.escape_default())?;
        if !self.arguments.is_empty() {
            write!(f, ", {}", self.arguments.iter().format(", "))?;
        }
        f.write_str(")")
    }
}

crate::simple_node_impl!(ScriptumExpression);
