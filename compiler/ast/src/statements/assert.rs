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

/// An assertion: `adfirma cond` or `adfirma cond, "message"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssertStatement {
    /// The asserted condition.
    pub condition: Expression,
    /// The optional failure message.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<Expression>,
    pub span: Span,
}

impl fmt::Display for AssertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adfirma {}", self.condition)?;
        if let Some(message) = &self.message {
            write!(f, ", {message}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(AssertStatement);
