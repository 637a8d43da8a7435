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

use faber_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A formatted diagnostic: the `{ code, message, position, help? }` record
/// every stage produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatted {
    /// The stable code, e.g. `L002` or `P006`.
    pub code: String,
    /// The rendered message text.
    pub message: String,
    /// Optional guidance shown below the message.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
    /// Where in the source the diagnostic points.
    pub span: Span,
}

impl Formatted {
    /// Creates a diagnostic at `span` from the parts a `create_messages!`
    /// constructor supplies.
    pub fn new_from_span(
        message: impl fmt::Display,
        help: Option<String>,
        code: u32,
        code_prefix: &str,
        span: Span,
    ) -> Self {
        Self {
            code: format!("{code_prefix}{code:03}"),
            message: message.to_string(),
            help,
            span,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.code, self.message)?;
        if !self.span.is_dummy() {
            write!(f, "\n  --> {}", self.span.start)?;
        }
        if let Some(help) = &self.help {
            write!(f, "\n  = help: {help}")?;
        }
        Ok(())
    }
}
