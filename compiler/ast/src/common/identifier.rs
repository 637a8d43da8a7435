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

/// What kind of binding an identifier resolves to.
///
/// Populated by the semantic annotator; `None` before analysis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    /// A local binding introduced by `varia`/`fixum` and friends.
    Local,
    /// A function or lambda parameter.
    Param,
    /// A module-scope binding.
    Global,
    /// A type name (builtin or user-declared).
    TypeName,
    /// A name brought in by `importa`.
    Import,
}

/// A name, e.g. `nomen` in `fixum nomen = 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
    /// What the name resolves to, once the annotator has run.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sym_kind: Option<SymbolKind>,
    pub span: Span,
}

impl Identifier {
    /// Returns a new identifier with the given name at `span`.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), sym_kind: None, span }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

crate::simple_node_impl!(Identifier);
