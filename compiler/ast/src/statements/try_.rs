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

/// A `cape` clause, shared by `tempta`, `fac`, and guarded conditionals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    /// The caught-error binding, if one was named.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub binding: Option<Identifier>,
    /// The handler body.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for CatchClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.binding {
            Some(binding) => write!(f, "cape {binding} {}", self.body),
            None => write!(f, "cape {}", self.body),
        }
    }
}

crate::simple_node_impl!(CatchClause);

/// A protected region: `tempta { ... } cape e { ... } demum { ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TryStatement {
    /// The protected block.
    pub block: Block,
    /// The handler, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub catch: Option<CatchClause>,
    /// The `demum` cleanup block, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finally: Option<Block>,
    pub span: Span,
}

impl fmt::Display for TryStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tempta {}", self.block)?;
        if let Some(catch) = &self.catch {
            write!(f, " {catch}")?;
        }
        if let Some(finally) = &self.finally {
            write!(f, " demum {finally}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(TryStatement);
