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

/// Where an import reads from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ImportSource {
    /// A quoted path, e.g. `ex "norma/textus" importa ...`.
    Path(String),
    /// A bare module name, e.g. `ex norma importa ...`.
    Module(Identifier),
}

impl fmt::Display for ImportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "\"{}\"", path.escape_default()),
            Self::Module(name) => name.fmt(f),
        }
    }
}

/// One imported name, optionally renamed with `ut`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportItem {
    /// The exported name.
    pub name: Identifier,
    /// The local rename, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alias: Option<Identifier>,
    pub span: Span,
}

impl fmt::Display for ImportItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)?;
        if let Some(alias) = &self.alias {
            write!(f, " ut {alias}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(ImportItem);

/// An import declaration:
/// `ex "norma/textus" importa { maiuscula }` or `ex norma importa omnia`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    /// The imported-from source.
    pub source: ImportSource,
    /// The braced name list; empty for a bare `importa <name>` default
    /// import recorded in `default_import`.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub items: Vec<ImportItem>,
    /// A single default import, e.g. `ex "norma" importa norma`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_import: Option<Identifier>,
    pub span: Span,
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ex {} importa ", self.source)?;
        if let Some(default_import) = &self.default_import {
            return default_import.fmt(f);
        }
        write!(f, "{{ {} }}", self.items.iter().format(", "))
    }
}

crate::simple_node_impl!(ImportDeclaration);
