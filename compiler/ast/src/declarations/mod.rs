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

use crate::{Block, Expression, Identifier, Pattern, TypeAnnotation};

use faber_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod discretio;
pub use discretio::*;

pub mod function;
pub use function::*;

pub mod genus;
pub use genus::*;

pub mod import;
pub use import::*;

pub mod ordo;
pub use ordo::*;

pub mod pactum;
pub use pactum::*;

pub mod type_alias;
pub use type_alias::*;

pub mod variable;
pub use variable::*;

/// A declaration in statement position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    /// A `discretio` tagged union.
    Discretio(DiscretioDeclaration),
    /// A `functio` declaration.
    Function(Box<Function>),
    /// A `genus` struct-like type.
    Genus(GenusDeclaration),
    /// An `ex ... importa` import.
    Import(ImportDeclaration),
    /// An `ordo` enumeration.
    Ordo(OrdoDeclaration),
    /// A `pactum` interface.
    Pactum(PactumDeclaration),
    /// A `typus` alias.
    TypeAlias(TypeAliasDeclaration),
    /// A `varia`/`fixum`/`figendum`/`variandum` binding.
    Variable(VariableDeclaration),
}

impl Declaration {
    pub fn span(&self) -> Span {
        match self {
            Self::Discretio(x) => x.span,
            Self::Function(x) => x.span,
            Self::Genus(x) => x.span,
            Self::Import(x) => x.span,
            Self::Ordo(x) => x.span,
            Self::Pactum(x) => x.span,
            Self::TypeAlias(x) => x.span,
            Self::Variable(x) => x.span,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discretio(x) => x.fmt(f),
            Self::Function(x) => x.fmt(f),
            Self::Genus(x) => x.fmt(f),
            Self::Import(x) => x.fmt(f),
            Self::Ordo(x) => x.fmt(f),
            Self::Pactum(x) => x.fmt(f),
            Self::TypeAlias(x) => x.fmt(f),
            Self::Variable(x) => x.fmt(f),
        }
    }
}
