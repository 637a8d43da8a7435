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

use crate::MessageCode;

use faber_span::Span;

pub mod generator;
pub use generator::*;

pub mod lex;
pub use lex::*;

pub mod parser;
pub use parser::*;

pub mod semantic;
pub use semantic::*;

/// The union of every diagnostic family in the compiler.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FaberError {
    /// A tokenizer diagnostic (`L###`).
    #[error(transparent)]
    LexError(#[from] LexError),

    /// A parser diagnostic (`P###`).
    #[error(transparent)]
    ParserError(#[from] ParserError),

    /// A semantic annotator diagnostic (`S###`).
    #[error(transparent)]
    SemanticError(#[from] SemanticError),

    /// A code generation diagnostic (`G###`).
    #[error(transparent)]
    GeneratorError(#[from] GeneratorError),
}

impl FaberError {
    /// The stable code of the underlying diagnostic, e.g. `P006`.
    pub fn error_code(&self) -> String {
        match self {
            Self::LexError(e) => e.error_code(),
            Self::ParserError(e) => e.error_code(),
            Self::SemanticError(e) => e.error_code(),
            Self::GeneratorError(e) => e.error_code(),
        }
    }

    /// The message text of the underlying diagnostic.
    pub fn message(&self) -> String {
        match self {
            Self::LexError(e) => e.message(),
            Self::ParserError(e) => e.message(),
            Self::SemanticError(e) => e.message(),
            Self::GeneratorError(e) => e.message(),
        }
    }

    /// The source region of the underlying diagnostic.
    pub fn span(&self) -> Span {
        match self {
            Self::LexError(e) => e.span(),
            Self::ParserError(e) => e.span(),
            Self::SemanticError(e) => e.span(),
            Self::GeneratorError(e) => e.span(),
        }
    }
}
