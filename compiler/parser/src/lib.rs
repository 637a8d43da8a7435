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

//! The parser to convert Faber code text into a [`Program`] AST.
//!
//! This crate holds the static [`lexicon`], the [`tokenizer`], and the
//! recursive-descent [`parser`].

#![forbid(unsafe_code)]

pub mod lexicon;

pub mod tokenizer;
pub use tokenizer::{tokenize, SpannedToken, Token};

pub mod parser;
pub use parser::parse;

use faber_ast::Program;
use faber_errors::emitter::Handler;

/// Tokenizes and parses `source` in one step.
pub fn parse_source(handler: &Handler, source: &str) -> Option<Program> {
    let tokens = tokenize(handler, source);
    parse(handler, tokens)
}
