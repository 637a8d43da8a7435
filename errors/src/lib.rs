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

//! Diagnostics for every stage of the Faber compiler.
//!
//! Each stage owns a message family with a stable code prefix: `L` for the
//! tokenizer, `P` for the parser, `S` for the semantic annotator and `G` for
//! code generation. Families are declared with [`create_messages!`] and
//! collected by the [`emitter::Handler`], which never drops a diagnostic.

#![forbid(unsafe_code)]

pub mod common;
pub use common::*;

pub mod emitter;

pub mod errors;
pub use errors::*;

/// The `Result` type used throughout the compiler.
pub type Result<T> = core::result::Result<T, FaberError>;
