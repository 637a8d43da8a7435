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

//! The abstract syntax tree of the Faber language.
//!
//! The tree is a sum type over roughly fifty node kinds, each carrying its
//! [`Span`](faber_span::Span). Nodes are allocated by the parser, decorated
//! in place by the semantic annotator, and read-only during code generation.
//! Every node serializes with `serde` and renders canonical Faber surface
//! syntax through `Display`.

#![forbid(unsafe_code)]

pub mod common;
pub use common::*;

pub mod declarations;
pub use declarations::*;

pub mod expressions;
pub use expressions::*;

pub mod program;
pub use program::*;

pub mod statements;
pub use statements::*;

pub mod types;
pub use types::*;
