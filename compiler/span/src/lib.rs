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

//! Source positions and spans shared by every stage of the Faber compiler.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A point in the source text.
///
/// `line` and `column` are 1-indexed; `offset` is the 0-indexed byte offset
/// into the input buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    /// Returns a new [`Position`] from the given coordinates.
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Self { line, column, offset }
    }

    /// Returns the position of the first character of any input.
    pub const fn start() -> Self {
        Self { line: 1, column: 1, offset: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The region of source text covered by a token or AST node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The start (inclusive) of the region.
    pub start: Position,
    /// The end (exclusive) of the region.
    pub end: Position,
}

impl Span {
    /// Returns a new [`Span`] from the given endpoints.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns a dummy span, used for synthesized tokens and nodes.
    pub const fn dummy() -> Self {
        Self { start: Position::new(0, 0, 0), end: Position::new(0, 0, 0) }
    }

    /// Returns true if this span was synthesized rather than read from input.
    pub fn is_dummy(&self) -> bool {
        self == &Self::dummy()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.start.line, self.start.column, self.end.column)
        } else {
            write!(f, "{}:{}-{}:{}", self.start.line, self.start.column, self.end.line, self.end.column)
        }
    }
}

impl Add for Span {
    type Output = Self;

    /// Returns the smallest span covering both operands.
    ///
    /// Dummy spans are absorbed, so `span + Span::dummy() == span`.
    fn add(self, other: Self) -> Self {
        if self.is_dummy() {
            return other;
        }
        if other.is_dummy() {
            return self;
        }
        let start = if self.start.offset <= other.start.offset { self.start } else { other.start };
        let end = if self.end.offset >= other.end.offset { self.end } else { other.end };
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(lo: u32, hi: u32) -> Span {
        Span::new(Position::new(1, lo + 1, lo), Position::new(1, hi + 1, hi))
    }

    #[test]
    fn test_add_covers_both_operands() {
        let joined = span(4, 7) + span(10, 12);
        assert_eq!(joined.start.offset, 4);
        assert_eq!(joined.end.offset, 12);

        // Order must not matter.
        assert_eq!(span(10, 12) + span(4, 7), joined);
    }

    #[test]
    fn test_add_absorbs_dummy() {
        assert_eq!(span(2, 5) + Span::dummy(), span(2, 5));
        assert_eq!(Span::dummy() + span(2, 5), span(2, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(span(4, 7).to_string(), "1:5-8");
        let multiline = Span::new(Position::new(1, 5, 4), Position::new(3, 2, 30));
        assert_eq!(multiline.to_string(), "1:5-3:2");
    }

    #[test]
    fn test_serde_round_trip() {
        let original = span(0, 9);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(serde_json::from_str::<Span>(&json).unwrap(), original);
    }
}
