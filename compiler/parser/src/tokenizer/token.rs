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

use crate::lexicon::Keyword;

use faber_span::Span;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A lexical token of the Faber language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Token {
    // Names and literals.
    /// An identifier, e.g. `nomen`.
    Ident(String),
    /// An integer literal, decimal or hex, e.g. `42`, `0xFF`.
    Int(String),
    /// A decimal literal, e.g. `3.14159`.
    Decimal(String),
    /// A bigint literal; the text excludes the `n` suffix.
    BigInt(String),
    /// A string literal; the text excludes the quotes, escapes resolved.
    StaticString(String),
    /// A template string; the text excludes the backticks, kept verbatim.
    Template(String),
    /// A reserved word.
    Keyword(Keyword),

    // Trivia, consumed inside the tokenizer and never surfaced.
    WhiteSpace,
    CommentLine(String),
    CommentBlock(String),

    // Arithmetic.
    /// `+`
    Add,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,

    // Assignment.
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    RemAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,

    // Comparison and equality.
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `===`
    StrictEq,
    /// `!==`
    StrictNotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    // Logical.
    /// `&&`
    And,
    /// `||`
    Or,

    // Bitwise.
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `~`
    BitNot,
    /// `<<`
    Shl,
    /// `>>`
    Shr,

    // Arrows and ranges.
    /// `=>`
    FatArrow,
    /// `->`
    Arrow,
    /// `..`
    DotDot,

    // Chains. The `?`/`!` forms are emitted only when the next character
    // permits a chain accessor; otherwise the standalone token is produced.
    /// `?`
    Question,
    /// `?.`
    QuestionDot,
    /// `?[`
    QuestionBracket,
    /// `?(`
    QuestionParen,
    /// `!`
    Bang,
    /// `!.`
    BangDot,
    /// `![`
    BangBracket,
    /// `!(`
    BangParen,

    // Punctuation.
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftCurly,
    /// `}`
    RightCurly,
    /// `[`
    LeftSquare,
    /// `]`
    RightSquare,

    /// End of input.
    Eof,
}

impl Token {
    /// Returns the keyword if this token is one.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    /// The kind tag used by the token JSON surface.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Ident(_) => "identifier",
            Token::Int(_) | Token::Decimal(_) => "number",
            Token::BigInt(_) => "bigint",
            Token::StaticString(_) => "string",
            Token::Template(_) => "template",
            Token::Keyword(_) => "keyword",
            Token::WhiteSpace | Token::CommentLine(_) | Token::CommentBlock(_) => "trivia",
            Token::Eof => "eof",
            Token::Dot
            | Token::Comma
            | Token::Semicolon
            | Token::Colon
            | Token::LeftParen
            | Token::RightParen
            | Token::LeftCurly
            | Token::RightCurly
            | Token::LeftSquare
            | Token::RightSquare => "punctuation",
            _ => "operator",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(text) => f.write_str(text),
            Token::Int(text) | Token::Decimal(text) => f.write_str(text),
            Token::BigInt(text) => write!(f, "{text}n"),
            Token::StaticString(text) => write!(f, "\"{text}\""),
            Token::Template(text) => write!(f, "`{text}`"),
            Token::Keyword(keyword) => keyword.fmt(f),
            Token::WhiteSpace => f.write_str(" "),
            Token::CommentLine(text) | Token::CommentBlock(text) => f.write_str(text),
            Token::Add => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Mul => f.write_str("*"),
            Token::Div => f.write_str("/"),
            Token::Rem => f.write_str("%"),
            Token::Assign => f.write_str("="),
            Token::AddAssign => f.write_str("+="),
            Token::SubAssign => f.write_str("-="),
            Token::MulAssign => f.write_str("*="),
            Token::DivAssign => f.write_str("/="),
            Token::RemAssign => f.write_str("%="),
            Token::AndAssign => f.write_str("&="),
            Token::OrAssign => f.write_str("|="),
            Token::Eq => f.write_str("=="),
            Token::NotEq => f.write_str("!="),
            Token::StrictEq => f.write_str("==="),
            Token::StrictNotEq => f.write_str("!=="),
            Token::Lt => f.write_str("<"),
            Token::LtEq => f.write_str("<="),
            Token::Gt => f.write_str(">"),
            Token::GtEq => f.write_str(">="),
            Token::And => f.write_str("&&"),
            Token::Or => f.write_str("||"),
            Token::BitAnd => f.write_str("&"),
            Token::BitOr => f.write_str("|"),
            Token::BitXor => f.write_str("^"),
            Token::BitNot => f.write_str("~"),
            Token::Shl => f.write_str("<<"),
            Token::Shr => f.write_str(">>"),
            Token::FatArrow => f.write_str("=>"),
            Token::Arrow => f.write_str("->"),
            Token::DotDot => f.write_str(".."),
            Token::Question => f.write_str("?"),
            Token::QuestionDot => f.write_str("?."),
            Token::QuestionBracket => f.write_str("?["),
            Token::QuestionParen => f.write_str("?("),
            Token::Bang => f.write_str("!"),
            Token::BangDot => f.write_str("!."),
            Token::BangBracket => f.write_str("!["),
            Token::BangParen => f.write_str("!("),
            Token::Dot => f.write_str("."),
            Token::Comma => f.write_str(","),
            Token::Semicolon => f.write_str(";"),
            Token::Colon => f.write_str(":"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::LeftCurly => f.write_str("{"),
            Token::RightCurly => f.write_str("}"),
            Token::LeftSquare => f.write_str("["),
            Token::RightSquare => f.write_str("]"),
            Token::Eof => f.write_str("<eof>"),
        }
    }
}

/// A token paired with the source region it covers.
///
/// Serializes as the tooling record
/// `{ kind, value, keyword?, position: { line, column, offset } }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    /// Returns a dummy token at a dummy span.
    pub const fn dummy() -> Self {
        Self { token: Token::Eof, span: Span::dummy() }
    }
}

impl Serialize for SpannedToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", self.token.kind())?;
        map.serialize_entry("value", &self.token.to_string())?;
        if let Some(keyword) = self.token.keyword() {
            map.serialize_entry("keyword", keyword.as_str())?;
        }
        map.serialize_entry("position", &self.span.start)?;
        map.end()
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ {}", self.token, self.span)
    }
}
