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

use crate::lexicon::keyword_from_str;
use crate::tokenizer::Token;

use std::iter::{from_fn, Peekable};

/// A scan failure, positioned relative to the start of the attempted token.
///
/// The tokenizer turns these into `L###` diagnostics with absolute spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RawLexError {
    /// L001: a character no token can start with.
    UnexpectedCharacter(char),
    /// L002: a `"` string that hits a newline or the end of input.
    UnterminatedString,
    /// L003: a backtick template that hits the end of input.
    UnterminatedTemplate,
    /// L004: a `/*` comment that hits the end of input.
    UnterminatedBlockComment,
    /// L005: an unknown `\\` escape inside a string.
    InvalidEscape(char),
}

/// Eat an identifier, that is, a string matching `[a-zA-Z_][a-zA-Z0-9_]*`,
/// if any.
fn eat_identifier(input: &mut Peekable<impl Iterator<Item = char>>) -> Option<String> {
    input.peek().filter(|c| c.is_ascii_alphabetic() || **c == '_')?;
    Some(from_fn(|| input.next_if(|c| c.is_ascii_alphanumeric() || c == &'_')).collect())
}

impl Token {
    /// Eats a number literal: integer, decimal, hex, with an optional `n`
    /// bigint suffix.
    fn eat_number(input: &mut Peekable<impl Iterator<Item = char> + Clone>) -> (usize, Token) {
        let mut text = String::new();

        // Hex literals: 0x...
        if input.peek() == Some(&'0') {
            text.push(input.next().unwrap());
            if input.next_if_eq(&'x').is_some() {
                text.push('x');
                while let Some(c) = input.next_if(|c| c.is_ascii_hexdigit()) {
                    text.push(c);
                }
                if input.next_if_eq(&'n').is_some() {
                    return (text.len() + 1, Token::BigInt(text));
                }
                return (text.len(), Token::Int(text));
            }
        }

        while let Some(c) = input.next_if(|c| c.is_ascii_digit()) {
            text.push(c);
        }

        // A decimal point only counts with digits after it; `2..10` must
        // leave the range operator alone. The caller re-scans from the dot,
        // so peeking one past it is not needed: a lone `.` after digits is
        // either `..` or a member access, and neither starts with a digit.
        let mut chars = input.clone();
        if chars.next() == Some('.') && chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            input.next();
            text.push('.');
            while let Some(c) = input.next_if(|c| c.is_ascii_digit()) {
                text.push(c);
            }
            return (text.len(), Token::Decimal(text));
        }

        if input.next_if_eq(&'n').is_some() {
            return (text.len() + 1, Token::BigInt(text));
        }
        (text.len(), Token::Int(text))
    }

    /// Eats a `"` string literal, resolving escapes.
    fn eat_string(input: &mut Peekable<impl Iterator<Item = char>>) -> Result<(usize, Token), RawLexError> {
        // Account for the opening quote.
        let mut len = 1;
        input.next();

        let mut string = String::new();
        while let Some(c) = input.next() {
            len += 1;
            match c {
                '"' => return Ok((len, Token::StaticString(string))),
                '\n' => return Err(RawLexError::UnterminatedString),
                '\\' => {
                    let Some(escaped) = input.next() else {
                        return Err(RawLexError::UnterminatedString);
                    };
                    len += 1;
                    match escaped {
                        '\\' => string.push('\\'),
                        '"' => string.push('"'),
                        'n' => string.push('\n'),
                        't' => string.push('\t'),
                        'r' => string.push('\r'),
                        '0' => string.push('\0'),
                        other => return Err(RawLexError::InvalidEscape(other)),
                    }
                }
                other => string.push(other),
            }
        }

        Err(RawLexError::UnterminatedString)
    }

    /// Eats a backtick template string verbatim; interpolation is a parser
    /// concern.
    fn eat_template(input: &mut Peekable<impl Iterator<Item = char>>) -> Result<(usize, Token), RawLexError> {
        let mut len = 1;
        input.next();

        let mut template = String::new();
        for c in input {
            len += 1;
            if c == '`' {
                return Ok((len, Token::Template(template)));
            }
            template.push(c);
        }

        Err(RawLexError::UnterminatedTemplate)
    }

    /// Returns a tuple: `(token length in chars, token)` if the next token
    /// can be eaten, otherwise a [`RawLexError`].
    ///
    /// The next token can be eaten if the characters at the front of `input`
    /// scan into a token. Longer operators always win over their prefixes,
    /// and the chain forms `?.` `?[` `?(` `!.` `![` `!(` are emitted only
    /// when the following character permits a chain accessor.
    pub(crate) fn eat(input: &str) -> Result<(usize, Token), RawLexError> {
        debug_assert!(!input.is_empty(), "tokenizer never scans empty input");

        let mut input = input.chars().peekable();

        // Consumes a single character token.
        let single = |input: &mut Peekable<_>, token| {
            input.next();
            Ok((1, token))
        };
        // Consumes a character followed by `on` with `then` if found or
        // `els` otherwise.
        let followed_by = |input: &mut Peekable<_>, on, then, els| {
            input.next();
            Ok(if input.next_if_eq(&on).is_some() { (2, then) } else { (1, els) })
        };
        // Consumes a character followed by `on_1`, `on_2` or none.
        let three_cases = |input: &mut Peekable<_>, on_1, case_1, on_2, case_2, els| {
            input.next();
            Ok(if input.next_if_eq(&on_1).is_some() {
                (2, case_1)
            } else if input.next_if_eq(&on_2).is_some() {
                (2, case_2)
            } else {
                (1, els)
            })
        };
        // Consumes a chain opener: `c` followed by `.`, `[`, or `(` becomes
        // the chain token; anything else falls back to the standalone token.
        let chain = |input: &mut Peekable<_>, dot, bracket, paren, els| {
            input.next();
            Ok(if input.next_if_eq(&'.').is_some() {
                (2, dot)
            } else if input.next_if_eq(&'[').is_some() {
                (2, bracket)
            } else if input.next_if_eq(&'(').is_some() {
                (2, paren)
            } else {
                (1, els)
            })
        };

        match *input.peek().expect("peeked above") {
            x if x.is_ascii_whitespace() => return single(&mut input, Token::WhiteSpace),
            x if x.is_ascii_digit() => return Ok(Self::eat_number(&mut input)),
            '"' => return Self::eat_string(&mut input),
            '`' => return Self::eat_template(&mut input),
            '(' => return single(&mut input, Token::LeftParen),
            ')' => return single(&mut input, Token::RightParen),
            '{' => return single(&mut input, Token::LeftCurly),
            '}' => return single(&mut input, Token::RightCurly),
            '[' => return single(&mut input, Token::LeftSquare),
            ']' => return single(&mut input, Token::RightSquare),
            ',' => return single(&mut input, Token::Comma),
            ';' => return single(&mut input, Token::Semicolon),
            ':' => return single(&mut input, Token::Colon),
            '^' => return single(&mut input, Token::BitXor),
            '~' => return single(&mut input, Token::BitNot),
            '+' => return followed_by(&mut input, '=', Token::AddAssign, Token::Add),
            '*' => return followed_by(&mut input, '=', Token::MulAssign, Token::Mul),
            '%' => return followed_by(&mut input, '=', Token::RemAssign, Token::Rem),
            '-' => {
                return three_cases(&mut input, '>', Token::Arrow, '=', Token::SubAssign, Token::Minus);
            }
            '&' => {
                return three_cases(&mut input, '&', Token::And, '=', Token::AndAssign, Token::BitAnd);
            }
            '|' => {
                return three_cases(&mut input, '|', Token::Or, '=', Token::OrAssign, Token::BitOr);
            }
            '.' => return followed_by(&mut input, '.', Token::DotDot, Token::Dot),
            '<' => {
                return three_cases(&mut input, '=', Token::LtEq, '<', Token::Shl, Token::Lt);
            }
            '>' => {
                return three_cases(&mut input, '=', Token::GtEq, '>', Token::Shr, Token::Gt);
            }
            '=' => {
                input.next();
                if input.next_if_eq(&'=').is_some() {
                    if input.next_if_eq(&'=').is_some() {
                        return Ok((3, Token::StrictEq));
                    }
                    return Ok((2, Token::Eq));
                }
                if input.next_if_eq(&'>').is_some() {
                    return Ok((2, Token::FatArrow));
                }
                return Ok((1, Token::Assign));
            }
            '!' => {
                // `!==` and `!=` win over the chain forms.
                let mut ahead = input.clone();
                ahead.next();
                if ahead.peek() == Some(&'=') {
                    input.next();
                    input.next();
                    if input.next_if_eq(&'=').is_some() {
                        return Ok((3, Token::StrictNotEq));
                    }
                    return Ok((2, Token::NotEq));
                }
                return chain(&mut input, Token::BangDot, Token::BangBracket, Token::BangParen, Token::Bang);
            }
            '?' => {
                return chain(
                    &mut input,
                    Token::QuestionDot,
                    Token::QuestionBracket,
                    Token::QuestionParen,
                    Token::Question,
                );
            }
            '/' => {
                input.next();
                if input.next_if_eq(&'/').is_some() {
                    let mut comment = String::from("//");
                    while let Some(c) = input.next_if(|c| c != &'\n') {
                        comment.push(c);
                    }
                    return Ok((comment.len(), Token::CommentLine(comment)));
                } else if input.next_if_eq(&'*').is_some() {
                    // Block comments are flat: the first `*/` closes.
                    let mut comment = String::from("/*");
                    while let Some(c) = input.next() {
                        comment.push(c);
                        if c == '*' && input.next_if_eq(&'/').is_some() {
                            comment.push('/');
                            return Ok((comment.len(), Token::CommentBlock(comment)));
                        }
                    }
                    return Err(RawLexError::UnterminatedBlockComment);
                } else if input.next_if_eq(&'=').is_some() {
                    return Ok((2, Token::DivAssign));
                }
                return Ok((1, Token::Div));
            }
            _ => (),
        }

        if let Some(ident) = eat_identifier(&mut input) {
            let len = ident.len();
            // `post` stays an identifier; the hook parser reads its lexeme.
            let token = match keyword_from_str(&ident) {
                Some(keyword) => Token::Keyword(keyword),
                None => Token::Ident(ident),
            };
            return Ok((len, token));
        }

        Err(RawLexError::UnexpectedCharacter(input.peek().copied().unwrap_or('\0')))
    }
}
