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

//! The tokenizer to convert Faber code text into tokens.
//!
//! This module contains the [`tokenize()`] method which breaks down string
//! text into tokens with 1-indexed line/column positions, recording `L###`
//! diagnostics and recovering by advancing one character.

pub(crate) mod lexer;
pub(crate) use self::lexer::RawLexError;

pub mod token;
pub use self::token::{SpannedToken, Token};

use faber_errors::emitter::Handler;
use faber_errors::LexError;
use faber_span::{Position, Span};

/// Advances `pos` and `rest` by `chars` characters, tracking lines.
fn advance(pos: &mut Position, rest: &mut &str, chars: usize) {
    for _ in 0..chars {
        let Some(c) = rest.chars().next() else { break };
        *rest = &rest[c.len_utf8()..];
        pos.offset += c.len_utf8() as u32;
        if c == '\n' {
            pos.line += 1;
            pos.column = 1;
        } else {
            pos.column += 1;
        }
    }
}

/// Creates a new vector of spanned tokens from the given source text.
///
/// Total on every input: scan errors go to `handler` and scanning resumes
/// one character further; the result always ends in an end-of-input token.
/// Whitespace and comments are consumed here and never surface.
pub fn tokenize(handler: &Handler, input: &str) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();
    let mut pos = Position::start();
    let mut rest = input;

    while !rest.is_empty() {
        let start = pos;
        match Token::eat(rest) {
            Ok((len, token)) => {
                advance(&mut pos, &mut rest, len);
                match token {
                    Token::WhiteSpace | Token::CommentLine(_) | Token::CommentBlock(_) => continue,
                    _ => tokens.push(SpannedToken { token, span: Span::new(start, pos) }),
                }
            }
            Err(raw) => {
                advance(&mut pos, &mut rest, 1);
                let span = Span::new(start, pos);
                handler.emit_err(match raw {
                    RawLexError::UnexpectedCharacter(c) => LexError::unexpected_character(c, span),
                    RawLexError::UnterminatedString => LexError::unterminated_string(span),
                    RawLexError::UnterminatedTemplate => LexError::unterminated_template(span),
                    RawLexError::UnterminatedBlockComment => LexError::unterminated_block_comment(span),
                    RawLexError::InvalidEscape(c) => LexError::invalid_escape(c, span),
                });
            }
        }
    }

    tokens.push(SpannedToken { token: Token::Eof, span: Span::new(pos, pos) });
    tracing::debug!(tokens = tokens.len(), errors = handler.err_count(), "tokenized input");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Keyword;

    fn tokens_of(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let tokens = tokenize(&handler, source);
        assert_eq!(handler.err_count(), 0, "unexpected lex errors for {source:?}");
        tokens.into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_tokenizer() {
        let raw = r#"
    "salve"
    `templum ${x}`
    nomen_12
    42
    0xFF
    3.14
    99n
    fixum
    varia
    si
    vel
    post
    !
    !=
    !==
    !.
    ==
    ===
    =>
    ->
    ..
    ?
    ?.
    <
    <=
    <<
    ( ) { } [ ] , ; :
    "#;
        let handler = Handler::new();
        let tokens = tokenize(&handler, raw);
        assert_eq!(handler.err_count(), 0);
        let mut output = String::new();
        for SpannedToken { token, .. } in tokens.iter() {
            output += &format!("{token} ");
        }
        assert_eq!(
            output,
            "\"salve\" `templum ${x}` nomen_12 42 0xFF 3.14 99n fixum varia si vel post \
             ! != !== !. == === => -> .. ? ?. < <= << ( ) { } [ ] , ; : <eof> "
        );
    }

    #[test]
    fn test_keyword_reclassification() {
        let tokens = tokens_of("fixum custodia");
        assert_eq!(tokens[0], Token::Keyword(Keyword::Fixum));
        // Not a keyword, merely prefixed by one.
        assert_eq!(tokens[1], Token::Ident("custodia".into()));
    }

    #[test]
    fn test_post_is_an_identifier() {
        let tokens = tokens_of("cura post");
        assert_eq!(tokens[0], Token::Keyword(Keyword::Cura));
        assert_eq!(tokens[1], Token::Ident("post".into()));
    }

    #[test]
    fn test_chain_disambiguation() {
        // `?` binds into a chain only before `.`, `[`, or `(`.
        assert_eq!(tokens_of("a?.b")[1], Token::QuestionDot);
        assert_eq!(tokens_of("a?[0]")[1], Token::QuestionBracket);
        assert_eq!(tokens_of("a?(b)")[1], Token::QuestionParen);
        assert_eq!(tokens_of("a ? b : c")[1], Token::Question);
        assert_eq!(tokens_of("a!.b")[1], Token::BangDot);
        assert_eq!(tokens_of("a!")[1], Token::Bang);
        // Equality beats the chain forms.
        assert_eq!(tokens_of("a != b")[1], Token::NotEq);
        assert_eq!(tokens_of("a !== b")[1], Token::StrictNotEq);
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(tokens_of("a === b")[1], Token::StrictEq);
        assert_eq!(tokens_of("a == b")[1], Token::Eq);
        assert_eq!(tokens_of("a = b")[1], Token::Assign);
        assert_eq!(tokens_of("a << b")[1], Token::Shl);
        assert_eq!(tokens_of("0..10")[1], Token::DotDot);
    }

    #[test]
    fn test_string_escapes() {
        let tokens = tokens_of(r#""a\n\t\"b\\""#);
        assert_eq!(tokens[0], Token::StaticString("a\n\t\"b\\".into()));
    }

    #[test]
    fn test_template_is_verbatim() {
        let tokens = tokens_of("`salve ${nomen}\\n`");
        assert_eq!(tokens[0], Token::Template("salve ${nomen}\\n".into()));
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = tokens_of("1 // linea\n/* saeptum */ 2");
        assert_eq!(tokens, vec![Token::Int("1".into()), Token::Int("2".into()), Token::Eof]);
    }

    #[test]
    fn test_unterminated_string_recovers() {
        let handler = Handler::new();
        let tokens = tokenize(&handler, "\"apertum\nfixum x = 1");
        let errs = handler.extract_errs();
        assert_eq!(errs[0].error_code(), "L002");
        // Scanning continued past the error and still ends in Eof.
        assert_eq!(tokens.last().unwrap().token, Token::Eof);
        assert!(tokens.iter().any(|t| t.token == Token::Keyword(Keyword::Fixum)));
    }

    #[test]
    fn test_unexpected_character_recovers() {
        let handler = Handler::new();
        let tokens = tokenize(&handler, "a @ b");
        let errs = handler.extract_errs();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_code(), "L001");
        assert_eq!(tokens.len(), 3); // a, b, eof
    }

    #[test]
    fn test_invalid_escape() {
        let handler = Handler::new();
        tokenize(&handler, r#""a\qb""#);
        assert_eq!(handler.extract_errs()[0].error_code(), "L005");
    }

    #[test]
    fn test_positions() {
        let handler = Handler::new();
        let tokens = tokenize(&handler, "fixum x\n  = 1");
        assert_eq!(tokens[0].span.start, Position::new(1, 1, 0));
        assert_eq!(tokens[1].span.start, Position::new(1, 7, 6));
        assert_eq!(tokens[2].span.start, Position::new(2, 3, 10));
        assert_eq!(tokens[3].span.start, Position::new(2, 5, 12));
    }

    #[test]
    fn test_token_json() {
        let handler = Handler::new();
        let tokens = tokenize(&handler, "fixum");
        let json = serde_json::to_value(&tokens[0]).unwrap();
        assert_eq!(json["kind"], "keyword");
        assert_eq!(json["value"], "fixum");
        assert_eq!(json["keyword"], "fixum");
        assert_eq!(json["position"]["line"], 1);
        assert_eq!(json["position"]["column"], 1);
        assert_eq!(json["position"]["offset"], 0);
    }

    #[test]
    fn test_empty_input() {
        let handler = Handler::new();
        let tokens = tokenize(&handler, "");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, Token::Eof);
        assert_eq!(handler.err_count(), 0);
    }
}
