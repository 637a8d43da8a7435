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

use crate::lexicon::{Keyword, KeywordCategory};
use crate::tokenizer::{SpannedToken, Token};

use faber_ast::Identifier;
use faber_errors::emitter::Handler;
use faber_errors::{FaberError, ParserError, Result};
use faber_span::Span;

use std::fmt::Display;
use std::mem;

/// Stores a program in tokenized format plus additional context.
/// May be converted into a [`Program`](faber_ast::Program) by parsing all
/// tokens.
pub struct ParserContext<'a> {
    /// Handler used to side-channel emit errors from the parser.
    pub(crate) handler: &'a Handler,
    /// All un-bumped tokens, reversed so `pop` is cheap.
    tokens: Vec<SpannedToken>,
    /// The current token.
    pub(crate) token: SpannedToken,
    /// The previous token.
    pub(crate) prev_token: SpannedToken,
}

impl<'a> ParserContext<'a> {
    /// Returns a new [`ParserContext`] type given a vector of tokens.
    pub fn new(handler: &'a Handler, mut tokens: Vec<SpannedToken>) -> Self {
        // For performance we reverse so that we get cheap `.pop()`s.
        tokens.reverse();

        let token = SpannedToken::dummy();
        let mut p = Self { handler, prev_token: token.clone(), token, tokens };
        p.bump();
        p
    }

    /// Advances the parser cursor by one token.
    ///
    /// At the end of input this is a no-op: the current token stays `Eof`
    /// and no state changes, so no input can push the cursor past the end.
    pub fn bump(&mut self) {
        if matches!(self.token.token, Token::Eof) && !self.token.span.is_dummy() {
            return;
        }

        let next_token = self
            .tokens
            .pop()
            .unwrap_or_else(|| SpannedToken { token: Token::Eof, span: self.token.span });

        self.prev_token = mem::replace(&mut self.token, next_token);
    }

    /// Checks whether the current token is `token`.
    pub fn check(&self, tok: &Token) -> bool {
        &self.token.token == tok
    }

    /// Checks whether the current token is the keyword `keyword`.
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.token.token.keyword() == Some(keyword)
    }

    /// Checks whether the current token is an identifier with the exact
    /// lexeme `lexeme`. Used for `post`, which the lexicon leaves an
    /// identifier on purpose.
    pub fn check_ident_lexeme(&self, lexeme: &str) -> bool {
        matches!(&self.token.token, Token::Ident(name) if name == lexeme)
    }

    /// Removes the next token if it matches and returns true.
    pub fn eat(&mut self, token: &Token) -> bool {
        self.check(token).then(|| self.bump()).is_some()
    }

    /// Removes the next token if it is the keyword `keyword`.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.check_keyword(keyword).then(|| self.bump()).is_some()
    }

    /// Eats any of the given `tokens`, returning `true` if anything was
    /// eaten.
    pub fn eat_any(&mut self, tokens: &[Token]) -> bool {
        tokens.iter().any(|x| self.check(x)).then(|| self.bump()).is_some()
    }

    /// Look-ahead `dist` tokens of `self.token` and get access to that token
    /// there. When `dist == 0` then the current token is looked at.
    pub fn look_ahead<R>(&self, dist: usize, looker: impl FnOnce(&SpannedToken) -> R) -> R {
        if dist == 0 {
            return looker(&self.token);
        }

        let eof = SpannedToken { token: Token::Eof, span: Span::dummy() };

        match self.tokens.len().checked_sub(dist) {
            None => looker(&eof),
            Some(idx) => looker(self.tokens.get(idx).unwrap_or(&eof)),
        }
    }

    /// Emit the error `err`.
    pub(crate) fn emit_err(&self, err: impl Into<FaberError>) {
        self.handler.emit_err(err);
    }

    /// Returns true if the next token exists.
    pub fn has_next(&self) -> bool {
        !matches!(self.token.token, Token::Eof)
    }

    /// At the previous token, return and make an identifier with `name`.
    fn mk_ident_prev(&self, name: String) -> Identifier {
        Identifier::new(name, self.prev_token.span)
    }

    /// Eats the next token if it is an identifier and returns it.
    pub fn eat_identifier(&mut self) -> Option<Identifier> {
        if let Token::Ident(name) = &self.token.token {
            let name = name.clone();
            self.bump();
            return Some(self.mk_ident_prev(name));
        }
        None
    }

    /// Expects an [`Identifier`], or records a diagnostic, advances one
    /// token, and returns a synthetic identifier. Advancing on failure
    /// keeps adversarial inputs from spinning.
    pub fn expect_identifier(&mut self) -> Identifier {
        if let Some(ident) = self.eat_identifier() {
            return ident;
        }
        self.emit_err(ParserError::expected_token("identifier", &self.token.token, self.token.span));
        let span = self.token.span;
        self.bump();
        Identifier::new("_erratum", span)
    }

    /// Eats the expected `token`, or records a diagnostic and advances one
    /// token, returning the span as if the token had been present.
    pub fn expect(&mut self, token: &Token) -> Span {
        if self.eat(token) {
            return self.prev_token.span;
        }
        self.emit_err(ParserError::expected_token(token, &self.token.token, self.token.span));
        let span = self.token.span;
        self.bump();
        span
    }

    /// Eats the expected keyword, or records a diagnostic and advances one
    /// token.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Span {
        if self.eat_keyword(keyword) {
            return self.prev_token.span;
        }
        self.emit_err(ParserError::expected_keyword(keyword, &self.token.token, self.token.span));
        let span = self.token.span;
        self.bump();
        span
    }

    /// Returns an unexpected-expression error at the current token.
    pub(crate) fn unexpected<T>(&self, found: impl Display) -> Result<T> {
        Err(ParserError::unexpected_expression_start(found, self.token.span).into())
    }

    /// Parses a list of `T`s using `inner`.
    /// The opening and closing delimiters are `open` and `close`, and
    /// elements in the list are separated by `sep`.
    pub(crate) fn parse_list<T>(
        &mut self,
        open: Token,
        close: Token,
        sep: Token,
        mut inner: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<(Vec<T>, Span)> {
        let mut list = Vec::new();

        let open_span = self.expect(&open);

        while !self.check(&close) && self.has_next() {
            // Parse the element. We allow inner parser recovery through the
            // `Option`.
            if let Some(elem) = inner(self)? {
                list.push(elem);
            }
            if !self.eat(&sep) {
                break;
            }
        }

        let span = open_span + self.expect(&close);
        Ok((list, span))
    }

    /// Parse a list separated by `,` and delimited by parens.
    pub(crate) fn parse_paren_comma_list<T>(
        &mut self,
        f: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<(Vec<T>, Span)> {
        self.parse_list(Token::LeftParen, Token::RightParen, Token::Comma, f)
    }

    /// True if the current token begins a statement: a declaration opener,
    /// control-flow keyword, console verb, or test keyword.
    pub(crate) fn at_statement_start(&self) -> bool {
        match self.token.token.keyword() {
            Some(k) => matches!(
                k.category(),
                KeywordCategory::Declaration
                    | KeywordCategory::ControlFlow
                    | KeywordCategory::Console
                    | KeywordCategory::Test
            ),
            None => false,
        }
    }

    /// Skips tokens until one that plausibly begins a new statement, or the
    /// end of input. Always advances at least one token.
    pub(crate) fn synchronize(&mut self) {
        if self.has_next() {
            self.bump();
        }
        while self.has_next() && !self.at_statement_start() {
            self.bump();
        }
    }

    /// Member-level synchronization inside a `genus` body: stops at a
    /// plausible member start (`functio`, a modifier, an identifier) or the
    /// closing brace. Always advances at least one token.
    pub(crate) fn synchronize_genus_member(&mut self) {
        if self.has_next() && !self.check(&Token::RightCurly) {
            self.bump();
        }
        while self.has_next() && !self.check(&Token::RightCurly) {
            let at_member = matches!(&self.token.token, Token::Ident(_))
                || matches!(
                    self.token.token.keyword(),
                    Some(Keyword::Functio)
                        | Some(Keyword::Publicus)
                        | Some(Keyword::Privatus)
                        | Some(Keyword::Generis)
                        | Some(Keyword::Nexum)
                        | Some(Keyword::Futura)
                        | Some(Keyword::Cursor)
                );
            if at_member {
                break;
            }
            self.bump();
        }
    }
}
