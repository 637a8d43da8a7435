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

use super::*;

use crate::lexicon::is_builtin_type;

impl ParserContext<'_> {
    /// True if the tokens at `dist` read like a type annotation followed by
    /// a name: identifier-then-identifier, identifier-then-`<`, or
    /// identifier-then-`[`, with an optional ownership preposition in
    /// front. This is the lookahead behind type-first declarations.
    pub(crate) fn peek_is_type_ahead(&self) -> bool {
        let dist = match self.token.token.keyword() {
            Some(Keyword::De) | Some(Keyword::Ex) | Some(Keyword::In) => 1,
            _ => 0,
        };
        let head_is_ident = self.look_ahead(dist, |t| matches!(t.token, Token::Ident(_)));
        if !head_is_ident {
            return false;
        }
        self.look_ahead(dist + 1, |t| {
            matches!(t.token, Token::Ident(_) | Token::Lt | Token::LeftSquare)
        })
    }

    /// Eats one `>` inside a type argument list. A `>>` left over from
    /// nested generics is split: the first half closes this list, the
    /// second half stays current.
    fn eat_gt_in_type(&mut self) -> bool {
        if self.eat(&Token::Gt) {
            return true;
        }
        if self.check(&Token::Shr) {
            self.token.token = Token::Gt;
            return true;
        }
        false
    }

    /// Returns a [`TypeAnnotation`] at the current token, or errors.
    ///
    /// Shape: `[de|ex|in] name [<args>] [[]] [?] [| alternative ...]`.
    pub(crate) fn parse_type(&mut self) -> Result<TypeAnnotation> {
        let preposition = match self.token.token.keyword() {
            Some(Keyword::De) => {
                self.bump();
                Some(Preposition::De)
            }
            Some(Keyword::Ex) => {
                self.bump();
                Some(Preposition::Ex)
            }
            Some(Keyword::In) => {
                self.bump();
                Some(Preposition::In)
            }
            _ => None,
        };

        let Some(name) = self.eat_identifier() else {
            return Err(ParserError::expected_type_name(&self.token.token, self.token.span).into());
        };
        let mut span = name.span;
        let mut annotation = TypeAnnotation::plain(name);
        annotation.preposition = preposition;

        if self.eat(&Token::Lt) {
            loop {
                annotation.type_parameters.push(self.parse_type_parameter_arg()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
            if !self.eat_gt_in_type() {
                self.expect(&Token::Gt);
            }
            span = span + self.prev_token.span;
        }

        if self.check(&Token::LeftSquare) {
            self.bump();
            span = span + self.expect(&Token::RightSquare);
            annotation.array_shorthand = true;
        }

        if self.eat(&Token::Question) {
            span = span + self.prev_token.span;
            annotation.nullable = true;
        }

        while self.eat(&Token::BitOr) {
            let alternative = self.parse_type()?;
            span = span + alternative.span;
            annotation.union.push(alternative);
        }

        annotation.span = span + self.prev_token.span;
        Ok(annotation)
    }

    /// One argument inside a type's angle brackets: a nested type, a
    /// numeric literal (bit width), or a bare modifier identifier.
    fn parse_type_parameter_arg(&mut self) -> Result<TypeParameterArg> {
        if let Token::Int(text) = &self.token.token {
            let text = text.clone();
            self.bump();
            return Ok(TypeParameterArg::Number(text));
        }
        // Width and representation modifiers, e.g. `numerus<brevis>`.
        // Anything else stays a nested type annotation.
        const MODIFIERS: &[&str] = &["brevis", "longus", "magnus", "parvus", "duplex", "solidus"];
        if let Token::Ident(name) = &self.token.token {
            if MODIFIERS.contains(&name.as_str()) && !is_builtin_type(name) {
                let ident = self.eat_identifier().expect("checked above");
                return Ok(TypeParameterArg::Modifier(ident));
            }
        }
        Ok(TypeParameterArg::Type(self.parse_type()?))
    }

    /// Parses `<T, U>` generic parameter declarations on a type
    /// declaration, checking for duplicates and emptiness.
    pub(crate) fn parse_type_parameter_names(&mut self) -> Result<Vec<Identifier>> {
        let mut names: Vec<Identifier> = Vec::new();
        if !self.eat(&Token::Lt) {
            return Ok(names);
        }
        if self.eat_gt_in_type() {
            self.emit_err(ParserError::empty_generic_parameters(self.prev_token.span));
            return Ok(names);
        }
        loop {
            let name = self.expect_identifier();
            if names.iter().any(|n| n.name == name.name) {
                self.emit_err(ParserError::duplicate_generic_parameter(&name.name, name.span));
            } else {
                names.push(name);
            }
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        if !self.eat_gt_in_type() {
            self.expect(&Token::Gt);
        }
        Ok(names)
    }
}
