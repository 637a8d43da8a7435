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

impl ParserContext<'_> {
    /// Eats a variable declaration keyword, if the current token is one.
    pub(crate) fn eat_variable_kind(&mut self) -> Option<VariableKind> {
        let kind = match self.token.token.keyword()? {
            Keyword::Varia => VariableKind::Varia,
            Keyword::Fixum => VariableKind::Fixum,
            Keyword::Figendum => VariableKind::Figendum,
            Keyword::Variandum => VariableKind::Variandum,
            _ => return None,
        };
        self.bump();
        Some(kind)
    }

    /// Parses `varia`/`fixum`/`figendum`/`variandum` declarations, with
    /// type-first annotations and destructuring patterns:
    /// `fixum textus nomen = "anon"`, `fixum { nomen ut n } = persona`.
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<Declaration> {
        let start = self.token.span;
        let kind = self.eat_variable_kind().expect("caller checked the keyword");

        let (type_annotation, pattern) = if matches!(self.token.token, Token::LeftCurly | Token::LeftSquare) {
            (None, self.parse_pattern()?)
        } else {
            let annotation = if self.peek_is_type_ahead() { Some(self.parse_type()?) } else { None };
            let Some(name) = self.eat_identifier() else {
                return Err(ParserError::missing_declaration_name(kind, self.token.span).into());
            };
            (annotation, Pattern::Identifier(name))
        };

        let initializer = if self.eat(&Token::Assign) { Some(self.parse_expression()?) } else { None };

        let span = start + initializer.as_ref().map_or(pattern.span(), |i| i.span());
        Ok(Declaration::Variable(VariableDeclaration { kind, type_annotation, pattern, initializer, span }))
    }

    /// Parses a destructuring pattern. Patterns admit only names, `ut` (or
    /// `:`) renames, `ceteri` rests, and `_` skips; the JS-style `...` is a
    /// diagnostic with recovery.
    pub(crate) fn parse_pattern(&mut self) -> Result<Pattern> {
        match &self.token.token {
            Token::LeftCurly => self.parse_object_pattern().map(Pattern::Object),
            Token::LeftSquare => self.parse_array_pattern().map(Pattern::Array),
            Token::Ident(_) => Ok(Pattern::Identifier(self.eat_identifier().expect("matched above"))),
            found => Err(ParserError::invalid_pattern_element(found, self.token.span).into()),
        }
    }

    /// Consumes a JS-style `...` spread inside a pattern, records the
    /// diagnostic, and salvages the binding that follows if there is one.
    fn eat_forbidden_spread(&mut self) -> Option<Identifier> {
        self.emit_err(ParserError::spread_in_pattern(self.token.span));
        self.bump(); // `..`
        self.eat(&Token::Dot); // the third dot
        self.eat_identifier()
    }

    fn parse_object_pattern(&mut self) -> Result<ObjectPattern> {
        let (entries, span) =
            self.parse_list(Token::LeftCurly, Token::RightCurly, Token::Comma, |p| {
                if p.eat_keyword(Keyword::Ceteri) {
                    return Ok(Some(ObjectPatternEntry::Rest(p.expect_identifier())));
                }
                if p.check(&Token::DotDot) {
                    return Ok(p.eat_forbidden_spread().map(ObjectPatternEntry::Rest));
                }
                if let Some(key) = p.eat_identifier() {
                    let alias = if p.eat_keyword(Keyword::Ut) || p.eat(&Token::Colon) {
                        Some(p.expect_identifier())
                    } else {
                        None
                    };
                    return Ok(Some(ObjectPatternEntry::Field { key, alias }));
                }
                p.emit_err(ParserError::invalid_pattern_element(&p.token.token, p.token.span));
                p.bump();
                Ok(None)
            })?;
        Ok(ObjectPattern { entries, span })
    }

    fn parse_array_pattern(&mut self) -> Result<ArrayPattern> {
        let (elements, span) =
            self.parse_list(Token::LeftSquare, Token::RightSquare, Token::Comma, |p| {
                if p.eat_keyword(Keyword::Ceteri) {
                    return Ok(Some(ArrayPatternElement::Rest(p.expect_identifier())));
                }
                if p.check(&Token::DotDot) {
                    return Ok(p.eat_forbidden_spread().map(ArrayPatternElement::Rest));
                }
                if let Some(name) = p.eat_identifier() {
                    if name.name == "_" {
                        return Ok(Some(ArrayPatternElement::Skip));
                    }
                    return Ok(Some(ArrayPatternElement::Identifier(name)));
                }
                p.emit_err(ParserError::invalid_pattern_element(&p.token.token, p.token.span));
                p.bump();
                Ok(None)
            })?;
        Ok(ArrayPattern { elements, span })
    }

    /// One parameter: `[type] name [: default]`.
    pub(crate) fn parse_parameter(&mut self) -> Result<Parameter> {
        let start = self.token.span;
        let type_annotation = if self.peek_is_type_ahead() { Some(self.parse_type()?) } else { None };
        let name = self.expect_identifier();
        let default = if self.eat(&Token::Colon) { Some(self.parse_expression()?) } else { None };
        let span = start + default.as_ref().map_or(name.span, |d| d.span());
        Ok(Parameter { type_annotation, name, default, span })
    }

    /// Like [`parse_parameter`](Self::parse_parameter) but without a
    /// default: lambda bodies start with `:`, so a default would be
    /// swallowed.
    pub(crate) fn parse_lambda_parameter(&mut self) -> Result<Parameter> {
        let start = self.token.span;
        let type_annotation = if self.peek_is_type_ahead() { Some(self.parse_type()?) } else { None };
        let name = self.expect_identifier();
        let span = start + name.span;
        Ok(Parameter { type_annotation, name, default: None, span })
    }

    /// Parses a function declaration, with optional `futura`/`cursor`
    /// prefixes: `futura functio pete(textus url) -> textus { ... }`.
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Declaration> {
        let start = self.token.span;

        let mut prefix_async = false;
        let mut prefix_generator = false;
        loop {
            if self.eat_keyword(Keyword::Futura) {
                prefix_async = true;
            } else if self.eat_keyword(Keyword::Cursor) {
                prefix_generator = true;
            } else {
                break;
            }
        }

        self.expect_keyword(Keyword::Functio);
        let function = self.parse_function_core(start, prefix_async, prefix_generator)?;
        Ok(Declaration::Function(Box::new(function)))
    }

    /// The shared core of function and method parsing: name, parameter
    /// list, return signature, conflict checks, body.
    pub(crate) fn parse_function_core(
        &mut self,
        start: Span,
        prefix_async: bool,
        prefix_generator: bool,
    ) -> Result<Function> {
        let name = if self.eat_keyword(Keyword::Creo) {
            Identifier::new("creo", self.prev_token.span)
        } else {
            match self.eat_identifier() {
                Some(name) => name,
                None => {
                    return Err(ParserError::missing_declaration_name(Keyword::Functio, self.token.span).into());
                }
            }
        };

        let (type_parameters, parameters) = self.parse_function_parameters()?;
        let (return_verb, return_type) = self.parse_return_signature()?;

        // The conjugated verbs already encode sync/async and singular/
        // plural; a prefix on top of one is a contradiction, not a merge.
        if let Some(verb) = return_verb {
            if verb.is_conjugated() {
                if prefix_async {
                    self.emit_err(ParserError::prefix_verb_conflict(Keyword::Futura, verb, self.prev_token.span));
                }
                if prefix_generator {
                    self.emit_err(ParserError::prefix_verb_conflict(Keyword::Cursor, verb, self.prev_token.span));
                }
            }
        }

        let variant = FunctionVariant {
            is_async: prefix_async || return_verb.is_some_and(|v| v.is_async()),
            is_generator: prefix_generator || return_verb.is_some_and(|v| v.is_generator()),
        };

        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(Function { name, type_parameters, parameters, variant, return_verb, return_type, body, span })
    }

    /// Parses the parenthesized parameter list, splitting out `prae typus`
    /// generic parameters, which must precede the regular ones.
    fn parse_function_parameters(&mut self) -> Result<(Vec<Identifier>, Vec<Parameter>)> {
        let mut type_parameters: Vec<Identifier> = Vec::new();
        let mut parameters = Vec::new();
        let mut seen_regular = false;

        self.expect(&Token::LeftParen);
        while !self.check(&Token::RightParen) && self.has_next() {
            if self.eat_keyword(Keyword::Prae) {
                self.expect_keyword(Keyword::Typus);
                let name = self.expect_identifier();
                if seen_regular {
                    self.emit_err(ParserError::late_type_parameter(name.span));
                }
                if type_parameters.iter().any(|t| t.name == name.name) {
                    self.emit_err(ParserError::duplicate_generic_parameter(&name.name, name.span));
                } else {
                    type_parameters.push(name);
                }
            } else {
                parameters.push(self.parse_parameter()?);
                seen_regular = true;
            }
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(&Token::RightParen);

        Ok((type_parameters, parameters))
    }

    /// Parses the return signature: `-> T`, or a conjugated verb with an
    /// optional type.
    fn parse_return_signature(&mut self) -> Result<(Option<ReturnVerb>, Option<TypeAnnotation>)> {
        if self.eat(&Token::Arrow) {
            return Ok((Some(ReturnVerb::Arrow), Some(self.parse_type()?)));
        }

        let verb = match self.token.token.keyword() {
            Some(Keyword::Fit) => ReturnVerb::Fit,
            Some(Keyword::Fiet) => ReturnVerb::Fiet,
            Some(Keyword::Fiunt) => ReturnVerb::Fiunt,
            Some(Keyword::Fient) => ReturnVerb::Fient,
            _ => return Ok((None, None)),
        };
        self.bump();

        let return_type =
            if matches!(self.token.token, Token::Ident(_)) { Some(self.parse_type()?) } else { None };
        Ok((Some(verb), return_type))
    }

    /// Parses a `genus` declaration: fields and methods in any order, with
    /// member-level recovery.
    pub(crate) fn parse_genus_declaration(&mut self) -> Result<Declaration> {
        let start = self.expect_keyword(Keyword::Genus);
        let Some(name) = self.eat_identifier() else {
            return Err(ParserError::missing_declaration_name(Keyword::Genus, self.token.span).into());
        };
        let type_parameters = self.parse_type_parameter_names()?;

        self.expect(&Token::LeftCurly);
        let mut members = Vec::new();
        while !self.check(&Token::RightCurly) && self.has_next() {
            if self.eat(&Token::Semicolon) {
                continue;
            }
            match self.parse_genus_member() {
                Ok(member) => members.push(member),
                Err(err) => {
                    self.emit_err(err);
                    self.synchronize_genus_member();
                }
            }
        }
        let span = start + self.expect(&Token::RightCurly);

        Ok(Declaration::Genus(GenusDeclaration { name, type_parameters, members, span }))
    }

    /// One `genus` member: modifiers, then a method (`functio ...`) or a
    /// type-then-name field with optional `: default`.
    fn parse_genus_member(&mut self) -> Result<GenusMember> {
        let start = self.token.span;

        let mut modifiers = MemberModifiers::default();
        let mut prefix_async = false;
        let mut prefix_generator = false;
        loop {
            match self.token.token.keyword() {
                Some(Keyword::Publicus) => {
                    self.bump();
                    modifiers.public = true;
                }
                Some(Keyword::Privatus) => {
                    self.bump();
                    modifiers.private = true;
                }
                Some(Keyword::Generis) => {
                    self.bump();
                    modifiers.static_ = true;
                }
                Some(Keyword::Nexum) => {
                    self.bump();
                    modifiers.reactive = true;
                }
                Some(Keyword::Futura) => {
                    self.bump();
                    prefix_async = true;
                }
                Some(Keyword::Cursor) => {
                    self.bump();
                    prefix_generator = true;
                }
                _ => break,
            }
        }

        if self.eat_keyword(Keyword::Functio) {
            let is_constructor = self.check_keyword(Keyword::Creo);
            let function = self.parse_function_core(start, prefix_async, prefix_generator)?;
            let span = start + function.span;
            return Ok(GenusMember::Method(GenusMethod { modifiers, function, is_constructor, span }));
        }

        if !matches!(self.token.token, Token::Ident(_)) {
            return Err(ParserError::expected_genus_member(&self.token.token, self.token.span).into());
        }

        let type_annotation = self.parse_type()?;
        let name = self.expect_identifier();
        let default = if self.eat(&Token::Colon) { Some(self.parse_expression()?) } else { None };
        let span = start + default.as_ref().map_or(name.span, |d| d.span());
        Ok(GenusMember::Field(GenusField { modifiers, type_annotation, name, default, span }))
    }

    /// Parses a `pactum` declaration: method signatures only.
    pub(crate) fn parse_pactum_declaration(&mut self) -> Result<Declaration> {
        let start = self.expect_keyword(Keyword::Pactum);
        let Some(name) = self.eat_identifier() else {
            return Err(ParserError::missing_declaration_name(Keyword::Pactum, self.token.span).into());
        };
        let type_parameters = self.parse_type_parameter_names()?;

        self.expect(&Token::LeftCurly);
        let mut methods = Vec::new();
        while !self.check(&Token::RightCurly) && self.has_next() {
            if self.eat(&Token::Semicolon) {
                continue;
            }
            if !self.check_keyword(Keyword::Functio) {
                self.emit_err(ParserError::expected_keyword(Keyword::Functio, &self.token.token, self.token.span));
                self.synchronize_genus_member();
                continue;
            }
            let method_start = self.expect_keyword(Keyword::Functio);
            let method_name = self.expect_identifier();
            let (_, parameters) = self.parse_function_parameters()?;
            let (return_verb, return_type) = self.parse_return_signature()?;
            let span = method_start + self.prev_token.span;
            methods.push(PactumMethod { name: method_name, parameters, return_verb, return_type, span });
        }
        let span = start + self.expect(&Token::RightCurly);

        Ok(Declaration::Pactum(PactumDeclaration { name, type_parameters, methods, span }))
    }

    /// Parses `typus Nomen = textus`.
    pub(crate) fn parse_type_alias_declaration(&mut self) -> Result<Declaration> {
        let start = self.expect_keyword(Keyword::Typus);
        let Some(name) = self.eat_identifier() else {
            return Err(ParserError::missing_declaration_name(Keyword::Typus, self.token.span).into());
        };
        let type_parameters = self.parse_type_parameter_names()?;
        self.expect(&Token::Assign);
        let aliased = self.parse_type()?;
        let span = start + aliased.span;
        Ok(Declaration::TypeAlias(TypeAliasDeclaration { name, type_parameters, aliased, span }))
    }

    /// Parses `ordo color { ruber = 1, viridis, caeruleus = "blau" }`.
    /// Member separators are optional commas.
    pub(crate) fn parse_ordo_declaration(&mut self) -> Result<Declaration> {
        let start = self.expect_keyword(Keyword::Ordo);
        let Some(name) = self.eat_identifier() else {
            return Err(ParserError::missing_declaration_name(Keyword::Ordo, self.token.span).into());
        };

        self.expect(&Token::LeftCurly);
        let mut members = Vec::new();
        while !self.check(&Token::RightCurly) && self.has_next() {
            let Some(member_name) = self.eat_identifier() else {
                self.emit_err(ParserError::expected_token("identifier", &self.token.token, self.token.span));
                self.bump();
                continue;
            };
            let mut value = None;
            if self.eat(&Token::Assign) {
                value = match &self.token.token {
                    Token::Int(text) => {
                        let text = text.clone();
                        self.bump();
                        Some(OrdoValue::Integer(text))
                    }
                    Token::StaticString(text) => {
                        let text = text.clone();
                        self.bump();
                        Some(OrdoValue::String(text))
                    }
                    found => {
                        self.emit_err(ParserError::invalid_enum_value(found, self.token.span));
                        self.bump();
                        None
                    }
                };
            }
            let span = member_name.span;
            members.push(OrdoMember { name: member_name, value, span });
            self.eat(&Token::Comma);
        }
        let span = start + self.expect(&Token::RightCurly);

        Ok(Declaration::Ordo(OrdoDeclaration { name, members, span }))
    }

    /// Parses a `discretio` declaration. An empty body is accepted.
    pub(crate) fn parse_discretio_declaration(&mut self) -> Result<Declaration> {
        let start = self.expect_keyword(Keyword::Discretio);
        let Some(name) = self.eat_identifier() else {
            return Err(ParserError::missing_declaration_name(Keyword::Discretio, self.token.span).into());
        };
        let type_parameters = self.parse_type_parameter_names()?;

        self.expect(&Token::LeftCurly);
        let mut variants = Vec::new();
        while !self.check(&Token::RightCurly) && self.has_next() {
            let Some(variant_name) = self.eat_identifier() else {
                self.emit_err(ParserError::expected_token("identifier", &self.token.token, self.token.span));
                self.bump();
                continue;
            };
            let mut fields = Vec::new();
            if self.check(&Token::LeftParen) {
                let (list, _) = self.parse_paren_comma_list(|p| {
                    let field_start = p.token.span;
                    let type_annotation = p.parse_type()?;
                    let field_name = p.expect_identifier();
                    let span = field_start + field_name.span;
                    Ok(Some(VariantField { type_annotation, name: field_name, span }))
                })?;
                fields = list;
            }
            let span = variant_name.span;
            variants.push(DiscretioVariant { name: variant_name, fields, span });
            self.eat(&Token::Comma);
        }
        let span = start + self.expect(&Token::RightCurly);

        Ok(Declaration::Discretio(DiscretioDeclaration { name, type_parameters, variants, span }))
    }

    /// Parses `ex "norma/textus" importa { maiuscula ut magna }` or
    /// `ex norma importa norma`.
    pub(crate) fn parse_import_declaration(&mut self) -> Result<Declaration> {
        let start = self.expect_keyword(Keyword::Ex);

        let source = if let Token::StaticString(path) = &self.token.token {
            let path = path.clone();
            self.bump();
            ImportSource::Path(path)
        } else {
            ImportSource::Module(self.expect_identifier())
        };

        self.expect_keyword(Keyword::Importa);

        let mut items = Vec::new();
        let mut default_import = None;
        if self.check(&Token::LeftCurly) {
            let (list, _) = self.parse_list(Token::LeftCurly, Token::RightCurly, Token::Comma, |p| {
                let item_start = p.token.span;
                let name = p.expect_identifier();
                let alias = if p.eat_keyword(Keyword::Ut) { Some(p.expect_identifier()) } else { None };
                let span = item_start + p.prev_token.span;
                Ok(Some(ImportItem { name, alias, span }))
            })?;
            items = list;
        } else {
            default_import = Some(self.expect_identifier());
        }

        let span = start + self.prev_token.span;
        Ok(Declaration::Import(ImportDeclaration { source, items, default_import, span }))
    }
}
