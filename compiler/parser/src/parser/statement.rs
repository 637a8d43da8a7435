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

const ASSIGN_TOKENS: &[Token] = &[
    Token::Assign,
    Token::AddAssign,
    Token::SubAssign,
    Token::MulAssign,
    Token::DivAssign,
    Token::RemAssign,
    Token::AndAssign,
    Token::OrAssign,
];

impl ParserContext<'_> {
    /// Returns a [`Statement`] AST node if the next tokens represent a
    /// statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        let Some(keyword) = self.token.token.keyword() else {
            return self.parse_assign_statement();
        };

        match keyword {
            Keyword::Varia | Keyword::Fixum | Keyword::Figendum | Keyword::Variandum => {
                Ok(Statement::Declaration(self.parse_variable_declaration()?))
            }
            Keyword::Functio | Keyword::Futura | Keyword::Cursor => {
                Ok(Statement::Declaration(self.parse_function_declaration()?))
            }
            Keyword::Genus => Ok(Statement::Declaration(self.parse_genus_declaration()?)),
            Keyword::Pactum => Ok(Statement::Declaration(self.parse_pactum_declaration()?)),
            Keyword::Typus => Ok(Statement::Declaration(self.parse_type_alias_declaration()?)),
            Keyword::Ordo => Ok(Statement::Declaration(self.parse_ordo_declaration()?)),
            Keyword::Discretio => Ok(Statement::Declaration(self.parse_discretio_declaration()?)),
            Keyword::Ex => self.parse_ex_statement(),
            Keyword::De => self.parse_iteration_statement(IterationKind::De),
            Keyword::In => self.parse_iteration_statement(IterationKind::In),
            Keyword::Si => Ok(Statement::Conditional(self.parse_conditional_statement()?)),
            Keyword::Dum => self.parse_while_statement(),
            Keyword::Elige => self.parse_elige_statement(),
            Keyword::Discerne => self.parse_discerne_statement(),
            Keyword::Custodi => self.parse_custodi_statement(),
            Keyword::Adfirma => self.parse_assert_statement(),
            Keyword::Redde => self.parse_return_statement(),
            Keyword::Iace => self.parse_throw_statement(false),
            Keyword::Mori => self.parse_throw_statement(true),
            Keyword::Rumpe => {
                let span = self.expect_keyword(Keyword::Rumpe);
                Ok(Statement::Break(BreakStatement { span }))
            }
            Keyword::Perge => {
                let span = self.expect_keyword(Keyword::Perge);
                Ok(Statement::Continue(ContinueStatement { span }))
            }
            Keyword::Tempta => self.parse_try_statement(),
            Keyword::Cura => self.parse_cura_statement(),
            Keyword::Fac => self.parse_fac_statement(),
            Keyword::Probatio => self.parse_probatio_statement(),
            Keyword::Proba => self.parse_proba_statement(),
            Keyword::Ad => self.parse_dispatch_statement(),
            Keyword::Scribe => self.parse_console_statement(ConsoleFunction::Scribe),
            Keyword::Vide => self.parse_console_statement(ConsoleFunction::Vide),
            Keyword::Mone => self.parse_console_statement(ConsoleFunction::Mone),
            // Expression-start keywords fall through to the expression
            // statement parser.
            Keyword::Verum
            | Keyword::Falsum
            | Keyword::Nihil
            | Keyword::Ego
            | Keyword::Novum
            | Keyword::Cede
            | Keyword::Non
            | Keyword::Nulla
            | Keyword::Nonnulla
            | Keyword::Nonnihil
            | Keyword::Negativum
            | Keyword::Positivum
            | Keyword::Praefixum
            | Keyword::Scriptum
            | Keyword::Pro
            | Keyword::Fit
            | Keyword::Fiet => self.parse_assign_statement(),
            _ => Err(ParserError::unexpected_statement_start(keyword, self.token.span).into()),
        }
    }

    /// Returns an assignment or expression statement.
    fn parse_assign_statement(&mut self) -> Result<Statement> {
        let place = self.parse_expression()?;

        if self.eat_any(ASSIGN_TOKENS) {
            // Determine the corresponding binary operation, if compound.
            let operation = match &self.prev_token.token {
                Token::Assign => None,
                Token::AddAssign => Some(BinaryOperation::Add),
                Token::SubAssign => Some(BinaryOperation::Sub),
                Token::MulAssign => Some(BinaryOperation::Mul),
                Token::DivAssign => Some(BinaryOperation::Div),
                Token::RemAssign => Some(BinaryOperation::Rem),
                Token::AndAssign => Some(BinaryOperation::BitwiseAnd),
                Token::OrAssign => Some(BinaryOperation::BitwiseOr),
                _ => unreachable!("`parse_assign_statement` shouldn't produce this"),
            };

            if !place.is_place() {
                self.emit_err(ParserError::invalid_assignment_target(place.span()));
            }

            let value = self.parse_expression()?;
            let span = place.span() + value.span();

            // Simplify compound assignments into simple assignments: `x += 1`
            // becomes `x = x + 1`.
            let value = match operation {
                None => value,
                Some(op) => Expression::Binary(BinaryExpression {
                    left: Box::new(place.clone()),
                    right: Box::new(value),
                    op,
                    string_operands: false,
                    span,
                }),
            };

            return Ok(Statement::Assign(Box::new(AssignStatement { span, place, value })));
        }

        Ok(Statement::Expression(ExpressionStatement { span: place.span(), expression: place }))
    }

    /// Returns a [`Block`] AST node if the next tokens represent a block of
    /// statements, recovering inside the braces.
    pub(crate) fn parse_block(&mut self) -> Result<Block> {
        let open = self.expect(&Token::LeftCurly);
        let mut statements = Vec::new();

        while !self.check(&Token::RightCurly) && self.has_next() {
            if self.eat(&Token::Semicolon) {
                continue;
            }
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    self.emit_err(err);
                    self.synchronize_in_block();
                }
            }
        }

        let span = open + self.expect(&Token::RightCurly);
        Ok(Block { statements, span })
    }

    /// Like [`synchronize`](Self::synchronize), but also stops at the brace
    /// that closes the current block.
    fn synchronize_in_block(&mut self) {
        if self.has_next() && !self.check(&Token::RightCurly) {
            self.bump();
        }
        while self.has_next() && !self.check(&Token::RightCurly) && !self.at_statement_start() {
            self.bump();
        }
    }

    /// Parses either a block body or an `ergo` one-liner wrapped into a
    /// synthetic one-element block.
    fn parse_loop_body(&mut self) -> Result<Block> {
        if self.eat_keyword(Keyword::Ergo) {
            let statement = self.parse_statement()?;
            let span = statement.span();
            return Ok(Block { statements: vec![statement], span });
        }
        self.parse_block()
    }

    /// Statements opening with `ex`: an import, an ex-destructuring, an
    /// iteration, or a pipeline expression.
    fn parse_ex_statement(&mut self) -> Result<Statement> {
        // `ex <ident-or-string> importa ...` is an import.
        let second_is_source =
            self.look_ahead(1, |t| matches!(t.token, Token::Ident(_) | Token::StaticString(_)));
        let third_is_importa =
            self.look_ahead(2, |t| t.token.keyword() == Some(Keyword::Importa));
        if second_is_source && third_is_importa {
            return Ok(Statement::Declaration(self.parse_import_declaration()?));
        }

        let start = self.expect_keyword(Keyword::Ex);
        let source = self.parse_expression()?;
        let transforms = self.parse_transforms()?;

        // `ex persona fixum { nomen }` destructures into fresh bindings.
        if let Some(kind) = self.eat_variable_kind() {
            let pattern = self.parse_pattern()?;
            let span = start + pattern.span();
            return Ok(Statement::Declaration(Declaration::Variable(VariableDeclaration {
                kind,
                type_annotation: None,
                pattern,
                initializer: Some(source),
                span,
            })));
        }

        if let Some(verb) = self.eat_iteration_verb() {
            return self.finish_iteration(IterationKind::Ex, start, source, transforms, verb);
        }

        // Expression position: a pipeline (or a bare expression) statement.
        let expression = if transforms.is_empty() {
            source
        } else {
            let span = start + self.prev_token.span;
            Expression::Pipeline(PipelineExpression { source: Box::new(source), transforms, span })
        };
        Ok(Statement::Expression(ExpressionStatement { span: expression.span(), expression }))
    }

    /// Parses a `de`/`in` iteration: `de persona pro clavis { ... }`.
    fn parse_iteration_statement(&mut self, kind: IterationKind) -> Result<Statement> {
        let start = self.token.span;
        self.bump();
        let source = self.parse_expression()?;
        let transforms = self.parse_transforms()?;
        let Some(verb) = self.eat_iteration_verb() else {
            return Err(ParserError::expected_iteration_verb(&self.token.token, self.token.span).into());
        };
        self.finish_iteration(kind, start, source, transforms, verb)
    }

    fn eat_iteration_verb(&mut self) -> Option<IterationVerb> {
        let verb = match self.token.token.keyword()? {
            Keyword::Pro => IterationVerb::Pro,
            Keyword::Fit => IterationVerb::Fit,
            Keyword::Fiet => IterationVerb::Fiet,
            _ => return None,
        };
        self.bump();
        Some(verb)
    }

    fn finish_iteration(
        &mut self,
        kind: IterationKind,
        start: Span,
        source: Expression,
        transforms: Vec<Transform>,
        verb: IterationVerb,
    ) -> Result<Statement> {
        let binding = self.expect_identifier();
        let body = self.parse_loop_body()?;
        let span = start + body.span;
        Ok(Statement::Iteration(Box::new(IterationStatement {
            kind,
            source,
            transforms,
            verb,
            binding,
            body,
            span,
        })))
    }

    /// Returns a [`ConditionalStatement`]: `si cond { } aliter si ... aliter
    /// { }`, optionally guarded by a trailing `cape` clause.
    fn parse_conditional_statement(&mut self) -> Result<ConditionalStatement> {
        let start = self.expect_keyword(Keyword::Si);
        let condition = self.parse_expression()?;
        let then = self.parse_block()?;

        let otherwise = if self.eat_keyword(Keyword::Aliter) {
            if self.check_keyword(Keyword::Si) {
                Some(Box::new(Statement::Conditional(self.parse_conditional_statement()?)))
            } else {
                Some(Box::new(Statement::Block(self.parse_block()?)))
            }
        } else {
            None
        };

        let catch = self.parse_optional_catch()?;
        let span = start + self.prev_token.span;
        Ok(ConditionalStatement { condition, then, otherwise, catch, span })
    }

    /// Parses a `cape [binding] { ... }` clause if one is present.
    fn parse_optional_catch(&mut self) -> Result<Option<CatchClause>> {
        if !self.check_keyword(Keyword::Cape) {
            return Ok(None);
        }
        let start = self.expect_keyword(Keyword::Cape);
        let binding = self.eat_identifier();
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(Some(CatchClause { binding, body, span }))
    }

    fn parse_while_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Dum);
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(Statement::While(WhileStatement { condition, body, span }))
    }

    /// Parses `elige subj { casus v { } casus a, b { } aliter { } }`.
    fn parse_elige_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Elige);
        let subject = self.parse_expression()?;
        self.expect(&Token::LeftCurly);

        let mut cases = Vec::new();
        let mut default = None;
        while !self.check(&Token::RightCurly) && self.has_next() {
            if self.eat_keyword(Keyword::Casus) {
                let case_start = self.prev_token.span;
                let mut values = vec![self.parse_expression()?];
                while self.eat(&Token::Comma) {
                    values.push(self.parse_expression()?);
                }
                let body = self.parse_block()?;
                cases.push(EligeCase { values, span: case_start + body.span, body });
            } else if self.eat_keyword(Keyword::Aliter) {
                default = Some(self.parse_block()?);
            } else {
                self.emit_err(ParserError::expected_keyword("casus", &self.token.token, self.token.span));
                self.synchronize_in_block();
            }
        }

        let span = start + self.expect(&Token::RightCurly);
        Ok(Statement::Elige(EligeStatement { subject, cases, default, span }))
    }

    /// Parses `discerne subj { casus variant(a, b) { } aliter { } }`.
    ///
    /// Bindings are plain identifiers in the positional order of the
    /// variant's declared fields.
    fn parse_discerne_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Discerne);
        let subject = self.parse_expression()?;
        self.expect(&Token::LeftCurly);

        let mut arms = Vec::new();
        let mut default = None;
        while !self.check(&Token::RightCurly) && self.has_next() {
            if self.eat_keyword(Keyword::Casus) {
                let arm_start = self.prev_token.span;
                let Some(variant) = self.eat_identifier() else {
                    self.emit_err(ParserError::discerne_case_without_variant(self.token.span));
                    self.synchronize_in_block();
                    continue;
                };
                let mut bindings = Vec::new();
                if self.check(&Token::LeftParen) {
                    let (list, _) = self.parse_paren_comma_list(|p| {
                        if let Some(binding) = p.eat_identifier() {
                            return Ok(Some(binding));
                        }
                        p.emit_err(ParserError::variant_binding_not_identifier(
                            &p.token.token,
                            p.token.span,
                        ));
                        p.bump();
                        Ok(None)
                    })?;
                    bindings = list;
                }
                let body = self.parse_block()?;
                arms.push(DiscerneArm { variant, bindings, span: arm_start + body.span, body });
            } else if self.eat_keyword(Keyword::Aliter) {
                default = Some(self.parse_block()?);
            } else {
                self.emit_err(ParserError::expected_keyword("casus", &self.token.token, self.token.span));
                self.synchronize_in_block();
            }
        }

        let span = start + self.expect(&Token::RightCurly);
        Ok(Statement::Discerne(DiscerneStatement { subject, arms, default, span }))
    }

    fn parse_custodi_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Custodi);
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(Statement::Custodi(CustodiStatement { condition, body, span }))
    }

    fn parse_assert_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Adfirma);
        let condition = self.parse_expression()?;
        let message = if self.eat(&Token::Comma) { Some(self.parse_expression()?) } else { None };
        let span = start + message.as_ref().map_or(condition.span(), |m| m.span());
        Ok(Statement::Assert(AssertStatement { condition, message, span }))
    }

    fn parse_return_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Redde);
        let expression =
            if self.at_expression_start() { Some(self.parse_expression()?) } else { None };
        let span = start + expression.as_ref().map_or(start, |e| e.span());
        Ok(Statement::Return(ReturnStatement { expression, span }))
    }

    fn parse_throw_statement(&mut self, fatal: bool) -> Result<Statement> {
        let start = self.token.span;
        self.bump();
        let expression = self.parse_expression()?;
        let span = start + expression.span();
        Ok(Statement::Throw(ThrowStatement { expression, fatal, span }))
    }

    /// Parses `tempta { } cape e { } demum { }`.
    fn parse_try_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Tempta);
        let block = self.parse_block()?;
        let catch = self.parse_optional_catch()?;
        let finally = if self.eat_keyword(Keyword::Demum) { Some(self.parse_block()?) } else { None };
        let span = start + self.prev_token.span;
        Ok(Statement::Try(TryStatement { block, catch, finally, span }))
    }

    /// Statements opening with `cura`: the `ante`/`post` test hooks, or a
    /// scoped resource acquisition.
    ///
    /// `ante` arrives as a keyword; `post` is an identifier by design and
    /// is matched by its lexeme here and nowhere else.
    fn parse_cura_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Cura);

        if self.eat_keyword(Keyword::Ante) {
            let body = self.parse_block()?;
            let span = start + body.span;
            return Ok(Statement::TestHook(TestHookStatement { kind: HookKind::Ante, body, span }));
        }
        if self.check_ident_lexeme("post") {
            self.bump();
            let body = self.parse_block()?;
            let span = start + body.span;
            return Ok(Statement::TestHook(TestHookStatement { kind: HookKind::Post, body, span }));
        }

        let resource = self.parse_expression()?;
        let binding = if self.eat_keyword(Keyword::Ut) { Some(self.expect_identifier()) } else { None };
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(Statement::Cura(CuraStatement { resource, binding, body, span }))
    }

    /// Parses `fac { ... }`, optionally guarded: with a `cape` clause the
    /// block becomes a protected region.
    fn parse_fac_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Fac);
        let block = self.parse_block()?;
        if let Some(catch) = self.parse_optional_catch()? {
            let span = start + catch.span;
            return Ok(Statement::Try(TryStatement { block, catch: Some(catch), finally: None, span }));
        }
        let span = start + block.span;
        Ok(Statement::Block(Block { statements: block.statements, span }))
    }

    fn parse_probatio_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Probatio);
        let name = self.expect_string_literal();
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(Statement::TestSuite(ProbatioStatement { name, body, span }))
    }

    fn parse_proba_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Proba);
        let name = self.expect_string_literal();
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(Statement::TestCase(ProbaStatement { name, body, span }))
    }

    /// Eats a string literal, or records a diagnostic and advances,
    /// returning an empty string.
    fn expect_string_literal(&mut self) -> String {
        if let Token::StaticString(text) = &self.token.token {
            let text = text.clone();
            self.bump();
            return text;
        }
        self.emit_err(ParserError::expected_token("string literal", &self.token.token, self.token.span));
        self.bump();
        String::new()
    }

    fn parse_dispatch_statement(&mut self) -> Result<Statement> {
        let start = self.expect_keyword(Keyword::Ad);
        let expression = self.parse_expression()?;
        let span = start + expression.span();
        Ok(Statement::Dispatch(AdStatement { expression, span }))
    }

    /// Parses `scribe(args)` or the paren-free `scribe arg` form.
    fn parse_console_statement(&mut self, function: ConsoleFunction) -> Result<Statement> {
        let start = self.token.span;
        self.bump();

        let mut arguments = Vec::new();
        if self.check(&Token::LeftParen) {
            let (args, _) = self.parse_paren_comma_list(|p| p.parse_expression().map(Some))?;
            arguments = args;
        } else if self.at_expression_start() {
            arguments.push(self.parse_expression()?);
        }

        let span = start + self.prev_token.span;
        Ok(Statement::Console(ConsoleStatement { function, arguments, span }))
    }
}
