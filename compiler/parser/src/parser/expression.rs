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
    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_ternary_expression()
    }

    /// Ternary conditionals, right-associative: `c ? a : b` and
    /// `c sic a secus b`.
    ///
    /// A lone `?` here is the ternary operator; the tokenizer only emits
    /// the chain forms `?.` `?[` `?(` when a chain accessor follows.
    fn parse_ternary_expression(&mut self) -> Result<Expression> {
        let expr = self.parse_nullish_or_expression()?;

        if self.eat(&Token::Question) {
            let if_true = self.parse_expression()?;
            self.expect(&Token::Colon);
            let if_false = self.parse_expression()?;
            return Ok(Expression::Ternary(TernaryExpression {
                span: expr.span() + if_false.span(),
                condition: Box::new(expr),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
                latin: false,
            }));
        }

        if self.eat_keyword(Keyword::Sic) {
            let if_true = self.parse_expression()?;
            self.expect_keyword(Keyword::Secus);
            let if_false = self.parse_expression()?;
            return Ok(Expression::Ternary(TernaryExpression {
                span: expr.span() + if_false.span(),
                condition: Box::new(expr),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
                latin: true,
            }));
        }

        Ok(expr)
    }

    /// Constructs a binary expression `left op right`.
    fn bin_expr(left: Expression, right: Expression, op: BinaryOperation) -> Expression {
        Expression::Binary(BinaryExpression {
            span: left.span() + right.span(),
            op,
            left: Box::new(left),
            right: Box::new(right),
            string_operands: false,
        })
    }

    /// Nullish coalescing and logical OR share one level; mixing `vel`
    /// with `aut`/`||` in the same unparenthesized chain is a parse error,
    /// reported once per chain.
    fn parse_nullish_or_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_logical_and_expression()?;
        let mut saw_nullish = false;
        let mut saw_or = false;
        let mut reported = false;

        loop {
            let op = if self.eat(&Token::Or) || self.eat_keyword(Keyword::Aut) {
                saw_or = true;
                BinaryOperation::Or
            } else if self.eat_keyword(Keyword::Vel) {
                saw_nullish = true;
                BinaryOperation::Nullish
            } else {
                break;
            };
            if saw_nullish && saw_or && !reported {
                self.emit_err(ParserError::mixed_nullish_logical(self.prev_token.span));
                reported = true;
            }
            let right = self.parse_logical_and_expression()?;
            expr = Self::bin_expr(expr, right, op);
        }

        Ok(expr)
    }

    /// Logical AND: `et` / `&&`.
    fn parse_logical_and_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_equality_expression()?;
        while self.eat(&Token::And) || self.eat_keyword(Keyword::Et) {
            let right = self.parse_equality_expression()?;
            expr = Self::bin_expr(expr, right, BinaryOperation::And);
        }
        Ok(expr)
    }

    /// Equality: `==` `!=` `===` `!==`, plus `est` / `non est`, which become
    /// type tests when the right side is an obvious type name.
    fn parse_equality_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_comparison_expression()?;

        loop {
            let symbolic = if self.eat(&Token::Eq) {
                Some(BinaryOperation::Eq)
            } else if self.eat(&Token::NotEq) {
                Some(BinaryOperation::Neq)
            } else if self.eat(&Token::StrictEq) {
                Some(BinaryOperation::StrictEq)
            } else if self.eat(&Token::StrictNotEq) {
                Some(BinaryOperation::StrictNeq)
            } else {
                None
            };

            if let Some(op) = symbolic {
                let right = self.parse_comparison_expression()?;
                expr = Self::bin_expr(expr, right, op);
                continue;
            }

            let negated = if self.eat_keyword(Keyword::Est) {
                false
            } else if self.check_keyword(Keyword::Non)
                && self.look_ahead(1, |t| t.token.keyword() == Some(Keyword::Est))
            {
                self.bump();
                self.bump();
                true
            } else {
                break;
            };

            // `x est textus` tests the type; `x est y` compares values.
            let rhs_is_type =
                matches!(&self.token.token, Token::Ident(name) if is_builtin_type(name));
            if rhs_is_type {
                let target_type = self.parse_type()?;
                expr = Expression::TypeTest(TypeTestExpression {
                    span: expr.span() + target_type.span,
                    expression: Box::new(expr),
                    target_type,
                    negated,
                });
            } else {
                let right = self.parse_comparison_expression()?;
                let op = if negated { BinaryOperation::Neq } else { BinaryOperation::Eq };
                expr = Self::bin_expr(expr, right, op);
            }
        }

        Ok(expr)
    }

    /// Comparison: `<` `<=` `>` `>=`. Binds looser than bitwise operators.
    fn parse_comparison_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_bitwise_or_expression()?;
        loop {
            let op = if self.eat(&Token::Lt) {
                BinaryOperation::Lt
            } else if self.eat(&Token::LtEq) {
                BinaryOperation::Le
            } else if self.eat(&Token::Gt) {
                BinaryOperation::Gt
            } else if self.eat(&Token::GtEq) {
                BinaryOperation::Ge
            } else {
                break;
            };
            let right = self.parse_bitwise_or_expression()?;
            expr = Self::bin_expr(expr, right, op);
        }
        Ok(expr)
    }

    fn parse_bitwise_or_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_bitwise_xor_expression()?;
        while self.eat(&Token::BitOr) {
            let right = self.parse_bitwise_xor_expression()?;
            expr = Self::bin_expr(expr, right, BinaryOperation::BitwiseOr);
        }
        Ok(expr)
    }

    fn parse_bitwise_xor_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_bitwise_and_expression()?;
        while self.eat(&Token::BitXor) {
            let right = self.parse_bitwise_and_expression()?;
            expr = Self::bin_expr(expr, right, BinaryOperation::Xor);
        }
        Ok(expr)
    }

    fn parse_bitwise_and_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_shift_expression()?;
        while self.eat(&Token::BitAnd) {
            let right = self.parse_shift_expression()?;
            expr = Self::bin_expr(expr, right, BinaryOperation::BitwiseAnd);
        }
        Ok(expr)
    }

    fn parse_shift_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_range_expression()?;
        loop {
            let op = if self.eat(&Token::Shl) {
                BinaryOperation::Shl
            } else if self.eat(&Token::Shr) {
                BinaryOperation::Shr
            } else {
                break;
            };
            let right = self.parse_range_expression()?;
            expr = Self::bin_expr(expr, right, op);
        }
        Ok(expr)
    }

    /// Ranges: `a..b`, `a ante b`, `a usque b`, each with an optional
    /// `per step`. Non-associative.
    fn parse_range_expression(&mut self) -> Result<Expression> {
        let expr = self.parse_additive_expression()?;

        let kind = if self.eat(&Token::DotDot) {
            RangeKind::DotDot
        } else if self.eat_keyword(Keyword::Ante) {
            RangeKind::Ante
        } else if self.eat_keyword(Keyword::Usque) {
            RangeKind::Usque
        } else {
            return Ok(expr);
        };

        let end = self.parse_additive_expression()?;
        let step = if self.eat_keyword(Keyword::Per) {
            Some(Box::new(self.parse_additive_expression()?))
        } else {
            None
        };

        let mut span = expr.span() + end.span();
        if let Some(step) = &step {
            span = span + step.span();
        }
        Ok(Expression::Range(RangeExpression {
            span,
            start: Box::new(expr),
            end: Box::new(end),
            kind,
            step,
        }))
    }

    fn parse_additive_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_multiplicative_expression()?;
        loop {
            let op = if self.eat(&Token::Add) {
                BinaryOperation::Add
            } else if self.eat(&Token::Minus) {
                BinaryOperation::Sub
            } else {
                break;
            };
            let right = self.parse_multiplicative_expression()?;
            expr = Self::bin_expr(expr, right, op);
        }
        Ok(expr)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_unary_expression()?;
        loop {
            let op = if self.eat(&Token::Mul) {
                BinaryOperation::Mul
            } else if self.eat(&Token::Div) {
                BinaryOperation::Div
            } else if self.eat(&Token::Rem) {
                BinaryOperation::Rem
            } else {
                break;
            };
            let right = self.parse_unary_expression()?;
            expr = Self::bin_expr(expr, right, op);
        }
        Ok(expr)
    }

    /// Returns true if the current token can begin an expression; decides
    /// whether `nihil` is the predicate or the literal, and whether `redde`
    /// carries a value.
    pub(crate) fn at_expression_start(&self) -> bool {
        match &self.token.token {
            Token::Ident(_)
            | Token::Int(_)
            | Token::Decimal(_)
            | Token::BigInt(_)
            | Token::StaticString(_)
            | Token::Template(_)
            | Token::LeftParen
            | Token::LeftSquare
            | Token::LeftCurly
            | Token::Minus
            | Token::BitNot => true,
            Token::Keyword(k) => matches!(
                k,
                Keyword::Verum
                    | Keyword::Falsum
                    | Keyword::Ego
                    | Keyword::Novum
                    | Keyword::Cede
                    | Keyword::Non
                    | Keyword::Nulla
                    | Keyword::Nonnulla
                    | Keyword::Nihil
                    | Keyword::Nonnihil
                    | Keyword::Negativum
                    | Keyword::Positivum
            ),
            _ => false,
        }
    }

    /// Unary prefixes: `-` `~` `non`, the Latin predicates, `cede`,
    /// `novum`, `praefixum`, and `scriptum`.
    fn parse_unary_expression(&mut self) -> Result<Expression> {
        let prefix = match self.token.token.keyword() {
            Some(Keyword::Non) => Some(UnaryOperation::Not),
            Some(Keyword::Nulla) => Some(UnaryOperation::Nulla),
            Some(Keyword::Nonnulla) => Some(UnaryOperation::Nonnulla),
            Some(Keyword::Nonnihil) => Some(UnaryOperation::Nonnihil),
            Some(Keyword::Negativum) => Some(UnaryOperation::Negativum),
            Some(Keyword::Positivum) => Some(UnaryOperation::Positivum),
            // `nihil` is the predicate only when an expression follows;
            // otherwise it is the null literal and falls through to the
            // primary parser.
            Some(Keyword::Nihil) => {
                let followed = self.look_ahead(1, |t| {
                    matches!(
                        &t.token,
                        Token::Ident(_)
                            | Token::Int(_)
                            | Token::Decimal(_)
                            | Token::BigInt(_)
                            | Token::StaticString(_)
                            | Token::Template(_)
                            | Token::LeftParen
                    ) || matches!(
                        t.token.keyword(),
                        Some(Keyword::Verum) | Some(Keyword::Falsum) | Some(Keyword::Ego)
                    )
                });
                if followed {
                    Some(UnaryOperation::Nihil)
                } else {
                    None
                }
            }
            _ => match self.token.token {
                Token::Minus => Some(UnaryOperation::Negate),
                Token::BitNot => Some(UnaryOperation::BitNot),
                _ => None,
            },
        };

        if let Some(op) = prefix {
            let start = self.token.span;
            self.bump();
            let operand = self.parse_unary_expression()?;
            return Ok(Expression::Unary(UnaryExpression {
                span: start + operand.span(),
                operand: Box::new(operand),
                op,
            }));
        }

        match self.token.token.keyword() {
            Some(Keyword::Cede) => {
                let start = self.token.span;
                self.bump();
                let operand = self.parse_unary_expression()?;
                Ok(Expression::Await(AwaitExpression {
                    span: start + operand.span(),
                    operand: Box::new(operand),
                }))
            }
            Some(Keyword::Novum) => self.parse_new_expression(),
            Some(Keyword::Praefixum) => self.parse_praefixum_expression(),
            Some(Keyword::Scriptum) => self.parse_scriptum_expression(),
            _ => self.parse_cast_expression(),
        }
    }

    /// Type casts with `qua`, left-associative, looser than call/member
    /// chains.
    fn parse_cast_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_postfix_expression()?;
        while self.eat_keyword(Keyword::Qua) {
            let target_type = self.parse_type()?;
            expr = Expression::Cast(CastExpression {
                span: expr.span() + target_type.span,
                expression: Box::new(expr),
                target_type,
            });
        }
        Ok(expr)
    }

    /// Call, member, and index chains, including the optional (`?.`) and
    /// non-null (`!.`) forms, and the postfix `!` assertion.
    fn parse_postfix_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_primary_expression()?;

        loop {
            match &self.token.token {
                Token::Dot | Token::QuestionDot | Token::BangDot => {
                    let optional = self.check(&Token::QuestionDot);
                    let non_null = self.check(&Token::BangDot);
                    self.bump();
                    let member = self.expect_identifier();
                    expr = Expression::Member(MemberExpression {
                        span: expr.span() + member.span,
                        object: Box::new(expr),
                        member,
                        optional,
                        non_null,
                    });
                }
                Token::LeftSquare | Token::QuestionBracket | Token::BangBracket => {
                    let optional = self.check(&Token::QuestionBracket);
                    let non_null = self.check(&Token::BangBracket);
                    self.bump();
                    let index = self.parse_expression()?;
                    let end = self.expect(&Token::RightSquare);
                    expr = Expression::ComputedMember(ComputedMemberExpression {
                        span: expr.span() + end,
                        object: Box::new(expr),
                        index: Box::new(index),
                        optional,
                        non_null,
                    });
                }
                Token::LeftParen | Token::QuestionParen | Token::BangParen => {
                    let optional = self.check(&Token::QuestionParen);
                    let non_null = self.check(&Token::BangParen);
                    self.bump();
                    let mut arguments = Vec::new();
                    while !self.check(&Token::RightParen) && self.has_next() {
                        arguments.push(self.parse_argument()?);
                        if !self.eat(&Token::Comma) {
                            break;
                        }
                    }
                    let end = self.expect(&Token::RightParen);
                    expr = Expression::Call(CallExpression {
                        span: expr.span() + end,
                        callee: Box::new(expr),
                        arguments,
                        optional,
                        non_null,
                    });
                }
                Token::Bang => {
                    self.bump();
                    expr = Expression::Unary(UnaryExpression {
                        span: expr.span() + self.prev_token.span,
                        operand: Box::new(expr),
                        op: UnaryOperation::NonNullAssert,
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// One argument: an expression or a `ceteri` spread.
    fn parse_argument(&mut self) -> Result<Argument> {
        if self.eat_keyword(Keyword::Ceteri) {
            return Ok(Argument::Spread(self.parse_expression()?));
        }
        Ok(Argument::Expression(self.parse_expression()?))
    }

    /// Primary expressions: literals, names, groups, arrows, lambdas,
    /// literals of arrays and objects, and `ex` pipelines.
    fn parse_primary_expression(&mut self) -> Result<Expression> {
        if let Some(keyword) = self.token.token.keyword() {
            match keyword {
                Keyword::Verum | Keyword::Falsum => {
                    let span = self.token.span;
                    self.bump();
                    return Ok(Expression::Literal(LiteralExpression {
                        value: LiteralValue::Bool(keyword == Keyword::Verum),
                        span,
                    }));
                }
                Keyword::Nihil => {
                    let span = self.token.span;
                    self.bump();
                    return Ok(Expression::Literal(LiteralExpression { value: LiteralValue::Nihil, span }));
                }
                Keyword::Ego => {
                    let span = self.token.span;
                    self.bump();
                    return Ok(Expression::SelfRef(SelfExpression { span }));
                }
                Keyword::Pro => return self.parse_lambda_expression(LambdaVerb::Pro),
                Keyword::Fit => return self.parse_lambda_expression(LambdaVerb::Fit),
                Keyword::Fiet => return self.parse_lambda_expression(LambdaVerb::Fiet),
                Keyword::Ex => return self.parse_pipeline_expression(),
                _ => return self.unexpected(keyword),
            }
        }

        match &self.token.token {
            Token::Int(text) => {
                let value = LiteralValue::Integer(text.clone());
                let span = self.token.span;
                self.bump();
                Ok(Expression::Literal(LiteralExpression { value, span }))
            }
            Token::Decimal(text) => {
                let value = LiteralValue::Float(text.clone());
                let span = self.token.span;
                self.bump();
                Ok(Expression::Literal(LiteralExpression { value, span }))
            }
            Token::BigInt(text) => {
                let value = LiteralValue::BigInt(text.clone());
                let span = self.token.span;
                self.bump();
                Ok(Expression::Literal(LiteralExpression { value, span }))
            }
            Token::StaticString(text) => {
                let value = LiteralValue::String(text.clone());
                let span = self.token.span;
                self.bump();
                Ok(Expression::Literal(LiteralExpression { value, span }))
            }
            Token::Template(text) => {
                let value = LiteralValue::Template(text.clone());
                let span = self.token.span;
                self.bump();
                Ok(Expression::Literal(LiteralExpression { value, span }))
            }
            Token::Ident(_) => {
                let ident = self.eat_identifier().expect("matched above");
                Ok(Expression::Identifier(ident))
            }
            Token::LeftParen => {
                if self.peek_is_arrow_function() {
                    return self.parse_arrow_function();
                }
                self.bump();
                let expr = self.parse_expression()?;
                self.expect(&Token::RightParen);
                Ok(expr)
            }
            Token::LeftSquare => self.parse_array_expression(),
            Token::LeftCurly => self.parse_object_expression().map(Expression::Object),
            _ => self.unexpected(&self.token.token.clone()),
        }
    }

    /// Scans forward from a `(`, balancing parentheses; an arrow function
    /// is ahead when the matching `)` is followed by `=>`.
    fn peek_is_arrow_function(&self) -> bool {
        debug_assert!(self.check(&Token::LeftParen));
        let mut depth = 1usize;
        let mut dist = 1usize;
        loop {
            let (stop, next_depth) = self.look_ahead(dist, |t| match &t.token {
                Token::LeftParen | Token::QuestionParen | Token::BangParen => (false, depth + 1),
                Token::RightParen => (depth == 1, depth - 1),
                Token::Eof => (true, 0),
                _ => (false, depth),
            });
            if stop {
                if next_depth != 0 {
                    return false;
                }
                return self.look_ahead(dist + 1, |t| matches!(t.token, Token::FatArrow));
            }
            depth = next_depth;
            if depth == 0 {
                return false;
            }
            dist += 1;
        }
    }

    /// Parses `(params) => body`.
    fn parse_arrow_function(&mut self) -> Result<Expression> {
        let start = self.token.span;
        let (parameters, _) = self.parse_paren_comma_list(|p| p.parse_parameter().map(Some))?;
        self.expect(&Token::FatArrow);
        let body = if self.check(&Token::LeftCurly) {
            LambdaBody::Block(self.parse_block()?)
        } else {
            LambdaBody::Expression(Box::new(self.parse_expression()?))
        };
        let span = start + self.prev_token.span;
        Ok(Expression::Arrow(ArrowFunction { parameters, body, span }))
    }

    /// Parses a verb lambda: `pro x: x * 2`, `fiet url redde cede pete(url)`,
    /// `fit x { ... }`.
    fn parse_lambda_expression(&mut self, verb: LambdaVerb) -> Result<Expression> {
        let start = self.token.span;
        self.bump();

        let mut parameters = Vec::new();
        while !matches!(self.token.token, Token::Colon | Token::LeftCurly)
            && self.token.token.keyword() != Some(Keyword::Redde)
            && self.has_next()
        {
            parameters.push(self.parse_lambda_parameter()?);
            if !self.eat(&Token::Comma) {
                break;
            }
        }

        let body = if self.eat(&Token::Colon) || self.eat_keyword(Keyword::Redde) {
            LambdaBody::Expression(Box::new(self.parse_expression()?))
        } else if self.check(&Token::LeftCurly) {
            LambdaBody::Block(self.parse_block()?)
        } else {
            self.emit_err(ParserError::expected_token(":", &self.token.token, self.token.span));
            LambdaBody::Expression(Box::new(Expression::Err(ErrExpression { span: self.token.span })))
        };

        let span = start + self.prev_token.span;
        Ok(Expression::Lambda(LambdaExpression { verb, parameters, body, span }))
    }

    /// Parses an `ex` pipeline in expression position:
    /// `ex valores prima 3 summa`. Without transforms the source expression
    /// is returned unchanged.
    fn parse_pipeline_expression(&mut self) -> Result<Expression> {
        let start = self.expect_keyword(Keyword::Ex);
        let source = self.parse_expression()?;
        let transforms = self.parse_transforms()?;
        if transforms.is_empty() {
            return Ok(source);
        }
        let span = start + self.prev_token.span;
        Ok(Expression::Pipeline(PipelineExpression { source: Box::new(source), transforms, span }))
    }

    /// Parses the DSL transform list: `prima N`, `ultima N`, `summa`.
    pub(crate) fn parse_transforms(&mut self) -> Result<Vec<Transform>> {
        let mut transforms = Vec::new();
        loop {
            if self.eat_keyword(Keyword::Prima) {
                transforms.push(Transform::Prima(self.parse_unary_expression()?));
            } else if self.eat_keyword(Keyword::Ultima) {
                transforms.push(Transform::Ultima(self.parse_unary_expression()?));
            } else if self.eat_keyword(Keyword::Summa) {
                transforms.push(Transform::Summa);
            } else {
                return Ok(transforms);
            }
        }
    }

    /// Parses `novum X`, `novum X(args)`, `novum X { overrides }`, and
    /// `novum X de exemplo`.
    fn parse_new_expression(&mut self) -> Result<Expression> {
        let start = self.expect_keyword(Keyword::Novum);
        let callee = self.expect_identifier();

        let mut arguments = None;
        let mut overrides = None;
        let mut source = None;

        if self.check(&Token::LeftParen) {
            let (args, _) = self.parse_paren_comma_list(|p| p.parse_argument().map(Some))?;
            arguments = Some(args);
        }
        if self.check(&Token::LeftCurly) {
            overrides = Some(self.parse_object_expression()?);
        } else if self.eat_keyword(Keyword::De) {
            source = Some(Box::new(self.parse_unary_expression()?));
        }

        let span = start + self.prev_token.span;
        Ok(Expression::New(NewExpression { callee, arguments, overrides, source, span }))
    }

    /// Parses `praefixum expr` or `praefixum { ... }`.
    fn parse_praefixum_expression(&mut self) -> Result<Expression> {
        let start = self.expect_keyword(Keyword::Praefixum);
        let body = if self.check(&Token::LeftCurly) {
            PraefixumBody::Block(self.parse_block()?)
        } else {
            PraefixumBody::Expression(Box::new(self.parse_unary_expression()?))
        };
        let span = start + self.prev_token.span;
        Ok(Expression::Comptime(PraefixumExpression { body, span }))
    }

    /// Parses `scriptum("...{}...", args)`.
    fn parse_scriptum_expression(&mut self) -> Result<Expression> {
        let start = self.expect_keyword(Keyword::Scriptum);
        self.expect(&Token::LeftParen);

        let format = if let Token::StaticString(text) = &self.token.token {
            let text = text.clone();
            self.bump();
            text
        } else {
            self.emit_err(ParserError::expected_token("string literal", &self.token.token, self.token.span));
            String::new()
        };

        let mut arguments = Vec::new();
        while self.eat(&Token::Comma) {
            arguments.push(self.parse_expression()?);
        }
        let end = self.expect(&Token::RightParen);

        Ok(Expression::Format(ScriptumExpression { format, arguments, span: start + end }))
    }

    /// Parses `[a, b, ceteri rest]`.
    fn parse_array_expression(&mut self) -> Result<Expression> {
        let (elements, span) =
            self.parse_list(Token::LeftSquare, Token::RightSquare, Token::Comma, |p| {
                p.parse_argument().map(Some)
            })?;
        Ok(Expression::Array(ArrayExpression { elements, span }))
    }

    /// Parses `{ nomen: "anon", aetas, ceteri basis }`.
    pub(crate) fn parse_object_expression(&mut self) -> Result<ObjectExpression> {
        let (entries, span) =
            self.parse_list(Token::LeftCurly, Token::RightCurly, Token::Comma, |p| {
                if p.eat_keyword(Keyword::Ceteri) {
                    return Ok(Some(ObjectEntry::Spread(p.parse_expression()?)));
                }
                let key = p.expect_identifier();
                let value = if p.eat(&Token::Colon) { Some(p.parse_expression()?) } else { None };
                Ok(Some(ObjectEntry::Field { key, value }))
            })?;
        Ok(ObjectExpression { entries, span })
    }
}
