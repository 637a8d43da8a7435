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

use faber_ast::*;
use faber_errors::emitter::Handler;
use faber_errors::SemanticError;
use faber_parser::lexicon::is_builtin_type;

use indexmap::IndexMap;

/// What the annotator knows about one binding.
#[derive(Clone, Debug)]
struct Binding {
    kind: SymbolKind,
    mutable: bool,
    /// True when the binding is known to hold a string.
    is_string: bool,
}

/// The single-walk annotator. See the module docs.
pub struct Annotator<'a> {
    handler: &'a Handler,
    /// Lexical scopes, innermost last.
    scopes: Vec<IndexMap<String, Binding>>,
    /// Generic type parameters currently in scope.
    type_params: Vec<Vec<String>>,
}

impl<'a> Annotator<'a> {
    pub fn new(handler: &'a Handler) -> Self {
        Self { handler, scopes: vec![IndexMap::new()], type_params: Vec::new() }
    }

    fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn at_module_scope(&self) -> bool {
        self.scopes.len() == 1
    }

    /// Declares `name` in the current scope; a second declaration of the
    /// same name in the same scope is an error, shadowing an outer one is
    /// not.
    fn declare(&mut self, name: &Identifier, kind: SymbolKind, mutable: bool, is_string: bool) {
        let scope = self.scopes.last_mut().expect("scope stack is never empty");
        if scope.contains_key(&name.name) {
            self.handler.emit_err(SemanticError::duplicate_definition(&name.name, name.span));
            return;
        }
        scope.insert(name.name.clone(), Binding { kind, mutable, is_string });
    }

    fn lookup(&self, name: &str) -> Option<&Binding> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    fn is_known_type(&self, name: &str) -> bool {
        is_builtin_type(name)
            || self.type_params.iter().any(|params| params.iter().any(|p| p == name))
            || matches!(self.lookup(name), Some(b) if b.kind == SymbolKind::TypeName)
    }

    /// Resolves a type annotation, including its arguments and union
    /// alternatives.
    fn visit_type(&mut self, annotation: &TypeAnnotation) {
        if !self.is_known_type(&annotation.name.name) {
            self.handler
                .emit_err(SemanticError::unresolved_type_name(&annotation.name.name, annotation.name.span));
        }
        for arg in &annotation.type_parameters {
            if let TypeParameterArg::Type(nested) = arg {
                self.visit_type(nested);
            }
        }
        for alternative in &annotation.union {
            self.visit_type(alternative);
        }
    }

    /// Declares every name bound by a pattern.
    fn declare_pattern(&mut self, pattern: &Pattern, kind: SymbolKind, mutable: bool, is_string: bool) {
        match pattern {
            Pattern::Identifier(name) => self.declare(name, kind, mutable, is_string),
            Pattern::Object(object) => {
                for entry in &object.entries {
                    match entry {
                        ObjectPatternEntry::Field { key, alias } => {
                            self.declare(alias.as_ref().unwrap_or(key), kind, mutable, false);
                        }
                        ObjectPatternEntry::Rest(rest) => self.declare(rest, kind, mutable, false),
                    }
                }
            }
            Pattern::Array(array) => {
                for element in &array.elements {
                    match element {
                        ArrayPatternElement::Identifier(name) => self.declare(name, kind, mutable, false),
                        ArrayPatternElement::Rest(rest) => self.declare(rest, kind, mutable, false),
                        ArrayPatternElement::Skip => {}
                    }
                }
            }
        }
    }

    /// Hoists module-level type and function names so forward references
    /// resolve, then walks the statements.
    pub fn annotate_program(&mut self, program: &mut Program) {
        for statement in &program.statements {
            if let Statement::Declaration(declaration) = statement {
                let (name, kind) = match declaration {
                    Declaration::Genus(d) => (&d.name, SymbolKind::TypeName),
                    Declaration::Pactum(d) => (&d.name, SymbolKind::TypeName),
                    Declaration::TypeAlias(d) => (&d.name, SymbolKind::TypeName),
                    Declaration::Ordo(d) => (&d.name, SymbolKind::TypeName),
                    Declaration::Discretio(d) => (&d.name, SymbolKind::TypeName),
                    Declaration::Function(d) => (&d.name, SymbolKind::Global),
                    _ => continue,
                };
                let scope = self.scopes.last_mut().expect("scope stack is never empty");
                scope
                    .entry(name.name.clone())
                    .or_insert(Binding { kind, mutable: false, is_string: false });
            }
        }

        for statement in &mut program.statements {
            self.visit_statement(statement);
        }
    }

    fn visit_block(&mut self, block: &mut Block) {
        self.push_scope();
        for statement in &mut block.statements {
            self.visit_statement(statement);
        }
        self.pop_scope();
    }

    fn visit_statement(&mut self, statement: &mut Statement) {
        match statement {
            Statement::Assert(s) => {
                self.visit_expression(&mut s.condition);
                if let Some(message) = &mut s.message {
                    self.visit_expression(message);
                }
            }
            Statement::Assign(s) => self.visit_assign(s),
            Statement::Block(block) => self.visit_block(block),
            Statement::Break(_) | Statement::Continue(_) => {}
            Statement::Conditional(s) => {
                self.visit_expression(&mut s.condition);
                self.visit_block(&mut s.then);
                if let Some(otherwise) = &mut s.otherwise {
                    self.visit_statement(otherwise);
                }
                if let Some(catch) = &mut s.catch {
                    self.visit_catch(catch);
                }
            }
            Statement::Console(s) => {
                for argument in &mut s.arguments {
                    self.visit_expression(argument);
                }
            }
            Statement::Cura(s) => {
                self.visit_expression(&mut s.resource);
                self.push_scope();
                if let Some(binding) = &s.binding {
                    let binding = binding.clone();
                    self.declare(&binding, SymbolKind::Local, false, false);
                }
                for inner in &mut s.body.statements {
                    self.visit_statement(inner);
                }
                self.pop_scope();
            }
            Statement::Custodi(s) => {
                self.visit_expression(&mut s.condition);
                self.visit_block(&mut s.body);
            }
            Statement::Declaration(declaration) => self.visit_declaration(declaration),
            Statement::Discerne(s) => {
                self.visit_expression(&mut s.subject);
                for arm in &mut s.arms {
                    self.push_scope();
                    for binding in arm.bindings.clone() {
                        self.declare(&binding, SymbolKind::Local, false, false);
                    }
                    for inner in &mut arm.body.statements {
                        self.visit_statement(inner);
                    }
                    self.pop_scope();
                }
                if let Some(default) = &mut s.default {
                    self.visit_block(default);
                }
            }
            Statement::Dispatch(s) => self.visit_expression(&mut s.expression),
            Statement::Elige(s) => {
                self.visit_expression(&mut s.subject);
                for case in &mut s.cases {
                    for value in &mut case.values {
                        self.visit_expression(value);
                    }
                    self.visit_block(&mut case.body);
                }
                if let Some(default) = &mut s.default {
                    self.visit_block(default);
                }
            }
            Statement::Expression(s) => self.visit_expression(&mut s.expression),
            Statement::Iteration(s) => {
                self.visit_expression(&mut s.source);
                for transform in &mut s.transforms {
                    match transform {
                        Transform::Prima(n) | Transform::Ultima(n) => self.visit_expression(n),
                        Transform::Summa => {}
                    }
                }
                self.push_scope();
                let binding = s.binding.clone();
                self.declare(&binding, SymbolKind::Local, false, false);
                for inner in &mut s.body.statements {
                    self.visit_statement(inner);
                }
                self.pop_scope();
            }
            Statement::Return(s) => {
                if let Some(expression) = &mut s.expression {
                    self.visit_expression(expression);
                }
            }
            Statement::TestCase(s) => self.visit_block(&mut s.body),
            Statement::TestHook(s) => self.visit_block(&mut s.body),
            Statement::TestSuite(s) => self.visit_block(&mut s.body),
            Statement::Throw(s) => self.visit_expression(&mut s.expression),
            Statement::Try(s) => {
                self.visit_block(&mut s.block);
                if let Some(catch) = &mut s.catch {
                    self.visit_catch(catch);
                }
                if let Some(finally) = &mut s.finally {
                    self.visit_block(finally);
                }
            }
            Statement::While(s) => {
                self.visit_expression(&mut s.condition);
                self.visit_block(&mut s.body);
            }
        }
    }

    fn visit_catch(&mut self, catch: &mut CatchClause) {
        self.push_scope();
        if let Some(binding) = &catch.binding {
            let binding = binding.clone();
            self.declare(&binding, SymbolKind::Local, false, false);
        }
        for statement in &mut catch.body.statements {
            self.visit_statement(statement);
        }
        self.pop_scope();
    }

    /// Reassignment of an immutable binding and assignment to an unknown
    /// name are the "restricted contexts" where an identifier must resolve.
    fn visit_assign(&mut self, assign: &mut AssignStatement) {
        if let Expression::Identifier(place) = &assign.place {
            match self.lookup(&place.name) {
                Some(binding) if !binding.mutable => {
                    self.handler.emit_err(SemanticError::reassignment_of_immutable(&place.name, place.span));
                }
                Some(_) => {}
                None => {
                    self.handler.emit_err(SemanticError::unknown_identifier(&place.name, place.span));
                }
            }
        }
        self.visit_expression(&mut assign.place);
        self.visit_expression(&mut assign.value);
    }

    fn visit_declaration(&mut self, declaration: &mut Declaration) {
        let module_scope = self.at_module_scope();
        let var_kind = if module_scope { SymbolKind::Global } else { SymbolKind::Local };

        match declaration {
            Declaration::Variable(decl) => {
                if let Some(annotation) = &decl.type_annotation {
                    self.visit_type(annotation);
                }
                if let Some(initializer) = &mut decl.initializer {
                    self.visit_expression(initializer);
                }
                let is_string = decl
                    .type_annotation
                    .as_ref()
                    .map(|t| t.name.name == "textus")
                    .unwrap_or_else(|| decl.initializer.as_ref().is_some_and(expression_is_string));
                let pattern = decl.pattern.clone();
                self.declare_pattern(&pattern, var_kind, decl.kind.is_mutable(), is_string);
            }
            Declaration::Function(function) => {
                // Module-level functions were hoisted; locals are declared
                // here.
                if !module_scope {
                    let name = function.name.clone();
                    self.declare(&name, SymbolKind::Local, false, false);
                }
                self.visit_function(function);
            }
            Declaration::Genus(genus) => {
                if !module_scope {
                    let name = genus.name.clone();
                    self.declare(&name, SymbolKind::TypeName, false, false);
                }
                self.type_params.push(genus.type_parameters.iter().map(|t| t.name.clone()).collect());
                for member in &mut genus.members {
                    match member {
                        GenusMember::Field(field) => {
                            self.visit_type(&field.type_annotation.clone());
                            if let Some(default) = &mut field.default {
                                self.visit_expression(default);
                            }
                        }
                        GenusMember::Method(method) => self.visit_function(&mut method.function),
                    }
                }
                self.type_params.pop();
            }
            Declaration::Pactum(pactum) => {
                if !module_scope {
                    let name = pactum.name.clone();
                    self.declare(&name, SymbolKind::TypeName, false, false);
                }
                self.type_params.push(pactum.type_parameters.iter().map(|t| t.name.clone()).collect());
                for method in &pactum.methods {
                    for parameter in &method.parameters {
                        if let Some(annotation) = &parameter.type_annotation {
                            self.visit_type(annotation);
                        }
                    }
                    if let Some(return_type) = &method.return_type {
                        self.visit_type(return_type);
                    }
                }
                self.type_params.pop();
            }
            Declaration::TypeAlias(alias) => {
                if !module_scope {
                    let name = alias.name.clone();
                    self.declare(&name, SymbolKind::TypeName, false, false);
                }
                self.type_params.push(alias.type_parameters.iter().map(|t| t.name.clone()).collect());
                self.visit_type(&alias.aliased.clone());
                self.type_params.pop();
            }
            Declaration::Ordo(ordo) => {
                if !module_scope {
                    let name = ordo.name.clone();
                    self.declare(&name, SymbolKind::TypeName, false, false);
                }
            }
            Declaration::Discretio(discretio) => {
                if !module_scope {
                    let name = discretio.name.clone();
                    self.declare(&name, SymbolKind::TypeName, false, false);
                }
                self.type_params
                    .push(discretio.type_parameters.iter().map(|t| t.name.clone()).collect());
                for variant in &discretio.variants {
                    for field in &variant.fields {
                        self.visit_type(&field.type_annotation);
                    }
                }
                self.type_params.pop();
            }
            Declaration::Import(import) => {
                let names: Vec<Identifier> = import
                    .items
                    .iter()
                    .map(|item| item.alias.as_ref().unwrap_or(&item.name).clone())
                    .chain(import.default_import.clone())
                    .collect();
                for name in names {
                    self.declare(&name, SymbolKind::Import, false, false);
                }
            }
        }
    }

    fn visit_function(&mut self, function: &mut Function) {
        self.type_params.push(function.type_parameters.iter().map(|t| t.name.clone()).collect());
        if let Some(return_type) = &function.return_type {
            self.visit_type(&return_type.clone());
        }

        self.push_scope();
        for parameter in function.parameters.clone() {
            if let Some(annotation) = &parameter.type_annotation {
                self.visit_type(annotation);
            }
            let is_string =
                parameter.type_annotation.as_ref().is_some_and(|t| t.name.name == "textus");
            self.declare(&parameter.name, SymbolKind::Param, false, is_string);
        }
        for parameter in &mut function.parameters {
            if let Some(default) = &mut parameter.default {
                self.visit_expression(default);
            }
        }
        for statement in &mut function.body.statements {
            self.visit_statement(statement);
        }
        self.pop_scope();
        self.type_params.pop();
    }

    /// Returns true when the annotator can see that `expression` holds a
    /// string.
    fn expression_is_string(&self, expression: &Expression) -> bool {
        match expression {
            Expression::Identifier(id) => {
                matches!(self.lookup(&id.name), Some(binding) if binding.is_string)
            }
            Expression::Cast(cast) => cast.target_type.name.name == "textus",
            Expression::Binary(binary) => binary.string_operands && binary.op == BinaryOperation::Add,
            _ => expression_is_string(expression),
        }
    }

    fn visit_expression(&mut self, expression: &mut Expression) {
        match expression {
            Expression::Array(array) => {
                for element in &mut array.elements {
                    match element {
                        Argument::Expression(e) | Argument::Spread(e) => self.visit_expression(e),
                    }
                }
            }
            Expression::Arrow(arrow) => {
                self.push_scope();
                for parameter in arrow.parameters.clone() {
                    self.declare(&parameter.name, SymbolKind::Param, false, false);
                }
                match &mut arrow.body {
                    LambdaBody::Expression(e) => self.visit_expression(e),
                    LambdaBody::Block(block) => {
                        for statement in &mut block.statements {
                            self.visit_statement(statement);
                        }
                    }
                }
                self.pop_scope();
            }
            Expression::Await(await_) => self.visit_expression(&mut await_.operand),
            Expression::Binary(binary) => {
                self.visit_expression(&mut binary.left);
                self.visit_expression(&mut binary.right);

                if matches!(
                    binary.op,
                    BinaryOperation::Eq
                        | BinaryOperation::Neq
                        | BinaryOperation::StrictEq
                        | BinaryOperation::StrictNeq
                        | BinaryOperation::Add
                ) {
                    binary.string_operands = self.expression_is_string(&binary.left)
                        || self.expression_is_string(&binary.right);
                }

            }
            Expression::Call(call) => {
                self.visit_expression(&mut call.callee);
                for argument in &mut call.arguments {
                    match argument {
                        Argument::Expression(e) | Argument::Spread(e) => self.visit_expression(e),
                    }
                }
            }
            Expression::Cast(cast) => {
                self.visit_expression(&mut cast.expression);
                self.visit_type(&cast.target_type.clone());
            }
            Expression::ComputedMember(computed) => {
                self.visit_expression(&mut computed.object);
                self.visit_expression(&mut computed.index);
            }
            Expression::Comptime(comptime) => match &mut comptime.body {
                PraefixumBody::Expression(e) => self.visit_expression(e),
                PraefixumBody::Block(block) => self.visit_block(block),
            },
            Expression::Err(_) | Expression::Literal(_) | Expression::SelfRef(_) => {}
            Expression::Format(format) => {
                for argument in &mut format.arguments {
                    self.visit_expression(argument);
                }
            }
            Expression::Identifier(id) => {
                if id.sym_kind.is_none() {
                    id.sym_kind = self.lookup(&id.name).map(|b| b.kind).or_else(|| {
                        self.is_known_type(&id.name).then_some(SymbolKind::TypeName)
                    });
                }
            }
            Expression::Lambda(lambda) => {
                self.push_scope();
                for parameter in lambda.parameters.clone() {
                    let is_string =
                        parameter.type_annotation.as_ref().is_some_and(|t| t.name.name == "textus");
                    self.declare(&parameter.name, SymbolKind::Param, false, is_string);
                }
                match &mut lambda.body {
                    LambdaBody::Expression(e) => self.visit_expression(e),
                    LambdaBody::Block(block) => {
                        for statement in &mut block.statements {
                            self.visit_statement(statement);
                        }
                    }
                }
                self.pop_scope();
            }
            Expression::Member(member) => self.visit_expression(&mut member.object),
            Expression::New(new) => {
                if let Some(arguments) = &mut new.arguments {
                    for argument in arguments {
                        match argument {
                            Argument::Expression(e) | Argument::Spread(e) => self.visit_expression(e),
                        }
                    }
                }
                if let Some(overrides) = &mut new.overrides {
                    for entry in &mut overrides.entries {
                        match entry {
                            ObjectEntry::Field { value: Some(value), .. } => self.visit_expression(value),
                            ObjectEntry::Field { value: None, .. } => {}
                            ObjectEntry::Spread(e) => self.visit_expression(e),
                        }
                    }
                }
                if let Some(source) = &mut new.source {
                    self.visit_expression(source);
                }
            }
            Expression::Object(object) => {
                for entry in &mut object.entries {
                    match entry {
                        ObjectEntry::Field { value: Some(value), .. } => self.visit_expression(value),
                        ObjectEntry::Field { value: None, .. } => {}
                        ObjectEntry::Spread(e) => self.visit_expression(e),
                    }
                }
            }
            Expression::Pipeline(pipeline) => {
                self.visit_expression(&mut pipeline.source);
                for transform in &mut pipeline.transforms {
                    match transform {
                        Transform::Prima(n) | Transform::Ultima(n) => self.visit_expression(n),
                        Transform::Summa => {}
                    }
                }
            }
            Expression::Range(range) => {
                self.visit_expression(&mut range.start);
                self.visit_expression(&mut range.end);
                if let Some(step) = &mut range.step {
                    self.visit_expression(step);
                }
            }
            Expression::Ternary(ternary) => {
                self.visit_expression(&mut ternary.condition);
                self.visit_expression(&mut ternary.if_true);
                self.visit_expression(&mut ternary.if_false);
            }
            Expression::TypeTest(test) => {
                self.visit_expression(&mut test.expression);
                self.visit_type(&test.target_type.clone());
            }
            Expression::Unary(unary) => self.visit_expression(&mut unary.operand),
        }

        self.maybe_upgrade_type_test(expression);
    }

    /// `x est persona` parses as a value comparison because the parser only
    /// recognizes builtin type names; when the right side resolves to a
    /// declared type, the test semantics are restored here.
    fn maybe_upgrade_type_test(&mut self, expression: &mut Expression) {
        let Expression::Binary(binary) = &*expression else {
            return;
        };
        let (negated, type_name) = match (&binary.op, &*binary.right) {
            (BinaryOperation::Eq, Expression::Identifier(id)) if self.is_known_type(&id.name) => {
                (false, id.clone())
            }
            (BinaryOperation::Neq, Expression::Identifier(id)) if self.is_known_type(&id.name) => {
                (true, id.clone())
            }
            _ => return,
        };

        let span = binary.span;
        let Expression::Binary(binary) =
            std::mem::replace(expression, Expression::Err(ErrExpression { span }))
        else {
            unreachable!("checked above");
        };
        *expression = Expression::TypeTest(TypeTestExpression {
            expression: binary.left,
            target_type: TypeAnnotation::plain(type_name),
            negated,
            span,
        });
    }
}

/// Structural string-ness, with no scope information.
fn expression_is_string(expression: &Expression) -> bool {
    match expression {
        Expression::Literal(literal) => {
            matches!(literal.value, LiteralValue::String(_) | LiteralValue::Template(_))
        }
        Expression::Format(_) => true,
        _ => false,
    }
}
