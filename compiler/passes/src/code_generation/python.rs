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

//! The Python backend.
//!
//! The most lossy target: types are elided, reactive fields are plain
//! attributes, and block-bodied lambdas have no lowering. Blocks indent;
//! an empty block is `pass`.

use super::common::*;
use super::{Backend, Target};

use faber_ast::*;

use indexmap::IndexMap;
use itertools::Itertools;

/// Python reserved words that collide with Faber identifiers.
const RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Lowers a [`Program`] to Python. Four-space indentation.
pub struct PythonBackend {
    depth: usize,
    /// `discretio` variant fields for positional `discerne` bindings.
    variant_fields: IndexMap<String, Vec<String>>,
}

impl PythonBackend {
    pub fn new(program: &Program) -> Self {
        Self { depth: 0, variant_fields: collect_variant_fields(program) }
    }

    fn pad(&self) -> String {
        "    ".repeat(self.depth)
    }

    fn name(&self, id: &Identifier) -> String {
        rename_reserved(&id.name, RESERVED)
    }

    /// Emits the statements of a block one level deeper; an empty block is
    /// `pass`.
    fn visit_suite(&mut self, block: &Block) -> String {
        self.depth += 1;
        let out = if block.statements.is_empty() {
            format!("{}pass\n", self.pad())
        } else {
            block.statements.iter().map(|s| self.visit_statement(s)).collect()
        };
        self.depth -= 1;
        out
    }

    fn visit_statements(&mut self, statements: &[Statement]) -> String {
        self.depth += 1;
        let out = if statements.is_empty() {
            format!("{}pass\n", self.pad())
        } else {
            statements.iter().map(|s| self.visit_statement(s)).collect()
        };
        self.depth -= 1;
        out
    }

    fn visit_statement(&mut self, statement: &Statement) -> String {
        let pad = self.pad();
        match statement {
            Statement::Assert(assert) => {
                let condition = self.visit_expression(&assert.condition);
                match &assert.message {
                    Some(message) => {
                        format!("{pad}assert {condition}, {}\n", self.visit_expression(message))
                    }
                    None => format!("{pad}assert {condition}\n"),
                }
            }
            Statement::Assign(assign) => {
                let place = self.visit_expression(&assign.place);
                let value = self.visit_expression(&assign.value);
                format!("{pad}{place} = {value}\n")
            }
            // Python has no bare blocks; the statements run in place.
            Statement::Block(block) => {
                block.statements.iter().map(|s| self.visit_statement(s)).collect()
            }
            Statement::Break(_) => format!("{pad}break\n"),
            Statement::Conditional(conditional) => self.visit_conditional(conditional),
            Statement::Console(console) => {
                let arguments = console.arguments.iter().map(|a| self.visit_expression(a)).join(", ");
                match console.function {
                    ConsoleFunction::Scribe | ConsoleFunction::Vide => format!("{pad}print({arguments})\n"),
                    ConsoleFunction::Mone => format!("{pad}print(\"warning:\", {arguments})\n"),
                }
            }
            Statement::Continue(_) => format!("{pad}continue\n"),
            Statement::Cura(cura) => {
                let resource = self.visit_expression(&cura.resource);
                let header = match &cura.binding {
                    Some(binding) => format!("{pad}with {resource} as {}:\n", self.name(binding)),
                    None => format!("{pad}with {resource}:\n"),
                };
                format!("{header}{}", self.visit_suite(&cura.body))
            }
            Statement::Custodi(custodi) => {
                let condition = self.visit_expression(&custodi.condition);
                format!("{pad}if not ({condition}):\n{}", self.visit_suite(&custodi.body))
            }
            Statement::Declaration(declaration) => self.visit_declaration(declaration),
            Statement::Discerne(discerne) => self.visit_discerne(discerne),
            Statement::Dispatch(dispatch) => {
                format!("{pad}return {}\n", self.visit_expression(&dispatch.expression))
            }
            Statement::Elige(elige) => self.visit_elige(elige),
            Statement::Expression(expression) => {
                format!("{pad}{}\n", self.visit_expression(&expression.expression))
            }
            Statement::Iteration(iteration) => self.visit_iteration(iteration),
            Statement::Return(return_) => match &return_.expression {
                Some(expression) => format!("{pad}return {}\n", self.visit_expression(expression)),
                None => format!("{pad}return\n"),
            },
            Statement::TestCase(case) => {
                format!("{pad}def test_{}(self):\n{}", slug(&case.name), self.visit_suite(&case.body))
            }
            Statement::TestHook(hook) => {
                let method = match hook.kind {
                    HookKind::Ante => "setup_method",
                    HookKind::Post => "teardown_method",
                };
                format!("{pad}def {method}(self):\n{}", self.visit_suite(&hook.body))
            }
            Statement::TestSuite(suite) => {
                format!("{pad}class Test{}:\n{}", camel(&suite.name), self.visit_suite(&suite.body))
            }
            Statement::Throw(throw) => {
                let expression = self.visit_expression(&throw.expression);
                if throw.fatal {
                    format!("{pad}raise SystemExit({expression})\n")
                } else {
                    format!("{pad}raise Exception({expression})\n")
                }
            }
            Statement::Try(try_) => {
                let mut out = format!("{pad}try:\n{}", self.visit_suite(&try_.block));
                if let Some(catch) = &try_.catch {
                    match &catch.binding {
                        Some(binding) => {
                            out.push_str(&format!("{pad}except Exception as {}:\n", self.name(binding)));
                        }
                        None => out.push_str(&format!("{pad}except Exception:\n")),
                    }
                    out.push_str(&self.visit_suite(&catch.body));
                }
                if let Some(finally) = &try_.finally {
                    out.push_str(&format!("{pad}finally:\n{}", self.visit_suite(finally)));
                }
                out
            }
            Statement::While(while_) => {
                let condition = self.visit_expression(&while_.condition);
                format!("{pad}while {condition}:\n{}", self.visit_suite(&while_.body))
            }
        }
    }

    fn visit_conditional(&mut self, conditional: &ConditionalStatement) -> String {
        let pad = self.pad();
        let condition = self.visit_expression(&conditional.condition);
        let mut core = format!("{pad}if {condition}:\n{}", self.visit_suite(&conditional.then));
        if let Some(otherwise) = &conditional.otherwise {
            match &**otherwise {
                Statement::Conditional(chained) => {
                    let tail = self.visit_conditional(chained);
                    let tail = tail.strip_prefix(&pad).unwrap_or(&tail).replacen("if ", "elif ", 1);
                    core.push_str(&format!("{pad}{tail}"));
                }
                Statement::Block(block) => {
                    core.push_str(&format!("{pad}else:\n{}", self.visit_statements(&block.statements)));
                }
                other => {
                    core.push_str(&format!("{pad}else:\n"));
                    self.depth += 1;
                    core.push_str(&self.visit_statement(other));
                    self.depth -= 1;
                }
            }
        }

        let Some(catch) = &conditional.catch else {
            return core;
        };

        // The guarded conditional runs inside try/except.
        let mut out = format!("{pad}try:\n");
        self.depth += 1;
        out.push_str(&self.visit_conditional(&ConditionalStatement {
            catch: None,
            ..conditional.clone()
        }));
        self.depth -= 1;
        match &catch.binding {
            Some(binding) => out.push_str(&format!("{pad}except Exception as {}:\n", self.name(binding))),
            None => out.push_str(&format!("{pad}except Exception:\n")),
        }
        out.push_str(&self.visit_suite(&catch.body));
        out
    }

    fn visit_elige(&mut self, elige: &EligeStatement) -> String {
        let pad = self.pad();
        let subject = self.visit_expression(&elige.subject);
        let mut out = format!("{pad}match {subject}:\n");
        self.depth += 1;
        for case in &elige.cases {
            let values = case.values.iter().map(|v| self.visit_expression(v)).join(" | ");
            out.push_str(&format!("{}case {values}:\n{}", self.pad(), self.visit_suite(&case.body)));
        }
        if let Some(default) = &elige.default {
            out.push_str(&format!("{}case _:\n{}", self.pad(), self.visit_suite(default)));
        }
        self.depth -= 1;
        out
    }

    /// `discerne` lowers to an `if`/`elif` chain over the `kind` tag with
    /// positional field bindings.
    fn visit_discerne(&mut self, discerne: &DiscerneStatement) -> String {
        let pad = self.pad();
        let subject = self.visit_expression(&discerne.subject);
        let mut out = String::new();
        for (index, arm) in discerne.arms.iter().enumerate() {
            let keyword = if index == 0 { "if" } else { "elif" };
            out.push_str(&format!(
                "{pad}{keyword} {subject}[\"kind\"] == \"{}\":\n",
                arm.variant.name
            ));
            self.depth += 1;
            let fields = self.variant_fields.get(&arm.variant.name).cloned().unwrap_or_default();
            for (position, binding) in arm.bindings.iter().enumerate() {
                let field = fields.get(position).cloned().unwrap_or_else(|| format!("_{position}"));
                out.push_str(&format!(
                    "{}{} = {subject}[\"{field}\"]\n",
                    self.pad(),
                    self.name(binding)
                ));
            }
            if arm.body.statements.is_empty() && arm.bindings.is_empty() {
                out.push_str(&format!("{}pass\n", self.pad()));
            }
            for statement in &arm.body.statements {
                out.push_str(&self.visit_statement(statement));
            }
            self.depth -= 1;
        }
        if let Some(default) = &discerne.default {
            if discerne.arms.is_empty() {
                return format!("{pad}if True:\n{}", self.visit_suite(default));
            }
            out.push_str(&format!("{pad}else:\n{}", self.visit_suite(default)));
        }
        out
    }

    fn visit_iteration(&mut self, iteration: &IterationStatement) -> String {
        let pad = self.pad();
        let binding = self.name(&iteration.binding);

        if let Expression::Range(range) = &iteration.source {
            let start = self.visit_expression(&range.start);
            let end = self.visit_expression(&range.end);
            let step = match &range.step {
                Some(step) => self.visit_expression(step),
                None => "1".to_string(),
            };
            let end = if range.kind.includes_end() { format!("{end} + 1") } else { end };
            let range_args = if step == "1" { format!("{start}, {end}") } else { format!("{start}, {end}, {step}") };
            return format!(
                "{pad}for {binding} in range({range_args}):\n{}",
                self.visit_suite(&iteration.body)
            );
        }

        let mut source = self.operand(&iteration.source);
        source = self.apply_transforms(source, &iteration.transforms);
        let asyncness = if iteration.verb.is_async() { "async " } else { "" };
        format!("{pad}{asyncness}for {binding} in {source}:\n{}", self.visit_suite(&iteration.body))
    }

    fn visit_declaration(&mut self, declaration: &Declaration) -> String {
        let pad = self.pad();
        match declaration {
            Declaration::Variable(variable) => self.visit_variable(variable),
            Declaration::Function(function) => self.visit_function(function),
            Declaration::Genus(genus) => self.visit_genus(genus),
            Declaration::Pactum(pactum) => {
                let mut out = format!("{pad}class {}:\n", self.name(&pactum.name));
                self.depth += 1;
                if pactum.methods.is_empty() {
                    out.push_str(&format!("{}pass\n", self.pad()));
                }
                for method in &pactum.methods {
                    let parameters = method.parameters.iter().map(|p| self.name(&p.name)).join(", ");
                    let sep = if method.parameters.is_empty() { "" } else { ", " };
                    out.push_str(&format!(
                        "{}def {}(self{sep}{parameters}):\n",
                        self.pad(),
                        self.name(&method.name)
                    ));
                    self.depth += 1;
                    out.push_str(&format!("{}raise NotImplementedError\n", self.pad()));
                    self.depth -= 1;
                }
                self.depth -= 1;
                out
            }
            // Aliases vanish: Python annotations are optional and elided.
            Declaration::TypeAlias(_) => String::new(),
            Declaration::Ordo(ordo) => {
                let mut out = format!("{pad}class {}:\n", self.name(&ordo.name));
                self.depth += 1;
                if ordo.members.is_empty() {
                    out.push_str(&format!("{}pass\n", self.pad()));
                }
                let mut next_implicit = 0i64;
                for member in &ordo.members {
                    let value = match &member.value {
                        Some(OrdoValue::Integer(text)) => {
                            next_implicit = text.parse::<i64>().map_or(next_implicit, |v| v + 1);
                            text.clone()
                        }
                        Some(OrdoValue::String(text)) => format!("\"{}\"", escape_string(text)),
                        None => {
                            let value = next_implicit.to_string();
                            next_implicit += 1;
                            value
                        }
                    };
                    out.push_str(&format!("{}{} = {value}\n", self.pad(), member.name.name));
                }
                self.depth -= 1;
                out
            }
            Declaration::Discretio(discretio) => {
                let mut out = format!("{pad}class {}:\n", self.name(&discretio.name));
                self.depth += 1;
                if discretio.variants.is_empty() {
                    out.push_str(&format!("{}pass\n", self.pad()));
                }
                for variant in &discretio.variants {
                    let parameters = variant.fields.iter().map(|f| f.name.name.clone()).join(", ");
                    let entries = variant
                        .fields
                        .iter()
                        .map(|f| format!("\"{0}\": {0}", f.name.name))
                        .join(", ");
                    let sep = if variant.fields.is_empty() { "" } else { ", " };
                    out.push_str(&format!("{}@staticmethod\n", self.pad()));
                    out.push_str(&format!("{}def {}({parameters}):\n", self.pad(), variant.name.name));
                    self.depth += 1;
                    out.push_str(&format!(
                        "{}return {{\"kind\": \"{}\"{sep}{entries}}}\n",
                        self.pad(),
                        variant.name.name
                    ));
                    self.depth -= 1;
                }
                self.depth -= 1;
                out
            }
            Declaration::Import(import) => {
                let module = match &import.source {
                    ImportSource::Path(path) => path.replace('/', "."),
                    ImportSource::Module(name) => name.name.clone(),
                };
                if let Some(default_import) = &import.default_import {
                    return format!("{pad}import {module} as {}\n", self.name(default_import));
                }
                let items = import
                    .items
                    .iter()
                    .map(|item| match &item.alias {
                        Some(alias) => format!("{} as {}", item.name.name, self.name(alias)),
                        None => self.name(&item.name),
                    })
                    .join(", ");
                format!("{pad}from {module} import {items}\n")
            }
        }
    }

    fn visit_variable(&mut self, variable: &VariableDeclaration) -> String {
        let pad = self.pad();
        let initializer = variable.initializer.as_ref().map(|init| {
            let text = self.visit_expression(init);
            if variable.kind.is_awaited() {
                format!("await ({text})")
            } else {
                text
            }
        });
        let init = initializer.unwrap_or_else(|| "None".to_string());

        match &variable.pattern {
            Pattern::Identifier(name) => format!("{pad}{} = {init}\n", self.name(name)),
            Pattern::Object(object) => {
                let mut out = format!("{pad}_tmp = {init}\n");
                for entry in &object.entries {
                    match entry {
                        ObjectPatternEntry::Field { key, alias } => {
                            let local = self.name(alias.as_ref().unwrap_or(key));
                            out.push_str(&format!("{pad}{local} = _tmp[\"{}\"]\n", key.name));
                        }
                        ObjectPatternEntry::Rest(rest) => {
                            out.push_str(&format!("{pad}{} = _tmp\n", self.name(rest)));
                        }
                    }
                }
                out
            }
            Pattern::Array(array) => {
                let targets = array
                    .elements
                    .iter()
                    .map(|element| match element {
                        ArrayPatternElement::Identifier(name) => self.name(name),
                        ArrayPatternElement::Skip => "_".to_string(),
                        ArrayPatternElement::Rest(rest) => format!("*{}", self.name(rest)),
                    })
                    .join(", ");
                format!("{pad}{targets} = {init}\n")
            }
        }
    }

    fn visit_function(&mut self, function: &Function) -> String {
        let pad = self.pad();
        let asyncness = if function.variant.is_async { "async " } else { "" };
        let parameters = function
            .parameters
            .iter()
            .map(|parameter| {
                let mut out = self.name(&parameter.name);
                if let Some(default) = &parameter.default {
                    out.push('=');
                    out.push_str(&self.visit_expression(default));
                }
                out
            })
            .join(", ");
        format!(
            "{pad}{asyncness}def {}({parameters}):\n{}",
            self.name(&function.name),
            self.visit_suite(&function.body)
        )
    }

    fn visit_genus(&mut self, genus: &GenusDeclaration) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}class {}:\n", self.name(&genus.name));
        self.depth += 1;

        out.push_str(&format!("{}def __init__(self, **overrides):\n", self.pad()));
        self.depth += 1;
        let fields: Vec<_> = genus.fields().collect();
        if fields.is_empty() && genus.constructor().is_none() {
            out.push_str(&format!("{}pass\n", self.pad()));
        }
        for field in &fields {
            let default = match &field.default {
                Some(default) => self.visit_expression(default),
                None => "None".to_string(),
            };
            out.push_str(&format!(
                "{}self.{name} = overrides.get(\"{name}\", {default})\n",
                self.pad(),
                name = field.name.name
            ));
        }
        if let Some(constructor) = genus.constructor() {
            for statement in &constructor.function.body.statements {
                out.push_str(&self.visit_statement(statement));
            }
        }
        self.depth -= 1;

        for method in genus.methods().filter(|m| !m.is_constructor) {
            let function = &method.function;
            let asyncness = if function.variant.is_async { "async " } else { "" };
            let parameters = function.parameters.iter().map(|p| self.name(&p.name)).join(", ");
            let sep = if function.parameters.is_empty() { "" } else { ", " };
            let receiver = if method.modifiers.static_ { "" } else { "self" };
            if method.modifiers.static_ {
                out.push_str(&format!("{}@staticmethod\n", self.pad()));
            }
            out.push_str(&format!(
                "{}{asyncness}def {}({receiver}{}{parameters}):\n{}",
                self.pad(),
                self.name(&function.name),
                if method.modifiers.static_ { "" } else { sep },
                self.visit_suite(&function.body)
            ));
        }

        self.depth -= 1;
        out
    }

    fn operand(&mut self, expression: &Expression) -> String {
        let text = self.visit_expression(expression);
        match expression {
            Expression::Binary(_)
            | Expression::Ternary(_)
            | Expression::Unary(_)
            | Expression::Await(_)
            | Expression::Lambda(_)
            | Expression::Arrow(_) => format!("({text})"),
            _ => text,
        }
    }

    fn apply_transforms(&mut self, source: String, transforms: &[Transform]) -> String {
        let mut out = source;
        for transform in transforms {
            out = match transform {
                Transform::Prima(n) => format!("{out}[:{}]", self.visit_expression(n)),
                Transform::Ultima(n) => format!("{out}[-{}:]", self.operand(n)),
                Transform::Summa => format!("sum({out})"),
            };
        }
        out
    }

    fn visit_expression(&mut self, expression: &Expression) -> String {
        match expression {
            Expression::Array(array) => {
                let elements = array
                    .elements
                    .iter()
                    .map(|element| match element {
                        Argument::Expression(e) => self.visit_expression(e),
                        Argument::Spread(e) => format!("*{}", self.operand(e)),
                    })
                    .join(", ");
                format!("[{elements}]")
            }
            Expression::Arrow(arrow) => {
                let parameters = arrow.parameters.iter().map(|p| self.name(&p.name)).join(", ");
                match &arrow.body {
                    LambdaBody::Expression(e) => {
                        format!("lambda {parameters}: {}", self.visit_expression(e))
                    }
                    // A block-bodied lambda has no Python lowering.
                    LambdaBody::Block(_) => "None".to_string(),
                }
            }
            Expression::Await(await_) => format!("await {}", self.operand(&await_.operand)),
            Expression::Binary(binary) => self.visit_binary(binary),
            Expression::Call(call) => {
                let callee = self.operand(&call.callee);
                let arguments = call
                    .arguments
                    .iter()
                    .map(|argument| match argument {
                        Argument::Expression(e) => self.visit_expression(e),
                        Argument::Spread(e) => format!("*{}", self.operand(e)),
                    })
                    .join(", ");
                format!("{callee}({arguments})")
            }
            // Types are elided; the cast is the value itself.
            Expression::Cast(cast) => self.visit_expression(&cast.expression),
            Expression::ComputedMember(computed) => {
                let object = self.operand(&computed.object);
                format!("{object}[{}]", self.visit_expression(&computed.index))
            }
            Expression::Comptime(comptime) => match &comptime.body {
                PraefixumBody::Expression(e) => self.visit_expression(e),
                PraefixumBody::Block(_) => "None".to_string(),
            },
            Expression::Err(_) => "None".to_string(),
            Expression::Format(format_expr) => {
                let pieces = split_format(&format_expr.format);
                let text = pieces.iter().map(|piece| escape_string(piece)).join("{}");
                let arguments =
                    format_expr.arguments.iter().map(|a| self.visit_expression(a)).join(", ");
                format!("\"{text}\".format({arguments})")
            }
            Expression::Identifier(id) => self.name(id),
            Expression::Lambda(lambda) => {
                let parameters = lambda.parameters.iter().map(|p| self.name(&p.name)).join(", ");
                match &lambda.body {
                    LambdaBody::Expression(e) => {
                        format!("lambda {parameters}: {}", self.visit_expression(e))
                    }
                    LambdaBody::Block(_) => "None".to_string(),
                }
            }
            Expression::Literal(literal) => self.visit_literal(literal),
            Expression::Member(member) => {
                let object = self.operand(&member.object);
                format!("{object}.{}", member.member.name)
            }
            Expression::New(new) => self.visit_new(new),
            Expression::Object(object) => {
                if object.entries.is_empty() {
                    return "{}".to_string();
                }
                let entries = object
                    .entries
                    .iter()
                    .map(|entry| match entry {
                        ObjectEntry::Field { key, value: Some(value) } => {
                            format!("\"{}\": {}", key.name, self.visit_expression(value))
                        }
                        ObjectEntry::Field { key, value: None } => {
                            format!("\"{}\": {}", key.name, self.name(key))
                        }
                        ObjectEntry::Spread(e) => format!("**{}", self.operand(e)),
                    })
                    .join(", ");
                format!("{{{entries}}}")
            }
            Expression::Pipeline(pipeline) => {
                let source = self.operand(&pipeline.source);
                self.apply_transforms(source, &pipeline.transforms)
            }
            Expression::Range(range) => {
                let start = self.visit_expression(&range.start);
                let end = self.visit_expression(&range.end);
                let step = match &range.step {
                    Some(step) => self.visit_expression(step),
                    None => "1".to_string(),
                };
                let end = if range.kind.includes_end() { format!("{end} + 1") } else { end };
                if step == "1" {
                    format!("list(range({start}, {end}))")
                } else {
                    format!("list(range({start}, {end}, {step}))")
                }
            }
            Expression::SelfRef(_) => "self".to_string(),
            Expression::Ternary(ternary) => {
                let condition = self.operand(&ternary.condition);
                let if_true = self.operand(&ternary.if_true);
                let if_false = self.operand(&ternary.if_false);
                format!("{if_true} if {condition} else {if_false}")
            }
            Expression::TypeTest(test) => {
                let operand = self.operand(&test.expression);
                let check = match test.target_type.name.name.as_str() {
                    "textus" => format!("isinstance({operand}, str)"),
                    "numerus" | "ingens" => format!("isinstance({operand}, int)"),
                    "fractio" => format!("isinstance({operand}, float)"),
                    "bivalens" => format!("isinstance({operand}, bool)"),
                    "lista" => format!("isinstance({operand}, list)"),
                    "mappa" => format!("isinstance({operand}, dict)"),
                    other => format!("isinstance({operand}, {})", rename_reserved(other, RESERVED)),
                };
                if test.negated {
                    format!("not {check}")
                } else {
                    check
                }
            }
            Expression::Unary(unary) => self.visit_unary(unary),
        }
    }

    fn visit_literal(&mut self, literal: &LiteralExpression) -> String {
        match &literal.value {
            LiteralValue::Bool(true) => "True".to_string(),
            LiteralValue::Bool(false) => "False".to_string(),
            LiteralValue::Nihil => "None".to_string(),
            LiteralValue::Integer(text) | LiteralValue::Float(text) => text.clone(),
            LiteralValue::BigInt(text) => text.clone(),
            LiteralValue::String(text) => format!("\"{}\"", escape_string(text)),
            LiteralValue::Template(text) => format!("\"{}\"", escape_string(text)),
        }
    }

    fn visit_binary(&mut self, binary: &BinaryExpression) -> String {
        if binary.op == BinaryOperation::Nullish {
            let left = self.operand(&binary.left);
            let right = self.operand(&binary.right);
            return format!("{left} if {left} is not None else {right}");
        }

        let op = match binary.op {
            BinaryOperation::Eq | BinaryOperation::StrictEq => "==",
            BinaryOperation::Neq | BinaryOperation::StrictNeq => "!=",
            BinaryOperation::And => "and",
            BinaryOperation::Or => "or",
            BinaryOperation::Nullish => unreachable!("handled above"),
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "*",
            BinaryOperation::Div => "/",
            BinaryOperation::Rem => "%",
            BinaryOperation::Lt => "<",
            BinaryOperation::Le => "<=",
            BinaryOperation::Gt => ">",
            BinaryOperation::Ge => ">=",
            BinaryOperation::BitwiseAnd => "&",
            BinaryOperation::BitwiseOr => "|",
            BinaryOperation::Xor => "^",
            BinaryOperation::Shl => "<<",
            BinaryOperation::Shr => ">>",
        };
        let left = self.visit_expression(&binary.left);
        let right = self.visit_expression(&binary.right);
        let left = wrap_operand(left, &binary.left, binary.op, false);
        let right = wrap_operand(right, &binary.right, binary.op, true);
        format!("{left} {op} {right}")
    }

    fn visit_unary(&mut self, unary: &UnaryExpression) -> String {
        let operand = self.operand(&unary.operand);
        match unary.op {
            UnaryOperation::Negate => format!("-{operand}"),
            UnaryOperation::BitNot => format!("~{operand}"),
            UnaryOperation::Not => format!("not {operand}"),
            UnaryOperation::Nulla | UnaryOperation::Nihil => format!("{operand} is None"),
            UnaryOperation::Nonnulla | UnaryOperation::Nonnihil => format!("{operand} is not None"),
            UnaryOperation::Negativum => format!("{operand} < 0"),
            UnaryOperation::Positivum => format!("{operand} > 0"),
            UnaryOperation::NonNullAssert => operand,
        }
    }

    fn visit_new(&mut self, new: &NewExpression) -> String {
        let callee = self.name(&new.callee);
        if let Some(arguments) = &new.arguments {
            let arguments = arguments
                .iter()
                .map(|argument| match argument {
                    Argument::Expression(e) => self.visit_expression(e),
                    Argument::Spread(e) => format!("*{}", self.operand(e)),
                })
                .join(", ");
            return format!("{callee}({arguments})");
        }
        if let Some(overrides) = &new.overrides {
            let keywords = overrides
                .entries
                .iter()
                .filter_map(|entry| match entry {
                    ObjectEntry::Field { key, value: Some(value) } => {
                        Some(format!("{}={}", key.name, self.visit_expression(value)))
                    }
                    ObjectEntry::Field { key, value: None } => {
                        Some(format!("{}={}", key.name, self.name(key)))
                    }
                    ObjectEntry::Spread(e) => Some(format!("**{}", self.operand(e))),
                })
                .join(", ");
            return format!("{callee}({keywords})");
        }
        if let Some(source) = &new.source {
            return format!("{callee}(**{})", self.operand(source));
        }
        format!("{callee}()")
    }
}

impl Backend for PythonBackend {
    fn target(&self) -> Target {
        Target::Python
    }

    fn emit_program(&mut self, program: &Program) -> String {
        program.statements.iter().map(|s| self.visit_statement(s)).collect()
    }
}

/// Lowercase identifier slug for generated test names.
fn slug(name: &str) -> String {
    let mut out = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// CamelCase form for generated suite class names.
fn camel(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
