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

//! The Zig backend.
//!
//! Module-scope constants take an `m_` prefix so they cannot shadow
//! function parameters; statements outside declarations gather into
//! `pub fn main() !void`. Async verbs expand to error unions and `cede`
//! to `try`. String equality goes through `std.mem.eql`.

use super::common::*;
use super::{Backend, Target};

use faber_ast::*;

use indexmap::IndexMap;
use itertools::Itertools;

/// Zig reserved words that collide with Faber identifiers.
const RESERVED: &[&str] = &[
    "align", "and", "anytype", "async", "await", "break", "catch", "comptime", "const", "continue",
    "defer", "else", "enum", "error", "export", "extern", "fn", "for", "if", "inline", "noreturn",
    "null", "opaque", "or", "orelse", "packed", "pub", "resume", "return", "struct", "suspend",
    "switch", "test", "threadlocal", "true", "false", "try", "type", "undefined", "union",
    "unreachable", "usingnamespace", "var", "void", "volatile", "while",
];

/// Lowers a [`Program`] to Zig. Four-space indentation.
pub struct ZigBackend {
    depth: usize,
    /// `discretio` variant fields for positional `discerne` bindings.
    variant_fields: IndexMap<String, Vec<String>>,
    /// Module-scope bindings renamed with the `m_` prefix.
    module_renames: IndexMap<String, String>,
    /// Counter behind `_tmp` destructuring temporaries.
    next_tmp: usize,
}

impl ZigBackend {
    pub fn new(program: &Program) -> Self {
        let mut module_renames = IndexMap::new();
        for statement in &program.statements {
            if let Statement::Declaration(Declaration::Variable(variable)) = statement {
                if let Pattern::Identifier(name) = &variable.pattern {
                    module_renames.insert(name.name.clone(), format!("m_{}", name.name));
                }
            }
        }
        Self { depth: 0, variant_fields: collect_variant_fields(program), module_renames, next_tmp: 0 }
    }

    fn pad(&self) -> String {
        "    ".repeat(self.depth)
    }

    fn name(&self, id: &Identifier) -> String {
        if let Some(renamed) = self.module_renames.get(&id.name) {
            return renamed.clone();
        }
        rename_reserved(&id.name, RESERVED)
    }

    /// A plain declaration-position name: module renames do not apply, the
    /// declaration site is where the prefix is introduced.
    fn decl_name(&self, id: &Identifier) -> String {
        rename_reserved(&id.name, RESERVED)
    }

    fn fresh_tmp(&mut self) -> String {
        let n = self.next_tmp;
        self.next_tmp += 1;
        if n == 0 {
            "_tmp".to_string()
        } else {
            format!("_tmp{n}")
        }
    }

    fn visit_block(&mut self, block: &Block) -> String {
        if block.statements.is_empty() {
            return "{}".to_string();
        }
        let mut out = String::from("{\n");
        self.depth += 1;
        for statement in &block.statements {
            out.push_str(&self.visit_statement(statement));
        }
        self.depth -= 1;
        out.push_str(&self.pad());
        out.push('}');
        out
    }

    fn visit_statement(&mut self, statement: &Statement) -> String {
        let pad = self.pad();
        match statement {
            Statement::Assert(assert) => {
                let condition = self.visit_expression(&assert.condition);
                match &assert.message {
                    Some(message) => {
                        let message = self.visit_expression(message);
                        format!("{pad}if (!({condition})) @panic({message});\n")
                    }
                    None => format!("{pad}std.debug.assert({condition});\n"),
                }
            }
            Statement::Assign(assign) => {
                let place = self.visit_expression(&assign.place);
                let value = self.visit_expression(&assign.value);
                format!("{pad}{place} = {value};\n")
            }
            Statement::Block(block) => format!("{pad}{}\n", self.visit_block(block)),
            Statement::Break(_) => format!("{pad}break;\n"),
            Statement::Conditional(conditional) => self.visit_conditional(conditional),
            Statement::Console(console) => self.visit_console(console),
            Statement::Continue(_) => format!("{pad}continue;\n"),
            Statement::Cura(cura) => {
                let resource = self.visit_expression(&cura.resource);
                let binding = cura.binding.as_ref().map_or("_res".to_string(), |b| self.decl_name(b));
                let mut out = format!("{pad}{{\n");
                self.depth += 1;
                out.push_str(&format!("{}const {binding} = {resource};\n", self.pad()));
                out.push_str(&format!("{}defer {binding}.deinit();\n", self.pad()));
                for statement in &cura.body.statements {
                    out.push_str(&self.visit_statement(statement));
                }
                self.depth -= 1;
                out.push_str(&format!("{pad}}}\n"));
                out
            }
            Statement::Custodi(custodi) => {
                let condition = self.visit_expression(&custodi.condition);
                let body = self.visit_block(&custodi.body);
                format!("{pad}if (!({condition})) {body}\n")
            }
            Statement::Declaration(declaration) => self.visit_declaration(declaration),
            Statement::Discerne(discerne) => self.visit_discerne(discerne),
            Statement::Dispatch(dispatch) => {
                format!("{pad}return {};\n", self.visit_expression(&dispatch.expression))
            }
            Statement::Elige(elige) => self.visit_elige(elige),
            Statement::Expression(expression) => {
                let text = self.visit_expression(&expression.expression);
                if matches!(expression.expression, Expression::Call(_)) {
                    format!("{pad}{text};\n")
                } else {
                    format!("{pad}_ = {text};\n")
                }
            }
            Statement::Iteration(iteration) => self.visit_iteration(iteration),
            Statement::Return(return_) => match &return_.expression {
                Some(expression) => format!("{pad}return {};\n", self.visit_expression(expression)),
                None => format!("{pad}return;\n"),
            },
            Statement::TestCase(case) => self.visit_test_case(&case.name, &case.body, &[], &[]),
            Statement::TestHook(_) => String::new(),
            Statement::TestSuite(suite) => self.visit_test_suite(suite),
            Statement::Throw(throw) => {
                let expression = self.visit_expression(&throw.expression);
                if throw.fatal {
                    return format!("{pad}std.debug.panic(\"{{any}}\", .{{{expression}}});\n");
                }
                if matches!(&throw.expression, Expression::Literal(_)) {
                    format!("{pad}return error.Raised;\n")
                } else {
                    format!("{pad}_ = {expression};\n{pad}return error.Raised;\n")
                }
            }
            Statement::Try(try_) => self.visit_try(try_),
            Statement::While(while_) => {
                let condition = self.visit_expression(&while_.condition);
                let body = self.visit_block(&while_.body);
                format!("{pad}while ({condition}) {body}\n")
            }
        }
    }

    fn visit_conditional(&mut self, conditional: &ConditionalStatement) -> String {
        let pad = self.pad();
        let condition = self.visit_expression(&conditional.condition);
        let then = self.visit_block(&conditional.then);
        let mut out = format!("{pad}if ({condition}) {then}");
        if let Some(otherwise) = &conditional.otherwise {
            let tail = self.visit_statement(otherwise);
            out.push_str(" else ");
            out.push_str(tail.trim_start());
        } else {
            out.push('\n');
        }

        // Zig routes recoverable errors through error unions; the handler
        // block is kept, unreachable, for fidelity.
        if let Some(catch) = &conditional.catch {
            out.push_str(&self.unreachable_handler(catch));
        }
        out
    }

    fn unreachable_handler(&mut self, catch: &CatchClause) -> String {
        let pad = self.pad();
        let binding = catch.binding.as_ref().map_or("_e".to_string(), |b| self.decl_name(b));
        let mut out = format!("{pad}if (false) {{\n");
        self.depth += 1;
        out.push_str(&format!("{}const {binding}: anyerror = error.Raised;\n", self.pad()));
        out.push_str(&format!("{}_ = {binding};\n", self.pad()));
        for statement in &catch.body.statements {
            out.push_str(&self.visit_statement(statement));
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    fn visit_try(&mut self, try_: &TryStatement) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}{{\n");
        self.depth += 1;
        if let Some(finally) = &try_.finally {
            let body = self.visit_block(finally);
            out.push_str(&format!("{}defer {body}\n", self.pad()));
        }
        for statement in &try_.block.statements {
            out.push_str(&self.visit_statement(statement));
        }
        if let Some(catch) = &try_.catch {
            out.push_str(&self.unreachable_handler(catch));
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    fn visit_console(&mut self, console: &ConsoleStatement) -> String {
        let pad = self.pad();
        let arguments = console.arguments.iter().map(|a| self.visit_expression(a)).join(", ");
        let placeholders = console.arguments.iter().map(|_| "{any}").join(" ");
        match console.function {
            ConsoleFunction::Scribe => {
                format!("{pad}std.debug.print(\"{placeholders}\\n\", .{{{arguments}}});\n")
            }
            ConsoleFunction::Vide => {
                format!("{pad}std.log.debug(\"{placeholders}\", .{{{arguments}}});\n")
            }
            ConsoleFunction::Mone => {
                format!("{pad}std.log.warn(\"{placeholders}\", .{{{arguments}}});\n")
            }
        }
    }

    /// Range loops count manually; collections use `for` captures; `de`
    /// walks a key iterator.
    fn visit_iteration(&mut self, iteration: &IterationStatement) -> String {
        let pad = self.pad();
        let binding = self.decl_name(&iteration.binding);

        if let Expression::Range(range) = &iteration.source {
            let start = self.visit_expression(&range.start);
            let end = self.visit_expression(&range.end);
            let comparison = if range.kind.includes_end() { "<=" } else { "<" };
            let step = match &range.step {
                Some(step) => self.visit_expression(step),
                None => "1".to_string(),
            };
            let body = self.visit_block(&iteration.body);
            return format!(
                "{pad}var {binding}: usize = {start};\n\
                 {pad}while ({binding} {comparison} {end}) : ({binding} += {step}) {body}\n"
            );
        }

        let mut source = self.operand(&iteration.source);
        source = self.apply_transforms(source, &iteration.transforms);
        let body = self.visit_block(&iteration.body);

        if iteration.kind == IterationKind::De {
            let iter = self.fresh_tmp();
            return format!(
                "{pad}var {iter} = {source}.keyIterator();\n\
                 {pad}while ({iter}.next()) |{binding}| {body}\n"
            );
        }

        format!("{pad}for ({source}) |{binding}| {body}\n")
    }

    fn visit_elige(&mut self, elige: &EligeStatement) -> String {
        let pad = self.pad();
        let subject = self.visit_expression(&elige.subject);
        let mut out = format!("{pad}switch ({subject}) {{\n");
        self.depth += 1;
        for case in &elige.cases {
            let values = case.values.iter().map(|v| self.visit_expression(v)).join(", ");
            let body = self.visit_block(&case.body);
            out.push_str(&format!("{}{values} => {body},\n", self.pad()));
        }
        let default = match &elige.default {
            Some(default) => self.visit_block(default),
            None => "{}".to_string(),
        };
        out.push_str(&format!("{}else => {default},\n", self.pad()));
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    fn visit_discerne(&mut self, discerne: &DiscerneStatement) -> String {
        let pad = self.pad();
        let subject = self.visit_expression(&discerne.subject);
        let mut out = format!("{pad}switch ({subject}) {{\n");
        self.depth += 1;
        for arm in &discerne.arms {
            let fields = self.variant_fields.get(&arm.variant.name).cloned().unwrap_or_default();
            if arm.bindings.is_empty() {
                out.push_str(&format!("{}.{} => {{\n", self.pad(), arm.variant.name));
                self.depth += 1;
            } else {
                out.push_str(&format!("{}.{} => |_payload| {{\n", self.pad(), arm.variant.name));
                self.depth += 1;
                for (position, binding) in arm.bindings.iter().enumerate() {
                    let field =
                        fields.get(position).cloned().unwrap_or_else(|| format!("_{position}"));
                    out.push_str(&format!(
                        "{}const {} = _payload.{field};\n",
                        self.pad(),
                        self.decl_name(binding)
                    ));
                }
            }
            for statement in &arm.body.statements {
                out.push_str(&self.visit_statement(statement));
            }
            self.depth -= 1;
            out.push_str(&format!("{}}},\n", self.pad()));
        }
        let default = match &discerne.default {
            Some(default) => self.visit_block(default),
            None => "{}".to_string(),
        };
        out.push_str(&format!("{}else => {default},\n", self.pad()));
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    /// Suites flatten into one `test "suite: case"` block per case, with
    /// the `ante`/`post` hook bodies inlined around each case body.
    fn visit_test_suite(&mut self, suite: &ProbatioStatement) -> String {
        let mut ante: Vec<&Statement> = Vec::new();
        let mut post: Vec<&Statement> = Vec::new();
        for statement in &suite.body.statements {
            if let Statement::TestHook(hook) = statement {
                match hook.kind {
                    HookKind::Ante => ante.extend(hook.body.statements.iter()),
                    HookKind::Post => post.extend(hook.body.statements.iter()),
                }
            }
        }

        let mut out = String::new();
        for statement in &suite.body.statements {
            match statement {
                Statement::TestHook(_) => {}
                Statement::TestCase(case) => {
                    let name = format!("{}: {}", suite.name, case.name);
                    out.push_str(&self.visit_test_case(&name, &case.body, &ante, &post));
                }
                other => out.push_str(&self.visit_statement(other)),
            }
        }
        out
    }

    fn visit_test_case(
        &mut self,
        name: &str,
        body: &Block,
        ante: &[&Statement],
        post: &[&Statement],
    ) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}test \"{}\" {{\n", escape_string(name));
        self.depth += 1;
        for statement in ante {
            out.push_str(&self.visit_statement(statement));
        }
        for statement in &body.statements {
            out.push_str(&self.visit_statement(statement));
        }
        for statement in post {
            out.push_str(&self.visit_statement(statement));
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    fn visit_declaration(&mut self, declaration: &Declaration) -> String {
        let pad = self.pad();
        match declaration {
            Declaration::Variable(variable) => self.visit_variable(variable),
            Declaration::Function(function) => self.visit_function(function),
            Declaration::Genus(genus) => self.visit_genus(genus),
            Declaration::Pactum(pactum) => self.visit_pactum(pactum),
            Declaration::TypeAlias(alias) => {
                format!("{pad}const {} = {};\n", self.decl_name(&alias.name), self.visit_type(&alias.aliased))
            }
            Declaration::Ordo(ordo) => self.visit_ordo(ordo),
            Declaration::Discretio(discretio) => self.visit_discretio(discretio),
            Declaration::Import(import) => self.visit_import(import),
        }
    }

    /// `fixum` and friends. At module scope the name takes the `m_` prefix
    /// to avoid shadowing function parameters; destructuring goes through
    /// a `_tmp` intermediate.
    fn visit_variable(&mut self, variable: &VariableDeclaration) -> String {
        let pad = self.pad();
        let keyword = if variable.kind.is_mutable() { "var" } else { "const" };
        let module_scope = self.depth == 0;

        let initializer = variable.initializer.as_ref().map(|init| {
            let text = self.visit_expression(init);
            if variable.kind.is_awaited() {
                format!("try {text}")
            } else {
                text
            }
        });

        match &variable.pattern {
            Pattern::Identifier(name) => {
                let emitted = if module_scope {
                    format!("m_{}", name.name)
                } else {
                    self.decl_name(name)
                };
                let annotation = variable
                    .type_annotation
                    .as_ref()
                    .map(|t| format!(": {}", self.visit_type(t)))
                    .unwrap_or_default();
                match initializer {
                    Some(init) => format!("{pad}{keyword} {emitted}{annotation} = {init};\n"),
                    None => format!("{pad}{keyword} {emitted}{annotation} = undefined;\n"),
                }
            }
            Pattern::Object(object) => {
                let tmp = self.fresh_tmp();
                let init = initializer.unwrap_or_else(|| "undefined".to_string());
                let mut out = format!("{pad}const {tmp} = {init};\n");
                for entry in &object.entries {
                    match entry {
                        ObjectPatternEntry::Field { key, alias } => {
                            let local = self.decl_name(alias.as_ref().unwrap_or(key));
                            out.push_str(&format!("{pad}{keyword} {local} = {tmp}.{};\n", key.name));
                        }
                        ObjectPatternEntry::Rest(rest) => {
                            let local = self.decl_name(rest);
                            out.push_str(&format!("{pad}{keyword} {local} = {tmp};\n"));
                        }
                    }
                }
                out
            }
            Pattern::Array(array) => {
                let tmp = self.fresh_tmp();
                let init = initializer.unwrap_or_else(|| "undefined".to_string());
                let mut out = format!("{pad}const {tmp} = {init};\n");
                for (position, element) in array.elements.iter().enumerate() {
                    match element {
                        ArrayPatternElement::Identifier(name) => {
                            let local = self.decl_name(name);
                            out.push_str(&format!("{pad}{keyword} {local} = {tmp}[{position}];\n"));
                        }
                        ArrayPatternElement::Rest(rest) => {
                            let local = self.decl_name(rest);
                            out.push_str(&format!("{pad}{keyword} {local} = {tmp}[{position}..];\n"));
                        }
                        ArrayPatternElement::Skip => {}
                    }
                }
                out
            }
        }
    }

    /// Functions become `fn`; async verbs expand to error unions, so a
    /// `futura` void function returns `!void`.
    fn visit_function(&mut self, function: &Function) -> String {
        let pad = self.pad();
        let visibility = if self.depth == 0 { "pub " } else { "" };
        let parameters = function
            .parameters
            .iter()
            .map(|parameter| {
                let annotation = parameter
                    .type_annotation
                    .as_ref()
                    .map(|t| self.visit_type(t))
                    .unwrap_or_else(|| "anytype".to_string());
                format!("{}: {annotation}", self.decl_name(&parameter.name))
            })
            .join(", ");

        let inner = function.return_type.as_ref().map(|t| self.visit_type(t));
        let return_type = match (function.variant.is_async, inner) {
            (true, Some(inner)) => format!("!{inner}"),
            (true, None) => "!void".to_string(),
            (false, Some(inner)) => inner,
            (false, None) => "void".to_string(),
        };

        let body = self.visit_block(&function.body);
        format!(
            "{pad}{visibility}fn {}({parameters}) {return_type} {body}\n",
            self.decl_name(&function.name)
        )
    }

    /// The `genus` lowering: a struct with a `Self` alias, defaulted
    /// fields, an `init` selecting each field from the overrides by
    /// `@hasField`, the `creo` constructor as a regular method `init`
    /// calls, and the remaining methods as `pub fn`s.
    fn visit_genus(&mut self, genus: &GenusDeclaration) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}const {} = struct {{\n", self.decl_name(&genus.name));
        self.depth += 1;
        out.push_str(&format!("{}const Self = @This();\n\n", self.pad()));

        for field in genus.fields() {
            let annotation = self.visit_type(&field.type_annotation);
            let default = match &field.default {
                Some(default) => self.visit_expression(default),
                None => "undefined".to_string(),
            };
            out.push_str(&format!("{}{}: {annotation} = {default},\n", self.pad(), field.name.name));
        }

        out.push('\n');
        out.push_str(&format!("{}pub fn init(overrides: anytype) Self {{\n", self.pad()));
        self.depth += 1;
        out.push_str(&format!("{}var self = Self{{}};\n", self.pad()));
        for field in genus.fields() {
            out.push_str(&format!(
                "{}if (@hasField(@TypeOf(overrides), \"{name}\")) self.{name} = overrides.{name};\n",
                self.pad(),
                name = field.name.name
            ));
        }
        if genus.constructor().is_some() {
            out.push_str(&format!("{}self.creo();\n", self.pad()));
        }
        out.push_str(&format!("{}return self;\n", self.pad()));
        self.depth -= 1;
        out.push_str(&format!("{}}}\n", self.pad()));

        for method in genus.methods() {
            out.push('\n');
            out.push_str(&self.visit_method(method));
        }

        self.depth -= 1;
        out.push_str(&format!("{pad}}};\n"));
        out
    }

    fn visit_method(&mut self, method: &GenusMethod) -> String {
        let pad = self.pad();
        let function = &method.function;
        let mut parameters = Vec::new();
        if !method.modifiers.static_ {
            parameters.push("self: *Self".to_string());
        }
        for parameter in &function.parameters {
            let annotation = parameter
                .type_annotation
                .as_ref()
                .map(|t| self.visit_type(t))
                .unwrap_or_else(|| "anytype".to_string());
            parameters.push(format!("{}: {annotation}", self.decl_name(&parameter.name)));
        }

        let inner = function.return_type.as_ref().map(|t| self.visit_type(t));
        let return_type = match (function.variant.is_async, inner) {
            (true, Some(inner)) => format!("!{inner}"),
            (true, None) => "!void".to_string(),
            (false, Some(inner)) => inner,
            (false, None) => "void".to_string(),
        };

        let body = self.visit_block(&function.body);
        format!(
            "{pad}pub fn {}({}) {return_type} {body}\n",
            self.decl_name(&function.name),
            parameters.join(", ")
        )
    }

    /// Zig has no first-class interfaces; a `pactum` becomes a doc-comment
    /// block listing the required signatures.
    fn visit_pactum(&mut self, pactum: &PactumDeclaration) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}/// pactum {}: required method signatures\n", pactum.name.name);
        for method in &pactum.methods {
            let parameters = method
                .parameters
                .iter()
                .map(|parameter| {
                    let annotation = parameter
                        .type_annotation
                        .as_ref()
                        .map(|t| self.visit_type(t))
                        .unwrap_or_else(|| "anytype".to_string());
                    format!("{}: {annotation}", parameter.name.name)
                })
                .join(", ");
            let return_type =
                method.return_type.as_ref().map(|t| self.visit_type(t)).unwrap_or_else(|| "void".to_string());
            out.push_str(&format!("{pad}///   fn {}({parameters}) {return_type}\n", method.name.name));
        }
        out
    }

    /// Integer-valued (or valueless) members become an `enum(i64)`;
    /// string-valued members become a namespace of string constants.
    fn visit_ordo(&mut self, ordo: &OrdoDeclaration) -> String {
        let pad = self.pad();
        let has_strings =
            ordo.members.iter().any(|member| matches!(member.value, Some(OrdoValue::String(_))));

        if has_strings {
            let mut out = format!("{pad}const {} = struct {{\n", self.decl_name(&ordo.name));
            self.depth += 1;
            for member in &ordo.members {
                let value = match &member.value {
                    Some(OrdoValue::String(text)) => format!("\"{}\"", escape_string(text)),
                    Some(OrdoValue::Integer(text)) => text.clone(),
                    None => "{}".to_string(),
                };
                out.push_str(&format!("{}pub const {} = {value};\n", self.pad(), member.name.name));
            }
            self.depth -= 1;
            out.push_str(&format!("{pad}}};\n"));
            return out;
        }

        let mut out = format!("{pad}const {} = enum(i64) {{\n", self.decl_name(&ordo.name));
        self.depth += 1;
        for member in &ordo.members {
            match &member.value {
                Some(OrdoValue::Integer(text)) => {
                    out.push_str(&format!("{}{} = {text},\n", self.pad(), member.name.name));
                }
                _ => out.push_str(&format!("{}{},\n", self.pad(), member.name.name)),
            }
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}};\n"));
        out
    }

    fn visit_discretio(&mut self, discretio: &DiscretioDeclaration) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}const {} = union(enum) {{\n", self.decl_name(&discretio.name));
        self.depth += 1;
        for variant in &discretio.variants {
            if variant.fields.is_empty() {
                out.push_str(&format!("{}{}: void,\n", self.pad(), variant.name.name));
            } else {
                let fields = variant
                    .fields
                    .iter()
                    .map(|field| format!("{}: {}", field.name.name, self.visit_type(&field.type_annotation)))
                    .join(", ");
                out.push_str(&format!("{}{}: struct {{ {fields} }},\n", self.pad(), variant.name.name));
            }
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}};\n"));
        out
    }

    fn visit_import(&mut self, import: &ImportDeclaration) -> String {
        let pad = self.pad();
        let source = match &import.source {
            ImportSource::Path(path) => format!("\"{}\"", escape_string(path)),
            ImportSource::Module(name) => format!("\"{}\"", name.name),
        };
        if let Some(default_import) = &import.default_import {
            return format!("{pad}const {} = @import({source});\n", self.decl_name(default_import));
        }
        let mut out = String::new();
        for item in &import.items {
            let local = self.decl_name(item.alias.as_ref().unwrap_or(&item.name));
            out.push_str(&format!("{pad}const {local} = @import({source}).{};\n", item.name.name));
        }
        out
    }

    /// The builtin mapping table. A width parameter on `numerus` picks the
    /// sized integer; union alternatives have no Zig equivalent and drop.
    fn visit_type(&mut self, annotation: &TypeAnnotation) -> String {
        let head = match annotation.name.name.as_str() {
            "textus" => "[]const u8".to_string(),
            "numerus" => match annotation.type_parameters.first() {
                Some(TypeParameterArg::Number(width)) => format!("i{width}"),
                _ => "i64".to_string(),
            },
            "fractio" => "f64".to_string(),
            "bivalens" => "bool".to_string(),
            "ingens" => "i128".to_string(),
            "vacuum" => "void".to_string(),
            "obiectum" | "res" => "anyopaque".to_string(),
            "erratum" => "anyerror".to_string(),
            "tempus" => "i64".to_string(),
            "lista" => {
                let element = self.first_type_argument(annotation).unwrap_or_else(|| "u8".to_string());
                format!("[]{element}")
            }
            "copia" => {
                let element = self.first_type_argument(annotation).unwrap_or_else(|| "u8".to_string());
                format!("std.AutoHashMap({element}, void)")
            }
            "mappa" => {
                let args = self.type_arguments(annotation);
                match args.len() {
                    2 => format!("std.AutoHashMap({}, {})", args[0], args[1]),
                    _ => "std.AutoHashMap(i64, i64)".to_string(),
                }
            }
            "promissum" => {
                let inner = self.first_type_argument(annotation).unwrap_or_else(|| "void".to_string());
                format!("!{inner}")
            }
            _ => rename_reserved(&annotation.name.name, RESERVED),
        };

        let mut out = head;
        if annotation.array_shorthand {
            out = format!("[]{out}");
        }
        if annotation.nullable {
            out = format!("?{out}");
        }
        out
    }

    fn type_arguments(&mut self, annotation: &TypeAnnotation) -> Vec<String> {
        annotation
            .type_parameters
            .iter()
            .filter_map(|arg| match arg {
                TypeParameterArg::Type(nested) => Some(self.visit_type(nested)),
                TypeParameterArg::Number(_) | TypeParameterArg::Modifier(_) => None,
            })
            .collect()
    }

    fn first_type_argument(&mut self, annotation: &TypeAnnotation) -> Option<String> {
        self.type_arguments(annotation).into_iter().next()
    }

    fn operand(&mut self, expression: &Expression) -> String {
        let text = self.visit_expression(expression);
        match expression {
            Expression::Binary(_)
            | Expression::Ternary(_)
            | Expression::Unary(_)
            | Expression::Await(_)
            | Expression::Cast(_)
            | Expression::Range(_)
            | Expression::TypeTest(_) => format!("({text})"),
            _ => text,
        }
    }

    fn apply_transforms(&mut self, source: String, transforms: &[Transform]) -> String {
        let mut out = source;
        for transform in transforms {
            out = match transform {
                Transform::Prima(n) => format!("{out}[0..{}]", self.visit_expression(n)),
                Transform::Ultima(n) => format!("{out}[{out}.len - {}..]", self.visit_expression(n)),
                Transform::Summa => format!(
                    "blk: {{\n\
                     {pad1}var _summa: i64 = 0;\n\
                     {pad1}for ({out}) |_it| _summa += _it;\n\
                     {pad1}break :blk _summa;\n\
                     {pad0}}}",
                    pad1 = "    ".repeat(self.depth + 1),
                    pad0 = self.pad(),
                ),
            };
        }
        out
    }

    fn visit_expression(&mut self, expression: &Expression) -> String {
        match expression {
            Expression::Array(array) => {
                if array.elements.is_empty() {
                    return ".{}".to_string();
                }
                let elements = array
                    .elements
                    .iter()
                    .map(|element| match element {
                        Argument::Expression(e) | Argument::Spread(e) => self.visit_expression(e),
                    })
                    .join(", ");
                format!(".{{ {elements} }}")
            }
            // Zig has no closures; a lambda value cannot be materialized.
            Expression::Arrow(_) | Expression::Lambda(_) => "undefined".to_string(),
            Expression::Await(await_) => format!("try {}", self.operand(&await_.operand)),
            Expression::Binary(binary) => self.visit_binary(binary),
            Expression::Call(call) => {
                let callee = self.operand(&call.callee);
                let arguments = call
                    .arguments
                    .iter()
                    .map(|argument| match argument {
                        Argument::Expression(e) | Argument::Spread(e) => self.visit_expression(e),
                    })
                    .join(", ");
                format!("{callee}({arguments})")
            }
            Expression::Cast(cast) => {
                let target = self.visit_type(&cast.target_type);
                format!("@as({target}, {})", self.visit_expression(&cast.expression))
            }
            Expression::ComputedMember(computed) => {
                let object = self.operand(&computed.object);
                let index = self.visit_expression(&computed.index);
                format!("{object}[{index}]")
            }
            Expression::Comptime(comptime) => match &comptime.body {
                PraefixumBody::Expression(e) => format!("comptime {}", self.operand(e)),
                PraefixumBody::Block(block) => format!("comptime {}", self.visit_block(block)),
            },
            Expression::Err(_) => "undefined".to_string(),
            Expression::Format(format_expr) => {
                let pieces = split_format(&format_expr.format);
                let text = pieces.iter().map(|piece| escape_string(piece)).join("{any}");
                let arguments =
                    format_expr.arguments.iter().map(|a| self.visit_expression(a)).join(", ");
                format!("std.fmt.comptimePrint(\"{text}\", .{{{arguments}}})")
            }
            Expression::Identifier(id) => self.name(id),
            Expression::Literal(literal) => self.visit_literal(literal),
            Expression::Member(member) => {
                let object = self.operand(&member.object);
                if member.optional || member.non_null {
                    format!("{object}.?.{}", member.member.name)
                } else {
                    format!("{object}.{}", member.member.name)
                }
            }
            Expression::New(new) => self.visit_new(new),
            Expression::Object(object) => self.visit_object(object),
            Expression::Pipeline(pipeline) => {
                let source = self.operand(&pipeline.source);
                self.apply_transforms(source, &pipeline.transforms)
            }
            Expression::Range(range) => {
                let start = self.visit_expression(&range.start);
                let end = self.visit_expression(&range.end);
                format!(".{{ {start}, {end} }}")
            }
            Expression::SelfRef(_) => "self".to_string(),
            Expression::Ternary(ternary) => {
                let condition = self.operand(&ternary.condition);
                let if_true = self.visit_expression(&ternary.if_true);
                let if_false = self.visit_expression(&ternary.if_false);
                format!("if ({condition}) {if_true} else {if_false}")
            }
            Expression::TypeTest(test) => {
                let operand = self.operand(&test.expression);
                let target = self.visit_type(&test.target_type);
                let op = if test.negated { "!=" } else { "==" };
                format!("@TypeOf({operand}) {op} {target}")
            }
            Expression::Unary(unary) => self.visit_unary(unary),
        }
    }

    fn visit_literal(&mut self, literal: &LiteralExpression) -> String {
        match &literal.value {
            LiteralValue::Bool(true) => "true".to_string(),
            LiteralValue::Bool(false) => "false".to_string(),
            LiteralValue::Nihil => "null".to_string(),
            LiteralValue::Integer(text) | LiteralValue::Float(text) => text.clone(),
            LiteralValue::BigInt(text) => format!("@as(i128, {text})"),
            LiteralValue::String(text) => format!("\"{}\"", escape_string(text)),
            LiteralValue::Template(text) => format!("\"{}\"", escape_string(text)),
        }
    }

    /// String equality goes through `std.mem.eql`; string concatenation is
    /// `++`; everything else is the symbol table with `and`/`or`/`orelse`
    /// for the word operators.
    fn visit_binary(&mut self, binary: &BinaryExpression) -> String {
        let strings = binary_involves_strings(binary);

        if strings {
            match binary.op {
                BinaryOperation::Eq | BinaryOperation::StrictEq => {
                    let left = self.visit_expression(&binary.left);
                    let right = self.visit_expression(&binary.right);
                    return format!("std.mem.eql(u8, {left}, {right})");
                }
                BinaryOperation::Neq | BinaryOperation::StrictNeq => {
                    let left = self.visit_expression(&binary.left);
                    let right = self.visit_expression(&binary.right);
                    return format!("!std.mem.eql(u8, {left}, {right})");
                }
                BinaryOperation::Add => {
                    let left = self.operand(&binary.left);
                    let right = self.operand(&binary.right);
                    return format!("{left} ++ {right}");
                }
                _ => {}
            }
        }

        let op = match binary.op {
            BinaryOperation::Eq | BinaryOperation::StrictEq => "==",
            BinaryOperation::Neq | BinaryOperation::StrictNeq => "!=",
            BinaryOperation::And => "and",
            BinaryOperation::Or => "or",
            BinaryOperation::Nullish => "orelse",
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
            UnaryOperation::Not => format!("!{operand}"),
            UnaryOperation::Nulla | UnaryOperation::Nihil => format!("{operand} == null"),
            UnaryOperation::Nonnulla | UnaryOperation::Nonnihil => format!("{operand} != null"),
            UnaryOperation::Negativum => format!("{operand} < 0"),
            UnaryOperation::Positivum => format!("{operand} > 0"),
            UnaryOperation::NonNullAssert => format!("{operand}.?"),
        }
    }

    /// `novum X` always goes through `X.init`, with overrides as an
    /// anonymous struct.
    fn visit_new(&mut self, new: &NewExpression) -> String {
        let callee = self.decl_name(&new.callee);
        if let Some(arguments) = &new.arguments {
            let arguments = arguments
                .iter()
                .map(|argument| match argument {
                    Argument::Expression(e) | Argument::Spread(e) => self.visit_expression(e),
                })
                .join(", ");
            return format!("{callee}.init({arguments})");
        }
        if let Some(overrides) = &new.overrides {
            return format!("{callee}.init({})", self.visit_object(overrides));
        }
        if let Some(source) = &new.source {
            return format!("{callee}.init({})", self.visit_expression(source));
        }
        format!("{callee}.init(.{{}})")
    }

    fn visit_object(&mut self, object: &ObjectExpression) -> String {
        if object.entries.is_empty() {
            return ".{}".to_string();
        }
        let entries = object
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ObjectEntry::Field { key, value: Some(value) } => {
                    Some(format!(".{} = {}", key.name, self.visit_expression(value)))
                }
                ObjectEntry::Field { key, value: None } => {
                    Some(format!(".{} = {}", key.name, self.name(key)))
                }
                // No spread in anonymous struct literals.
                ObjectEntry::Spread(_) => None,
            })
            .join(", ");
        format!(".{{ {entries} }}")
    }
}

impl Backend for ZigBackend {
    fn target(&self) -> Target {
        Target::Zig
    }

    /// Declarations and tests stay at module scope; every other top-level
    /// statement gathers into `pub fn main() !void`.
    fn emit_program(&mut self, program: &Program) -> String {
        let mut out = String::from("const std = @import(\"std\");\n\n");
        let mut main_body: Vec<&Statement> = Vec::new();

        for statement in &program.statements {
            match statement {
                Statement::Declaration(_) | Statement::TestSuite(_) | Statement::TestCase(_) => {
                    out.push_str(&self.visit_statement(statement));
                }
                other => main_body.push(other),
            }
        }

        if !main_body.is_empty() {
            out.push_str("\npub fn main() !void {\n");
            self.depth += 1;
            for statement in main_body {
                out.push_str(&self.visit_statement(statement));
            }
            self.depth -= 1;
            out.push_str("}\n");
        }

        out
    }
}
