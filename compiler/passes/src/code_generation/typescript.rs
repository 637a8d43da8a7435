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

//! The TypeScript backend.

use super::common::*;
use super::{Backend, Target};

use faber_ast::*;

use indexmap::IndexMap;
use itertools::Itertools;

/// TypeScript reserved words that collide with Faber identifiers; renamed
/// with the pinned `_` suffix.
const RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Lowers a [`Program`] to TypeScript. Two-space indentation.
pub struct TypeScriptBackend {
    depth: usize,
    /// `discretio` variant fields for positional `discerne` bindings.
    variant_fields: IndexMap<String, Vec<String>>,
}

impl TypeScriptBackend {
    pub fn new(program: &Program) -> Self {
        Self { depth: 0, variant_fields: collect_variant_fields(program) }
    }

    fn pad(&self) -> String {
        "  ".repeat(self.depth)
    }

    fn name(&self, id: &Identifier) -> String {
        rename_reserved(&id.name, RESERVED)
    }

    /// Emits `{ ... }` with the inner statements one level deeper; the
    /// closing brace sits at the current depth.
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
                let message = match &assert.message {
                    Some(message) => self.visit_expression(message),
                    None => "\"Assertion failed\"".to_string(),
                };
                format!("{pad}if (!({condition})) throw new Error({message});\n")
            }
            Statement::Assign(assign) => {
                let place = self.visit_expression(&assign.place);
                let value = self.visit_expression(&assign.value);
                format!("{pad}{place} = {value};\n")
            }
            Statement::Block(block) => format!("{pad}{}\n", self.visit_block(block)),
            Statement::Break(_) => format!("{pad}break;\n"),
            Statement::Conditional(conditional) => self.visit_conditional(conditional),
            Statement::Console(console) => {
                let function = match console.function {
                    ConsoleFunction::Scribe => "console.log",
                    ConsoleFunction::Vide => "console.debug",
                    ConsoleFunction::Mone => "console.warn",
                };
                let arguments =
                    console.arguments.iter().map(|a| self.visit_expression(a)).format(", ");
                format!("{pad}{function}({arguments});\n")
            }
            Statement::Continue(_) => format!("{pad}continue;\n"),
            Statement::Cura(cura) => {
                let resource = self.visit_expression(&cura.resource);
                let binding = cura.binding.as_ref().map_or("_res".to_string(), |b| self.name(b));
                let mut out = format!("{pad}{{\n");
                self.depth += 1;
                out.push_str(&format!("{}using {binding} = {resource};\n", self.pad()));
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
                let expression = self.visit_expression(&dispatch.expression);
                format!("{pad}return {expression};\n")
            }
            Statement::Elige(elige) => self.visit_elige(elige),
            Statement::Expression(expression) => {
                format!("{pad}{};\n", self.visit_expression(&expression.expression))
            }
            Statement::Iteration(iteration) => self.visit_iteration(iteration),
            Statement::Return(return_) => match &return_.expression {
                Some(expression) => format!("{pad}return {};\n", self.visit_expression(expression)),
                None => format!("{pad}return;\n"),
            },
            Statement::TestCase(case) => {
                let body = self.visit_block(&case.body);
                format!("{pad}it(\"{}\", () => {body});\n", escape_string(&case.name))
            }
            Statement::TestHook(hook) => {
                let function = match hook.kind {
                    HookKind::Ante => "beforeEach",
                    HookKind::Post => "afterEach",
                };
                let body = self.visit_block(&hook.body);
                format!("{pad}{function}(() => {body});\n")
            }
            Statement::TestSuite(suite) => {
                let body = self.visit_block(&suite.body);
                format!("{pad}describe(\"{}\", () => {body});\n", escape_string(&suite.name))
            }
            Statement::Throw(throw) => {
                let expression = self.visit_expression(&throw.expression);
                if throw.fatal {
                    format!("{pad}throw Object.assign(new Error(String({expression})), {{ fatal: true }});\n")
                } else {
                    format!("{pad}throw {expression};\n")
                }
            }
            Statement::Try(try_) => {
                let mut out = format!("{pad}try {}", self.visit_block(&try_.block));
                if let Some(catch) = &try_.catch {
                    let binding = catch.binding.as_ref().map(|b| self.name(b));
                    match binding {
                        Some(binding) => out.push_str(&format!(" catch ({binding}) ")),
                        None => out.push_str(" catch "),
                    }
                    out.push_str(&self.visit_block(&catch.body));
                }
                if let Some(finally) = &try_.finally {
                    out.push_str(" finally ");
                    out.push_str(&self.visit_block(finally));
                }
                out.push('\n');
                out
            }
            Statement::While(while_) => {
                let condition = self.visit_expression(&while_.condition);
                let body = self.visit_block(&while_.body);
                format!("{pad}while ({condition}) {body}\n")
            }
        }
    }

    /// `si`/`aliter`, wrapped in `try`/`catch` when a `cape` clause guards
    /// the conditional.
    fn visit_conditional(&mut self, conditional: &ConditionalStatement) -> String {
        let pad = self.pad();

        let render_core = |backend: &mut Self| {
            let inner_pad = backend.pad();
            let condition = backend.visit_expression(&conditional.condition);
            let then = backend.visit_block(&conditional.then);
            let mut core = format!("{inner_pad}if ({condition}) {then}");
            if let Some(otherwise) = &conditional.otherwise {
                let tail = backend.visit_statement(otherwise);
                core.push_str(" else ");
                core.push_str(tail.trim_start());
                return core;
            }
            core.push('\n');
            core
        };

        let Some(catch) = &conditional.catch else {
            return render_core(self);
        };

        let mut out = format!("{pad}try {{\n");
        self.depth += 1;
        out.push_str(&render_core(self));
        self.depth -= 1;
        let binding = catch.binding.as_ref().map_or("_e".to_string(), |b| self.name(b));
        out.push_str(&format!("{pad}}} catch ({binding}) "));
        out.push_str(&self.visit_block(&catch.body));
        out.push('\n');
        out
    }

    /// `elige` lowers to `switch` with an explicit `break` per case.
    fn visit_elige(&mut self, elige: &EligeStatement) -> String {
        let pad = self.pad();
        let subject = self.visit_expression(&elige.subject);
        let mut out = format!("{pad}switch ({subject}) {{\n");
        self.depth += 1;
        for case in &elige.cases {
            for value in &case.values[..case.values.len().saturating_sub(1)] {
                out.push_str(&format!("{}case {}:\n", self.pad(), self.visit_expression(value)));
            }
            if let Some(last) = case.values.last() {
                out.push_str(&format!("{}case {}: {{\n", self.pad(), self.visit_expression(last)));
            }
            self.depth += 1;
            for statement in &case.body.statements {
                out.push_str(&self.visit_statement(statement));
            }
            out.push_str(&format!("{}break;\n", self.pad()));
            self.depth -= 1;
            out.push_str(&format!("{}}}\n", self.pad()));
        }
        if let Some(default) = &elige.default {
            out.push_str(&format!("{}default: {{\n", self.pad()));
            self.depth += 1;
            for statement in &default.statements {
                out.push_str(&self.visit_statement(statement));
            }
            self.depth -= 1;
            out.push_str(&format!("{}}}\n", self.pad()));
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    /// `discerne` lowers to a `switch` over the `kind` tag, binding the
    /// variant's fields positionally.
    fn visit_discerne(&mut self, discerne: &DiscerneStatement) -> String {
        let pad = self.pad();
        let subject = self.visit_expression(&discerne.subject);
        let mut out = format!("{pad}switch ({subject}.kind) {{\n");
        self.depth += 1;
        for arm in &discerne.arms {
            out.push_str(&format!("{}case \"{}\": {{\n", self.pad(), arm.variant.name));
            self.depth += 1;
            let fields = self.variant_fields.get(&arm.variant.name).cloned().unwrap_or_default();
            for (position, binding) in arm.bindings.iter().enumerate() {
                let field = fields
                    .get(position)
                    .cloned()
                    .unwrap_or_else(|| format!("_{position}"));
                out.push_str(&format!(
                    "{}const {} = {subject}.{field};\n",
                    self.pad(),
                    self.name(binding)
                ));
            }
            for statement in &arm.body.statements {
                out.push_str(&self.visit_statement(statement));
            }
            out.push_str(&format!("{}break;\n", self.pad()));
            self.depth -= 1;
            out.push_str(&format!("{}}}\n", self.pad()));
        }
        if let Some(default) = &discerne.default {
            out.push_str(&format!("{}default: {{\n", self.pad()));
            self.depth += 1;
            for statement in &default.statements {
                out.push_str(&self.visit_statement(statement));
            }
            self.depth -= 1;
            out.push_str(&format!("{}}}\n", self.pad()));
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    /// Iterations: range sources expand to counting loops; `de` walks keys,
    /// `ex`/`in` walk values, `fiet` awaits them.
    fn visit_iteration(&mut self, iteration: &IterationStatement) -> String {
        let pad = self.pad();
        let binding = self.name(&iteration.binding);

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
                "{pad}for (let {binding} = {start}; {binding} {comparison} {end}; {binding} += {step}) {body}\n"
            );
        }

        let mut source = self.operand(&iteration.source);
        source = self.apply_transforms(source, &iteration.transforms);

        let header = match (iteration.kind, iteration.verb) {
            (IterationKind::De, _) => format!("for (const {binding} in {source})"),
            (_, IterationVerb::Fiet) => format!("for await (const {binding} of {source})"),
            (_, _) => format!("for (const {binding} of {source})"),
        };
        let body = self.visit_block(&iteration.body);
        format!("{pad}{header} {body}\n")
    }

    fn visit_declaration(&mut self, declaration: &Declaration) -> String {
        let pad = self.pad();
        match declaration {
            Declaration::Variable(variable) => self.visit_variable(variable),
            Declaration::Function(function) => {
                format!("{pad}{}\n", self.visit_function(function))
            }
            Declaration::Genus(genus) => self.visit_genus(genus),
            Declaration::Pactum(pactum) => self.visit_pactum(pactum),
            Declaration::TypeAlias(alias) => {
                let params = if alias.type_parameters.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", alias.type_parameters.iter().format(", "))
                };
                format!("{pad}type {}{params} = {};\n", self.name(&alias.name), self.visit_type(&alias.aliased))
            }
            Declaration::Ordo(ordo) => {
                let mut out = format!("{pad}enum {} {{\n", self.name(&ordo.name));
                self.depth += 1;
                for member in &ordo.members {
                    let value = match &member.value {
                        Some(OrdoValue::Integer(text)) => format!(" = {text}"),
                        Some(OrdoValue::String(text)) => format!(" = \"{}\"", escape_string(text)),
                        None => String::new(),
                    };
                    out.push_str(&format!("{}{}{value},\n", self.pad(), member.name.name));
                }
                self.depth -= 1;
                out.push_str(&format!("{pad}}}\n"));
                out
            }
            Declaration::Discretio(discretio) => self.visit_discretio(discretio),
            Declaration::Import(import) => {
                let source = match &import.source {
                    ImportSource::Path(path) => format!("\"{}\"", escape_string(path)),
                    ImportSource::Module(name) => format!("\"{}\"", name.name),
                };
                if let Some(default_import) = &import.default_import {
                    return format!("{pad}import {} from {source};\n", self.name(default_import));
                }
                let items = import
                    .items
                    .iter()
                    .map(|item| match &item.alias {
                        Some(alias) => format!("{} as {}", item.name.name, self.name(alias)),
                        None => self.name(&item.name),
                    })
                    .format(", ");
                format!("{pad}import {{ {items} }} from {source};\n")
            }
        }
    }

    /// Variable declarations, including destructuring patterns and the
    /// awaited `figendum`/`variandum` forms.
    fn visit_variable(&mut self, variable: &VariableDeclaration) -> String {
        let pad = self.pad();
        let keyword = if variable.kind.is_mutable() { "let" } else { "const" };

        let initializer = variable.initializer.as_ref().map(|init| {
            let text = self.visit_expression(init);
            if variable.kind.is_awaited() {
                format!("await ({text})")
            } else {
                text
            }
        });

        match &variable.pattern {
            Pattern::Identifier(name) => {
                let annotation = variable
                    .type_annotation
                    .as_ref()
                    .map(|t| format!(": {}", self.visit_type(t)))
                    .unwrap_or_default();
                match initializer {
                    Some(init) => {
                        format!("{pad}{keyword} {}{annotation} = {init};\n", self.name(name))
                    }
                    None => format!("{pad}{keyword} {}{annotation};\n", self.name(name)),
                }
            }
            Pattern::Object(object) => {
                let entries = object
                    .entries
                    .iter()
                    .map(|entry| match entry {
                        ObjectPatternEntry::Field { key, alias: None } => self.name(key),
                        ObjectPatternEntry::Field { key, alias: Some(alias) } => {
                            format!("{}: {}", key.name, self.name(alias))
                        }
                        ObjectPatternEntry::Rest(rest) => format!("...{}", self.name(rest)),
                    })
                    .format(", ");
                let init = initializer.unwrap_or_else(|| "undefined".to_string());
                format!("{pad}{keyword} {{ {entries} }} = {init};\n")
            }
            Pattern::Array(array) => {
                let elements = array
                    .elements
                    .iter()
                    .map(|element| match element {
                        ArrayPatternElement::Identifier(name) => self.name(name),
                        ArrayPatternElement::Skip => String::new(),
                        ArrayPatternElement::Rest(rest) => format!("...{}", self.name(rest)),
                    })
                    .format(", ");
                let init = initializer.unwrap_or_else(|| "undefined".to_string());
                format!("{pad}{keyword} [{elements}] = {init};\n")
            }
        }
    }

    /// A function header and body. `futura` and `fiet`/`fient` become
    /// `async`; `cursor` and `fiunt`/`fient` become generators.
    fn visit_function(&mut self, function: &Function) -> String {
        let asyncness = if function.variant.is_async { "async " } else { "" };
        let star = if function.variant.is_generator { "*" } else { "" };
        let parameters = self.visit_parameters(&function.parameters);
        let type_params = if function.type_parameters.is_empty() {
            String::new()
        } else {
            format!("<{}>", function.type_parameters.iter().format(", "))
        };
        let return_type = self.visit_return_type(function);
        let body = self.visit_block(&function.body);
        format!(
            "{asyncness}function{star} {}{type_params}({parameters}){return_type} {body}",
            self.name(&function.name)
        )
    }

    fn visit_return_type(&mut self, function: &Function) -> String {
        let Some(return_type) = &function.return_type else {
            return String::new();
        };
        let inner = self.visit_type(return_type);
        if function.variant.is_async && !function.variant.is_generator {
            format!(": Promise<{inner}>")
        } else {
            format!(": {inner}")
        }
    }

    fn visit_parameters(&mut self, parameters: &[Parameter]) -> String {
        parameters
            .iter()
            .map(|parameter| {
                let mut out = self.name(&parameter.name);
                if let Some(annotation) = &parameter.type_annotation {
                    out.push_str(": ");
                    out.push_str(&self.visit_type(annotation));
                }
                if let Some(default) = &parameter.default {
                    out.push_str(" = ");
                    out.push_str(&self.visit_expression(default));
                }
                out
            })
            .format(", ")
            .to_string()
    }

    /// A `genus` becomes a class whose constructor applies overrides and
    /// then runs the `creo` body.
    fn visit_genus(&mut self, genus: &GenusDeclaration) -> String {
        let pad = self.pad();
        let type_params = if genus.type_parameters.is_empty() {
            String::new()
        } else {
            format!("<{}>", genus.type_parameters.iter().format(", "))
        };
        let class_name = self.name(&genus.name);
        let mut out = format!("{pad}class {class_name}{type_params} {{\n");
        self.depth += 1;

        for field in genus.fields() {
            let modifier = if field.modifiers.private {
                "private "
            } else if field.modifiers.static_ {
                "static "
            } else {
                ""
            };
            let annotation = self.visit_type(&field.type_annotation);
            let default = match &field.default {
                Some(default) => format!(" = {}", self.visit_expression(default)),
                None => String::new(),
            };
            out.push_str(&format!(
                "{}{modifier}{}: {annotation}{default};\n",
                self.pad(),
                self.name(&field.name)
            ));
        }

        out.push_str(&format!(
            "{}constructor(overrides: Partial<{class_name}> = {{}}) {{\n",
            self.pad()
        ));
        self.depth += 1;
        out.push_str(&format!("{}Object.assign(this, overrides);\n", self.pad()));
        if let Some(constructor) = genus.constructor() {
            for statement in &constructor.function.body.statements {
                out.push_str(&self.visit_statement(statement));
            }
        }
        self.depth -= 1;
        out.push_str(&format!("{}}}\n", self.pad()));

        for method in genus.methods().filter(|m| !m.is_constructor) {
            let mut prefix = String::new();
            if method.modifiers.private {
                prefix.push_str("private ");
            }
            if method.modifiers.static_ {
                prefix.push_str("static ");
            }
            if method.function.variant.is_async {
                prefix.push_str("async ");
            }
            if method.function.variant.is_generator {
                prefix.push('*');
            }
            let parameters = self.visit_parameters(&method.function.parameters);
            let return_type = self.visit_return_type(&method.function);
            let body = self.visit_block(&method.function.body);
            out.push_str(&format!(
                "{}{prefix}{}({parameters}){return_type} {body}\n",
                self.pad(),
                self.name(&method.function.name)
            ));
        }

        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    fn visit_pactum(&mut self, pactum: &PactumDeclaration) -> String {
        let pad = self.pad();
        let type_params = if pactum.type_parameters.is_empty() {
            String::new()
        } else {
            format!("<{}>", pactum.type_parameters.iter().format(", "))
        };
        let mut out = format!("{pad}interface {}{type_params} {{\n", self.name(&pactum.name));
        self.depth += 1;
        for method in &pactum.methods {
            let parameters = self.visit_parameters(&method.parameters);
            let return_type = match &method.return_type {
                Some(return_type) => {
                    let inner = self.visit_type(return_type);
                    if method.return_verb.is_some_and(|v| v.is_async()) {
                        format!("Promise<{inner}>")
                    } else {
                        inner
                    }
                }
                None => "void".to_string(),
            };
            out.push_str(&format!(
                "{}{}({parameters}): {return_type};\n",
                self.pad(),
                self.name(&method.name)
            ));
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    /// A `discretio` becomes a tagged union type plus one constructor per
    /// variant in a same-named value namespace.
    fn visit_discretio(&mut self, discretio: &DiscretioDeclaration) -> String {
        let pad = self.pad();
        let union_name = self.name(&discretio.name);

        if discretio.variants.is_empty() {
            return format!("{pad}type {union_name} = never;\n");
        }

        let mut out = format!("{pad}type {union_name} =\n");
        for (index, variant) in discretio.variants.iter().enumerate() {
            let fields = variant
                .fields
                .iter()
                .map(|field| format!("{}: {}", field.name.name, self.visit_type(&field.type_annotation)))
                .format("; ");
            let field_text = if variant.fields.is_empty() {
                String::new()
            } else {
                format!("; {fields}")
            };
            let terminator = if index + 1 == discretio.variants.len() { ";" } else { "" };
            out.push_str(&format!(
                "{pad}  | {{ kind: \"{}\"{field_text} }}{terminator}\n",
                variant.name.name
            ));
        }

        out.push_str(&format!("{pad}const {union_name} = {{\n"));
        self.depth += 1;
        for variant in &discretio.variants {
            let parameters = variant
                .fields
                .iter()
                .map(|field| format!("{}: {}", field.name.name, self.visit_type(&field.type_annotation)))
                .format(", ")
                .to_string();
            let construction = variant.fields.iter().map(|field| field.name.name.clone()).format(", ");
            let sep = if variant.fields.is_empty() { "" } else { ", " };
            out.push_str(&format!(
                "{}{}: ({parameters}): {union_name} => ({{ kind: \"{}\"{sep}{construction} }}),\n",
                self.pad(),
                variant.name.name,
                variant.name.name
            ));
        }
        self.depth -= 1;
        out.push_str(&format!("{pad}}};\n"));
        out
    }

    /// The builtin type mapping, plus user types carried verbatim.
    fn visit_type(&mut self, annotation: &TypeAnnotation) -> String {
        let head = match annotation.name.name.as_str() {
            "textus" => "string".to_string(),
            "numerus" | "fractio" => "number".to_string(),
            "bivalens" => "boolean".to_string(),
            "ingens" => "bigint".to_string(),
            "vacuum" => "void".to_string(),
            "obiectum" => "object".to_string(),
            "erratum" => "Error".to_string(),
            "tempus" => "Date".to_string(),
            "res" => "any".to_string(),
            "lista" => {
                let element = self.first_type_argument(annotation).unwrap_or_else(|| "any".to_string());
                format!("{element}[]")
            }
            "copia" => {
                let element = self.first_type_argument(annotation).unwrap_or_else(|| "any".to_string());
                format!("Set<{element}>")
            }
            "mappa" => {
                let args = self.type_arguments(annotation);
                match args.len() {
                    2 => format!("Map<{}, {}>", args[0], args[1]),
                    _ => "Map<any, any>".to_string(),
                }
            }
            "promissum" => {
                let inner = self.first_type_argument(annotation).unwrap_or_else(|| "void".to_string());
                format!("Promise<{inner}>")
            }
            _ => {
                // Numeric and modifier parameters are dropped: TypeScript
                // has no sized numerics.
                let args = self.type_arguments(annotation);
                let name = rename_reserved(&annotation.name.name, RESERVED);
                if args.is_empty() {
                    name
                } else {
                    format!("{name}<{}>", args.iter().format(", "))
                }
            }
        };

        let mut out = head;
        if annotation.array_shorthand {
            out = format!("{out}[]");
        }
        if annotation.nullable {
            out = format!("{out} | null");
        }
        for alternative in &annotation.union {
            out = format!("{out} | {}", self.visit_type(alternative));
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

    /// Emits an expression for use as the base of a postfix chain, wrapped
    /// when the expression would not re-parse as a chain base.
    fn operand(&mut self, expression: &Expression) -> String {
        let text = self.visit_expression(expression);
        match expression {
            Expression::Binary(_)
            | Expression::Ternary(_)
            | Expression::Unary(_)
            | Expression::Await(_)
            | Expression::Cast(_)
            | Expression::Lambda(_)
            | Expression::Arrow(_)
            | Expression::Range(_)
            | Expression::Object(_)
            | Expression::TypeTest(_) => format!("({text})"),
            _ => text,
        }
    }

    fn apply_transforms(&mut self, source: String, transforms: &[Transform]) -> String {
        let mut out = source;
        for transform in transforms {
            out = match transform {
                Transform::Prima(n) => format!("{out}.slice(0, {})", self.visit_expression(n)),
                Transform::Ultima(n) => format!("{out}.slice(-{})", self.operand(n)),
                Transform::Summa => format!("{out}.reduce((a, b) => a + b, 0)"),
            };
        }
        out
    }

    fn visit_arguments(&mut self, arguments: &[Argument]) -> String {
        arguments
            .iter()
            .map(|argument| match argument {
                Argument::Expression(e) => self.visit_expression(e),
                Argument::Spread(e) => format!("...{}", self.operand(e)),
            })
            .format(", ")
            .to_string()
    }

    fn visit_object(&mut self, object: &ObjectExpression) -> String {
        if object.entries.is_empty() {
            return "{}".to_string();
        }
        let entries = object
            .entries
            .iter()
            .map(|entry| match entry {
                ObjectEntry::Field { key, value: None } => self.name(key),
                ObjectEntry::Field { key, value: Some(value) } => {
                    format!("{}: {}", key.name, self.visit_expression(value))
                }
                ObjectEntry::Spread(e) => format!("...{}", self.operand(e)),
            })
            .format(", ");
        format!("{{ {entries} }}")
    }

    fn visit_lambda_body(&mut self, body: &LambdaBody) -> String {
        match body {
            LambdaBody::Expression(e) => match &**e {
                // An object literal result needs parentheses to not read
                // as a block.
                Expression::Object(_) => format!("({})", self.visit_expression(e)),
                _ => self.visit_expression(e),
            },
            LambdaBody::Block(block) => self.visit_block(block),
        }
    }

    fn visit_expression(&mut self, expression: &Expression) -> String {
        match expression {
            Expression::Array(array) => format!("[{}]", self.visit_arguments(&array.elements)),
            Expression::Arrow(arrow) => {
                let parameters = self.visit_parameters(&arrow.parameters);
                format!("({parameters}) => {}", self.visit_lambda_body(&arrow.body))
            }
            Expression::Await(await_) => format!("await {}", self.operand(&await_.operand)),
            Expression::Binary(binary) => self.visit_binary(binary),
            Expression::Call(call) => {
                let callee = self.operand(&call.callee);
                let arguments = self.visit_arguments(&call.arguments);
                let open = if call.optional {
                    "?.("
                } else if call.non_null {
                    "!("
                } else {
                    "("
                };
                format!("{callee}{open}{arguments})")
            }
            Expression::Cast(cast) => {
                let target = self.visit_type(&cast.target_type);
                format!("({} as {target})", self.visit_expression(&cast.expression))
            }
            Expression::ComputedMember(computed) => {
                let object = self.operand(&computed.object);
                let index = self.visit_expression(&computed.index);
                if computed.optional {
                    format!("{object}?.[{index}]")
                } else if computed.non_null {
                    format!("{object}![{index}]")
                } else {
                    format!("{object}[{index}]")
                }
            }
            Expression::Comptime(comptime) => match &comptime.body {
                // TypeScript has no compile-time evaluation; the expression
                // runs at startup instead.
                PraefixumBody::Expression(e) => self.visit_expression(e),
                PraefixumBody::Block(block) => format!("(() => {})()", self.visit_block(block)),
            },
            Expression::Err(_) => "undefined".to_string(),
            Expression::Format(format_expr) => self.visit_format(format_expr),
            Expression::Identifier(id) => self.name(id),
            Expression::Lambda(lambda) => {
                let asyncness = if lambda.verb.is_async() { "async " } else { "" };
                let parameters = self.visit_parameters(&lambda.parameters);
                format!("{asyncness}({parameters}) => {}", self.visit_lambda_body(&lambda.body))
            }
            Expression::Literal(literal) => self.visit_literal(literal),
            Expression::Member(member) => {
                let object = self.operand(&member.object);
                let dot = if member.optional {
                    "?."
                } else if member.non_null {
                    "!."
                } else {
                    "."
                };
                format!("{object}{dot}{}", member.member.name)
            }
            Expression::New(new) => self.visit_new(new),
            Expression::Object(object) => self.visit_object(object),
            Expression::Pipeline(pipeline) => {
                let source = self.operand(&pipeline.source);
                self.apply_transforms(source, &pipeline.transforms)
            }
            Expression::Range(range) => self.visit_range(range),
            Expression::SelfRef(_) => "this".to_string(),
            Expression::Ternary(ternary) => {
                let condition = self.operand(&ternary.condition);
                let if_true = self.visit_expression(&ternary.if_true);
                let if_false = self.visit_expression(&ternary.if_false);
                format!("{condition} ? {if_true} : {if_false}")
            }
            Expression::TypeTest(test) => self.visit_type_test(test),
            Expression::Unary(unary) => self.visit_unary(unary),
        }
    }

    fn visit_literal(&mut self, literal: &LiteralExpression) -> String {
        match &literal.value {
            LiteralValue::Bool(true) => "true".to_string(),
            LiteralValue::Bool(false) => "false".to_string(),
            LiteralValue::Nihil => "null".to_string(),
            LiteralValue::Integer(text) | LiteralValue::Float(text) => text.clone(),
            LiteralValue::BigInt(text) => format!("{text}n"),
            LiteralValue::String(text) => format!("\"{}\"", escape_string(text)),
            LiteralValue::Template(text) => format!("`{text}`"),
        }
    }

    fn visit_binary(&mut self, binary: &BinaryExpression) -> String {
        let op = match binary.op {
            BinaryOperation::Eq | BinaryOperation::StrictEq => "===",
            BinaryOperation::Neq | BinaryOperation::StrictNeq => "!==",
            BinaryOperation::And => "&&",
            BinaryOperation::Or => "||",
            BinaryOperation::Nullish => "??",
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
            UnaryOperation::Nulla => format!("{operand} == null"),
            UnaryOperation::Nonnulla => format!("{operand} != null"),
            UnaryOperation::Nihil => format!("{operand} === null"),
            UnaryOperation::Nonnihil => format!("{operand} !== null"),
            UnaryOperation::Negativum => format!("{operand} < 0"),
            UnaryOperation::Positivum => format!("{operand} > 0"),
            UnaryOperation::NonNullAssert => format!("{operand}!"),
        }
    }

    fn visit_type_test(&mut self, test: &TypeTestExpression) -> String {
        let operand = self.operand(&test.expression);
        let comparison = |type_text: &str, negated: bool| {
            let op = if negated { "!==" } else { "===" };
            format!("typeof {operand} {op} \"{type_text}\"")
        };
        match test.target_type.name.name.as_str() {
            "textus" => comparison("string", test.negated),
            "numerus" | "fractio" => comparison("number", test.negated),
            "bivalens" => comparison("boolean", test.negated),
            "ingens" => comparison("bigint", test.negated),
            "lista" => {
                if test.negated {
                    format!("!Array.isArray({operand})")
                } else {
                    format!("Array.isArray({operand})")
                }
            }
            other => {
                let name = rename_reserved(other, RESERVED);
                if test.negated {
                    format!("!({operand} instanceof {name})")
                } else {
                    format!("{operand} instanceof {name}")
                }
            }
        }
    }

    /// `novum` lowers to `new`, with overrides passed as (or spread into)
    /// the constructor object.
    fn visit_new(&mut self, new: &NewExpression) -> String {
        let callee = self.name(&new.callee);
        if let Some(arguments) = &new.arguments {
            return format!("new {callee}({})", self.visit_arguments(arguments));
        }
        if let Some(overrides) = &new.overrides {
            return format!("new {callee}({})", self.visit_object(overrides));
        }
        if let Some(source) = &new.source {
            return format!("new {callee}({{ ...{} }})", self.operand(source));
        }
        format!("new {callee}()")
    }

    /// A range in expression position materializes the counted values.
    fn visit_range(&mut self, range: &RangeExpression) -> String {
        let start = self.operand(&range.start);
        let end = self.operand(&range.end);
        let step = match &range.step {
            Some(step) => self.operand(step),
            None => "1".to_string(),
        };
        let length = if range.kind.includes_end() {
            format!("Math.floor(({end} - {start}) / {step}) + 1")
        } else {
            format!("Math.ceil(({end} - {start}) / {step})")
        };
        format!("Array.from({{ length: {length} }}, (_, _i) => {start} + _i * {step})")
    }

    /// `scriptum` lowers to a template literal with `${}` substitutions.
    fn visit_format(&mut self, format_expr: &ScriptumExpression) -> String {
        let pieces = split_format(&format_expr.format);
        let mut out = String::from("`");
        for (index, piece) in pieces.iter().enumerate() {
            out.push_str(&piece.replace('`', "\\`").replace("${", "\\${"));
            if index + 1 < pieces.len() {
                match format_expr.arguments.get(index) {
                    Some(argument) => {
                        out.push_str("${");
                        out.push_str(&self.visit_expression(argument));
                        out.push('}');
                    }
                    // Surplus placeholders stay verbatim.
                    None => out.push_str("{}"),
                }
            }
        }
        out.push('`');
        out
    }
}

impl Backend for TypeScriptBackend {
    fn target(&self) -> Target {
        Target::TypeScript
    }

    fn emit_program(&mut self, program: &Program) -> String {
        let mut out = String::new();
        for statement in &program.statements {
            out.push_str(&self.visit_statement(statement));
        }
        out
    }
}
