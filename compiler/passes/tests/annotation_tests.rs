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
use faber_passes::{annotate, AnalyzerContext};

/// Parses and annotates `source`, returning the program and the semantic
/// diagnostic codes.
fn analyze(source: &str) -> (Program, Vec<String>) {
    let parse_handler = Handler::new();
    let mut program = faber_parser::parse_source(&parse_handler, source).expect("program");
    assert!(!parse_handler.had_errors(), "parse errors in {source:?}");

    let handler = Handler::new();
    annotate(&mut program, &AnalyzerContext { file_path: "proba.fab".into() }, &handler);
    let codes = handler.extract_errs().iter().map(|e| e.error_code()).collect();
    (program, codes)
}

#[test]
fn test_clean_program_has_no_diagnostics() {
    let (_, codes) = analyze("fixum numerus aetas = 30\nscribe(aetas)");
    assert!(codes.is_empty(), "unexpected diagnostics: {codes:?}");
}

#[test]
fn test_reassignment_of_immutable() {
    let (_, codes) = analyze("fixum PI = 3.14159\nPI = 3");
    assert_eq!(codes, vec!["S002"]);

    let (_, codes) = analyze("varia gradus = 1\ngradus = 2");
    assert!(codes.is_empty(), "unexpected diagnostics: {codes:?}");
}

#[test]
fn test_assignment_to_unknown_identifier() {
    let (_, codes) = analyze("ignotum = 1");
    assert_eq!(codes, vec!["S001"]);
}

#[test]
fn test_unresolved_type_name() {
    let (_, codes) = analyze("functio f(ignotus x) -> textus { redde x }");
    assert_eq!(codes, vec!["S003"]);

    // Declared genus names resolve.
    let (_, codes) = analyze("genus persona {}\nfunctio f(persona p) -> persona { redde p }");
    assert!(codes.is_empty(), "unexpected diagnostics: {codes:?}");
}

#[test]
fn test_duplicate_definition_in_scope() {
    let (_, codes) = analyze("fixum bis = 1\nfixum bis = 2");
    assert_eq!(codes, vec!["S004"]);

    // Shadowing in an inner scope is permitted.
    let (_, codes) = analyze("fixum x = 1\nfunctio f() { fixum x = 2\nscribe(x) }");
    assert!(codes.is_empty(), "unexpected diagnostics: {codes:?}");
}

#[test]
fn test_symbol_kinds_are_populated() {
    let (program, _) = analyze("fixum basis = 1\nfunctio f(numerus n) { scribe(n + basis) }");
    let Statement::Declaration(Declaration::Function(function)) = &program.statements[1] else {
        panic!("expected a function");
    };
    let Statement::Console(console) = &function.body.statements[0] else {
        panic!("expected a console statement");
    };
    let Expression::Binary(binary) = &console.arguments[0] else {
        panic!("expected a binary expression");
    };
    let Expression::Identifier(n) = &*binary.left else {
        panic!("expected an identifier");
    };
    assert_eq!(n.sym_kind, Some(SymbolKind::Param));
    let Expression::Identifier(basis) = &*binary.right else {
        panic!("expected an identifier");
    };
    assert_eq!(basis.sym_kind, Some(SymbolKind::Global));
}

#[test]
fn test_string_comparison_hint() {
    let (program, _) = analyze("functio f(textus a, textus b) fit bivalens { redde a est b }");
    let Statement::Declaration(Declaration::Function(function)) = &program.statements[0] else {
        panic!("expected a function");
    };
    let Statement::Return(return_) = &function.body.statements[0] else {
        panic!("expected a return");
    };
    let Some(Expression::Binary(binary)) = &return_.expression else {
        panic!("expected a binary expression");
    };
    assert!(binary.string_operands);
}

#[test]
fn test_numeric_comparison_has_no_string_hint() {
    let (program, _) = analyze("functio f(numerus a, numerus b) fit bivalens { redde a est b }");
    let Statement::Declaration(Declaration::Function(function)) = &program.statements[0] else {
        panic!("expected a function");
    };
    let Statement::Return(return_) = &function.body.statements[0] else {
        panic!("expected a return");
    };
    let Some(Expression::Binary(binary)) = &return_.expression else {
        panic!("expected a binary expression");
    };
    assert!(!binary.string_operands);
}

#[test]
fn test_est_against_declared_type_becomes_type_test() {
    let (program, _) = analyze("genus persona {}\nfixum b = valor est persona");
    let Statement::Declaration(Declaration::Variable(decl)) = &program.statements[1] else {
        panic!("expected a variable declaration");
    };
    assert!(matches!(decl.initializer, Some(Expression::TypeTest(_))));
}

#[test]
fn test_empty_discretio_is_silent() {
    let (_, codes) = analyze("discretio vacua {}");
    assert!(codes.is_empty(), "unexpected diagnostics: {codes:?}");
}

#[test]
fn test_imports_declare_names() {
    let (_, codes) = analyze("ex \"norma\" importa { adde }\nvaria summa = 0\nsumma = adde(1, 2)");
    assert!(codes.is_empty(), "unexpected diagnostics: {codes:?}");
}
