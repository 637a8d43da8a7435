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
use faber_parser::{parse_source, tokenize};

/// Parses `source`, requiring zero diagnostics.
fn parse_clean(source: &str) -> Program {
    let handler = Handler::new();
    let program = parse_source(&handler, source).expect("program");
    let errors = handler.extract_errs();
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    program
}

/// Parses `source`, returning the program and its diagnostic codes.
fn parse_with_errors(source: &str) -> (Option<Program>, Vec<String>) {
    let handler = Handler::new();
    let program = parse_source(&handler, source);
    let codes = handler.extract_errs().iter().map(|e| e.error_code()).collect();
    (program, codes)
}

fn single_statement(source: &str) -> Statement {
    let mut program = parse_clean(source);
    assert_eq!(program.statements.len(), 1, "expected one statement for {source:?}");
    program.statements.remove(0)
}

#[test]
fn test_empty_input_is_empty_program() {
    let program = parse_clean("");
    assert!(program.statements.is_empty());
}

#[test]
fn test_expression_without_trailing_newline() {
    let statement = single_statement("1 + 2");
    assert!(matches!(statement, Statement::Expression(_)));
}

#[test]
fn test_variable_declarations() {
    let statement = single_statement("fixum PI = 3.14159");
    let Statement::Declaration(Declaration::Variable(decl)) = statement else {
        panic!("expected a variable declaration");
    };
    assert_eq!(decl.kind, VariableKind::Fixum);
    assert!(decl.type_annotation.is_none());
    assert!(matches!(&decl.pattern, Pattern::Identifier(id) if id.name == "PI"));

    let statement = single_statement("varia numerus aetas = 0");
    let Statement::Declaration(Declaration::Variable(decl)) = statement else {
        panic!("expected a variable declaration");
    };
    assert_eq!(decl.kind, VariableKind::Varia);
    assert_eq!(decl.type_annotation.unwrap().name.name, "numerus");
}

#[test]
fn test_awaited_declaration_kinds() {
    let statement = single_statement("figendum datum = pete(url)");
    let Statement::Declaration(Declaration::Variable(decl)) = statement else {
        panic!("expected a variable declaration");
    };
    assert_eq!(decl.kind, VariableKind::Figendum);
    assert!(decl.kind.is_awaited());
    assert!(!decl.kind.is_mutable());

    assert!(VariableKind::Variandum.is_awaited());
    assert!(VariableKind::Variandum.is_mutable());
}

#[test]
fn test_type_first_parameter_lookahead() {
    // `identifier identifier` reads type-first; a lone name does not.
    let statement = single_statement("functio salve(textus nomen, ceterum) -> textus {}");
    let Statement::Declaration(Declaration::Function(function)) = statement else {
        panic!("expected a function");
    };
    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.parameters[0].type_annotation.as_ref().unwrap().name.name, "textus");
    assert!(function.parameters[1].type_annotation.is_none());
    assert_eq!(function.return_verb, Some(ReturnVerb::Arrow));
}

#[test]
fn test_return_verbs_encode_async_and_generator() {
    let cases = [
        ("functio f() fit textus {}", false, false),
        ("functio f() fiet textus {}", true, false),
        ("functio f() fiunt textus {}", false, true),
        ("functio f() fient textus {}", true, true),
    ];
    for (source, is_async, is_generator) in cases {
        let Statement::Declaration(Declaration::Function(function)) = single_statement(source) else {
            panic!("expected a function for {source:?}");
        };
        assert_eq!(function.variant.is_async, is_async, "{source}");
        assert_eq!(function.variant.is_generator, is_generator, "{source}");
    }
}

#[test]
fn test_prefix_with_arrow_is_not_a_conflict() {
    let Statement::Declaration(Declaration::Function(function)) =
        single_statement("futura functio pete(textus url) -> textus {}")
    else {
        panic!("expected a function");
    };
    assert!(function.variant.is_async);
}

#[test]
fn test_prefix_verb_conflict_is_reported() {
    let (program, codes) = parse_with_errors("futura functio f() fit numerus { redde 1 }");
    assert!(program.is_some());
    assert!(codes.contains(&"P006".to_string()), "expected P006, got {codes:?}");
}

#[test]
fn test_prae_typus_must_precede_parameters() {
    let source = "functio primus(prae typus T, lista<T> valores) -> T { redde valores[0] }";
    let Statement::Declaration(Declaration::Function(function)) = single_statement(source) else {
        panic!("expected a function");
    };
    assert_eq!(function.type_parameters.len(), 1);
    assert_eq!(function.parameters.len(), 1);

    let (_, codes) = parse_with_errors("functio f(numerus n, prae typus T) -> T {}");
    assert!(codes.contains(&"P013".to_string()), "expected P013, got {codes:?}");
}

#[test]
fn test_duplicate_generic_parameters() {
    let (_, codes) = parse_with_errors("functio f(prae typus T, prae typus T) -> T {}");
    assert!(codes.contains(&"P008".to_string()), "expected P008, got {codes:?}");
}

#[test]
fn test_precedence_bitwise_binds_tighter_than_comparison() {
    // `a & b < c` groups as `(a & b) < c`, the opposite of C.
    let Statement::Expression(statement) = single_statement("a & b < c") else {
        panic!("expected an expression statement");
    };
    let Expression::Binary(comparison) = &statement.expression else {
        panic!("expected a comparison at the root");
    };
    assert_eq!(comparison.op, BinaryOperation::Lt);
    let Expression::Binary(left) = &*comparison.left else {
        panic!("expected a bitwise AND on the left");
    };
    assert_eq!(left.op, BinaryOperation::BitwiseAnd);
}

#[test]
fn test_range_sits_between_shift_and_additive() {
    // `1 + 2 .. 8 + 1` groups the additive expressions into the bounds.
    let Statement::Expression(statement) = single_statement("1 + 2 .. 8 + 1") else {
        panic!("expected an expression statement");
    };
    let Expression::Range(range) = &statement.expression else {
        panic!("expected a range at the root");
    };
    assert!(matches!(&*range.start, Expression::Binary(b) if b.op == BinaryOperation::Add));
    assert!(matches!(&*range.end, Expression::Binary(b) if b.op == BinaryOperation::Add));
}

#[test]
fn test_latin_word_operators() {
    let Statement::Expression(statement) = single_statement("a et b aut c") else {
        panic!("expected an expression statement");
    };
    let Expression::Binary(or) = &statement.expression else {
        panic!("expected a binary expression");
    };
    assert_eq!(or.op, BinaryOperation::Or);
    assert!(matches!(&*or.left, Expression::Binary(b) if b.op == BinaryOperation::And));
}

#[test]
fn test_mixed_vel_aut_is_a_parse_error() {
    let (_, codes) = parse_with_errors("a vel b aut c");
    assert!(codes.contains(&"P007".to_string()), "expected P007, got {codes:?}");

    // Parenthesized mixing is fine.
    let (_, codes) = parse_with_errors("(a aut b) vel c");
    assert!(codes.is_empty(), "unexpected diagnostics: {codes:?}");
}

#[test]
fn test_ternary_forms() {
    let Statement::Expression(statement) = single_statement("paratus ? 1 : 0") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Ternary(t) if !t.latin));

    let Statement::Expression(statement) = single_statement("paratus sic 1 secus 0") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Ternary(t) if t.latin));
}

#[test]
fn test_optional_chain_vs_ternary() {
    let Statement::Expression(statement) = single_statement("persona?.nomen") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Member(m) if m.optional));

    let Statement::Expression(statement) = single_statement("persona ? nomen : alterum") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Ternary(_)));
}

#[test]
fn test_non_null_chains_and_assertion() {
    let Statement::Expression(statement) = single_statement("persona!.nomen") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Member(m) if m.non_null));

    let Statement::Expression(statement) = single_statement("persona!") else {
        panic!("expected an expression statement");
    };
    assert!(
        matches!(&statement.expression, Expression::Unary(u) if u.op == UnaryOperation::NonNullAssert)
    );
}

#[test]
fn test_latin_predicates() {
    let Statement::Expression(statement) = single_statement("nulla persona") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Unary(u) if u.op == UnaryOperation::Nulla));

    // `nihil` before an expression is the predicate; alone it is the
    // literal.
    let Statement::Expression(statement) = single_statement("nihil persona") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Unary(u) if u.op == UnaryOperation::Nihil));

    let Statement::Expression(statement) = single_statement("nihil") else {
        panic!("expected an expression statement");
    };
    assert!(
        matches!(&statement.expression, Expression::Literal(l) if matches!(l.value, LiteralValue::Nihil))
    );
}

#[test]
fn test_est_with_type_name_is_a_type_test() {
    let Statement::Expression(statement) = single_statement("valor est textus") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::TypeTest(t) if !t.negated));

    let Statement::Expression(statement) = single_statement("valor non est textus") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::TypeTest(t) if t.negated));
}

#[test]
fn test_est_with_value_is_equality() {
    let Statement::Conditional(conditional) = single_statement("si status est \"active\" { scribe \"ok\" }")
    else {
        panic!("expected a conditional");
    };
    let Expression::Binary(binary) = &conditional.condition else {
        panic!("expected a binary condition");
    };
    assert_eq!(binary.op, BinaryOperation::Eq);
}

#[test]
fn test_cast_binds_looser_than_member_chain() {
    let Statement::Expression(statement) = single_statement("persona.aetas qua textus") else {
        panic!("expected an expression statement");
    };
    let Expression::Cast(cast) = &statement.expression else {
        panic!("expected a cast at the root");
    };
    assert!(matches!(&*cast.expression, Expression::Member(_)));
}

#[test]
fn test_arrow_vs_grouped_expression() {
    let Statement::Expression(statement) = single_statement("(a, b) => a + b") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Arrow(a) if a.parameters.len() == 2));

    let Statement::Expression(statement) = single_statement("(a)") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Identifier(_)));
}

#[test]
fn test_lambda_verbs() {
    let Statement::Expression(statement) = single_statement("pro x: x * 2") else {
        panic!("expected an expression statement");
    };
    let Expression::Lambda(lambda) = &statement.expression else {
        panic!("expected a lambda");
    };
    assert_eq!(lambda.verb, LambdaVerb::Pro);
    assert!(matches!(lambda.body, LambdaBody::Expression(_)));

    let Statement::Expression(statement) = single_statement("fiet url redde cede pete(url)") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Lambda(l) if l.verb.is_async()));
}

#[test]
fn test_iteration_verbs_and_kinds() {
    let Statement::Iteration(iteration) = single_statement("ex nomina pro nomen { scribe(nomen) }") else {
        panic!("expected an iteration");
    };
    assert_eq!(iteration.kind, IterationKind::Ex);
    assert_eq!(iteration.verb, IterationVerb::Pro);

    let Statement::Iteration(iteration) = single_statement("de persona pro clavis { scribe(clavis) }")
    else {
        panic!("expected an iteration");
    };
    assert_eq!(iteration.kind, IterationKind::De);

    let Statement::Iteration(iteration) = single_statement("ex paginae fiet pagina { scribe(pagina) }")
    else {
        panic!("expected an iteration");
    };
    assert!(iteration.verb.is_async());
}

#[test]
fn test_ergo_one_liner_wraps_into_a_block() {
    let Statement::Iteration(iteration) = single_statement("ex nomina pro nomen ergo scribe(nomen)")
    else {
        panic!("expected an iteration");
    };
    assert_eq!(iteration.body.statements.len(), 1);
}

#[test]
fn test_iteration_range_with_step() {
    let Statement::Iteration(iteration) = single_statement("ex 0..10 per 2 pro i { scribe(i) }") else {
        panic!("expected an iteration");
    };
    let Expression::Range(range) = &iteration.source else {
        panic!("expected a range source");
    };
    assert_eq!(range.kind, RangeKind::DotDot);
    assert!(range.step.is_some());
}

#[test]
fn test_pipeline_transforms() {
    let Statement::Iteration(iteration) = single_statement("ex pretia prima 3 pro pretium { scribe(pretium) }")
    else {
        panic!("expected an iteration");
    };
    assert_eq!(iteration.transforms.len(), 1);

    let Statement::Expression(statement) = single_statement("ex pretia prima 3 summa") else {
        panic!("expected an expression statement");
    };
    let Expression::Pipeline(pipeline) = &statement.expression else {
        panic!("expected a pipeline");
    };
    assert_eq!(pipeline.transforms.len(), 2);
    assert!(matches!(pipeline.transforms[1], Transform::Summa));
}

#[test]
fn test_ex_import_disambiguation() {
    let Statement::Declaration(Declaration::Import(import)) =
        single_statement("ex \"norma/textus\" importa { maiuscula, minuscula ut parva }")
    else {
        panic!("expected an import");
    };
    assert!(matches!(&import.source, ImportSource::Path(p) if p == "norma/textus"));
    assert_eq!(import.items.len(), 2);
    assert_eq!(import.items[1].alias.as_ref().unwrap().name, "parva");

    let Statement::Declaration(Declaration::Import(import)) = single_statement("ex norma importa norma")
    else {
        panic!("expected an import");
    };
    assert!(matches!(&import.source, ImportSource::Module(m) if m.name == "norma"));
    assert_eq!(import.default_import.as_ref().unwrap().name, "norma");
}

#[test]
fn test_ex_destructuring_statement() {
    let Statement::Declaration(Declaration::Variable(decl)) =
        single_statement("ex persona fixum { nomen, aetas }")
    else {
        panic!("expected a variable declaration");
    };
    assert_eq!(decl.kind, VariableKind::Fixum);
    assert!(matches!(&decl.pattern, Pattern::Object(p) if p.entries.len() == 2));
    assert!(decl.initializer.is_some());
}

#[test]
fn test_destructuring_renames_and_rest() {
    let Statement::Declaration(Declaration::Variable(decl)) =
        single_statement("fixum { nomen: localis, ceteri reliqua } = persona")
    else {
        panic!("expected a variable declaration");
    };
    let Pattern::Object(pattern) = &decl.pattern else {
        panic!("expected an object pattern");
    };
    assert!(
        matches!(&pattern.entries[0], ObjectPatternEntry::Field { alias: Some(a), .. } if a.name == "localis")
    );
    assert!(matches!(&pattern.entries[1], ObjectPatternEntry::Rest(r) if r.name == "reliqua"));
}

#[test]
fn test_array_pattern_skip_and_rest() {
    let Statement::Declaration(Declaration::Variable(decl)) =
        single_statement("fixum [primus, _, ceteri reliqui] = valores")
    else {
        panic!("expected a variable declaration");
    };
    let Pattern::Array(pattern) = &decl.pattern else {
        panic!("expected an array pattern");
    };
    assert!(matches!(pattern.elements[0], ArrayPatternElement::Identifier(_)));
    assert!(matches!(pattern.elements[1], ArrayPatternElement::Skip));
    assert!(matches!(pattern.elements[2], ArrayPatternElement::Rest(_)));
}

#[test]
fn test_js_spread_in_pattern_is_an_error() {
    let (program, codes) = parse_with_errors("fixum { ...reliqua } = persona");
    assert!(program.is_some());
    assert!(codes.contains(&"P010".to_string()), "expected P010, got {codes:?}");
}

#[test]
fn test_genus_members_in_any_order() {
    let source = r#"
genus persona {
    textus nomen: "anon"
    functio saluta() fit textus { redde nomen }
    numerus aetas: 0
    functio creo() { si ego.aetas < 0 { ego.aetas = 0 } }
}
"#;
    let Statement::Declaration(Declaration::Genus(genus)) = single_statement(source) else {
        panic!("expected a genus");
    };
    assert_eq!(genus.fields().count(), 2);
    assert_eq!(genus.methods().count(), 2);
    assert!(genus.constructor().is_some());
}

#[test]
fn test_genus_member_modifiers() {
    let source = r#"
genus arca {
    privatus numerus saldo: 0
    generis numerus numerus_arcarum: 0
    nexum textus titulus: ""
    futura functio onera() -> vacuum {}
}
"#;
    let Statement::Declaration(Declaration::Genus(genus)) = single_statement(source) else {
        panic!("expected a genus");
    };
    let fields: Vec<_> = genus.fields().collect();
    assert!(fields[0].modifiers.private);
    assert!(fields[1].modifiers.static_);
    assert!(fields[2].modifiers.reactive);
    assert!(genus.methods().next().unwrap().function.variant.is_async);
}

#[test]
fn test_genus_member_recovery() {
    // The malformed member is reported; the rest of the body survives.
    let source = r#"
genus persona {
    + + +
    textus nomen: "anon"
}
"#;
    let (program, codes) = parse_with_errors(source);
    assert!(!codes.is_empty());
    let program = program.expect("program");
    let Statement::Declaration(Declaration::Genus(genus)) = &program.statements[0] else {
        panic!("expected a genus");
    };
    assert_eq!(genus.fields().count(), 1);
}

#[test]
fn test_pactum_discretio_ordo_alias() {
    let program = parse_clean(
        r#"
pactum salutator {
    functio saluta(textus nomen) fit textus
}
discretio forma {
    circulus(numerus radius),
    quadratum(numerus latus),
    punctum
}
ordo color {
    ruber = 1,
    viridis,
    caeruleus = "blau"
}
typus Nomen = textus
"#,
    );
    assert_eq!(program.statements.len(), 4);

    let Statement::Declaration(Declaration::Discretio(discretio)) = &program.statements[1] else {
        panic!("expected a discretio");
    };
    assert_eq!(discretio.variants.len(), 3);
    assert_eq!(discretio.variants[0].fields.len(), 1);
    assert!(discretio.variants[2].fields.is_empty());
}

#[test]
fn test_empty_discretio_is_permitted() {
    let Statement::Declaration(Declaration::Discretio(discretio)) = single_statement("discretio vacua {}")
    else {
        panic!("expected a discretio");
    };
    assert!(discretio.variants.is_empty());
}

#[test]
fn test_elige_and_discerne() {
    let source = r#"
elige status {
    casus 1 { scribe "unus" }
    casus 2, 3 { scribe "plures" }
    aliter { scribe "alius" }
}
"#;
    let Statement::Elige(elige) = single_statement(source) else {
        panic!("expected an elige");
    };
    assert_eq!(elige.cases.len(), 2);
    assert_eq!(elige.cases[1].values.len(), 2);
    assert!(elige.default.is_some());

    let source = r#"
discerne figura {
    casus circulus(r) { scribe(r) }
    casus punctum { scribe "punctum" }
    aliter {}
}
"#;
    let Statement::Discerne(discerne) = single_statement(source) else {
        panic!("expected a discerne");
    };
    assert_eq!(discerne.arms.len(), 2);
    assert_eq!(discerne.arms[0].bindings.len(), 1);
    assert!(discerne.arms[1].bindings.is_empty());
}

#[test]
fn test_cura_disambiguation() {
    // `cura ante` and `cura post` are hooks; `post` is matched by lexeme.
    let Statement::TestHook(hook) = single_statement("cura ante { para() }") else {
        panic!("expected a test hook");
    };
    assert_eq!(hook.kind, HookKind::Ante);

    let Statement::TestHook(hook) = single_statement("cura post { purga() }") else {
        panic!("expected a test hook");
    };
    assert_eq!(hook.kind, HookKind::Post);

    let Statement::Cura(cura) = single_statement("cura aperi(via) ut plica { lege(plica) }") else {
        panic!("expected a cura statement");
    };
    assert_eq!(cura.binding.as_ref().unwrap().name, "plica");
}

#[test]
fn test_post_remains_an_ordinary_identifier() {
    let Statement::Expression(statement) = single_statement("post + 1") else {
        panic!("expected an expression statement");
    };
    let Expression::Binary(binary) = &statement.expression else {
        panic!("expected a binary expression");
    };
    assert!(matches!(&*binary.left, Expression::Identifier(id) if id.name == "post"));
}

#[test]
fn test_test_suite_structure() {
    let source = r#"
probatio "persona" {
    cura ante { para() }
    proba "habet nomen" {
        adfirma persona.nomen est "anon"
    }
    cura post { purga() }
}
"#;
    let Statement::TestSuite(suite) = single_statement(source) else {
        panic!("expected a test suite");
    };
    assert_eq!(suite.name, "persona");
    assert_eq!(suite.body.statements.len(), 3);
}

#[test]
fn test_fac_block_and_catch() {
    let Statement::Block(_) = single_statement("fac { scribe \"intra\" }") else {
        panic!("expected a block");
    };

    let Statement::Try(try_) = single_statement("fac { pericula() } cape erratum { scribe(erratum) }")
    else {
        panic!("expected a protected block");
    };
    assert!(try_.catch.is_some());
    assert!(try_.finally.is_none());
}

#[test]
fn test_tempta_cape_demum() {
    let Statement::Try(try_) =
        single_statement("tempta { pericula() } cape e { scribe(e) } demum { claude() }")
    else {
        panic!("expected a try statement");
    };
    assert!(try_.catch.is_some());
    assert!(try_.finally.is_some());
}

#[test]
fn test_conditional_with_catch_binding() {
    let Statement::Conditional(conditional) =
        single_statement("si paratus { incipe() } cape e { scribe(e) }")
    else {
        panic!("expected a conditional");
    };
    assert!(conditional.catch.is_some());
}

#[test]
fn test_throw_break_continue_dispatch() {
    assert!(matches!(single_statement("iace erratum"), Statement::Throw(t) if !t.fatal));
    assert!(matches!(single_statement("mori \"fatalis\""), Statement::Throw(t) if t.fatal));
    assert!(matches!(single_statement("dum verum { rumpe }"), Statement::While(_)));
    assert!(matches!(single_statement("ad tracta(nuntius)"), Statement::Dispatch(_)));
}

#[test]
fn test_compound_assignment_desugars() {
    let Statement::Assign(assign) = single_statement("summa += 1") else {
        panic!("expected an assignment");
    };
    assert!(matches!(&assign.value, Expression::Binary(b) if b.op == BinaryOperation::Add));
}

#[test]
fn test_invalid_assignment_target() {
    let (_, codes) = parse_with_errors("1 + 2 = 3");
    assert!(codes.contains(&"P004".to_string()), "expected P004, got {codes:?}");
}

#[test]
fn test_novum_forms() {
    let Statement::Expression(statement) = single_statement("novum persona { aetas: 30 }") else {
        panic!("expected an expression statement");
    };
    let Expression::New(new) = &statement.expression else {
        panic!("expected a construction");
    };
    assert!(new.overrides.is_some());

    let Statement::Expression(statement) = single_statement("novum persona de exemplo") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::New(n) if n.source.is_some()));
}

#[test]
fn test_scriptum_and_praefixum() {
    let Statement::Expression(statement) = single_statement("scriptum(\"salve, {}!\", nomen)") else {
        panic!("expected an expression statement");
    };
    let Expression::Format(format) = &statement.expression else {
        panic!("expected a format string");
    };
    assert_eq!(format.format, "salve, {}!");
    assert_eq!(format.arguments.len(), 1);

    let Statement::Expression(statement) = single_statement("praefixum { fixum x = 1 }") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Comptime(_)));
}

#[test]
fn test_deep_nesting_parses() {
    let statement = single_statement("(((((1 + 2)))))");
    assert!(matches!(statement, Statement::Expression(_)));

    let Statement::Expression(statement) = single_statement("a.b.c.d.e.f") else {
        panic!("expected an expression statement");
    };
    assert!(matches!(&statement.expression, Expression::Member(_)));
}

#[test]
fn test_nested_generics_split_shift() {
    let Statement::Declaration(Declaration::Variable(decl)) =
        single_statement("fixum lista<lista<textus>> tabula = []")
    else {
        panic!("expected a variable declaration");
    };
    let annotation = decl.type_annotation.unwrap();
    let TypeParameterArg::Type(inner) = &annotation.type_parameters[0] else {
        panic!("expected a nested type");
    };
    assert_eq!(inner.name.name, "lista");
}

#[test]
fn test_recovery_advances_on_garbage() {
    // P3: the parser terminates and reports, whatever the input.
    let (_, codes) = parse_with_errors(") ) ] } ~ ^ ,");
    assert!(!codes.is_empty());

    let (program, codes) = parse_with_errors("fixum = 3\nfixum recte = 4");
    assert!(!codes.is_empty());
    // The statement after the malformed one still parses.
    let program = program.expect("program");
    assert!(program.statements.iter().any(|s| matches!(
        s,
        Statement::Declaration(Declaration::Variable(v))
            if matches!(&v.pattern, Pattern::Identifier(id) if id.name == "recte")
    )));
}

#[test]
fn test_every_node_carries_a_real_span() {
    let source = "functio salve(textus nomen) fit textus { redde nomen }";
    let program = parse_clean(source);
    let statement = &program.statements[0];
    let span = statement.span();
    assert!(span.start.offset < span.end.offset);
    assert!((span.end.offset as usize) <= source.len());
}

#[test]
fn test_tokens_end_with_eof() {
    let handler = Handler::new();
    let tokens = tokenize(&handler, "fixum x = 1");
    assert!(matches!(tokens.last().unwrap().token, faber_parser::Token::Eof));
}
