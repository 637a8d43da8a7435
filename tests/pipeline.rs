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

//! End-to-end properties of the whole pipeline.

use faber_lang::{analyze, compile, generate, parse, tokenize, AnalyzerContext, GeneratorOptions, Target};

fn ts() -> GeneratorOptions {
    GeneratorOptions { target: Target::TypeScript }
}

fn zig() -> GeneratorOptions {
    GeneratorOptions { target: Target::Zig }
}

fn py() -> GeneratorOptions {
    GeneratorOptions { target: Target::Python }
}

/// Inputs chosen to stress every stage without being valid programs.
const ADVERSARIAL: &[&str] = &[
    "",
    " \t\n ",
    ")))(((",
    "fixum",
    "fixum =",
    "functio {",
    "genus { functio }",
    "\"apertum",
    "`apertum",
    "/* apertum",
    "a \\ b @ c",
    "?????",
    "ex ex ex",
    "si si si { { {",
    "novum",
    "1 + + 2",
    "elige { casus }",
    "discerne x { casus }",
];

#[test]
fn test_tokenize_is_total() {
    // P1: every input yields a finite token list ending in Eof.
    for source in ADVERSARIAL {
        let (tokens, _) = tokenize(source);
        assert!(!tokens.is_empty(), "no tokens for {source:?}");
        assert!(
            matches!(tokens.last().unwrap().token, faber_lang::Token::Eof),
            "missing Eof for {source:?}"
        );
    }
}

#[test]
fn test_parse_is_total() {
    // P2 and P3: parsing terminates on every input with a finite error
    // list.
    for source in ADVERSARIAL {
        let (tokens, _) = tokenize(source);
        let (_, errors) = parse(tokens);
        assert!(errors.len() < 1000, "diagnostic runaway for {source:?}");
    }
}

#[test]
fn test_generation_is_total_on_recovered_trees() {
    for source in ADVERSARIAL {
        let (output, _) = compile(source, &ts());
        // A best-effort tree always generates; catastrophic failure is the
        // only None.
        if let Some(output) = output {
            assert!(output.len() < 1 << 20);
        }
    }
}

#[test]
fn test_positions_stay_inside_the_input() {
    // P4: every token and node position points into the source.
    let source = "functio salve(textus nomen) fit textus {\n    redde nomen\n}\n";
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty());
    for token in &tokens {
        assert!((token.span.start.offset as usize) <= source.len());
        assert!((token.span.end.offset as usize) <= source.len());
    }

    let (program, errors) = parse(tokens);
    assert!(errors.is_empty());
    for statement in &program.unwrap().statements {
        let span = statement.span();
        assert!((span.start.offset as usize) < source.len());
        assert!((span.end.offset as usize) <= source.len());
    }
}

#[test]
fn test_generation_round_trip_is_stable() {
    // P5: reparsing the canonical rendering of the tree generates the
    // same target text (whitespace differences live in the rendering, not
    // the output).
    let source = r#"
fixum numerus basis = 10
functio duplica(numerus n) fit numerus { redde n * 2 }
genus cista {
    textus titulus: "vacua"
}
si basis > 5 { scribe("magna") } aliter { scribe("parva") }
dum falsum { rumpe }
ex 0..3 pro i { scribe(i) }
"#;
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "{errors:?}");
    let (program, errors) = parse(tokens);
    assert!(errors.is_empty(), "{errors:?}");
    let program = program.unwrap();

    let rendered = program.to_string();
    let (tokens2, errors) = tokenize(&rendered);
    assert!(errors.is_empty(), "rendered source failed to lex: {rendered}");
    let (program2, errors) = parse(tokens2);
    assert!(errors.is_empty(), "rendered source failed to parse: {rendered}");

    for opts in [ts(), zig(), py()] {
        assert_eq!(
            generate(&program, &opts),
            generate(&program2.clone().unwrap(), &opts),
            "round trip diverged for {:?}",
            opts.target
        );
    }
}

#[test]
fn test_scenario_module_constant() {
    let (output, errors) = compile("fixum PI = 3.14159", &ts());
    assert!(errors.is_empty());
    assert_eq!(output.unwrap(), "const PI = 3.14159;\n");

    let (output, _) = compile("fixum PI = 3.14159", &zig());
    assert!(output.unwrap().contains("const m_PI = 3.14159;"));
}

#[test]
fn test_scenario_function() {
    let (output, errors) = compile("functio salve(nomen) { redde nomen }", &ts());
    assert!(errors.is_empty());
    let output = output.unwrap();
    assert!(output.contains("function salve(nomen)"));
    assert!(output.contains("return nomen;"));
}

#[test]
fn test_scenario_range_loop() {
    let source = "ex 0..10 per 2 pro i { scribe(i) }";

    let (output, errors) = compile(source, &ts());
    assert!(errors.is_empty());
    let output = output.unwrap();
    assert!(output.contains("for (let i = 0; i <= 10; i += 2)"));
    assert!(output.contains("console.log(i)"));

    let (output, _) = compile(source, &zig());
    let output = output.unwrap();
    assert!(output.contains("var i: usize = 0"));
    assert!(output.contains("while (i <= 10)"));
    assert!(output.contains("(i += 2)"));
    assert!(output.contains("std.debug.print"));
}

#[test]
fn test_scenario_string_comparison() {
    let (output, _) = compile("si status est \"active\" { scribe \"ok\" }", &zig());
    let output = output.unwrap();
    assert!(output.contains("std.mem.eql(u8, status, \"active\")"));
    assert!(!output.contains("status == \"active\""));
}

#[test]
fn test_scenario_genus() {
    let source = r#"
genus persona {
    textus nomen: "anon"
    numerus aetas: 0
    functio creo() { si ego.aetas < 0 { ego.aetas = 0 } }
}
"#;
    let (output, errors) = compile(source, &zig());
    assert!(errors.is_empty());
    let output = output.unwrap();
    assert!(output.contains("const persona = struct {"));
    assert!(output.contains("nomen: []const u8 = \"anon\""));
    assert!(output.contains("aetas: i64 = 0"));
    assert!(output.contains("pub fn init(overrides: anytype) Self"));
    assert!(output.contains("@hasField(@TypeOf(overrides), \"nomen\")"));
    assert!(output.contains("@hasField(@TypeOf(overrides), \"aetas\")"));
    assert!(output.contains("self.creo();"));
}

#[test]
fn test_scenario_destructuring() {
    let source = "fixum { nomen: localName } = user";

    let (output, _) = compile(source, &ts());
    assert_eq!(output.unwrap(), "const { nomen: localName } = user;\n");

    let (output, _) = compile(source, &zig());
    let output = output.unwrap();
    assert!(output.contains("const _tmp = user"));
    assert!(output.contains("const localName = _tmp.nomen"));
}

#[test]
fn test_boolean_literal_law() {
    // L2: each boolean/null literal surfaces exactly once.
    let (output, _) = compile("fixum paratus = verum", &ts());
    assert_eq!(output.unwrap().matches("true").count(), 1);
}

#[test]
fn test_struct_default_law_across_targets() {
    // L1: field, target type, and default all survive.
    let source = "genus cista {\n    textus titulus: \"vacua\"\n}";
    let (output, _) = compile(source, &ts());
    assert!(output.unwrap().contains("titulus: string = \"vacua\";"));
    let (output, _) = compile(source, &zig());
    assert!(output.unwrap().contains("titulus: []const u8 = \"vacua\","));
}

#[test]
fn test_empty_input() {
    // B1: empty in, empty out, no errors.
    let (output, errors) = compile("", &ts());
    assert!(errors.is_empty());
    assert_eq!(output.unwrap(), "");
}

#[test]
fn test_forbidden_spread_reports() {
    // B4.
    let (_, errors) = compile("fixum { ...reliqua } = persona", &ts());
    assert!(errors.iter().any(|e| e.error_code() == "P010"), "got {errors:?}");
}

#[test]
fn test_prefix_verb_conflict_mentions_conflict() {
    // B5.
    let (_, errors) = compile("futura functio f() fit numerus { redde 1 }", &ts());
    let conflict = errors.iter().find(|e| e.error_code() == "P006").expect("P006");
    assert!(conflict.message().contains("conflict"), "got: {}", conflict.message());
}

#[test]
fn test_diagnostics_carry_codes_and_positions() {
    let (_, errors) = compile("fixum x = \"apertum\n", &ts());
    assert!(!errors.is_empty());
    for error in &errors {
        assert!(!error.error_code().is_empty());
    }
}

#[test]
fn test_analyze_reports_semantic_errors() {
    let (tokens, _) = tokenize("fixum PI = 3\nPI = 4");
    let (program, _) = parse(tokens);
    let mut program = program.unwrap();
    let errors = analyze(&mut program, &AnalyzerContext { file_path: "proba.fab".into() });
    assert!(errors.iter().any(|e| e.error_code() == "S002"));
}

#[test]
fn test_token_json_contract() {
    let (tokens, _) = tokenize("fixum nomen = \"anon\"");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["kind"], "keyword");
    assert_eq!(json[0]["keyword"], "fixum");
    assert_eq!(json[1]["kind"], "identifier");
    assert_eq!(json[1]["value"], "nomen");
    assert_eq!(json[2]["kind"], "operator");
    assert_eq!(json[3]["kind"], "string");
    assert_eq!(json[3]["position"]["column"], 15);
}

#[test]
fn test_targets_parse_from_str() {
    assert_eq!("ts".parse::<Target>().unwrap(), Target::TypeScript);
    assert_eq!("zig".parse::<Target>().unwrap(), Target::Zig);
    assert_eq!("py".parse::<Target>().unwrap(), Target::Python);
    assert!("cobol".parse::<Target>().is_err());
}

#[test]
fn test_compile_proceeds_past_recoverable_errors() {
    // The driver policy: proceed while a value exists, keep every
    // diagnostic.
    let source = "fixum bona = 1\nfixum = 2\nfixum etiam = 3";
    let (output, errors) = compile(source, &ts());
    assert!(!errors.is_empty());
    let output = output.unwrap();
    assert!(output.contains("const bona = 1;"));
    assert!(output.contains("const etiam = 3;"));
}
