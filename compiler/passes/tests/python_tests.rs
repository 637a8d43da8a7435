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

use faber_errors::emitter::Handler;
use faber_passes::{annotate, generate, AnalyzerContext, GeneratorOptions, Target};

/// Parses, annotates, and emits `source` as Python.
fn emit(source: &str) -> String {
    let handler = Handler::new();
    let mut program = faber_parser::parse_source(&handler, source).expect("program");
    annotate(&mut program, &AnalyzerContext::default(), &handler);
    generate(&program, &GeneratorOptions { target: Target::Python })
}

#[test]
fn test_variables_elide_types() {
    assert_eq!(emit("fixum textus nomen = \"anon\""), "nomen = \"anon\"\n");
    assert_eq!(emit("varia numerus aetas = 0"), "aetas = 0\n");
}

#[test]
fn test_functions() {
    let output = emit("functio salve(nomen) { redde nomen }");
    assert!(output.contains("def salve(nomen):"));
    assert!(output.contains("    return nomen"));

    assert!(emit("futura functio pete(textus url) -> textus {}").contains("async def pete(url):"));
}

#[test]
fn test_empty_bodies_pass() {
    let output = emit("functio vacua() {}");
    assert!(output.contains("def vacua():\n    pass\n"));
}

#[test]
fn test_conditionals_chain_with_elif() {
    let output = emit("si a { f() } aliter si b { g() } aliter { h() }");
    assert!(output.contains("if a:"), "got: {output}");
    assert!(output.contains("elif b:"), "got: {output}");
    assert!(output.contains("else:"), "got: {output}");
}

#[test]
fn test_range_loop_is_inclusive() {
    let output = emit("ex 0..10 per 2 pro i { scribe(i) }");
    assert!(output.contains("for i in range(0, 10 + 1, 2):"), "got: {output}");
    assert!(output.contains("print(i)"));
}

#[test]
fn test_iteration_over_values_and_keys() {
    assert!(emit("ex nomina pro nomen { scribe(nomen) }").contains("for nomen in nomina:"));
    // Python dicts iterate keys natively, which matches `de`.
    assert!(emit("de persona pro clavis { scribe(clavis) }").contains("for clavis in persona:"));
    assert!(emit("ex paginae fiet pagina { scribe(pagina) }").contains("async for pagina in paginae:"));
}

#[test]
fn test_scribe_is_print() {
    assert!(emit("scribe(\"salve\")").contains("print(\"salve\")"));
    assert!(emit("mone(\"cave\")").contains("print(\"warning:\", \"cave\")"));
}

#[test]
fn test_assert_lowering() {
    assert!(emit("adfirma summa > 0").contains("assert summa > 0"));
    assert!(emit("adfirma summa > 0, \"deficit\"").contains("assert summa > 0, \"deficit\""));
}

#[test]
fn test_word_operators_and_literals() {
    let output = emit("fixum bene = a et b aut c");
    assert!(output.contains("a and b or c"));
    assert!(emit("fixum v = verum").contains("= True"));
    assert!(emit("fixum f = falsum").contains("= False"));
    assert!(emit("fixum n = nihil").contains("= None"));
    assert!(emit("fixum p = non paratus").contains("not paratus"));
}

#[test]
fn test_nullish_coalescing() {
    let output = emit("fixum valor = a vel b");
    assert!(output.contains("a if a is not None else b"), "got: {output}");
}

#[test]
fn test_null_predicates_use_is() {
    assert!(emit("fixum b = nulla persona").contains("persona is None"));
    assert!(emit("fixum b = nonnulla persona").contains("persona is not None"));
}

#[test]
fn test_ternary() {
    assert!(emit("fixum x = paratus sic 1 secus 0").contains("1 if paratus else 0"));
}

#[test]
fn test_try_except_finally() {
    let output = emit("tempta { pericula() } cape e { scribe(e) } demum { claude() }");
    assert!(output.contains("try:"));
    assert!(output.contains("except Exception as e:"));
    assert!(output.contains("finally:"));
}

#[test]
fn test_cura_uses_with() {
    let output = emit("cura aperi(via) ut plica { lege(plica) }");
    assert!(output.contains("with aperi(via) as plica:"), "got: {output}");
}

#[test]
fn test_genus_class() {
    let output = emit(
        r#"
genus persona {
    textus nomen: "anon"
    numerus aetas: 0
    functio creo() { si ego.aetas < 0 { ego.aetas = 0 } }
    functio saluta() fit textus { redde ego.nomen }
}
"#,
    );
    assert!(output.contains("class persona:"));
    assert!(output.contains("def __init__(self, **overrides):"));
    assert!(output.contains("self.nomen = overrides.get(\"nomen\", \"anon\")"));
    assert!(output.contains("self.aetas = overrides.get(\"aetas\", 0)"));
    assert!(output.contains("if self.aetas < 0:"));
    assert!(output.contains("def saluta(self):"));
    assert!(output.contains("return self.nomen"));
}

#[test]
fn test_elige_uses_match() {
    let output = emit(
        r#"
elige status {
    casus 1, 2 { scribe "pauci" }
    aliter { scribe "alius" }
}
"#,
    );
    assert!(output.contains("match status:"));
    assert!(output.contains("case 1 | 2:"));
    assert!(output.contains("case _:"));
}

#[test]
fn test_discerne_chains_on_kind() {
    let output = emit(
        r#"
discretio forma {
    circulus(numerus radius),
    punctum
}
discerne figura {
    casus circulus(r) { scribe(r) }
    casus punctum { scribe "punctum" }
}
"#,
    );
    assert!(output.contains("if figura[\"kind\"] == \"circulus\":"));
    assert!(output.contains("r = figura[\"radius\"]"));
    assert!(output.contains("elif figura[\"kind\"] == \"punctum\":"));
}

#[test]
fn test_discretio_constructors() {
    let output = emit("discretio forma {\n    circulus(numerus radius)\n}");
    assert!(output.contains("class forma:"));
    assert!(output.contains("@staticmethod"));
    assert!(output.contains("def circulus(radius):"));
    assert!(output.contains("return {\"kind\": \"circulus\", \"radius\": radius}"));
}

#[test]
fn test_imports() {
    assert_eq!(
        emit("ex \"norma/textus\" importa { maiuscula ut magna }"),
        "from norma.textus import maiuscula as magna\n"
    );
    assert_eq!(emit("ex norma importa norma"), "import norma as norma\n");
}

#[test]
fn test_destructuring() {
    let output = emit("fixum { nomen: localName } = user");
    assert!(output.contains("_tmp = user"));
    assert!(output.contains("localName = _tmp[\"nomen\"]"));

    assert_eq!(emit("fixum [primus, _, ceteri reliqui] = valores"), "primus, _, *reliqui = valores\n");
}

#[test]
fn test_scriptum_uses_format() {
    assert!(emit("fixum s = scriptum(\"salve, {}!\", nomen)")
        .contains("\"salve, {}!\".format(nomen)"));
}

#[test]
fn test_pipeline_slices_and_sum() {
    let output = emit("fixum tria = ex pretia prima 3 summa");
    assert!(output.contains("sum(pretia[:3])"), "got: {output}");
    assert!(emit("fixum cauda = ex pretia ultima 2").contains("pretia[-2:]"));
}

#[test]
fn test_throw_forms() {
    assert!(emit("iace erratum").contains("raise Exception(erratum)"));
    assert!(emit("mori \"fatalis\"").contains("raise SystemExit(\"fatalis\")"));
}

#[test]
fn test_test_suites() {
    let output = emit(
        r#"
probatio "persona nova" {
    cura ante { para() }
    proba "habet nomen" { adfirma verum }
}
"#,
    );
    assert!(output.contains("class TestPersonaNova:"), "got: {output}");
    assert!(output.contains("def setup_method(self):"));
    assert!(output.contains("def test_habet_nomen(self):"));
}

#[test]
fn test_reserved_word_rename() {
    let output = emit("fixum lambda = 1\nscribe(lambda)");
    assert!(output.contains("lambda_ = 1"));
    assert!(output.contains("print(lambda_)"));
}

#[test]
fn test_type_alias_vanishes() {
    assert_eq!(emit("typus Nomen = textus"), "");
}
