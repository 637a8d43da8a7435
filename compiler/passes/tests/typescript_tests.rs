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

/// Parses, annotates, and emits `source` as TypeScript.
fn emit(source: &str) -> String {
    let handler = Handler::new();
    let mut program = faber_parser::parse_source(&handler, source).expect("program");
    annotate(&mut program, &AnalyzerContext::default(), &handler);
    generate(&program, &GeneratorOptions { target: Target::TypeScript })
}

#[test]
fn test_module_constant() {
    assert_eq!(emit("fixum PI = 3.14159"), "const PI = 3.14159;\n");
}

#[test]
fn test_variable_kinds() {
    assert_eq!(emit("varia gradus = 1"), "let gradus = 1;\n");
    assert!(emit("figendum datum = pete()").contains("const datum = await (pete());"));
    assert!(emit("variandum status = pete()").contains("let status = await (pete());"));
}

#[test]
fn test_function_and_return() {
    let output = emit("functio salve(nomen) { redde nomen }");
    assert!(output.contains("function salve(nomen)"));
    assert!(output.contains("return nomen;"));
}

#[test]
fn test_async_and_generator_functions() {
    assert!(emit("futura functio pete(textus url) -> textus {}")
        .contains("async function pete(url: string): Promise<string>"));
    assert!(emit("cursor functio numera() -> numerus {}").contains("function* numera()"));
    assert!(emit("functio paginae() fient textus {}").contains("async function* paginae()"));
}

#[test]
fn test_range_loop_with_step() {
    let output = emit("ex 0..10 per 2 pro i { scribe(i) }");
    assert!(output.contains("for (let i = 0; i <= 10; i += 2)"), "got: {output}");
    assert!(output.contains("console.log(i)"));
}

#[test]
fn test_exclusive_range_uses_less_than() {
    let output = emit("ex 0 ante 10 pro i { scribe(i) }");
    assert!(output.contains("for (let i = 0; i < 10; i += 1)"), "got: {output}");
}

#[test]
fn test_iteration_kinds() {
    assert!(emit("ex nomina pro nomen { scribe(nomen) }").contains("for (const nomen of nomina)"));
    assert!(emit("de persona pro clavis { scribe(clavis) }").contains("for (const clavis in persona)"));
    assert!(emit("ex paginae fiet pagina { scribe(pagina) }")
        .contains("for await (const pagina of paginae)"));
}

#[test]
fn test_conditionals_and_while() {
    let output = emit("si paratus { incipe() } aliter { mane() }");
    assert!(output.contains("if (paratus) {"));
    assert!(output.contains("} else {"));

    assert!(emit("dum verum { rumpe }").contains("while (true) {"));
    assert!(emit("dum verum { rumpe }").contains("break;"));
}

#[test]
fn test_elige_emits_switch_with_breaks() {
    let output = emit(
        r#"
elige status {
    casus 1 { scribe "unus" }
    aliter { scribe "alius" }
}
"#,
    );
    assert!(output.contains("switch (status) {"));
    assert!(output.contains("case 1: {"));
    assert!(output.contains("break;"));
    assert!(output.contains("default: {"));
}

#[test]
fn test_discerne_binds_variant_fields_positionally() {
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
    assert!(output.contains("switch (figura.kind) {"));
    assert!(output.contains("case \"circulus\": {"));
    assert!(output.contains("const r = figura.radius;"), "got: {output}");
}

#[test]
fn test_try_catch_finally() {
    let output = emit("tempta { pericula() } cape e { scribe(e) } demum { claude() }");
    assert!(output.contains("try {"));
    assert!(output.contains("} catch (e) {"));
    assert!(output.contains("} finally {"));
}

#[test]
fn test_conditional_with_catch_wraps_in_try() {
    let output = emit("si paratus { incipe() } cape e { scribe(e) }");
    assert!(output.contains("try {"));
    assert!(output.contains("if (paratus) {"));
    assert!(output.contains("} catch (e) {"));
}

#[test]
fn test_assert_lowering() {
    assert!(emit("adfirma summa > 0")
        .contains("if (!(summa > 0)) throw new Error(\"Assertion failed\");"));
    assert!(emit("adfirma summa > 0, \"summa deficit\"")
        .contains("if (!(summa > 0)) throw new Error(\"summa deficit\");"));
}

#[test]
fn test_console_verbs() {
    assert!(emit("scribe(\"salve\")").contains("console.log(\"salve\");"));
    assert!(emit("vide(valor)").contains("console.debug(valor);"));
    assert!(emit("mone(\"cave\")").contains("console.warn(\"cave\");"));
}

#[test]
fn test_throw_forms() {
    assert!(emit("iace erratum").contains("throw erratum;"));
    let fatal = emit("mori \"fatalis\"");
    assert!(fatal.contains("throw Object.assign(new Error(String(\"fatalis\")), { fatal: true });"));
}

#[test]
fn test_boolean_and_null_literals() {
    let output = emit("fixum verus_valor = verum\nfixum falsus_valor = falsum\nfixum vacuus_valor = nihil");
    // Exactly one occurrence per literal.
    assert_eq!(output.matches("true").count(), 1);
    assert_eq!(output.matches("false").count(), 1);
    assert_eq!(output.matches("null").count(), 1);
}

#[test]
fn test_latin_word_operators() {
    let output = emit("fixum bene = a et b aut c");
    assert!(output.contains("a && b || c"));
    assert!(emit("fixum valor = a vel b").contains("a ?? b"));
    // Parenthesized logical operand under nullish keeps its parentheses.
    assert!(emit("fixum valor = (a aut b) vel c").contains("(a || b) ?? c"));
}

#[test]
fn test_est_lowers_to_strict_equality() {
    assert!(emit("si status est \"active\" { scribe \"ok\" }").contains("status === \"active\""));
    assert!(emit("si status non est \"active\" { scribe \"ok\" }").contains("status !== \"active\""));
}

#[test]
fn test_type_tests() {
    assert!(emit("fixum b = valor est textus").contains("typeof valor === \"string\""));
    assert!(emit("fixum b = valor non est numerus").contains("typeof valor !== \"number\""));
    assert!(emit("fixum b = valor est lista").contains("Array.isArray(valor)"));
    // A user type resolves through the annotator into instanceof.
    let output = emit("genus persona {}\nfixum b = valor est persona");
    assert!(output.contains("valor instanceof persona"), "got: {output}");
}

#[test]
fn test_bitwise_precedence_is_preserved_by_parens() {
    // Faber groups `a & b < c` as `(a & b) < c`; TypeScript needs parens
    // to keep that grouping.
    let output = emit("fixum x = a & b < c");
    assert!(output.contains("(a & b) < c"), "got: {output}");
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
    assert!(output.contains("class persona {"));
    assert!(output.contains("nomen: string = \"anon\";"));
    assert!(output.contains("aetas: number = 0;"));
    assert!(output.contains("constructor(overrides: Partial<persona> = {}) {"));
    assert!(output.contains("Object.assign(this, overrides);"));
    assert!(output.contains("if (this.aetas < 0) {"));
    assert!(output.contains("saluta(): string {"));
    assert!(output.contains("return this.nomen;"));
}

#[test]
fn test_struct_default_law() {
    // L1: the generated declaration carries the field, its target type,
    // and its default.
    let output = emit("genus cista {\n    textus titulus: \"vacua\"\n}");
    assert!(output.contains("titulus: string = \"vacua\";"));
}

#[test]
fn test_pactum_interface() {
    let output = emit(
        r#"
pactum salutator {
    functio saluta(textus nomen) fit textus
}
"#,
    );
    assert!(output.contains("interface salutator {"));
    assert!(output.contains("saluta(nomen: string): string;"));
}

#[test]
fn test_type_alias_and_generics() {
    assert_eq!(emit("typus Nomen = textus"), "type Nomen = string;\n");
    assert!(emit("typus Tabula = lista<textus>").contains("type Tabula = string[];"));
    assert!(emit("typus Index = mappa<textus, numerus>").contains("type Index = Map<string, number>;"));
    // Numeric type parameters are dropped: no sized numerics in TS.
    assert!(emit("typus Parvus = numerus<8>").contains("type Parvus = number;"));
    assert!(emit("typus Fortasse = textus?").contains("type Fortasse = string | null;"));
}

#[test]
fn test_ordo_enum() {
    let output = emit("ordo color {\n    ruber = 1,\n    viridis,\n    caeruleus = \"blau\"\n}");
    assert!(output.contains("enum color {"));
    assert!(output.contains("ruber = 1,"));
    assert!(output.contains("viridis,"));
    assert!(output.contains("caeruleus = \"blau\","));
}

#[test]
fn test_discretio_union_and_constructors() {
    let output = emit(
        r#"
discretio forma {
    circulus(numerus radius),
    punctum
}
"#,
    );
    assert!(output.contains("type forma ="));
    assert!(output.contains("| { kind: \"circulus\"; radius: number }"));
    assert!(output.contains("| { kind: \"punctum\" };"));
    assert!(output.contains("circulus: (radius: number): forma => ({ kind: \"circulus\", radius })"));
}

#[test]
fn test_empty_discretio_is_never() {
    assert_eq!(emit("discretio vacua {}"), "type vacua = never;\n");
}

#[test]
fn test_imports() {
    assert_eq!(
        emit("ex \"norma/textus\" importa { maiuscula, minuscula ut parva }"),
        "import { maiuscula, minuscula as parva } from \"norma/textus\";\n"
    );
    assert_eq!(emit("ex norma importa norma"), "import norma from \"norma\";\n");
}

#[test]
fn test_destructuring() {
    assert_eq!(emit("fixum { nomen: localName } = user"), "const { nomen: localName } = user;\n");
    assert_eq!(
        emit("fixum { nomen, ceteri reliqua } = user"),
        "const { nomen, ...reliqua } = user;\n"
    );
    assert_eq!(
        emit("fixum [primus, _, ceteri reliqui] = valores"),
        "const [primus, , ...reliqui] = valores;\n"
    );
}

#[test]
fn test_novum_forms() {
    assert!(emit("fixum p = novum persona").contains("new persona()"));
    assert!(emit("fixum p = novum persona(1, 2)").contains("new persona(1, 2)"));
    assert!(emit("fixum p = novum persona { aetas: 30 }").contains("new persona({ aetas: 30 })"));
    assert!(emit("fixum p = novum persona de exemplo").contains("new persona({ ...exemplo })"));
}

#[test]
fn test_lambdas_and_arrows() {
    assert!(emit("fixum dup = pro x: x * 2").contains("(x) => x * 2"));
    assert!(emit("fixum f = fiet x: cede pete(x)").contains("async (x) => await pete(x)"));
    assert!(emit("fixum g = (a, b) => a + b").contains("(a, b) => a + b"));
}

#[test]
fn test_cura_uses_using() {
    let output = emit("cura aperi(via) ut plica { lege(plica) }");
    assert!(output.contains("using plica = aperi(via);"), "got: {output}");
}

#[test]
fn test_dispatch_returns() {
    assert!(emit("ad tracta(nuntius)").contains("return tracta(nuntius);"));
}

#[test]
fn test_custodi_guard() {
    let output = emit("custodi paratus { redde }");
    assert!(output.contains("if (!(paratus)) {"));
    assert!(output.contains("return;"));
}

#[test]
fn test_scriptum_template_literal() {
    let output = emit("fixum salutatio = scriptum(\"salve, {}!\", nomen)");
    assert!(output.contains("`salve, ${nomen}!`"), "got: {output}");
}

#[test]
fn test_pipeline_expression() {
    let output = emit("fixum tria = ex pretia prima 3 summa");
    assert!(output.contains("pretia.slice(0, 3).reduce((a, b) => a + b, 0)"), "got: {output}");
}

#[test]
fn test_test_suites() {
    let output = emit(
        r#"
probatio "persona" {
    cura ante { para() }
    proba "habet nomen" { adfirma verum }
    cura post { purga() }
}
"#,
    );
    assert!(output.contains("describe(\"persona\", () => {"));
    assert!(output.contains("beforeEach(() => {"));
    assert!(output.contains("it(\"habet nomen\", () => {"));
    assert!(output.contains("afterEach(() => {"));
}

#[test]
fn test_reserved_word_rename() {
    let output = emit("fixum class = 1\nscribe(class)");
    assert!(output.contains("const class_ = 1;"));
    assert!(output.contains("console.log(class_);"));
}

#[test]
fn test_optional_and_non_null_chains() {
    assert!(emit("fixum n = persona?.nomen").contains("persona?.nomen"));
    assert!(emit("fixum n = persona!.nomen").contains("persona!.nomen"));
    assert!(emit("fixum n = lista?[0]").contains("lista?.[0]"));
    assert!(emit("fixum n = registra?(1)").contains("registra?.(1)"));
}
