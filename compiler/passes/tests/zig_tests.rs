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

/// Parses, annotates, and emits `source` as Zig.
fn emit(source: &str) -> String {
    let handler = Handler::new();
    let mut program = faber_parser::parse_source(&handler, source).expect("program");
    annotate(&mut program, &AnalyzerContext::default(), &handler);
    generate(&program, &GeneratorOptions { target: Target::Zig })
}

#[test]
fn test_module_constant_gets_m_prefix() {
    let output = emit("fixum PI = 3.14159");
    assert!(output.contains("const m_PI = 3.14159;"), "got: {output}");
}

#[test]
fn test_module_references_follow_the_rename() {
    let output = emit("fixum PI = 3.14159\nscribe(PI)");
    assert!(output.contains("std.debug.print(\"{any}\\n\", .{m_PI});"), "got: {output}");
}

#[test]
fn test_std_import_prelude() {
    assert!(emit("fixum x = 1").starts_with("const std = @import(\"std\");"));
}

#[test]
fn test_loose_statements_gather_into_main() {
    let output = emit("scribe(\"salve\")");
    assert!(output.contains("pub fn main() !void {"));
}

#[test]
fn test_range_loop() {
    let output = emit("ex 0..10 per 2 pro i { scribe(i) }");
    assert!(output.contains("var i: usize = 0"), "got: {output}");
    assert!(output.contains("while (i <= 10)"), "got: {output}");
    assert!(output.contains("(i += 2)"), "got: {output}");
    assert!(output.contains("std.debug.print"), "got: {output}");
}

#[test]
fn test_exclusive_range_uses_less_than() {
    let output = emit("ex 0 ante 10 pro i { scribe(i) }");
    assert!(output.contains("while (i < 10)"), "got: {output}");
    assert!(output.contains("(i += 1)"), "got: {output}");
}

#[test]
fn test_string_equality_uses_mem_eql() {
    let output = emit("si status est \"active\" { scribe \"ok\" }");
    assert!(output.contains("std.mem.eql(u8, status, \"active\")"), "got: {output}");
    assert!(!output.contains("status == \"active\""), "got: {output}");
}

#[test]
fn test_string_inequality_negates_mem_eql() {
    let output = emit("si status non est \"active\" { scribe \"ok\" }");
    assert!(output.contains("!std.mem.eql(u8, status, \"active\")"), "got: {output}");
}

#[test]
fn test_annotated_string_params_compare_via_mem_eql() {
    // No literal operand: the annotator's `textus` hint drives the
    // lowering.
    let output = emit("functio aequalia(textus a, textus b) fit bivalens { redde a est b }");
    assert!(output.contains("std.mem.eql(u8, a, b)"), "got: {output}");
}

#[test]
fn test_string_concatenation() {
    let output = emit("fixum salutatio = \"salve \" + nomen");
    assert!(output.contains("\"salve \" ++ nomen"), "got: {output}");
}

#[test]
fn test_numeric_equality_stays_plain() {
    let output = emit("si aetas == 30 { scribe \"ok\" }");
    assert!(output.contains("aetas == 30"), "got: {output}");
}

#[test]
fn test_genus_struct_shape() {
    let output = emit(
        r#"
genus persona {
    textus nomen: "anon"
    numerus aetas: 0
    functio creo() { si ego.aetas < 0 { ego.aetas = 0 } }
}
"#,
    );
    assert!(output.contains("const persona = struct {"), "got: {output}");
    assert!(output.contains("const Self = @This();"));
    assert!(output.contains("nomen: []const u8 = \"anon\","));
    assert!(output.contains("aetas: i64 = 0,"));
    assert!(output.contains("pub fn init(overrides: anytype) Self {"));
    assert!(output.contains("var self = Self{};"));
    assert!(output.contains("if (@hasField(@TypeOf(overrides), \"nomen\")) self.nomen = overrides.nomen;"));
    assert!(output.contains("if (@hasField(@TypeOf(overrides), \"aetas\")) self.aetas = overrides.aetas;"));
    assert!(output.contains("self.creo();"));
    assert!(output.contains("pub fn creo(self: *Self) void {"));
    assert!(output.contains("if (self.aetas < 0)"));
}

#[test]
fn test_genus_without_constructor_skips_creo_call() {
    let output = emit("genus punctum {\n    numerus x: 0\n}");
    assert!(!output.contains("self.creo();"));
    assert!(output.contains("return self;"));
}

#[test]
fn test_novum_lowers_to_init() {
    assert!(emit("fixum p = novum persona").contains("persona.init(.{})"));
    assert!(emit("fixum p = novum persona { aetas: 30 }").contains("persona.init(.{ .aetas = 30 })"));
    assert!(emit("fixum p = novum persona de exemplo").contains("persona.init(exemplo)"));
}

#[test]
fn test_empty_object_literal() {
    assert!(emit("fixum vacua = {}").contains("= .{};"));
}

#[test]
fn test_destructuring_through_tmp() {
    let output = emit("fixum { nomen: localName } = user");
    assert!(output.contains("const _tmp = user;"), "got: {output}");
    assert!(output.contains("const localName = _tmp.nomen;"), "got: {output}");
}

#[test]
fn test_pactum_becomes_doc_comment() {
    let output = emit("pactum salutator {\n    functio saluta(textus nomen) fit textus\n}");
    assert!(output.contains("/// pactum salutator: required method signatures"));
    assert!(output.contains("///   fn saluta(nomen: []const u8) []const u8"));
}

#[test]
fn test_async_expands_to_error_unions() {
    let output = emit("futura functio pete(textus url) -> textus { redde cede legere(url) }");
    assert!(output.contains("fn pete(url: []const u8) ![]const u8"), "got: {output}");
    assert!(output.contains("try legere(url)"), "got: {output}");
}

#[test]
fn test_async_void_returns_error_union_void() {
    let output = emit("futura functio tange() -> vacuum {}");
    assert!(output.contains("fn tange() !void"), "got: {output}");
}

#[test]
fn test_builtin_type_mapping() {
    let output = emit("functio f(numerus n, textus s, bivalens b) -> vacuum {}");
    assert!(output.contains("n: i64"));
    assert!(output.contains("s: []const u8"));
    assert!(output.contains("b: bool"));
    // Width parameters pick the sized integer.
    assert!(emit("functio g(numerus<32> n) -> vacuum {}").contains("n: i32"));
}

#[test]
fn test_word_operators() {
    let output = emit("fixum bene = a et b aut c");
    assert!(output.contains("a and b or c"), "got: {output}");
    assert!(emit("fixum valor = a vel b").contains("a orelse b"));
}

#[test]
fn test_ternary_is_if_else() {
    assert!(emit("fixum x = paratus sic 1 secus 0").contains("if (paratus) 1 else 0"));
}

#[test]
fn test_elige_switch() {
    let output = emit(
        r#"
elige status {
    casus 1 { scribe "unus" }
    aliter { scribe "alius" }
}
"#,
    );
    assert!(output.contains("switch (status) {"));
    assert!(output.contains("1 => {"));
    assert!(output.contains("else => {"));
}

#[test]
fn test_discerne_switch_with_payload() {
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
    assert!(output.contains("const forma = union(enum) {"));
    assert!(output.contains("circulus: struct { radius: i64 },"));
    assert!(output.contains("punctum: void,"));
    assert!(output.contains(".circulus => |_payload| {"));
    assert!(output.contains("const r = _payload.radius;"));
}

#[test]
fn test_cura_defers_deinit() {
    let output = emit("cura aperi(via) ut plica { lege(plica) }");
    assert!(output.contains("const plica = aperi(via);"));
    assert!(output.contains("defer plica.deinit();"));
}

#[test]
fn test_demum_becomes_defer() {
    let output = emit("tempta { pericula() } demum { claude() }");
    assert!(output.contains("defer {"), "got: {output}");
    assert!(output.contains("claude();"));
}

#[test]
fn test_assert_lowering() {
    assert!(emit("adfirma summa > 0").contains("std.debug.assert(summa > 0);"));
    assert!(emit("adfirma summa > 0, \"deficit\"").contains("if (!(summa > 0)) @panic(\"deficit\");"));
}

#[test]
fn test_throw_forms() {
    assert!(emit("functio f() -> vacuum { iace \"erratum\" }").contains("return error.Raised;"));
    assert!(emit("mori \"fatalis\"").contains("std.debug.panic(\"{any}\", .{\"fatalis\"});"));
}

#[test]
fn test_test_suites_flatten() {
    let output = emit(
        r#"
probatio "persona" {
    cura ante { para() }
    proba "habet nomen" { adfirma verum }
    cura post { purga() }
}
"#,
    );
    assert!(output.contains("test \"persona: habet nomen\" {"), "got: {output}");
    // Hook bodies inline around the case body.
    let test_start = output.find("test \"persona").unwrap();
    let para = output[test_start..].find("para();").unwrap();
    let assert_pos = output[test_start..].find("std.debug.assert(true);").unwrap();
    let purga = output[test_start..].find("purga();").unwrap();
    assert!(para < assert_pos && assert_pos < purga);
}

#[test]
fn test_type_alias_is_const() {
    assert!(emit("typus Nomen = textus").contains("const Nomen = []const u8;"));
}

#[test]
fn test_ordo_forms() {
    let ints = emit("ordo gradus {\n    primus = 1,\n    secundus\n}");
    assert!(ints.contains("const gradus = enum(i64) {"));
    assert!(ints.contains("primus = 1,"));

    let strings = emit("ordo color {\n    ruber = \"red\"\n}");
    assert!(strings.contains("const color = struct {"));
    assert!(strings.contains("pub const ruber = \"red\";"));
}

#[test]
fn test_non_null_assert_unwraps() {
    assert!(emit("fixum n = persona!").contains("persona.?"));
    assert!(emit("fixum n = persona?.nomen").contains("persona.?.nomen"));
}

#[test]
fn test_cast_uses_as_builtin() {
    assert!(emit("fixum n = valor qua numerus").contains("@as(i64, valor)"));
}

#[test]
fn test_reserved_word_rename() {
    let output = emit("functio proba_erroris(numerus error) -> numerus { redde error }");
    assert!(output.contains("error_: i64"), "got: {output}");
}
