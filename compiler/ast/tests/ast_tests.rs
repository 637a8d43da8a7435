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
use faber_span::{Position, Span};

fn span(lo: u32, hi: u32) -> Span {
    Span::new(Position::new(1, lo + 1, lo), Position::new(1, hi + 1, hi))
}

fn ident(name: &str) -> Identifier {
    Identifier::new(name, span(0, name.len() as u32))
}

fn int(text: &str) -> Expression {
    Expression::Literal(LiteralExpression {
        value: LiteralValue::Integer(text.into()),
        span: span(0, text.len() as u32),
    })
}

#[test]
fn test_node_span_accessors() {
    let mut id = ident("nomen");
    assert_eq!(id.span(), span(0, 5));
    id.set_span(span(3, 8));
    assert_eq!(id.span(), span(3, 8));
}

#[test]
fn test_binary_display() {
    let expr = Expression::Binary(BinaryExpression {
        left: Box::new(int("1")),
        right: Box::new(int("2")),
        op: BinaryOperation::Add,
        string_operands: false,
        span: span(0, 5),
    });
    assert_eq!(expr.to_string(), "1 + 2");
}

#[test]
fn test_literal_display_uses_latin_keywords() {
    let cases = [
        (LiteralValue::Bool(true), "verum"),
        (LiteralValue::Bool(false), "falsum"),
        (LiteralValue::Nihil, "nihil"),
        (LiteralValue::BigInt("99".into()), "99n"),
    ];
    for (value, expected) in cases {
        let literal = LiteralExpression { value, span: span(0, 1) };
        assert_eq!(literal.to_string(), expected);
    }
}

#[test]
fn test_type_annotation_display() {
    let mut annotation = TypeAnnotation::plain(ident("lista"));
    annotation.type_parameters.push(TypeParameterArg::Type(TypeAnnotation::plain(ident("textus"))));
    annotation.nullable = true;
    assert_eq!(annotation.to_string(), "lista<textus>?");
}

#[test]
fn test_pattern_display() {
    let pattern = Pattern::Object(ObjectPattern {
        entries: vec![
            ObjectPatternEntry::Field { key: ident("nomen"), alias: Some(ident("localis")) },
            ObjectPatternEntry::Rest(ident("reliqua")),
        ],
        span: span(0, 10),
    });
    assert_eq!(pattern.to_string(), "{ nomen ut localis, ceteri reliqua }");
}

#[test]
fn test_statement_dummy_is_empty_block() {
    let dummy = Statement::dummy(span(0, 0));
    assert!(matches!(&dummy, Statement::Block(b) if b.statements.is_empty()));
}

#[test]
fn test_program_serde_round_trip() {
    let program = Program {
        statements: vec![Statement::Declaration(Declaration::Variable(VariableDeclaration {
            kind: VariableKind::Fixum,
            type_annotation: None,
            pattern: Pattern::Identifier(ident("PI")),
            initializer: Some(Expression::Literal(LiteralExpression {
                value: LiteralValue::Float("3.14159".into()),
                span: span(11, 18),
            })),
            span: span(0, 18),
        }))],
        span: span(0, 18),
    };

    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn test_annotation_fields_skip_when_unset() {
    // Unannotated identifiers serialize without the annotation noise.
    let json = serde_json::to_value(ident("nomen")).unwrap();
    assert!(json.get("sym_kind").is_none());

    let mut annotated = ident("nomen");
    annotated.sym_kind = Some(SymbolKind::Local);
    let json = serde_json::to_value(&annotated).unwrap();
    assert_eq!(json["sym_kind"], "Local");
}

#[test]
fn test_return_verb_semantics() {
    assert!(!ReturnVerb::Arrow.is_conjugated());
    assert!(ReturnVerb::Fit.is_conjugated());
    assert!(ReturnVerb::Fiet.is_async());
    assert!(!ReturnVerb::Fiet.is_generator());
    assert!(ReturnVerb::Fiunt.is_generator());
    assert!(!ReturnVerb::Fiunt.is_async());
    assert!(ReturnVerb::Fient.is_async() && ReturnVerb::Fient.is_generator());
}

#[test]
fn test_range_kind_inclusivity() {
    // Counting loops include the bound for `..` and `usque`; only `ante`
    // stays exclusive.
    assert!(RangeKind::DotDot.includes_end());
    assert!(RangeKind::Usque.includes_end());
    assert!(!RangeKind::Ante.includes_end());
}

#[test]
fn test_genus_accessors() {
    let field = GenusField {
        modifiers: MemberModifiers::default(),
        type_annotation: TypeAnnotation::plain(ident("textus")),
        name: ident("nomen"),
        default: None,
        span: span(0, 12),
    };
    let constructor = GenusMethod {
        modifiers: MemberModifiers::default(),
        function: Function {
            name: ident("creo"),
            type_parameters: vec![],
            parameters: vec![],
            variant: FunctionVariant::default(),
            return_verb: None,
            return_type: None,
            body: Block { statements: vec![], span: span(0, 2) },
            span: span(0, 20),
        },
        is_constructor: true,
        span: span(0, 20),
    };
    let genus = GenusDeclaration {
        name: ident("persona"),
        type_parameters: vec![],
        members: vec![GenusMember::Field(field), GenusMember::Method(constructor)],
        span: span(0, 40),
    };
    assert_eq!(genus.fields().count(), 1);
    assert_eq!(genus.methods().count(), 1);
    assert!(genus.constructor().is_some());
}
