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

//! Target-independent scaffolding: emitted-operator precedence, reserved
//! word renaming, format-string splitting, and the variant table used to
//! lower `discerne` positionally.

use faber_ast::*;

use indexmap::IndexMap;

/// Precedence of an operator in the emitted C-family surface, used to
/// decide parenthesization. Higher binds tighter.
///
/// This is the precedence of the TARGET languages, not of Faber: Faber
/// binds bitwise operators tighter than comparisons, so a tree like
/// `(a & b) < c` emits with explicit parentheses where the target would
/// otherwise re-associate it.
pub fn emitted_precedence(op: BinaryOperation) -> u8 {
    match op {
        BinaryOperation::Nullish => 1,
        BinaryOperation::Or => 2,
        BinaryOperation::And => 3,
        BinaryOperation::BitwiseOr => 4,
        BinaryOperation::Xor => 5,
        BinaryOperation::BitwiseAnd => 6,
        BinaryOperation::Eq
        | BinaryOperation::Neq
        | BinaryOperation::StrictEq
        | BinaryOperation::StrictNeq => 7,
        BinaryOperation::Lt | BinaryOperation::Le | BinaryOperation::Gt | BinaryOperation::Ge => 8,
        BinaryOperation::Shl | BinaryOperation::Shr => 9,
        BinaryOperation::Add | BinaryOperation::Sub => 10,
        BinaryOperation::Mul | BinaryOperation::Div | BinaryOperation::Rem => 11,
    }
}

/// Wraps `text` in parentheses when the child expression binds looser than
/// the surrounding operator. `is_right` operands also wrap at equal
/// precedence, preserving associativity.
pub fn wrap_operand(text: String, child: &Expression, parent: BinaryOperation, is_right: bool) -> String {
    let needs_parens = match child {
        Expression::Binary(inner) => {
            let child_prec = emitted_precedence(inner.op);
            let parent_prec = emitted_precedence(parent);
            // `??` refuses to associate with `&&`/`||` unparenthesized in
            // the targets, whatever the precedence table says.
            let nullish_mix = parent == BinaryOperation::Nullish
                && matches!(inner.op, BinaryOperation::And | BinaryOperation::Or);
            nullish_mix || child_prec < parent_prec || (is_right && child_prec == parent_prec)
        }
        Expression::Ternary(_) | Expression::Range(_) | Expression::Lambda(_) | Expression::Arrow(_) => true,
        _ => false,
    };
    if needs_parens {
        format!("({text})")
    } else {
        text
    }
}

/// Renames `name` with the pinned `_` suffix when it collides with a
/// reserved word of the target.
pub fn rename_reserved(name: &str, reserved: &[&str]) -> String {
    if reserved.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Splits a `scriptum` format string on its `{}` placeholders. The result
/// has one more text piece than there are placeholders.
pub fn split_format(format: &str) -> Vec<&str> {
    format.split("{}").collect()
}

/// Maps `discretio` variant names to their field names, collected from the
/// program so `discerne` bindings can be matched positionally.
pub fn collect_variant_fields(program: &Program) -> IndexMap<String, Vec<String>> {
    let mut variants = IndexMap::new();
    for statement in &program.statements {
        if let Statement::Declaration(Declaration::Discretio(discretio)) = statement {
            for variant in &discretio.variants {
                variants.insert(
                    variant.name.name.clone(),
                    variant.fields.iter().map(|f| f.name.name.clone()).collect(),
                );
            }
        }
    }
    variants
}

/// Structural test for operands that are strings at the target level,
/// combining literal shape with the annotator's `string_operands` hint.
pub fn binary_involves_strings(binary: &BinaryExpression) -> bool {
    binary.string_operands
        || expression_is_string_literal(&binary.left)
        || expression_is_string_literal(&binary.right)
}

fn expression_is_string_literal(expression: &Expression) -> bool {
    match expression {
        Expression::Literal(literal) => {
            matches!(literal.value, LiteralValue::String(_) | LiteralValue::Template(_))
        }
        Expression::Format(_) => true,
        _ => false,
    }
}

/// Escapes a string for embedding in a double-quoted literal shared by all
/// three targets.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_format() {
        assert_eq!(split_format("salve, {}!"), vec!["salve, ", "!"]);
        assert_eq!(split_format("{}{}"), vec!["", "", ""]);
        assert_eq!(split_format("nullum"), vec!["nullum"]);
    }

    #[test]
    fn test_rename_reserved() {
        assert_eq!(rename_reserved("class", &["class", "new"]), "class_");
        assert_eq!(rename_reserved("nomen", &["class", "new"]), "nomen");
    }

    #[test]
    fn test_target_precedence_is_c_family() {
        // The table mirrors the targets, where comparison binds tighter
        // than bitwise; Faber's opposite choice is preserved by wrapping.
        assert!(emitted_precedence(BinaryOperation::Lt) > emitted_precedence(BinaryOperation::BitwiseAnd));
        assert!(emitted_precedence(BinaryOperation::Lt) > emitted_precedence(BinaryOperation::Eq));
        assert!(emitted_precedence(BinaryOperation::Shl) > emitted_precedence(BinaryOperation::Lt));
    }

    #[test]
    fn test_wrap_preserves_source_grouping() {
        let span = faber_span::Span::dummy();
        let num = |text: &str| {
            Expression::Literal(LiteralExpression {
                value: LiteralValue::Integer(text.into()),
                span,
            })
        };
        // Source `a & b < c` groups as `(a & b) < c`; the emitted text must
        // keep the parentheses because the targets bind `<` tighter.
        let band = Expression::Binary(BinaryExpression {
            left: Box::new(num("1")),
            right: Box::new(num("2")),
            op: BinaryOperation::BitwiseAnd,
            string_operands: false,
            span,
        });
        let wrapped = wrap_operand("1 & 2".into(), &band, BinaryOperation::Lt, false);
        assert_eq!(wrapped, "(1 & 2)");
    }
}
