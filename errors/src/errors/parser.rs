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

use crate::create_messages;
use std::fmt::{Debug, Display};

create_messages!(
    /// ParserError enum that represents all parser errors.
    ParserError,
    code_mask: 0u32,
    code_prefix: "P",

    /// P001
    @formatted
    expected_token {
        args: (expected: impl Display, found: impl Display),
        msg: format!("Expected `{expected}`, found `{found}`."),
        help: None,
    }

    /// P002
    @formatted
    expected_keyword {
        args: (expected: impl Display, found: impl Display),
        msg: format!("Expected keyword `{expected}`, found `{found}`."),
        help: None,
    }

    /// P003
    @formatted
    unexpected_statement_start {
        args: (found: impl Display),
        msg: format!("`{found}` cannot begin a statement."),
        help: Some("Statements begin with a declaration keyword, a control-flow keyword, or an expression.".to_string()),
    }

    /// P004
    @formatted
    invalid_assignment_target {
        args: (),
        msg: "Invalid assignment target.".to_string(),
        help: Some("Only a name, a member access, or an index access can be assigned to.".to_string()),
    }

    /// P005
    @formatted
    missing_declaration_name {
        args: (keyword: impl Display),
        msg: format!("Missing name in `{keyword}` declaration."),
        help: None,
    }

    /// P006
    @formatted
    prefix_verb_conflict {
        args: (prefix: impl Display, verb: impl Display),
        msg: format!("The prefix `{prefix}` conflicts with the return verb `{verb}`."),
        help: Some("The verbs `fit`, `fiet`, `fiunt`, and `fient` already encode sync/async; use them with `->` removed, or drop the prefix.".to_string()),
    }

    /// P007
    @formatted
    mixed_nullish_logical {
        args: (),
        msg: "`vel` cannot be mixed with `aut` or `||` without parentheses.".to_string(),
        help: Some("Group either operand explicitly, e.g. `(a aut b) vel c`.".to_string()),
    }

    /// P008
    @formatted
    duplicate_generic_parameter {
        args: (name: impl Display),
        msg: format!("Duplicate generic parameter `{name}`."),
        help: None,
    }

    /// P009
    @formatted
    empty_generic_parameters {
        args: (),
        msg: "Generic parameter list cannot be empty.".to_string(),
        help: None,
    }

    /// P010
    @formatted
    spread_in_pattern {
        args: (),
        msg: "`...` is not valid in a destructuring pattern.".to_string(),
        help: Some("Use `ceteri <name>` to collect the remaining entries.".to_string()),
    }

    /// P011
    @formatted
    invalid_pattern_element {
        args: (found: impl Display),
        msg: format!("`{found}` is not valid inside a destructuring pattern."),
        help: Some("Patterns may contain names, `ut` renames, `ceteri` rests, and `_` skips.".to_string()),
    }

    /// P012
    @formatted
    expected_genus_member {
        args: (found: impl Display),
        msg: format!("Expected a field or method, found `{found}`."),
        help: None,
    }

    /// P013
    @formatted
    late_type_parameter {
        args: (),
        msg: "`prae typus` parameters must come before regular parameters.".to_string(),
        help: None,
    }

    /// P014
    @formatted
    expected_iteration_verb {
        args: (found: impl Display),
        msg: format!("Expected an iteration verb (`pro`, `fit`, or `fiet`), found `{found}`."),
        help: None,
    }

    /// P015
    @formatted
    unexpected_expression_start {
        args: (found: impl Display),
        msg: format!("`{found}` cannot begin an expression."),
        help: None,
    }

    /// P016
    @formatted
    variant_binding_not_identifier {
        args: (found: impl Display),
        msg: format!("Variant pattern bindings must be plain names, found `{found}`."),
        help: None,
    }

    /// P017
    @formatted
    expected_type_name {
        args: (found: impl Display),
        msg: format!("Expected a type name, found `{found}`."),
        help: None,
    }

    /// P018
    @formatted
    unterminated_interpolation {
        args: (),
        msg: "Unterminated interpolation in template string.".to_string(),
        help: None,
    }

    /// P019
    @formatted
    discerne_case_without_variant {
        args: (),
        msg: "`discerne` cases must name a variant.".to_string(),
        help: Some("Write `casus <Variant>(bindings) { ... }` or `aliter { ... }`.".to_string()),
    }

    /// P020
    @formatted
    invalid_enum_value {
        args: (found: impl Display),
        msg: format!("`ordo` members may only take integer or string values, found `{found}`."),
        help: None,
    }
);
