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
    /// LexError enum that represents all tokenizer errors.
    LexError,
    code_mask: 0u32,
    code_prefix: "L",

    /// L001
    @formatted
    unexpected_character {
        args: (character: impl Display),
        msg: format!("Unexpected character `{character}`."),
        help: None,
    }

    /// L002
    @formatted
    unterminated_string {
        args: (),
        msg: "Unterminated string literal.".to_string(),
        help: Some("Close the string with `\"` before the end of the line or file.".to_string()),
    }

    /// L003
    @formatted
    unterminated_template {
        args: (),
        msg: "Unterminated template string.".to_string(),
        help: Some("Close the template string with a backtick.".to_string()),
    }

    /// L004
    @formatted
    unterminated_block_comment {
        args: (),
        msg: "Block comment does not close before the end of the file.".to_string(),
        help: Some("Close the comment with `*/`. Block comments do not nest.".to_string()),
    }

    /// L005
    @formatted
    invalid_escape {
        args: (character: impl Display),
        msg: format!("Invalid escape sequence `\\{character}` in string literal."),
        help: Some("Valid escapes are `\\\\`, `\\\"`, `\\n`, `\\t`, `\\r`, and `\\0`.".to_string()),
    }
);
