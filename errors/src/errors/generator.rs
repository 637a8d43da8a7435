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
    /// GeneratorError enum that represents all code generation errors.
    ///
    /// Generation itself is best-effort and emits placeholders instead of
    /// failing; this family exists for tooling that wants to surface those
    /// placeholders as diagnostics.
    GeneratorError,
    code_mask: 0u32,
    code_prefix: "G",

    /// G001
    @formatted
    unexpected_node_shape {
        args: (context: impl Display),
        msg: format!("Unexpected node shape while generating {context}; a placeholder was emitted."),
        help: None,
    }
);
