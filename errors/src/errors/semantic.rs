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
    /// SemanticError enum that represents all annotator errors.
    SemanticError,
    code_mask: 0u32,
    code_prefix: "S",

    /// S001
    @formatted
    unknown_identifier {
        args: (name: impl Display),
        msg: format!("Unknown identifier `{name}`."),
        help: None,
    }

    /// S002
    @formatted
    reassignment_of_immutable {
        args: (name: impl Display),
        msg: format!("Cannot reassign `{name}`: it was declared immutable."),
        help: Some("Declare the binding with `varia` (or `variandum`) to allow reassignment.".to_string()),
    }

    /// S003
    @formatted
    unresolved_type_name {
        args: (name: impl Display),
        msg: format!("Unresolved type name `{name}`."),
        help: None,
    }

    /// S004
    @formatted
    duplicate_definition {
        args: (name: impl Display),
        msg: format!("`{name}` is defined more than once in this scope."),
        help: None,
    }
);
