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

use super::*;

/// A test suite: `probatio "persona" { ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbatioStatement {
    /// The suite description.
    pub name: String,
    /// Cases, hooks, and supporting statements.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for ProbatioStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "probatio \"{}\" {}", self.name.escape_default(), self.body)
    }
}

crate::simple_node_impl!(ProbatioStatement);

/// A test case: `proba "computat summam" { ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbaStatement {
    /// The case description.
    pub name: String,
    /// The case body.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for ProbaStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proba \"{}\" {}", self.name.escape_default(), self.body)
    }
}

crate::simple_node_impl!(ProbaStatement);

/// When a test hook runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookKind {
    /// `cura ante { ... }`: before each case.
    Ante,
    /// `cura post { ... }`: after each case.
    Post,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ante => "ante",
            Self::Post => "post",
        })
    }
}

/// A test hook inside a `probatio` suite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestHookStatement {
    /// Whether the hook runs before or after each case.
    pub kind: HookKind,
    /// The hook body.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for TestHookStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cura {} {}", self.kind, self.body)
    }
}

crate::simple_node_impl!(TestHookStatement);
