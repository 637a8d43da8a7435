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

//! Code generation: lowers a [`Program`] to target-language text.
//!
//! Each target implements the [`Backend`] capability set; `generate`
//! dispatches to one backend value per target. Generation is pure and
//! total: malformed subtrees become placeholders, never panics.

pub mod common;

pub mod python;
pub use python::PythonBackend;

pub mod typescript;
pub use typescript::TypeScriptBackend;

pub mod zig;
pub use zig::ZigBackend;

use crate::Pass;

use faber_ast::Program;
use faber_errors::emitter::Handler;
use faber_errors::Result;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The emitted surface language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    TypeScript,
    Zig,
    Python,
}

impl Target {
    /// The file extension conventionally used for this target.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::Zig => "zig",
            Self::Python => "py",
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ts" | "typescript" => Ok(Self::TypeScript),
            "zig" => Ok(Self::Zig),
            "py" | "python" => Ok(Self::Python),
            other => Err(format!("unknown target `{other}`")),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Options for [`generate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub target: Target,
}

/// The capability set every target provides.
///
/// One value of this trait exists per target; the node visitors live on
/// the backend, not in a per-node target switch.
pub trait Backend {
    /// The target this backend emits.
    fn target(&self) -> Target;

    /// Lowers a whole program to target text.
    fn emit_program(&mut self, program: &Program) -> String;
}

/// Lowers `program` to the text of the requested target. Pure; no I/O.
pub fn generate(program: &Program, opts: &GeneratorOptions) -> String {
    let mut backend: Box<dyn Backend> = match opts.target {
        Target::TypeScript => Box::new(TypeScriptBackend::new(program)),
        Target::Zig => Box::new(ZigBackend::new(program)),
        Target::Python => Box::new(PythonBackend::new(program)),
    };
    let output = backend.emit_program(program);
    tracing::debug!(target = %opts.target, bytes = output.len(), "generated output");
    output
}

/// The code generation pass.
pub struct CodeGeneration;

impl Pass for CodeGeneration {
    type Input = (Program, GeneratorOptions);
    type Output = String;

    const NAME: &'static str = "CodeGeneration";

    fn do_pass((program, opts): Self::Input, _handler: &Handler) -> Result<Self::Output> {
        Ok(generate(&program, &opts))
    }
}
