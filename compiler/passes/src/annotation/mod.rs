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

//! The semantic annotator: a single walk over the AST that resolves
//! identifier kinds, flags obvious misuse, and decorates nodes with the
//! hints the code generators need (notably whether an equality involves
//! strings).

mod annotator;
pub use annotator::*;

use crate::Pass;

use faber_ast::Program;
use faber_errors::emitter::Handler;
use faber_errors::Result;

use serde::{Deserialize, Serialize};

/// Per-run context for the annotator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerContext {
    /// The path of the file being compiled; used only for reporting.
    pub file_path: String,
}

/// The annotation pass: decorates a parsed [`Program`] in place.
pub struct Annotation;

impl Pass for Annotation {
    type Input = (Program, AnalyzerContext);
    type Output = Program;

    const NAME: &'static str = "Annotation";

    fn do_pass((program, ctx): Self::Input, handler: &Handler) -> Result<Self::Output> {
        let mut program = program;
        annotate(&mut program, &ctx, handler);
        Ok(program)
    }
}

/// Walks `program` once, mutating it in place. Errors (`S###`) go to the
/// handler; the tree always remains usable by the generators.
pub fn annotate(program: &mut Program, ctx: &AnalyzerContext, handler: &Handler) {
    let mut annotator = Annotator::new(handler);
    annotator.annotate_program(program);
    tracing::debug!(
        file = %ctx.file_path,
        errors = handler.err_count(),
        "annotated program"
    );
}
