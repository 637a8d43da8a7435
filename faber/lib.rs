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

//! The Faber Romanus compiler: Latin-keyword source in, TypeScript, Zig,
//! or Python out.
//!
//! The pipeline is linear (text, tokens, AST, emitted text) and every
//! stage returns its value together with its diagnostics. Stages operate
//! best-effort on partial inputs; no stage panics and no diagnostic is
//! lost.
//!
//! ```
//! use faber_lang::{compile, GeneratorOptions, Target};
//!
//! let (output, errors) = compile("fixum PI = 3.14159", &GeneratorOptions { target: Target::TypeScript });
//! assert!(errors.is_empty());
//! assert_eq!(output.unwrap(), "const PI = 3.14159;\n");
//! ```

#![forbid(unsafe_code)]

pub use faber_ast as ast;
pub use faber_errors as errors;
pub use faber_parser as parser;
pub use faber_passes as passes;
pub use faber_span as span;

pub use faber_ast::Program;
pub use faber_errors::FaberError;
pub use faber_parser::{SpannedToken, Token};
pub use faber_passes::{generate, AnalyzerContext, GeneratorOptions, Target};

use faber_errors::emitter::Handler;

/// Tokenizes `source`. Total: every input yields a token list ending in
/// an end-of-input token, plus the `L###` diagnostics encountered.
pub fn tokenize(source: &str) -> (Vec<SpannedToken>, Vec<FaberError>) {
    let handler = Handler::new();
    let tokens = faber_parser::tokenize(&handler, source);
    (tokens, handler.extract_errs())
}

/// Parses `tokens` into a [`Program`]. Best-effort: `None` only when no
/// structure was recoverable; the `P###` diagnostics come back either way.
pub fn parse(tokens: Vec<SpannedToken>) -> (Option<Program>, Vec<FaberError>) {
    let handler = Handler::new();
    let program = faber_parser::parse(&handler, tokens);
    (program, handler.extract_errs())
}

/// Runs the semantic annotator over `program` in place, returning the
/// `S###` diagnostics.
pub fn analyze(program: &mut Program, ctx: &AnalyzerContext) -> Vec<FaberError> {
    let handler = Handler::new();
    faber_passes::annotate(program, ctx, &handler);
    handler.extract_errs()
}

/// Runs the whole pipeline. Later stages proceed whenever the earlier
/// stage produced a value, regardless of diagnostics.
pub fn compile(source: &str, opts: &GeneratorOptions) -> (Option<String>, Vec<FaberError>) {
    let (tokens, mut errors) = tokenize(source);

    let (program, parse_errors) = parse(tokens);
    errors.extend(parse_errors);
    let Some(mut program) = program else {
        return (None, errors);
    };

    errors.extend(analyze(&mut program, &AnalyzerContext::default()));

    (Some(generate(&program, opts)), errors)
}
