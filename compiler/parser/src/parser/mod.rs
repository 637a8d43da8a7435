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

//! The recursive-descent parser: tokens in, a [`Program`] out.
//!
//! Single-token lookahead, non-crashing recovery. Recoverable problems are
//! emitted to the [`Handler`] and parsing continues; a parse function that
//! cannot make sense of its input returns an error which the statement loop
//! records before synchronizing to the next plausible statement start.

// Shared by the submodules through `use super::*`.
pub(crate) use crate::lexicon::Keyword;
pub(crate) use crate::tokenizer::{SpannedToken, Token};

pub(crate) use faber_ast::*;
pub(crate) use faber_errors::emitter::Handler;
pub(crate) use faber_errors::{ParserError, Result};
pub(crate) use faber_span::Span;

mod context;
pub use context::*;

mod declaration;
mod expression;
mod statement;
mod type_;

/// Parses the given tokens into a [`Program`].
///
/// Best-effort: recoverable diagnostics land in `handler` and a partial
/// tree is still produced. `None` is reserved for inputs with no
/// recoverable structure at all.
pub fn parse(handler: &Handler, tokens: Vec<SpannedToken>) -> Option<Program> {
    let mut context = ParserContext::new(handler, tokens);
    let program = context.parse_program();
    tracing::debug!(
        statements = program.statements.len(),
        errors = handler.err_count(),
        "parsed program"
    );
    Some(program)
}

impl ParserContext<'_> {
    /// Parses the whole token stream, recovering at statement granularity.
    ///
    /// After any recorded error the cursor has strictly advanced, so this
    /// loop terminates on every input.
    fn parse_program(&mut self) -> Program {
        let start = self.token.span;
        let mut statements = Vec::new();

        while self.has_next() {
            if self.eat(&Token::Semicolon) {
                continue;
            }
            match self.parse_statement() {
                Ok(statement) => {
                    statements.push(statement);
                    self.eat(&Token::Semicolon);
                }
                Err(err) => {
                    self.emit_err(err);
                    self.synchronize();
                }
            }
        }

        let span = if statements.is_empty() { Span::dummy() } else { start + self.prev_token.span };
        Program { statements, span }
    }
}
