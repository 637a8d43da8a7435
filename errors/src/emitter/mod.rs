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

use crate::FaberError;

use std::cell::RefCell;

/// Collects diagnostics side-channel while a stage runs.
///
/// Stages hold a `&Handler` and call [`Handler::emit_err`] for recoverable
/// problems; the buffer is append-only and extracted once the stage returns.
#[derive(Debug, Default)]
pub struct Handler {
    inner: RefCell<Vec<FaberError>>,
}

impl Handler {
    /// Returns a new, empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `err`. Diagnostics are never dropped or deduplicated.
    pub fn emit_err(&self, err: impl Into<FaberError>) {
        self.inner.borrow_mut().push(err.into());
    }

    /// The number of diagnostics recorded so far.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns true if at least one diagnostic was recorded.
    pub fn had_errors(&self) -> bool {
        self.err_count() > 0
    }

    /// Drains the recorded diagnostics, leaving the handler empty.
    pub fn extract_errs(&self) -> Vec<FaberError> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserError;

    use faber_span::Span;

    #[test]
    fn test_append_only_buffer() {
        let handler = Handler::new();
        assert!(!handler.had_errors());

        handler.emit_err(ParserError::invalid_assignment_target(Span::dummy()));
        handler.emit_err(ParserError::mixed_nullish_logical(Span::dummy()));
        assert_eq!(handler.err_count(), 2);

        let errs = handler.extract_errs();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].error_code(), "P004");
        assert_eq!(errs[1].error_code(), "P007");
        assert_eq!(handler.err_count(), 0);
    }
}
