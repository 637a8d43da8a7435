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

use faber_span::Span;

/// Implemented by every diagnostic family declared with `create_messages!`.
pub trait MessageCode {
    /// The rendered code, e.g. `P006`.
    fn error_code(&self) -> String;

    /// The human-readable message text.
    fn message(&self) -> String;

    /// The optional help text attached to the message.
    fn help(&self) -> Option<String>;

    /// The source region the diagnostic points at.
    fn span(&self) -> Span;
}
