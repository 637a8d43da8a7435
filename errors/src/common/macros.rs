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

/// Declares a diagnostic family.
///
/// Each `@formatted` entry becomes a constructor on the family enum taking
/// the listed arguments plus a `Span`. Codes are assigned sequentially in
/// declaration order starting at `code_mask + 1` and rendered as
/// `{code_prefix}{number:03}`, so the catalog is append-only: never reorder
/// or remove entries, only add at the end.
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        $(
            $(#[$docs:meta])*
            @formatted $names:ident {
                args: ($($arg_names:ident: $arg_types:ty),*$(,)?),
                msg: $messages:expr,
                help: $helps:expr,
            }
        )*
    ) => {
        $(#[$error_type_docs])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum $type_ {
            /// A diagnostic with a code, message, optional help, and span.
            Formatted($crate::common::Formatted),
        }

        impl std::error::Error for $type_ {}

        impl std::fmt::Display for $type_ {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let Self::Formatted(formatted) = self;
                std::fmt::Display::fmt(formatted, f)
            }
        }

        impl $crate::common::MessageCode for $type_ {
            fn error_code(&self) -> String {
                let Self::Formatted(formatted) = self;
                formatted.code.clone()
            }

            fn message(&self) -> String {
                let Self::Formatted(formatted) = self;
                formatted.message.clone()
            }

            fn help(&self) -> Option<String> {
                let Self::Formatted(formatted) = self;
                formatted.help.clone()
            }

            fn span(&self) -> faber_span::Span {
                let Self::Formatted(formatted) = self;
                formatted.span
            }
        }

        impl $type_ {
            create_messages!(
                @step $code_mask + 1u32, $code_prefix;
                $(($(#[$docs])* $names($($arg_names: $arg_types,)*), $messages, $helps),)*
            );
        }
    };

    // Base case: all entries emitted; record how many codes are taken.
    (@step $code:expr, $code_prefix:expr;) => {
        /// One past the last code assigned in this family.
        #[inline(always)]
        pub fn next_code() -> u32 {
            $code
        }
    };

    // Emit one constructor, then recurse with the next code.
    (
        @step $code:expr, $code_prefix:expr;
        ($(#[$docs:meta])* $name:ident($($arg_names:ident: $arg_types:ty,)*), $message:expr, $help:expr),
        $(($(#[$tail_docs:meta])* $tail_names:ident($($tail_arg_names:ident: $tail_arg_types:ty,)*), $tail_messages:expr, $tail_helps:expr),)*
    ) => {
        $(#[$docs])*
        pub fn $name($($arg_names: $arg_types,)* span: faber_span::Span) -> Self {
            Self::Formatted($crate::common::Formatted::new_from_span(
                $message,
                $help,
                $code,
                $code_prefix,
                span,
            ))
        }

        create_messages!(
            @step $code + 1u32, $code_prefix;
            $(($(#[$tail_docs])* $tail_names($($tail_arg_names: $tail_arg_types,)*), $tail_messages, $tail_helps),)*
        );
    };
}
