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

/// Which declaration keyword introduced a binding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableKind {
    /// `varia`: mutable.
    Varia,
    /// `fixum`: immutable.
    Fixum,
    /// `figendum`: immutable, initializer awaited.
    Figendum,
    /// `variandum`: mutable, initializer awaited.
    Variandum,
}

impl VariableKind {
    /// Returns true if the binding may be reassigned.
    pub fn is_mutable(&self) -> bool {
        matches!(self, Self::Varia | Self::Variandum)
    }

    /// Returns true if the initializer is implicitly awaited.
    pub fn is_awaited(&self) -> bool {
        matches!(self, Self::Figendum | Self::Variandum)
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Varia => "varia",
            Self::Fixum => "fixum",
            Self::Figendum => "figendum",
            Self::Variandum => "variandum",
        })
    }
}

/// A variable declaration, e.g. `fixum textus nomen = "anon"` or
/// `fixum { nomen ut localis } = persona`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// The declaration keyword.
    pub kind: VariableKind,
    /// The declared type, when written type-first.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub type_annotation: Option<TypeAnnotation>,
    /// The bound name or destructuring pattern.
    pub pattern: Pattern,
    /// The initializer, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub initializer: Option<Expression>,
    pub span: Span,
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(annotation) = &self.type_annotation {
            write!(f, " {annotation}")?;
        }
        write!(f, " {}", self.pattern)?;
        if let Some(initializer) = &self.initializer {
            write!(f, " = {initializer}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(VariableDeclaration);
