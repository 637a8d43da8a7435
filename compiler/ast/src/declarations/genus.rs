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

use itertools::Itertools;

/// The modifier prefix of a `genus` member.
///
/// `publicus` is the default and recorded only for fidelity.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberModifiers {
    /// `publicus`: explicit public marker, a no-op.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub public: bool,
    /// `privatus`: hidden from outside the genus.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub private: bool,
    /// `generis`: belongs to the type, not the instance.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub static_: bool,
    /// `nexum`: a reactive field.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub reactive: bool,
}

impl fmt::Display for MemberModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.public {
            f.write_str("publicus ")?;
        }
        if self.private {
            f.write_str("privatus ")?;
        }
        if self.static_ {
            f.write_str("generis ")?;
        }
        if self.reactive {
            f.write_str("nexum ")?;
        }
        Ok(())
    }
}

/// A field of a `genus`, e.g. `textus nomen: "anon"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenusField {
    /// The member modifiers.
    #[serde(skip_serializing_if = "MemberModifiers::is_default", default)]
    pub modifiers: MemberModifiers,
    /// The field type.
    pub type_annotation: TypeAnnotation,
    /// The field name.
    pub name: Identifier,
    /// The default value after `:`, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Expression>,
    pub span: Span,
}

impl MemberModifiers {
    fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

impl fmt::Display for GenusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.modifiers, self.type_annotation, self.name)?;
        if let Some(default) = &self.default {
            write!(f, ": {default}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(GenusField);

/// A method of a `genus`; `creo` marks the constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenusMethod {
    /// The member modifiers.
    #[serde(skip_serializing_if = "MemberModifiers::is_default", default)]
    pub modifiers: MemberModifiers,
    /// The method itself.
    pub function: Function,
    /// True when the method was declared `functio creo(...)`.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub is_constructor: bool,
    pub span: Span,
}

impl fmt::Display for GenusMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifiers, self.function)
    }
}

crate::simple_node_impl!(GenusMethod);

/// One member of a `genus` body. Fields and methods may appear in any
/// order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GenusMember {
    Field(GenusField),
    Method(GenusMethod),
}

impl fmt::Display for GenusMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => field.fmt(f),
            Self::Method(method) => method.fmt(f),
        }
    }
}

/// A struct-like type declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenusDeclaration {
    /// The type name.
    pub name: Identifier,
    /// Generic parameters, if any.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<Identifier>,
    /// Fields and methods in source order.
    pub members: Vec<GenusMember>,
    pub span: Span,
}

impl GenusDeclaration {
    /// The declared fields, in source order.
    pub fn fields(&self) -> impl Iterator<Item = &GenusField> {
        self.members.iter().filter_map(|m| match m {
            GenusMember::Field(field) => Some(field),
            GenusMember::Method(_) => None,
        })
    }

    /// The declared methods, in source order.
    pub fn methods(&self) -> impl Iterator<Item = &GenusMethod> {
        self.members.iter().filter_map(|m| match m {
            GenusMember::Method(method) => Some(method),
            GenusMember::Field(_) => None,
        })
    }

    /// The `creo` constructor, if one was declared.
    pub fn constructor(&self) -> Option<&GenusMethod> {
        self.methods().find(|m| m.is_constructor)
    }
}

impl fmt::Display for GenusDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "genus {}", self.name)?;
        if !self.type_parameters.is_empty() {
            write!(f, "<{}>", self.type_parameters.iter().format(", "))?;
        }
        f.write_str(" {\n")?;
        for member in &self.members {
            writeln!(f, "{member}")?;
        }
        f.write_str("}")
    }
}

crate::simple_node_impl!(GenusDeclaration);
