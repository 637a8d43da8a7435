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

/// The verb (or arrow) introducing a function's return type.
///
/// The four verbs conjugate sync/async with singular/plural; the arrow is
/// neutral and combines with the `futura`/`cursor` prefixes instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnVerb {
    /// `-> T`: neutral.
    Arrow,
    /// `fit T`: synchronous, single value.
    Fit,
    /// `fiet T`: asynchronous, single value.
    Fiet,
    /// `fiunt T`: synchronous, generated values.
    Fiunt,
    /// `fient T`: asynchronous, generated values.
    Fient,
}

impl ReturnVerb {
    /// Returns true for the verbs that fix sync/async themselves.
    pub fn is_conjugated(&self) -> bool {
        !matches!(self, Self::Arrow)
    }

    /// The asyncness the verb encodes, if it encodes one.
    pub fn is_async(&self) -> bool {
        matches!(self, Self::Fiet | Self::Fient)
    }

    /// The generatorness the verb encodes, if it encodes one.
    pub fn is_generator(&self) -> bool {
        matches!(self, Self::Fiunt | Self::Fient)
    }
}

impl fmt::Display for ReturnVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Arrow => "->",
            Self::Fit => "fit",
            Self::Fiet => "fiet",
            Self::Fiunt => "fiunt",
            Self::Fient => "fient",
        })
    }
}

/// The resolved async/generator nature of a function.
///
/// Derived jointly from the optional `futura`/`cursor` prefix and the
/// return verb; a conflict between the two is a parse diagnostic, never a
/// silent merge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionVariant {
    /// True for `futura` functions and `fiet`/`fient` verbs.
    pub is_async: bool,
    /// True for `cursor` functions and `fiunt`/`fient` verbs.
    pub is_generator: bool,
}

/// One parameter of a function, method, or lambda.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The declared type, when written type-first.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub type_annotation: Option<TypeAnnotation>,
    /// The parameter name.
    pub name: Identifier,
    /// The default value, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Expression>,
    pub span: Span,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(annotation) = &self.type_annotation {
            write!(f, "{annotation} ")?;
        }
        self.name.fmt(f)?;
        if let Some(default) = &self.default {
            write!(f, ": {default}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(Parameter);

/// A function declaration, e.g.
/// `functio salve(textus nomen) fit textus { redde nomen }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// The function name.
    pub name: Identifier,
    /// Generic parameters declared with `prae typus T`; always before the
    /// regular parameters.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<Identifier>,
    /// The regular parameters.
    pub parameters: Vec<Parameter>,
    /// The resolved async/generator nature.
    pub variant: FunctionVariant,
    /// The verb or arrow before the return type, when one was written.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub return_verb: Option<ReturnVerb>,
    /// The declared return type, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub return_type: Option<TypeAnnotation>,
    /// The function body.
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variant.is_async && self.return_verb.map_or(true, |v| !v.is_conjugated()) {
            f.write_str("futura ")?;
        }
        if self.variant.is_generator && self.return_verb.map_or(true, |v| !v.is_conjugated()) {
            f.write_str("cursor ")?;
        }
        write!(f, "functio {}(", self.name)?;
        let type_params = self.type_parameters.iter().map(|t| format!("prae typus {t}"));
        let params = self.parameters.iter().map(|p| p.to_string());
        write!(f, "{}", type_params.chain(params).format(", "))?;
        f.write_str(")")?;
        if let Some(verb) = &self.return_verb {
            write!(f, " {verb}")?;
        }
        if let Some(return_type) = &self.return_type {
            write!(f, " {return_type}")?;
        }
        write!(f, " {}", self.body)
    }
}

crate::simple_node_impl!(Function);
