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

use crate::{Block, Parameter};

use itertools::Itertools;

/// The verb introducing a Latin lambda.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LambdaVerb {
    /// `pro x: ...`: a neutral synchronous lambda.
    Pro,
    /// `fit x: ...`: an explicitly synchronous lambda.
    Fit,
    /// `fiet x: ...`: an asynchronous lambda.
    Fiet,
}

impl LambdaVerb {
    /// Returns true if the verb marks the lambda asynchronous.
    pub fn is_async(&self) -> bool {
        matches!(self, Self::Fiet)
    }
}

impl fmt::Display for LambdaVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pro => "pro",
            Self::Fit => "fit",
            Self::Fiet => "fiet",
        })
    }
}

/// The body of a lambda or arrow function.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LambdaBody {
    /// A single result expression.
    Expression(Box<Expression>),
    /// A statement block.
    Block(Block),
}

impl fmt::Display for LambdaBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(e) => e.fmt(f),
            Self::Block(b) => b.fmt(f),
        }
    }
}

/// A Latin-verb lambda, e.g. `pro x: x * 2` or `fiet url: cede pete(url)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpression {
    /// The verb, fixing sync/async.
    pub verb: LambdaVerb,
    /// The parameters after the verb.
    pub parameters: Vec<Parameter>,
    /// The body after `:`, `redde`, or as a block.
    pub body: LambdaBody,
    pub span: Span,
}

impl fmt::Display for LambdaExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.verb, self.parameters.iter().format(", "), self.body)
    }
}

crate::simple_node_impl!(LambdaExpression);
