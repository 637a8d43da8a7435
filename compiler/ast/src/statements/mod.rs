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

use crate::{Declaration, Expression, Identifier};

use faber_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod assert;
pub use assert::*;

pub mod assign;
pub use assign::*;

pub mod block;
pub use block::*;

pub mod conditional;
pub use conditional::*;

pub mod console;
pub use console::*;

pub mod cura;
pub use cura::*;

pub mod custodi;
pub use custodi::*;

pub mod discerne;
pub use discerne::*;

pub mod dispatch;
pub use dispatch::*;

pub mod elige;
pub use elige::*;

pub mod expression;
pub use expression::*;

pub mod iteration;
pub use iteration::*;

pub mod jump;
pub use jump::*;

pub mod return_;
pub use return_::*;

pub mod test;
pub use test::*;

pub mod throw;
pub use throw::*;

pub mod try_;
pub use try_::*;

pub mod while_;
pub use while_::*;

/// Program statement that defines some action (or expression) to be carried
/// out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// An `adfirma` assertion.
    Assert(AssertStatement),
    /// An assignment, simple or compound.
    Assign(Box<AssignStatement>),
    /// An explicit `fac { ... }` block or a bare block.
    Block(Block),
    /// A `rumpe` statement.
    Break(BreakStatement),
    /// A `si`/`aliter` conditional, with an optional `cape` clause.
    Conditional(ConditionalStatement),
    /// A `scribe`/`vide`/`mone` console statement.
    Console(ConsoleStatement),
    /// A `perge` statement.
    Continue(ContinueStatement),
    /// A `cura` scoped-resource acquisition.
    Cura(CuraStatement),
    /// A `custodi` guard.
    Custodi(CustodiStatement),
    /// A declaration in statement position.
    Declaration(Declaration),
    /// A `discerne` switch over a tagged union.
    Discerne(DiscerneStatement),
    /// An `ad` dispatch.
    Dispatch(AdStatement),
    /// An `elige` switch over a value.
    Elige(EligeStatement),
    /// An expression in statement position.
    Expression(ExpressionStatement),
    /// An `ex`/`de`/`in` iteration.
    Iteration(Box<IterationStatement>),
    /// A `redde` return.
    Return(ReturnStatement),
    /// A `proba` test case.
    TestCase(ProbaStatement),
    /// A `cura ante` / `cura post` test hook.
    TestHook(TestHookStatement),
    /// A `probatio` test suite.
    TestSuite(ProbatioStatement),
    /// An `iace` or `mori` throw.
    Throw(ThrowStatement),
    /// A `tempta`/`cape`/`demum` statement.
    Try(TryStatement),
    /// A `dum` loop.
    While(WhileStatement),
}

impl Statement {
    /// Returns a dummy statement made from an empty block `{}`.
    pub fn dummy(span: Span) -> Self {
        Self::Block(Block { statements: Vec::new(), span })
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Assert(x) => x.span,
            Self::Assign(x) => x.span,
            Self::Block(x) => x.span,
            Self::Break(x) => x.span,
            Self::Conditional(x) => x.span,
            Self::Console(x) => x.span,
            Self::Continue(x) => x.span,
            Self::Cura(x) => x.span,
            Self::Custodi(x) => x.span,
            Self::Declaration(x) => x.span(),
            Self::Discerne(x) => x.span,
            Self::Dispatch(x) => x.span,
            Self::Elige(x) => x.span,
            Self::Expression(x) => x.span,
            Self::Iteration(x) => x.span,
            Self::Return(x) => x.span,
            Self::TestCase(x) => x.span,
            Self::TestHook(x) => x.span,
            Self::TestSuite(x) => x.span,
            Self::Throw(x) => x.span,
            Self::Try(x) => x.span,
            Self::While(x) => x.span,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Assert(x) => x.fmt(f),
            Self::Assign(x) => x.fmt(f),
            Self::Block(x) => x.fmt(f),
            Self::Break(x) => x.fmt(f),
            Self::Conditional(x) => x.fmt(f),
            Self::Console(x) => x.fmt(f),
            Self::Continue(x) => x.fmt(f),
            Self::Cura(x) => x.fmt(f),
            Self::Custodi(x) => x.fmt(f),
            Self::Declaration(x) => x.fmt(f),
            Self::Discerne(x) => x.fmt(f),
            Self::Dispatch(x) => x.fmt(f),
            Self::Elige(x) => x.fmt(f),
            Self::Expression(x) => x.fmt(f),
            Self::Iteration(x) => x.fmt(f),
            Self::Return(x) => x.fmt(f),
            Self::TestCase(x) => x.fmt(f),
            Self::TestHook(x) => x.fmt(f),
            Self::TestSuite(x) => x.fmt(f),
            Self::Throw(x) => x.fmt(f),
            Self::Try(x) => x.fmt(f),
            Self::While(x) => x.fmt(f),
        }
    }
}
