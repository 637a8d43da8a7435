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

/// How a range was written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeKind {
    /// `a..b`
    DotDot,
    /// `a ante b`: stops before `b`.
    Ante,
    /// `a usque b`: includes `b`.
    Usque,
}

impl RangeKind {
    /// Returns true when a counting loop over this range includes the upper
    /// bound. `ante` is the only exclusive form.
    pub fn includes_end(&self) -> bool {
        !matches!(self, Self::Ante)
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DotDot => "..",
            Self::Ante => "ante",
            Self::Usque => "usque",
        })
    }
}

/// A range, e.g. `0..10 per 2` or `1 usque centum`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeExpression {
    /// The lower bound.
    pub start: Box<Expression>,
    /// The upper bound.
    pub end: Box<Expression>,
    /// Which surface form was written.
    pub kind: RangeKind,
    /// The optional `per` step.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub step: Option<Box<Expression>>,
    pub span: Span,
}

impl fmt::Display for RangeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RangeKind::DotDot => write!(f, "{}..{}", self.start, self.end)?,
            kind => write!(f, "{} {kind} {}", self.start, self.end)?,
        }
        if let Some(step) = &self.step {
            write!(f, " per {step}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(RangeExpression);
