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

//! The builtin type table.
//!
//! Builtin type names are not keywords: they are ordinary identifiers the
//! parser recognizes without context. Each name is generated from its
//! `(stem, declension, gender)` row by forming the nominative singular.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

/// The grammatical gender of a builtin type name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// The Latin declension a builtin type name follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Declension {
    /// Nominative adds `-a` (lista, mappa).
    First,
    /// Nominative adds `-us` (numerus).
    SecondMasculine,
    /// Nominative adds `-um` (vacuum, obiectum).
    SecondNeuter,
    /// The stem is the nominative; the table may override (fractio).
    Third,
    /// Nominative adds `-us` (textus).
    Fourth,
    /// Nominative adds `-es` (res).
    Fifth,
}

/// One row of the builtin type table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuiltinType {
    /// The Latin stem.
    pub stem: &'static str,
    pub declension: Declension,
    pub gender: Gender,
    /// Overrides the generated nominative for irregular third-declension
    /// nouns.
    pub nominative_override: Option<&'static str>,
}

impl BuiltinType {
    const fn new(stem: &'static str, declension: Declension, gender: Gender) -> Self {
        Self { stem, declension, gender, nominative_override: None }
    }

    const fn irregular(stem: &'static str, gender: Gender, nominative: &'static str) -> Self {
        Self { stem, declension: Declension::Third, gender, nominative_override: Some(nominative) }
    }

    /// The nominative singular, i.e. the name the parser recognizes.
    pub fn nominative(&self) -> String {
        if let Some(nominative) = self.nominative_override {
            return nominative.to_string();
        }
        match self.declension {
            Declension::First => format!("{}a", self.stem),
            Declension::SecondMasculine => format!("{}us", self.stem),
            Declension::SecondNeuter => format!("{}um", self.stem),
            Declension::Third => self.stem.to_string(),
            Declension::Fourth => format!("{}us", self.stem),
            Declension::Fifth => format!("{}es", self.stem),
        }
    }
}

/// The builtin type table, in lexicon order.
pub const BUILTIN_TYPES: &[BuiltinType] = &[
    // textus: string
    BuiltinType::new("text", Declension::Fourth, Gender::Masculine),
    // numerus: integer number
    BuiltinType::new("numer", Declension::SecondMasculine, Gender::Masculine),
    // fractio: fractional number
    BuiltinType::irregular("fraction", Gender::Feminine, "fractio"),
    // bivalens: boolean
    BuiltinType::new("bivalens", Declension::Third, Gender::Masculine),
    // ingens: bigint
    BuiltinType::new("ingens", Declension::Third, Gender::Neuter),
    // lista: array
    BuiltinType::new("list", Declension::First, Gender::Feminine),
    // mappa: keyed map
    BuiltinType::new("mapp", Declension::First, Gender::Feminine),
    // copia: set
    BuiltinType::new("copi", Declension::First, Gender::Feminine),
    // vacuum: void
    BuiltinType::new("vacu", Declension::SecondNeuter, Gender::Neuter),
    // obiectum: plain object
    BuiltinType::new("obiect", Declension::SecondNeuter, Gender::Neuter),
    // promissum: promise/future
    BuiltinType::new("promiss", Declension::SecondNeuter, Gender::Neuter),
    // erratum: error
    BuiltinType::new("errat", Declension::SecondNeuter, Gender::Neuter),
    // tempus: point in time
    BuiltinType::irregular("tempor", Gender::Neuter, "tempus"),
    // res: anything
    BuiltinType::new("r", Declension::Fifth, Gender::Feminine),
];

/// Nominative-to-row table, built once.
static BUILTIN_TYPE_NAMES: Lazy<IndexMap<String, &'static BuiltinType>> =
    Lazy::new(|| BUILTIN_TYPES.iter().map(|t| (t.nominative(), t)).collect());

/// Returns true if `name` is a builtin type name.
pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPE_NAMES.contains_key(name)
}

/// Looks up the builtin type row for `name`.
pub fn builtin_type(name: &str) -> Option<&'static BuiltinType> {
    BUILTIN_TYPE_NAMES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declension_generation() {
        assert!(is_builtin_type("textus"));
        assert!(is_builtin_type("numerus"));
        assert!(is_builtin_type("lista"));
        assert!(is_builtin_type("mappa"));
        assert!(is_builtin_type("vacuum"));
        assert!(is_builtin_type("res"));
        assert!(!is_builtin_type("text"));
        assert!(!is_builtin_type("persona"));
    }

    #[test]
    fn test_irregular_nominatives() {
        assert!(is_builtin_type("fractio"));
        assert!(is_builtin_type("tempus"));
        assert!(is_builtin_type("bivalens"));
        assert!(!is_builtin_type("fraction"));
        assert!(!is_builtin_type("tempor"));
    }

    #[test]
    fn test_names_are_unique() {
        assert_eq!(BUILTIN_TYPE_NAMES.len(), BUILTIN_TYPES.len());
    }
}
