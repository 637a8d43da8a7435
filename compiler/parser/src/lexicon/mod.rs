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

//! The static lexicon: keywords, builtin type names, and their categories.
//!
//! Everything here is immutable after program start and shared across
//! parses. Note that `post` is deliberately absent from the keyword table:
//! it reaches the parser as an identifier, and only the `cura` hook parser
//! reads it by lexeme.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

mod builtin;
pub use builtin::*;

/// The broad role a keyword plays in the grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordCategory {
    /// Opens a declaration (`varia`, `functio`, `genus`, ...).
    Declaration,
    /// Drives control flow (`si`, `dum`, `elige`, ...).
    ControlFlow,
    /// A word operator (`et`, `vel`, `qua`, ...).
    OperatorWord,
    /// A unary predicate (`nulla`, `negativum`, ...).
    Predicate,
    /// A member or function modifier (`privatus`, `futura`, ...).
    Modifier,
    /// A binding verb (`pro`, `fit`, `fiet`, `fiunt`, `fient`).
    Verb,
    /// A literal or reference (`verum`, `falsum`, `ego`).
    Literal,
    /// A console verb (`scribe`, `vide`, `mone`).
    Console,
    /// A pipeline transform (`prima`, `ultima`, `summa`).
    Transform,
    /// Test structure (`probatio`, `proba`).
    Test,
}

macro_rules! keywords {
    ($($variant:ident => ($lexeme:literal, $category:ident),)*) => {
        /// A reserved word of the Faber language.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Every keyword, in lexicon order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// The source lexeme of the keyword.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $lexeme,)*
                }
            }

            /// The grammatical category of the keyword.
            pub fn category(&self) -> KeywordCategory {
                match self {
                    $(Self::$variant => KeywordCategory::$category,)*
                }
            }
        }
    };
}

keywords! {
    // Declaration openers.
    Varia => ("varia", Declaration),
    Fixum => ("fixum", Declaration),
    Figendum => ("figendum", Declaration),
    Variandum => ("variandum", Declaration),
    Functio => ("functio", Declaration),
    Genus => ("genus", Declaration),
    Pactum => ("pactum", Declaration),
    Typus => ("typus", Declaration),
    Ordo => ("ordo", Declaration),
    Discretio => ("discretio", Declaration),
    Importa => ("importa", Declaration),

    // Control flow.
    Si => ("si", ControlFlow),
    Aliter => ("aliter", ControlFlow),
    Dum => ("dum", ControlFlow),
    Ex => ("ex", ControlFlow),
    De => ("de", ControlFlow),
    In => ("in", ControlFlow),
    Elige => ("elige", ControlFlow),
    Discerne => ("discerne", ControlFlow),
    Casus => ("casus", ControlFlow),
    Custodi => ("custodi", ControlFlow),
    Adfirma => ("adfirma", ControlFlow),
    Redde => ("redde", ControlFlow),
    Iace => ("iace", ControlFlow),
    Mori => ("mori", ControlFlow),
    Rumpe => ("rumpe", ControlFlow),
    Perge => ("perge", ControlFlow),
    Tempta => ("tempta", ControlFlow),
    Cape => ("cape", ControlFlow),
    Demum => ("demum", ControlFlow),
    Cura => ("cura", ControlFlow),
    Fac => ("fac", ControlFlow),
    Ergo => ("ergo", ControlFlow),
    Ad => ("ad", ControlFlow),

    // Word operators.
    Et => ("et", OperatorWord),
    Aut => ("aut", OperatorWord),
    Vel => ("vel", OperatorWord),
    Est => ("est", OperatorWord),
    Non => ("non", OperatorWord),
    Qua => ("qua", OperatorWord),
    Sic => ("sic", OperatorWord),
    Secus => ("secus", OperatorWord),
    Ante => ("ante", OperatorWord),
    Usque => ("usque", OperatorWord),
    Per => ("per", OperatorWord),
    Cede => ("cede", OperatorWord),
    Novum => ("novum", OperatorWord),
    Praefixum => ("praefixum", OperatorWord),
    Scriptum => ("scriptum", OperatorWord),
    Ut => ("ut", OperatorWord),
    Ceteri => ("ceteri", OperatorWord),
    Prae => ("prae", OperatorWord),

    // Predicates.
    Nulla => ("nulla", Predicate),
    Nonnulla => ("nonnulla", Predicate),
    Nihil => ("nihil", Predicate),
    Nonnihil => ("nonnihil", Predicate),
    Negativum => ("negativum", Predicate),
    Positivum => ("positivum", Predicate),

    // Modifiers.
    Publicus => ("publicus", Modifier),
    Privatus => ("privatus", Modifier),
    Generis => ("generis", Modifier),
    Nexum => ("nexum", Modifier),
    Futura => ("futura", Modifier),
    Cursor => ("cursor", Modifier),
    Creo => ("creo", Modifier),

    // Binding verbs.
    Pro => ("pro", Verb),
    Fit => ("fit", Verb),
    Fiet => ("fiet", Verb),
    Fiunt => ("fiunt", Verb),
    Fient => ("fient", Verb),

    // Literals and references.
    Verum => ("verum", Literal),
    Falsum => ("falsum", Literal),
    Ego => ("ego", Literal),

    // Console verbs.
    Scribe => ("scribe", Console),
    Vide => ("vide", Console),
    Mone => ("mone", Console),

    // Pipeline transforms.
    Prima => ("prima", Transform),
    Ultima => ("ultima", Transform),
    Summa => ("summa", Transform),

    // Tests.
    Probatio => ("probatio", Test),
    Proba => ("proba", Test),
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexeme-to-keyword table, built once.
static KEYWORDS: Lazy<IndexMap<&'static str, Keyword>> =
    Lazy::new(|| Keyword::ALL.iter().map(|k| (k.as_str(), *k)).collect());

/// Looks up the keyword for `lexeme`, if it is one.
pub fn keyword_from_str(lexeme: &str) -> Option<Keyword> {
    KEYWORDS.get(lexeme).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(keyword_from_str("fixum"), Some(Keyword::Fixum));
        assert_eq!(keyword_from_str("vel"), Some(Keyword::Vel));
        assert_eq!(keyword_from_str("nomen"), None);
    }

    #[test]
    fn test_post_is_not_a_keyword() {
        // The test-hook parser matches `post` by lexeme; the lexicon must
        // leave it an identifier.
        assert_eq!(keyword_from_str("post"), None);
    }

    #[test]
    fn test_lexemes_are_unique() {
        assert_eq!(KEYWORDS.len(), Keyword::ALL.len());
    }

    #[test]
    fn test_categories() {
        assert_eq!(Keyword::Fixum.category(), KeywordCategory::Declaration);
        assert_eq!(Keyword::Vel.category(), KeywordCategory::OperatorWord);
        assert_eq!(Keyword::Nulla.category(), KeywordCategory::Predicate);
        assert_eq!(Keyword::Fiet.category(), KeywordCategory::Verb);
    }
}
