//! The symbol alphabet.
//!
//! Patterns are built from a closed set of six distinct glyphs. The engine
//! never interprets glyphs beyond identity comparison; the view layer decides
//! how to draw them (the `glyph` strings are a ready-made emoji rendering).

use serde::{Deserialize, Serialize};

/// One symbol from the fixed six-glyph alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Duck,
    Swan,
    Chick,
    Duckling,
    Eagle,
    Turkey,
}

impl Symbol {
    /// All symbols, in canonical order.
    pub const ALL: [Symbol; 6] = [
        Symbol::Duck,
        Symbol::Swan,
        Symbol::Chick,
        Symbol::Duckling,
        Symbol::Eagle,
        Symbol::Turkey,
    ];

    /// Number of symbols in the alphabet.
    pub const COUNT: usize = Self::ALL.len();

    /// The emoji glyph for this symbol.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Duck => "\u{1F986}",     // 🦆
            Symbol::Swan => "\u{1F9A2}",     // 🦢
            Symbol::Chick => "\u{1F425}",    // 🐥
            Symbol::Duckling => "\u{1F424}", // 🐤
            Symbol::Eagle => "\u{1F985}",    // 🦅
            Symbol::Turkey => "\u{1F983}",   // 🦃
        }
    }

    /// Index of this symbol in [`Symbol::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&s| s == self)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
