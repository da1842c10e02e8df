//! Virtual Greek keyboard layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardPage {
    Lowercase,
    Breathing,
    Accents,
    Capitals,
    CapitalsPlus,
}

type Layout = &'static [&'static [&'static str]];

const LOWERCASE: Layout = &[
    &["α", "β", "γ", "δ", "ε", "ζ", "η", "θ"],
    &["ι", "κ", "λ", "μ", "ν", "ξ", "ο", "π"],
    &["ρ", "σ", "τ", "υ", "φ", "χ", "ψ", "ω"],
    &["ς"],
];

// Rows: smooth, rough, smooth + acute, rough + acute, smooth + grave, rough + grave.
const BREATHING: Layout = &[
    &["ἀ", "ἐ", "ἠ", "ἰ", "ὀ", "ὐ", "ὠ"],
    &["ἁ", "ἑ", "ἡ", "ἱ", "ὁ", "ὑ", "ὡ"],
    &["ἄ", "ἔ", "ἤ", "ἴ", "ὄ", "ὔ", "ὤ"],
    &["ἅ", "ἕ", "ἥ", "ἵ", "ὅ", "ὕ", "ὥ"],
    &["ἂ", "ἒ", "ἢ", "ἲ", "ὂ", "ὒ", "ὢ"],
    &["ἃ", "ἓ", "ἣ", "ἳ", "ὃ", "ὓ", "ὣ"],
];

// Rows: acute, grave, circumflex, then iota subscript plain / acute / grave / circumflex.
const ACCENTS: Layout = &[
    &["ά", "έ", "ή", "ί", "ό", "ύ", "ώ"],
    &["ὰ", "ὲ", "ὴ", "ὶ", "ὸ", "ὺ", "ὼ"],
    &["ᾶ", "ῆ", "ῖ", "ῦ", "ῶ"],
    &["ᾳ", "ῃ", "ῳ"],
    &["ᾴ", "ῄ", "ῴ"],
    &["ᾲ", "ῂ", "ῲ"],
    &["ᾷ", "ῇ", "ῷ"],
];

const CAPITALS: Layout = &[
    &["Α", "Β", "Γ", "Δ", "Ε", "Ζ", "Η", "Θ"],
    &["Ι", "Κ", "Λ", "Μ", "Ν", "Ξ", "Ο", "Π"],
    &["Ρ", "Σ", "Τ", "Υ", "Φ", "Χ", "Ψ", "Ω"],
];

const CAPITALS_PLUS: Layout = &[
    &["Ἀ", "Ἐ", "Ἠ", "Ἰ", "Ὀ", "Ὠ"],
    &["Ἁ", "Ἑ", "Ἡ", "Ἱ", "Ὁ", "Ὑ", "Ὡ"],
    &["Ἄ", "Ἔ", "Ἤ", "Ἴ", "Ὄ", "Ὤ"],
    &["Ἅ", "Ἕ", "Ἥ", "Ἵ", "Ὅ", "Ὕ", "Ὥ"],
];

impl KeyboardPage {
    pub const ALL: [KeyboardPage; 5] = [
        Self::Lowercase,
        Self::Breathing,
        Self::Accents,
        Self::Capitals,
        Self::CapitalsPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Breathing => "breathing",
            Self::Accents => "accents",
            Self::Capitals => "capitals",
            Self::CapitalsPlus => "capitals-plus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lowercase" | "lower" => Some(Self::Lowercase),
            "breathing" | "breathings" => Some(Self::Breathing),
            "accents" | "accent" => Some(Self::Accents),
            "capitals" | "caps" => Some(Self::Capitals),
            "capitals-plus" | "capitalsplus" | "caps+" => Some(Self::CapitalsPlus),
            _ => None,
        }
    }

    pub fn layout(self) -> &'static [&'static [&'static str]] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Breathing => BREATHING,
            Self::Accents => ACCENTS,
            Self::Capitals => CAPITALS,
            Self::CapitalsPlus => CAPITALS_PLUS,
        }
    }

    /// Key at zero-based `row` and `col`.
    pub fn key(self, row: usize, col: usize) -> Option<&'static str> {
        self.layout().get(row).and_then(|r| r.get(col)).copied()
    }
}

impl Default for KeyboardPage {
    fn default() -> Self {
        Self::Lowercase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::fold_diacritics;

    const VOWELS: [&str; 7] = ["α", "ε", "η", "ι", "ο", "υ", "ω"];

    #[test]
    fn every_marked_vowel_folds_to_a_bare_vowel() {
        for page in [KeyboardPage::Breathing, KeyboardPage::Accents, KeyboardPage::CapitalsPlus] {
            for row in page.layout() {
                for key in row.iter() {
                    let folded = fold_diacritics(key);
                    assert!(VOWELS.contains(&folded.as_str()), "{key} folded to {folded}");
                }
            }
        }
    }

    #[test]
    fn key_lookup() {
        assert_eq!(KeyboardPage::Lowercase.key(0, 0), Some("α"));
        assert_eq!(KeyboardPage::Lowercase.key(3, 0), Some("ς"));
        assert_eq!(KeyboardPage::Lowercase.key(3, 1), None);
        assert_eq!(KeyboardPage::Accents.key(2, 4), Some("ῶ"));
        assert_eq!(KeyboardPage::Capitals.key(9, 0), None);
    }

    #[test]
    fn page_names_round_trip() {
        for page in KeyboardPage::ALL {
            assert_eq!(KeyboardPage::from_str(page.as_str()), Some(page));
        }
        assert_eq!(KeyboardPage::from_str("klingon"), None);
    }
}
