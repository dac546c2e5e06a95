//! Variant mode definitions.
//!
//! [`VariantMode`] selects which stylistic transformation is applied to a
//! quote before it is stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stylistic variant of a quote.
///
/// `Normal` is the identity transform; the other variants rewrite the text
/// (see [`render`](super::render)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantMode {
    /// Text is stored as-is (default)
    #[default]
    Normal,
    /// L/R become W, and a space before U is stuttered (`" u"` → `" u-u"`)
    Uwu,
    /// Every word is rotated into pig latin, then the sentence is capitalized
    PigLatin,
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantMode::Normal => write!(f, "normal"),
            VariantMode::Uwu => write!(f, "uwu"),
            VariantMode::PigLatin => write!(f, "piglatin"),
        }
    }
}

impl std::str::FromStr for VariantMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(VariantMode::Normal),
            "uwu" => Ok(VariantMode::Uwu),
            "piglatin" | "pig-latin" => Ok(VariantMode::PigLatin),
            _ => Err(format!("Invalid VariantMode: {}", s)),
        }
    }
}
