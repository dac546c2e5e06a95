//! Variant transformation engine.
//!
//! [`render`] is the single entry point: it maps normalized quote text and a
//! [`VariantMode`] to a [`Rendering`], or fails with a [`DomainError`].
//!
//! # Length policy
//!
//! Every rendered quote must fit in [`MAX_QUOTE_LENGTH`] characters, but the
//! variants react differently when it does not:
//!
//! | Variant    | Over the limit                                       |
//! |------------|------------------------------------------------------|
//! | `Normal`   | never checked here (the raw text is checked on assembly) |
//! | `Uwu`      | falls back to the letter-only rendering + [`RenderAdvisory::TruncatedVariant`] |
//! | `PigLatin` | hard failure: [`DomainError::QuoteTooLong`]         |

use super::piglatin::convert_word;
use super::variant::VariantMode;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on the character length of a quote.
pub const MAX_QUOTE_LENGTH: usize = 50;

/// Non-fatal notice attached to a successful rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderAdvisory {
    /// The full variant was too long, so only a partial transformation was applied
    TruncatedVariant,
}

impl fmt::Display for RenderAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderAdvisory::TruncatedVariant => {
                write!(f, "Quote too long, only partially transformed")
            }
        }
    }
}

/// Result of a successful [`render`] call.
///
/// Only [`render`] can build one, so the text is always the valid rendering
/// of its own `(source, variant)` pair.
#[must_use = "a rendering may carry an advisory that should be surfaced"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    source: String,
    variant: VariantMode,
    text: String,
    advisory: Option<RenderAdvisory>,
}

impl Rendering {
    /// The normalized text that was rendered
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn variant(&self) -> VariantMode {
        self.variant
    }

    /// The rendered text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn advisory(&self) -> Option<RenderAdvisory> {
        self.advisory
    }

    /// Split into `(source, variant, text)`
    pub(crate) fn into_parts(self) -> (String, VariantMode, String) {
        (self.source, self.variant, self.text)
    }
}

/// Render `text` in the requested variant.
pub fn render(text: &str, mode: VariantMode) -> Result<Rendering, DomainError> {
    let (rendered, advisory) = match mode {
        VariantMode::Normal => (text.to_string(), None),
        VariantMode::Uwu => render_uwu(text)?,
        VariantMode::PigLatin => (render_piglatin(text)?, None),
    };

    Ok(Rendering {
        source: text.to_string(),
        variant: mode,
        text: rendered,
        advisory,
    })
}

fn render_uwu(text: &str) -> Result<(String, Option<RenderAdvisory>), DomainError> {
    let partial = text
        .replace('L', "W")
        .replace('l', "w")
        .replace('R', "W")
        .replace('r', "w");
    let full = partial.replace(" U", " U-U").replace(" u", " u-u");

    if full == text {
        return Err(DomainError::NoOpTransform {
            variant: VariantMode::Uwu,
        });
    }

    if char_len(&full) > MAX_QUOTE_LENGTH {
        return Ok((partial, Some(RenderAdvisory::TruncatedVariant)));
    }

    Ok((full, None))
}

fn render_piglatin(text: &str) -> Result<String, DomainError> {
    let joined = text
        .split(' ')
        .map(convert_word)
        .collect::<Vec<_>>()
        .join(" ");
    let variant = capitalize(&joined);

    let length = char_len(&variant);
    if length > MAX_QUOTE_LENGTH {
        return Err(DomainError::QuoteTooLong {
            length,
            max: MAX_QUOTE_LENGTH,
        });
    }

    Ok(variant)
}

/// Uppercase the first character and lowercase the rest (ASCII only).
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
