//! Quote entity

use super::transform::Rendering;
use super::variant::VariantMode;
use serde::Serialize;

/// A stored quote (Entity)
///
/// Built only from a [`Rendering`], which carries its own source and variant,
/// so `rendered` is always the output of [`render`](super::render) for
/// `(source, variant)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    source: String,
    variant: VariantMode,
    rendered: String,
}

impl Quote {
    /// Wrap a successful rendering
    pub fn from_rendering(rendering: Rendering) -> Self {
        let (source, variant, rendered) = rendering.into_parts();
        Self {
            source,
            variant,
            rendered,
        }
    }

    /// The normalized text the quote was rendered from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn variant(&self) -> VariantMode {
        self.variant
    }

    /// The text as it is displayed and compared
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered)
    }
}
