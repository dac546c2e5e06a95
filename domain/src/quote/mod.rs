//! Quotes and their stylistic variants.
//!
//! A raw command payload becomes a stored [`Quote`] in two explicit steps:
//!
//! 1. [`render`] turns normalized text plus a [`VariantMode`] into a [`Rendering`]
//!    (or a [`DomainError`](crate::DomainError))
//! 2. [`Quote::from_rendering`] wraps the already-valid rendering
//!
//! A quote therefore never exists in an untransformed state.

pub mod assembly;
pub mod duplicate;
pub mod entities;
pub mod piglatin;
pub mod transform;
pub mod variant;

pub use assembly::build_quote_text;
pub use duplicate::{DuplicatePolicy, RenderedTextMatch};
pub use entities::Quote;
pub use piglatin::convert_word;
pub use transform::{MAX_QUOTE_LENGTH, RenderAdvisory, Rendering, render};
pub use variant::VariantMode;
