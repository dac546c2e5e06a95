//! Domain layer for quotebook
//!
//! This crate contains the quote transformation engine, entities, and value
//! objects. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Variants
//!
//! A quote is stored in one of three stylistic variants ([`VariantMode`]):
//!
//! - **Normal**: the text as given
//! - **Uwu**: `L`/`R` become `W`, and `" u"` stutters into `" u-u"`
//! - **PigLatin**: every word rotated into pig latin, sentence capitalized
//!
//! ## Rendering
//!
//! [`render`] is a pure function from `(text, variant)` to a [`Rendering`].
//! A [`Quote`] is only ever built from a successful rendering.

pub mod command;
pub mod config;
pub mod core;
pub mod quote;

// Re-export commonly used types
pub use command::{Command, parse_command};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use quote::{
    DuplicatePolicy, MAX_QUOTE_LENGTH, Quote, RenderAdvisory, RenderedTextMatch, Rendering,
    VariantMode, build_quote_text, convert_word, render,
};
