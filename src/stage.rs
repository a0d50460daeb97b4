//! Core normalization stage abstraction.
//!
//! A normalizer is an ordered list of stages. Each stage gets a cheap
//! `needs_apply` pre-check so that clean input can flow through the whole
//! pipeline as a borrowed `Cow` without a single allocation.

pub mod downcase;
pub mod normalize_structure;
pub mod transliteration;

use crate::{context::Context, transliterate::TransliterateError};
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Transliterate(#[from] TransliterateError),
}

/// A single normalization step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have said no.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

/// ASCII letter, digit or underscore.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
