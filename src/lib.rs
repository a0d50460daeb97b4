//! Human-readable identifiers ("slugs") from arbitrary text.
//!
//! ```
//! assert_eq!(
//!     humanid::normalize("Well-known English writer", Default::default()).unwrap(),
//!     "well-known-english-writer"
//! );
//! assert!(humanid::is_valid("abc-123"));
//! assert!(humanid::validate("bad id!").is_err());
//! ```
pub mod behaviour;
pub mod context;
pub mod error;
pub mod locale;
pub mod normalizer;
pub mod options;
pub mod process;
pub mod stage;
pub mod transliterate;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing {
    pub mod stage_contract;
}

pub use behaviour::Behaviour;
pub use error::HumanIdError;
pub use locale::Locale;
pub use locale::data::{DA, DE, EN, NB, RU, SV, UK, all_locales};
pub use normalizer::{Normalizer, NormalizerBuilder};
pub use options::{Input, Options};
pub use stage::downcase::Downcase;
pub use stage::normalize_structure::{NORMALIZE_STRUCTURE_FULL, NormalizeStructure};
pub use transliterate::{AsciiTransliterator, Transliterate, TransliterateError};
pub use validator::Validator;

/// Normalize with the global [`Behaviour`].
pub fn normalize<'a>(input: impl Into<Input<'a>>, options: Options) -> Result<String, HumanIdError> {
    Normalizer::default().perform(input, options)
}

/// Check `candidate` against the global validation pattern.
pub fn is_valid(candidate: impl AsRef<str>) -> bool {
    Behaviour::with_global(|b| b.validation_regex().is_match(candidate.as_ref()))
}

/// Like [`is_valid`], but fails with [`HumanIdError::MalformedIdentifier`].
pub fn validate(candidate: impl AsRef<str>) -> Result<(), HumanIdError> {
    if is_valid(candidate) {
        Ok(())
    } else {
        Err(HumanIdError::MalformedIdentifier)
    }
}
