//! transliterate.rs – **Script → ASCII approximation**
//! * `Пушкин` → `Pushkin`, `Straße` → `Strasse`, `Grüße` (DE) → `Gruesse`
//! * Preserves case; the normalizer lowercases later if asked to
//! * Zero-copy when the input is already ASCII
//! * Locale overrides first, then the generic `unidecode` table
use crate::locale::Locale;
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};
use thiserror::Error;
use unidecode::unidecode_char;

/// Stand-in for characters the table cannot spell in ASCII.
pub const UNMAPPED: char = '?';

// `unidecode` marks holes in its table with this.
const UNIDECODE_PLACEHOLDER: &str = "[?]";

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

#[derive(Debug, Error)]
pub enum TransliterateError {
    #[error("locale `{0}` is not present in the locale table")]
    UnknownLocale(&'static str),

    #[error("transliteration failed for locale `{0}`: {1}")]
    Failed(&'static str, String),
}

/// The transliteration seam. Anything that can turn text into its closest
/// ASCII spelling for a given locale can back a [`Normalizer`](crate::Normalizer).
pub trait Transliterate: Send + Sync {
    /// Human-readable name – used in log lines.
    fn name(&self) -> &'static str {
        "transliterate"
    }

    /// Fast pre-check. Returning `false` skips the call entirely.
    #[inline]
    fn needs_transliteration(&self, text: &str, _locale: Locale) -> bool {
        !text.is_ascii()
    }

    fn transliterate<'a>(
        &self,
        text: Cow<'a, str>,
        locale: Locale,
    ) -> Result<Cow<'a, str>, TransliterateError>;
}

/// Default service: NFC composition, per-locale overrides, then `unidecode`.
///
/// Characters without a table entry (emoji, private use, dingbats) come back
/// as [`UNMAPPED`], so words on either side of them stay apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiTransliterator;

impl Transliterate for AsciiTransliterator {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn transliterate<'a>(
        &self,
        text: Cow<'a, str>,
        locale: Locale,
    ) -> Result<Cow<'a, str>, TransliterateError> {
        let entry = locale
            .entry()
            .ok_or(TransliterateError::UnknownLocale(locale.code()))?;
        if text.is_ascii() {
            return Ok(text);
        }

        // Overrides are keyed on precomposed characters ("u" + U+0308 must hit 'ü').
        let composed = ICU4X_NFC.normalize(&text);
        let mut out = String::with_capacity(composed.len() + composed.len() / 2);
        for c in composed.chars() {
            if c.is_ascii() {
                out.push(c);
            } else if let Some(to) = entry.override_for(c) {
                out.push_str(to);
            } else {
                match unidecode_char(c) {
                    "" => out.push(UNMAPPED),
                    mapped if mapped.trim_end() == UNIDECODE_PLACEHOLDER => out.push(UNMAPPED),
                    mapped => out.push_str(mapped),
                }
            }
        }
        Ok(Cow::Owned(out))
    }
}
