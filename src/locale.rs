pub mod context;
pub mod data;

use crate::locale::data::LOCALE_TABLE;
use crate::EN;
use std::fmt;

/// A locale understood by the transliteration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    pub code: &'static str,
    pub name: &'static str,
}

impl Locale {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Static transliteration data for this locale, if it is present in the table.
    #[inline]
    pub fn entry(&self) -> Option<&'static LocaleEntry> {
        LOCALE_TABLE.get(self.code)
    }

    /// Case-insensitive lookup by code (`"de"`, `"RU"`, ...).
    pub fn from_code(code: &str) -> Option<Locale> {
        data::from_code(code)
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

pub const DEFAULT_LOCALE: Locale = EN;

/// One locale-specific transliteration, applied before the generic table.
#[derive(Clone, Copy, Debug)]
pub struct TranslitMap {
    pub from: char,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct LocaleEntry {
    pub transliterate_map: &'static [TranslitMap],
}

impl LocaleEntry {
    #[inline(always)]
    pub fn transliterate_map(&self) -> &'static [TranslitMap] {
        self.transliterate_map
    }

    #[inline(always)]
    pub fn has_transliterate_map(&self) -> bool {
        !self.transliterate_map.is_empty()
    }

    /// Locale override for `c`. The tables are tiny, a linear scan beats hashing.
    #[inline]
    pub fn override_for(&self, c: char) -> Option<&'static str> {
        self.transliterate_map
            .iter()
            .find(|m| m.from == c)
            .map(|m| m.to)
    }
}
