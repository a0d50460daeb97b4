use crate::locale::{Locale, LocaleEntry, TranslitMap};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_locales {
($(
        $code:ident, $code_str:literal, $name:literal,
        translit: [ $($from:expr => $to:expr),* $(,)? ]
    ),* $(,)?) => {
        // Public `Locale` constants
        $(
            pub const $code: Locale = Locale { code: $code_str, name: $name };
        )*

        // Per-locale static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const TRANSLIT: &[TranslitMap] = &[
                        $(TranslitMap { from: $from, to: $to }),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LOCALE_TABLE: Map<&'static str, LocaleEntry> = phf_map! {
                $(
                    $code_str => LocaleEntry {
                        transliterate_map: [<$code:lower _data>]::TRANSLIT,
                    }
                ),*
            };
        }

        pub fn from_code(code: &str) -> Option<Locale> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }

        pub fn all_locales() -> &'static [Locale] {
            &[$($code),*]
        }
    };
}

// ---------------------------------------------------------------------------
//    Locale definitions (single source of truth)
//    Only deviations from the generic unidecode table are listed here.
// ---------------------------------------------------------------------------
define_locales! {
    EN, "EN", "English",
        translit: [],

    DE, "DE", "German",
        translit: [
            'Ä' => "Ae", 'Ö' => "Oe", 'Ü' => "Ue",
            'ä' => "ae", 'ö' => "oe", 'ü' => "ue",
            'ẞ' => "SS", 'ß' => "ss",
        ],

    DA, "DA", "Danish",
        translit: [
            'Å' => "Aa", 'Æ' => "Ae", 'Ø' => "Oe",
            'å' => "aa", 'æ' => "ae", 'ø' => "oe",
        ],

    NB, "NB", "Norwegian Bokmål",
        translit: [
            'Å' => "Aa", 'Æ' => "Ae", 'Ø' => "Oe",
            'å' => "aa", 'æ' => "ae", 'ø' => "oe",
        ],

    SV, "SV", "Swedish",
        translit: [
            'Å' => "Aa", 'Ä' => "Ae", 'Ö' => "Oe",
            'å' => "aa", 'ä' => "ae", 'ö' => "oe",
        ],

    // Soft and hard signs carry no sound of their own.
    RU, "RU", "Russian",
        translit: [
            'Ё' => "E", 'ё' => "e",
            'Ъ' => "", 'ъ' => "",
            'Ь' => "", 'ь' => "",
        ],

    UK, "UK", "Ukrainian",
        translit: [
            'Г' => "H", 'г' => "h",
            'И' => "Y", 'и' => "y",
            'Є' => "Ye", 'є' => "ie",
            'Ї' => "Yi", 'ї' => "i",
            'Ь' => "", 'ь' => "",
        ],
}
