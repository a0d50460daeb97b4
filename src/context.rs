// src/context.rs
// Per-call settings handed to every stage: the locale plus the options
// resolved against the behaviour. Copy, no allocation.

use crate::{
    behaviour::Behaviour,
    locale::{DEFAULT_LOCALE, Locale},
    options::Options,
};

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub locale: Locale,
    pub separator: char,
    pub downcase: bool,
    pub normalize: bool,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::resolve(DEFAULT_LOCALE, &Behaviour::default(), Options::default())
    }
}

impl Context {
    /// Overlay `options` onto `behaviour`, one field at a time.
    #[inline]
    pub fn resolve(locale: Locale, behaviour: &Behaviour, options: Options) -> Self {
        Self {
            locale,
            separator: options.separator.unwrap_or(behaviour.separator()),
            downcase: options.downcase.unwrap_or(behaviour.performs_downcase()),
            normalize: options
                .normalize
                .unwrap_or(behaviour.performs_normalization()),
        }
    }
}
