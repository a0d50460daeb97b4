//! Process-wide defaults for normalization and validation.
//!
//! A [`Behaviour`] is a plain value: build one, tweak it, hand it to a
//! [`Normalizer`](crate::Normalizer) or [`Validator`](crate::Validator).
//! There is also one global instance, read by the crate-level
//! [`normalize`](crate::normalize) / [`is_valid`](crate::is_valid) helpers.
//! It is meant to be configured once at startup and read from then on.

use log::{debug, warn};
use regex::Regex;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Word characters and hyphens, 1 to 255 long, no hyphen at either end.
pub const DEFAULT_VALIDATION_PATTERN: &str = r"^[A-Za-z0-9_](?:[A-Za-z0-9_-]{0,253}[A-Za-z0-9_])?$";

static DEFAULT_VALIDATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_VALIDATION_PATTERN).expect("default validation pattern is valid")
});

static GLOBAL: LazyLock<RwLock<Behaviour>> = LazyLock::new(|| RwLock::new(Behaviour::default()));

#[derive(Debug, Clone)]
pub struct Behaviour {
    separator: char,
    downcase: bool,
    normalize: bool,
    validation_regex: Regex,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            separator: '-',
            downcase: true,
            normalize: true,
            validation_regex: DEFAULT_VALIDATION_REGEX.clone(),
        }
    }
}

impl Behaviour {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }
    #[inline]
    pub fn downcase(&self) -> bool {
        self.downcase
    }
    #[inline]
    pub fn normalize(&self) -> bool {
        self.normalize
    }
    #[inline]
    pub fn validation_regex(&self) -> &Regex {
        &self.validation_regex
    }

    #[inline]
    pub fn performs_downcase(&self) -> bool {
        self.downcase
    }
    #[inline]
    pub fn performs_normalization(&self) -> bool {
        self.normalize
    }

    // Setters accept anything; keeping the values consistent is the caller's job.

    pub fn set_separator(&mut self, separator: char) -> &mut Self {
        self.separator = separator;
        self
    }
    pub fn set_downcase(&mut self, downcase: bool) -> &mut Self {
        self.downcase = downcase;
        self
    }
    pub fn set_normalize(&mut self, normalize: bool) -> &mut Self {
        self.normalize = normalize;
        self
    }
    pub fn set_validation_regex(&mut self, regex: Regex) -> &mut Self {
        self.validation_regex = regex;
        self
    }

    /// The default grammar with `separator` accepted wherever a hyphen is.
    ///
    /// Not applied automatically when the separator changes; pass the result
    /// to [`set_validation_regex`](Self::set_validation_regex) if wanted.
    pub fn validation_regex_for(separator: char) -> Result<Regex, regex::Error> {
        if separator == '-' {
            return Ok(DEFAULT_VALIDATION_REGEX.clone());
        }
        let mut buf = [0u8; 4];
        let sep = regex::escape(separator.encode_utf8(&mut buf));
        Regex::new(&format!(
            r"^[A-Za-z0-9_](?:(?:[A-Za-z0-9_]|{sep}){{0,253}}[A-Za-z0-9_])?$"
        ))
    }

    /// A copy of the global behaviour.
    pub fn snapshot() -> Behaviour {
        Self::with_global(Behaviour::clone)
    }

    /// Run `f` against the global behaviour under the read lock.
    ///
    /// Keep `f` short; writers wait until it returns.
    pub fn with_global<R>(f: impl FnOnce(&Behaviour) -> R) -> R {
        let guard = GLOBAL.read().unwrap_or_else(|poisoned| {
            warn!("global behaviour lock was poisoned; using last written value");
            PoisonError::into_inner(poisoned)
        });
        f(&guard)
    }

    /// Mutate the global behaviour in place.
    ///
    /// ```
    /// use humanid::Behaviour;
    ///
    /// Behaviour::configure(|b| {
    ///     b.set_separator('_');
    /// });
    /// assert_eq!(Behaviour::snapshot().separator(), '_');
    /// Behaviour::reset();
    /// ```
    pub fn configure<F: FnOnce(&mut Behaviour)>(f: F) {
        let mut guard = GLOBAL.write().unwrap_or_else(|poisoned| {
            warn!("global behaviour lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        });
        f(&mut guard);
        debug!(
            "behaviour reconfigured: separator={:?} downcase={} normalize={} pattern={}",
            guard.separator,
            guard.downcase,
            guard.normalize,
            guard.validation_regex.as_str()
        );
    }

    /// Restore the global behaviour to its defaults.
    pub fn reset() {
        Self::configure(|b| *b = Behaviour::default());
    }
}
