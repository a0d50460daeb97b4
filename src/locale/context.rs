//! Ambient "current locale" for the running thread.
//!
//! The normalizer passes its locale to the transliteration service explicitly.
//! Collaborators that still read ambient state see the same value, because the
//! normalizer holds a [`LocaleGuard`] for the length of each call. The state is
//! thread-local: a call on one thread can never observe another thread's override.

use crate::locale::{DEFAULT_LOCALE, Locale};
use std::{cell::Cell, marker::PhantomData};

thread_local! {
    static CURRENT: Cell<Locale> = const { Cell::new(DEFAULT_LOCALE) };
}

/// The current locale of this thread.
#[inline]
pub fn current() -> Locale {
    CURRENT.with(Cell::get)
}

/// Replace the current locale, returning the previous one.
#[inline]
pub fn set_current(locale: Locale) -> Locale {
    CURRENT.with(|c| c.replace(locale))
}

/// Override the current locale until the returned guard is dropped.
///
/// Restoration happens in `Drop`, so it also runs on early `?` returns and
/// while unwinding from a panic.
#[must_use = "the override ends as soon as the guard is dropped"]
pub fn scoped(locale: Locale) -> LocaleGuard {
    LocaleGuard {
        previous: set_current(locale),
        _not_send: PhantomData,
    }
}

/// Run `f` with `locale` as the current locale.
pub fn with_locale<R>(locale: Locale, f: impl FnOnce() -> R) -> R {
    let _guard = scoped(locale);
    f()
}

/// Restores the previous locale on drop. Tied to the thread that created it.
#[derive(Debug)]
pub struct LocaleGuard {
    previous: Locale,
    _not_send: PhantomData<*const ()>,
}

impl LocaleGuard {
    /// Locale that will be restored.
    pub fn previous(&self) -> Locale {
        self.previous
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        set_current(self.previous);
    }
}
