use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Locale-invariant lowercasing, gated by `Context::downcase`.
///
/// ASCII input (the common case after transliteration) takes a byte-wise
/// path; anything else goes through `str::to_lowercase`, which also handles
/// final sigma and multi-char expansions such as `İ`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Downcase;

#[inline(always)]
fn needs_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    c.to_lowercase().next() != Some(c)
}

impl Stage for Downcase {
    fn name(&self) -> &'static str {
        "downcase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.downcase && text.chars().any(needs_lowercase))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Ok(Cow::Owned(owned));
        }
        Ok(Cow::Owned(text.to_lowercase()))
    }
}
