use crate::{
    context::Context,
    stage::{Stage, StageError, is_word_char},
};
use memchr::memmem;
use std::borrow::Cow;

/// Shape text into identifier form, gated by `Context::normalize`.
///
/// Runs three passes, in this order:
///
/// | Operation                 | Effect                                                        |
/// |---------------------------|---------------------------------------------------------------|
/// | **Replace non-word chars**| Every char outside `[A-Za-z0-9_]` → `replacement`             |
/// | **Trim edges**            | Remove leading and trailing runs of `replacement`             |
/// | **Collapse runs**         | Two or more consecutive `replacement` → one                   |
///
/// The replacement is a fixed character and does **not** follow the configured
/// separator: with separator `.` the joined parts `a.b` still come out as `a-b`.
/// The default grammar only accepts hyphens, so this keeps normalized output valid.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeStructure {
    pub replacement: char,
}

/// Shape with `-` (what the normalizer runs)
pub const NORMALIZE_STRUCTURE_FULL: NormalizeStructure = NormalizeStructure { replacement: '-' };

impl Default for NormalizeStructure {
    fn default() -> Self {
        NORMALIZE_STRUCTURE_FULL
    }
}

impl NormalizeStructure {
    #[inline]
    fn has_replaceable(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text
                .bytes()
                .any(|b| !(b.is_ascii_alphanumeric() || b == b'_') && b as char != self.replacement);
        }
        text.chars().any(|c| !is_word_char(c) && c != self.replacement)
    }

    #[inline]
    fn has_edge_replacement(&self, text: &str) -> bool {
        text.starts_with(self.replacement) || text.ends_with(self.replacement)
    }

    #[inline]
    fn has_run(&self, text: &str) -> bool {
        let mut buf = [0u8; 8];
        let single_len = self.replacement.len_utf8();
        self.replacement.encode_utf8(&mut buf[..single_len]);
        self.replacement
            .encode_utf8(&mut buf[single_len..single_len * 2]);
        memmem::find(text.as_bytes(), &buf[..single_len * 2]).is_some()
    }

    fn replace_non_word<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.has_replaceable(&text) {
            return text;
        }
        let out: String = text
            .chars()
            .map(|c| if is_word_char(c) { c } else { self.replacement })
            .collect();
        Cow::Owned(out)
    }

    fn trim_edges<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(self.replacement)),
            Cow::Owned(s) => {
                let trimmed = s.trim_matches(self.replacement);
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        }
    }

    fn collapse_runs<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.has_run(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut previous_was_replacement = false;
        for c in text.chars() {
            let is_replacement = c == self.replacement;
            if !(is_replacement && previous_was_replacement) {
                out.push(c);
            }
            previous_was_replacement = is_replacement;
        }
        Cow::Owned(out)
    }
}

impl Stage for NormalizeStructure {
    fn name(&self) -> &'static str {
        "normalize_structure"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !ctx.normalize || text.is_empty() {
            return Ok(false);
        }
        Ok(self.has_replaceable(text) || self.has_edge_replacement(text) || self.has_run(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.normalize {
            return Ok(text);
        }
        let text = self.replace_non_word(text);
        let text = self.trim_edges(text);
        Ok(self.collapse_runs(text))
    }
}
