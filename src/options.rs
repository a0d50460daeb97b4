//! Per-call overrides and the accepted input shapes.
use std::borrow::Cow;

/// Per-call overrides. Every `None` falls back to the [`Behaviour`](crate::Behaviour).
///
/// ```
/// use humanid::Options;
///
/// let raw = Options::new().normalize(false).downcase(false);
/// assert_eq!(raw.normalize, Some(false));
/// assert_eq!(raw.separator, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub separator: Option<char>,
    pub downcase: Option<bool>,
    pub normalize: Option<bool>,
}

impl Options {
    pub const fn new() -> Self {
        Self {
            separator: None,
            downcase: None,
            normalize: None,
        }
    }

    pub const fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    pub const fn downcase(mut self, downcase: bool) -> Self {
        self.downcase = Some(downcase);
        self
    }

    pub const fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }
}

/// Text to normalize: a single string, or parts joined with the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Text(Cow<'a, str>),
    Parts(Vec<Cow<'a, str>>),
}

impl<'a> Input<'a> {
    /// Collapse into one string. Parts are joined with `separator`; a single
    /// text passes through untouched.
    pub fn join(self, separator: char) -> Cow<'a, str> {
        match self {
            Input::Text(text) => text,
            Input::Parts(mut parts) if parts.len() == 1 => parts.pop().unwrap_or_default(),
            Input::Parts(parts) => {
                let mut buf = [0u8; 4];
                Cow::Owned(parts.join(&*separator.encode_utf8(&mut buf)))
            }
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Input<'_> {
    fn from(text: String) -> Self {
        Input::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Input<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a [&'a str]> for Input<'a> {
    fn from(parts: &'a [&'a str]) -> Self {
        Input::Parts(parts.iter().map(|p| Cow::Borrowed(*p)).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Input<'a> {
    fn from(parts: [&'a str; N]) -> Self {
        Input::Parts(parts.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Input<'a> {
    fn from(parts: Vec<&'a str>) -> Self {
        Input::Parts(parts.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<&'a [String]> for Input<'a> {
    fn from(parts: &'a [String]) -> Self {
        Input::Parts(parts.iter().map(|p| Cow::Borrowed(p.as_str())).collect())
    }
}

impl From<Vec<String>> for Input<'_> {
    fn from(parts: Vec<String>) -> Self {
        Input::Parts(parts.into_iter().map(Cow::Owned).collect())
    }
}
