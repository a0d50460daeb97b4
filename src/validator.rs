use crate::{behaviour::Behaviour, error::HumanIdError};
use regex::Regex;

/// Checks candidates against a validation grammar.
///
/// Matching is `Regex::is_match`, so a custom pattern has to carry its own
/// `^…$` anchors to demand a full match, just like the default one does.
#[derive(Debug, Clone)]
pub struct Validator {
    regex: Regex,
}

impl Validator {
    pub fn new(behaviour: &Behaviour) -> Self {
        Self::with_regex(behaviour.validation_regex().clone())
    }

    pub fn with_regex(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[inline]
    pub fn is_valid(&self, candidate: impl AsRef<str>) -> bool {
        self.regex.is_match(candidate.as_ref())
    }

    /// Absent candidates are never valid.
    #[inline]
    pub fn is_valid_opt<S: AsRef<str>>(&self, candidate: Option<S>) -> bool {
        candidate.is_some_and(|c| self.is_valid(c))
    }

    pub fn validate(&self, candidate: impl AsRef<str>) -> Result<(), HumanIdError> {
        if self.is_valid(candidate) {
            Ok(())
        } else {
            Err(HumanIdError::MalformedIdentifier)
        }
    }
}
