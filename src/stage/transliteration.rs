use crate::{
    context::Context,
    stage::{Stage, StageError},
    transliterate::{AsciiTransliterator, Transliterate},
};
use std::{borrow::Cow, sync::Arc};

/// Adapts a [`Transliterate`] service to the stage pipeline.
///
/// The locale comes from the call's [`Context`], never from ambient state.
#[derive(Clone)]
pub struct Transliteration {
    service: Arc<dyn Transliterate>,
}

impl Transliteration {
    pub fn new(service: Arc<dyn Transliterate>) -> Self {
        Self { service }
    }
}

impl Default for Transliteration {
    fn default() -> Self {
        Self::new(Arc::new(AsciiTransliterator))
    }
}

impl std::fmt::Debug for Transliteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transliteration")
            .field("service", &self.service.name())
            .finish()
    }
}

impl Stage for Transliteration {
    fn name(&self) -> &'static str {
        "transliteration"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(self.service.needs_transliteration(text, ctx.locale))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.service.transliterate(text, ctx.locale)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        DE, assert_stage_contract, locale::Locale, testing::stage_contract::StageTestConfig,
        transliterate::TransliterateError,
    };

    impl StageTestConfig for Transliteration {
        fn samples() -> &'static [&'static str] {
            &["Пушкин", "Grüße", "Hello World", "日本語", "e\u{0301}", ""]
        }

        fn should_pass_through() -> &'static [&'static str] {
            &["hello", "Well-known English writer", "a_b-c", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[("Пушкин", "Pushkin"), ("Café", "Cafe")]
        }
    }

    #[test]
    fn universal_contract() {
        assert_stage_contract!(Transliteration::default());
    }

    #[test]
    fn uses_context_locale() {
        let stage = Transliteration::default();
        let ctx = Context {
            locale: DE,
            ..Context::default()
        };
        assert_eq!(stage.apply(Cow::Borrowed("Grüße"), &ctx).unwrap(), "Gruesse");
        assert_eq!(
            stage.apply(Cow::Borrowed("Grüße"), &Context::default()).unwrap(),
            "Grusse"
        );
    }

    struct Failing;

    impl Transliterate for Failing {
        fn transliterate<'a>(
            &self,
            _text: Cow<'a, str>,
            locale: Locale,
        ) -> Result<Cow<'a, str>, TransliterateError> {
            Err(TransliterateError::Failed(locale.code(), "table offline".into()))
        }
    }

    #[test]
    fn service_errors_surface_as_stage_errors() {
        let stage = Transliteration::new(Arc::new(Failing));
        let err = stage
            .apply(Cow::Borrowed("Пушкин"), &Context::default())
            .unwrap_err();
        assert!(matches!(
            err,
            StageError::Transliterate(TransliterateError::Failed("EN", _))
        ));
        assert_eq!(
            err.to_string(),
            "transliteration failed for locale `EN`: table offline"
        );
    }
}
