use crate::{
    behaviour::Behaviour,
    context::Context,
    error::HumanIdError,
    locale::{DEFAULT_LOCALE, Locale, context as ambient},
    options::{Input, Options},
    process::{DynamicProcess, Process},
    stage::{
        downcase::Downcase, normalize_structure::NORMALIZE_STRUCTURE_FULL,
        transliteration::Transliteration,
    },
    transliterate::{AsciiTransliterator, Transliterate},
    validator::Validator,
};
use log::debug;
use std::sync::{Arc, LazyLock};

// Stages are stateless, so every normalizer on the default service shares one list.
static DEFAULT_PIPELINE: LazyLock<DynamicProcess> =
    LazyLock::new(|| pipeline(Arc::new(AsciiTransliterator)));

fn pipeline(transliterator: Arc<dyn Transliterate>) -> DynamicProcess {
    DynamicProcess::new()
        .push(Transliteration::new(transliterator))
        .push(Downcase)
        .push(NORMALIZE_STRUCTURE_FULL)
}

/// Turns free text into identifiers.
///
/// The pipeline is transliteration → downcase → structural normalization.
/// A `Normalizer` owns a copy of its [`Behaviour`]; later changes to the global
/// behaviour do not reach an existing instance.
///
/// ```
/// use humanid::{Normalizer, Options};
///
/// let n = Normalizer::default();
/// assert_eq!(
///     n.perform("Пушкин, Александр Сергеевич", Options::new()).unwrap(),
///     "pushkin-aleksandr-sergeevich"
/// );
/// assert_eq!(
///     n.perform("Пушкин, Александр Сергеевич", Options::new().normalize(false).downcase(false))
///         .unwrap(),
///     "Pushkin, Aleksandr Sergeevich"
/// );
/// ```
#[derive(Clone)]
pub struct Normalizer {
    behaviour: Behaviour,
    locale: Locale,
    validator: Validator,
    pipeline: DynamicProcess,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("behaviour", &self.behaviour)
            .field("locale", &self.locale)
            .field("stages", &self.pipeline.stage_names().collect::<Vec<_>>())
            .finish()
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn new(behaviour: Behaviour) -> Self {
        Self::builder().behaviour(behaviour).build()
    }

    pub fn behaviour(&self) -> &Behaviour {
        &self.behaviour
    }

    /// Locale every call transliterates under.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Normalize `input`, overlaying `options` onto this normalizer's behaviour.
    ///
    /// For the duration of the call the thread's ambient locale is switched to
    /// [`locale`](Self::locale); the previous value is restored on every exit path.
    pub fn perform<'a>(
        &self,
        input: impl Into<Input<'a>>,
        options: Options,
    ) -> Result<String, HumanIdError> {
        let _locale = ambient::scoped(self.locale);
        let ctx = Context::resolve(self.locale, &self.behaviour, options);
        debug!(
            "normalizing: locale={} separator={:?} downcase={} normalize={}",
            ctx.locale.code(),
            ctx.separator,
            ctx.downcase,
            ctx.normalize
        );

        let text = input.into().join(ctx.separator);
        let out = self.pipeline.process(text, &ctx)?;
        Ok(out.into_owned())
    }

    pub fn is_valid(&self, candidate: impl AsRef<str>) -> bool {
        self.validator.is_valid(candidate)
    }

    pub fn validate(&self, candidate: impl AsRef<str>) -> Result<(), HumanIdError> {
        self.validator.validate(candidate)
    }
}

pub struct NormalizerBuilder {
    behaviour: Option<Behaviour>,
    locale: Locale,
    transliterator: Option<Arc<dyn Transliterate>>,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            behaviour: None,
            locale: DEFAULT_LOCALE,
            transliterator: None,
        }
    }
}

impl NormalizerBuilder {
    /// Explicit behaviour. Without one, `build` snapshots the global behaviour.
    pub fn behaviour(mut self, behaviour: Behaviour) -> Self {
        self.behaviour = Some(behaviour);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn transliterator<T: Transliterate + 'static>(mut self, transliterator: T) -> Self {
        self.transliterator = Some(Arc::new(transliterator));
        self
    }

    pub fn shared_transliterator(mut self, transliterator: Arc<dyn Transliterate>) -> Self {
        self.transliterator = Some(transliterator);
        self
    }

    pub fn build(self) -> Normalizer {
        let behaviour = self.behaviour.unwrap_or_else(Behaviour::snapshot);
        let validator = Validator::new(&behaviour);
        let pipeline = match self.transliterator {
            Some(transliterator) => pipeline(transliterator),
            None => DEFAULT_PIPELINE.clone(),
        };
        Normalizer {
            behaviour,
            locale: self.locale,
            validator,
            pipeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DE, RU, transliterate::TransliterateError};
    use std::borrow::Cow;

    fn normalizer() -> Normalizer {
        Normalizer::new(Behaviour::default())
    }

    #[test]
    fn english_title() {
        let n = normalizer();
        assert_eq!(
            n.perform("Well-known English writer", Options::new()).unwrap(),
            "well-known-english-writer"
        );
        assert_eq!(
            n.perform(
                "Well-known English writer",
                Options::new().normalize(false).downcase(false)
            )
            .unwrap(),
            "Well-known English writer"
        );
    }

    #[test]
    fn flags_are_independent() {
        let n = normalizer();
        assert_eq!(
            n.perform("Hello World", Options::new().downcase(false)).unwrap(),
            "Hello-World"
        );
        assert_eq!(
            n.perform("Hello World", Options::new().normalize(false)).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn parts_join_with_separator() {
        let n = normalizer();
        assert_eq!(
            n.perform(["Пушкин", "Александр"], Options::new()).unwrap(),
            "pushkin-aleksandr"
        );
        assert_eq!(
            n.perform(
                ["Pushkin", "Aleksandr"],
                Options::new().separator('_').normalize(false)
            )
            .unwrap(),
            "pushkin_aleksandr"
        );
        // `_` is a word character, so it survives normalization
        assert_eq!(
            n.perform(["Pushkin", "Aleksandr"], Options::new().separator('_'))
                .unwrap(),
            "pushkin_aleksandr"
        );
        // `.` is not; normalization turns it into a hyphen
        assert_eq!(
            n.perform(["a", "b"], Options::new().separator('.')).unwrap(),
            "a-b"
        );
    }

    #[test]
    fn behaviour_defaults_apply() {
        let mut behaviour = Behaviour::default();
        behaviour.set_downcase(false).set_separator(' ');
        let n = Normalizer::new(behaviour);
        assert_eq!(
            n.perform(["Big", "Name"], Options::new()).unwrap(),
            "Big-Name"
        );
        assert_eq!(
            n.perform(["Big", "Name"], Options::new().normalize(false))
                .unwrap(),
            "Big Name"
        );
    }

    #[test]
    fn locale_is_passed_to_the_service() {
        let n = Normalizer::builder()
            .behaviour(Behaviour::default())
            .locale(DE)
            .build();
        assert_eq!(n.locale(), DE);
        assert_eq!(n.perform("Grüße aus Köln", Options::new()).unwrap(), "gruesse-aus-koeln");
    }

    #[test]
    fn output_passes_own_validator() {
        let n = normalizer();
        let out = n.perform("Пушкин, Александр Сергеевич", Options::new()).unwrap();
        assert!(n.validate(&out).is_ok());

        let empty = n.perform("!!!", Options::new()).unwrap();
        assert!(matches!(
            n.validate(&empty),
            Err(HumanIdError::MalformedIdentifier)
        ));
        let raw = n
            .perform("Not normalized", Options::new().normalize(false))
            .unwrap();
        assert!(!n.is_valid(raw));
    }

    #[test]
    fn unmapped_characters_keep_words_apart() {
        let n = normalizer();
        assert_eq!(n.perform("I❤NY", Options::new()).unwrap(), "i-ny");
        assert_eq!(n.perform("a😀b", Options::new()).unwrap(), "a-b");
        assert_eq!(n.perform("foo\u{E000}bar", Options::new()).unwrap(), "foo-bar");
        assert_eq!(
            n.perform("I❤NY", Options::new().normalize(false).downcase(false))
                .unwrap(),
            "I?NY"
        );
    }

    #[test]
    fn default_service_shares_one_pipeline() {
        let a = normalizer();
        let b = Normalizer::default();
        assert!(a
            .pipeline
            .stages
            .iter()
            .zip(&b.pipeline.stages)
            .all(|(x, y)| Arc::ptr_eq(x, y)));

        let custom = Normalizer::builder()
            .behaviour(Behaviour::default())
            .transliterator(AsciiTransliterator)
            .build();
        assert!(!Arc::ptr_eq(&a.pipeline.stages[0], &custom.pipeline.stages[0]));
    }

    struct Broken;

    impl Transliterate for Broken {
        fn transliterate<'a>(
            &self,
            _text: Cow<'a, str>,
            locale: Locale,
        ) -> Result<Cow<'a, str>, TransliterateError> {
            assert_eq!(ambient::current(), locale);
            Err(TransliterateError::Failed(locale.code(), "broken".into()))
        }
    }

    #[test]
    fn service_error_restores_ambient_locale() {
        let n = Normalizer::builder()
            .behaviour(Behaviour::default())
            .transliterator(Broken)
            .build();

        let _outer = ambient::scoped(RU);
        let err = n.perform("Пушкин", Options::new()).unwrap_err();
        assert!(matches!(err, HumanIdError::Stage(_)));
        assert_eq!(ambient::current(), RU);
    }

    #[test]
    fn ambient_locale_is_default_during_call() {
        struct ReportsAmbient;
        impl Transliterate for ReportsAmbient {
            fn needs_transliteration(&self, _text: &str, _locale: Locale) -> bool {
                true
            }
            fn transliterate<'a>(
                &self,
                _text: Cow<'a, str>,
                _locale: Locale,
            ) -> Result<Cow<'a, str>, TransliterateError> {
                Ok(Cow::Owned(ambient::current().code().to_owned()))
            }
        }

        let n = Normalizer::builder()
            .behaviour(Behaviour::default())
            .transliterator(ReportsAmbient)
            .build();
        let _outer = ambient::scoped(DE);
        assert_eq!(n.perform("x", Options::new()).unwrap(), "en");
        assert_eq!(ambient::current(), DE);
    }

    #[test]
    fn debug_lists_stages() {
        let dbg = format!("{:?}", normalizer());
        assert!(dbg.contains("transliteration"));
        assert!(dbg.contains("normalize_structure"));
    }
}
