use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back borrowed and untouched.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs under the default context.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal contract under the default context:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `transforms_as_expected` → the stage's own input/output table holds
/// 3. `stage_is_idempotent` → applying twice yields same result as once
/// 4. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 5. `handles_empty_string_and_ascii` → graceful on edge cases
/// 6. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        let stage = $stage;
        $crate::testing::stage_contract::zero_copy_when_no_changes(&stage);
        $crate::testing::stage_contract::transforms_as_expected(&stage);
        $crate::testing::stage_contract::stage_is_idempotent(&stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii(&stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &input in S::should_pass_through() {
        assert!(
            !stage.needs_apply(input, &ctx).unwrap(),
            "{}: needs_apply true for clean input {input:?}",
            stage.name()
        );
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(
            matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr() && s.len() == input.len()),
            "{}: allocated on clean input {input:?}",
            stage.name()
        );
    }
}

pub fn transforms_as_expected<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &(input, expected) in S::should_transform() {
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert_eq!(out, expected, "{}: wrong output for {input:?}", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap().into_owned();
        let twice = stage.apply(Cow::Borrowed(once.as_str()), &ctx).unwrap().into_owned();
        assert_eq!(once, twice, "{}: not idempotent on {input:?}", stage.name());
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &input in S::samples() {
        let predicted = stage.needs_apply(input, &ctx).unwrap();
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert_eq!(
            predicted,
            out != input,
            "{}: needs_apply={predicted} but output {out:?} for {input:?}",
            stage.name()
        );
    }
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for input in ["", "a", "   ", "0123456789", "!@#$%^&*()"] {
        let out = stage.apply(Cow::Borrowed(input), &ctx);
        assert!(out.is_ok(), "{}: failed on {input:?}", stage.name());
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let nasty = [
        "Пушкин, Александр Сергеевич",
        "İSTANBUL ΣΊΣΥΦΟΣ",
        "👍🏼 emoji\u{200D}zwj",
        "e\u{0301}\u{0301}\u{0301}",
        "日本語 한국어 العربية",
        "\u{0000}\u{FEFF}\u{FFFF}",
        "---__---",
    ];
    for input in nasty {
        let _ = stage.apply(Cow::Borrowed(input), &ctx);
    }
}
