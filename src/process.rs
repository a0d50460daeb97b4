//! Process abstraction.
//! `DynamicProcess` runs an ordered list of boxed stages, skipping every stage
//! whose `needs_apply` says the text is already in shape.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use log::trace;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

#[derive(Default, Clone)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx)? {
                trace!("stage `{}` skipped", stage.name());
                continue;
            }
            text = stage.apply(text, ctx)?;
            trace!("stage `{}` applied: {:?}", stage.name(), text);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{
        downcase::Downcase, normalize_structure::NORMALIZE_STRUCTURE_FULL,
        transliteration::Transliteration,
    };

    fn full() -> DynamicProcess {
        DynamicProcess::new()
            .push(Transliteration::default())
            .push(Downcase)
            .push(NORMALIZE_STRUCTURE_FULL)
    }

    #[test]
    fn stages_run_in_order() {
        let process = full();
        assert_eq!(
            process.stage_names().collect::<Vec<_>>(),
            ["transliteration", "downcase", "normalize_structure"]
        );
        let out = process
            .process(Cow::Borrowed("Пушкин, Александр Сергеевич"), &Context::default())
            .unwrap();
        assert_eq!(out, "pushkin-aleksandr-sergeevich");
    }

    #[test]
    fn clean_input_is_never_copied() {
        let input = "already-a-slug";
        let out = full().process(Cow::Borrowed(input), &Context::default()).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn empty_process_is_identity() {
        let out = DynamicProcess::new()
            .process(Cow::Borrowed("Anything Goes!"), &Context::default())
            .unwrap();
        assert_eq!(out, "Anything Goes!");
    }
}
