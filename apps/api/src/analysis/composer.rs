//! Prompt Composer — selects the template for a mode and fills its
//! placeholders. Pure string substitution: deterministic, no truncation, no
//! token budgeting. Oversize prompts fail at the Model Client, not here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{FEW_SHOT_TEMPLATE, ONE_SHOT_TEMPLATE, ZERO_SHOT_TEMPLATE};

/// Prompting mode: how many worked examples precede the evaluation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    ZeroShot,
    OneShot,
    FewShot,
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero-shot" => Ok(Mode::ZeroShot),
            "one-shot" => Ok(Mode::OneShot),
            "few-shot" => Ok(Mode::FewShot),
            _ => Err(()),
        }
    }
}

fn template_for(mode: Mode) -> &'static str {
    match mode {
        Mode::ZeroShot => ZERO_SHOT_TEMPLATE,
        Mode::OneShot => ONE_SHOT_TEMPLATE,
        Mode::FewShot => FEW_SHOT_TEMPLATE,
    }
}

/// Builds the final prompt for one submission.
pub fn compose(mode: Mode, job_description: &str, resume_content: &str) -> String {
    template_for(mode)
        .replace("{job_description}", job_description)
        .replace("{resume_content}", resume_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Seeking a Python developer with 3 years experience";
    const RESUME: &str = "5 years Python, Django, REST APIs";

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_compose_is_deterministic() {
        for mode in [Mode::ZeroShot, Mode::OneShot, Mode::FewShot] {
            assert_eq!(compose(mode, JD, RESUME), compose(mode, JD, RESUME));
        }
    }

    #[test]
    fn test_zero_shot_contains_each_literal_exactly_once() {
        let prompt = compose(Mode::ZeroShot, JD, RESUME);
        assert!(prompt.contains("Evaluate the provided resume"));
        assert_eq!(count(&prompt, JD), 1);
        assert_eq!(count(&prompt, RESUME), 1);
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_content}"));
    }

    #[test]
    fn test_every_mode_substitutes_both_values() {
        for mode in [Mode::ZeroShot, Mode::OneShot, Mode::FewShot] {
            let prompt = compose(mode, JD, RESUME);
            assert_eq!(count(&prompt, JD), 1, "{mode:?}");
            assert_eq!(count(&prompt, RESUME), 1, "{mode:?}");
        }
    }

    #[test]
    fn test_mode_switch_changes_only_the_template_portion() {
        let zero = compose(Mode::ZeroShot, JD, RESUME);
        let one = compose(Mode::OneShot, JD, RESUME);
        let few = compose(Mode::FewShot, JD, RESUME);

        assert_ne!(zero, one);
        assert_ne!(one, few);

        // The substituted values survive every switch untouched.
        for prompt in [&zero, &one, &few] {
            assert!(prompt.contains(JD));
            assert!(prompt.contains(RESUME));
        }

        // Only one-shot and few-shot carry worked examples.
        assert!(!zero.contains("Full Stack Developer"));
        assert!(one.contains("Full Stack Developer"));
        assert!(few.contains("Data Scientist"));
    }

    #[test]
    fn test_mode_parses_from_kebab_case() {
        assert_eq!("zero-shot".parse::<Mode>(), Ok(Mode::ZeroShot));
        assert_eq!("One-Shot".parse::<Mode>(), Ok(Mode::OneShot));
        assert_eq!(" few-shot ".parse::<Mode>(), Ok(Mode::FewShot));
        assert!("many-shot".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Mode::ZeroShot).unwrap(),
            "\"zero-shot\""
        );
    }
}
