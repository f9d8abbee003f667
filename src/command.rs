use std::time::{Duration, Instant};

use fsmcalc::{Calculator, EngineConfig, Evaluation};

const DETAILS_PREFIX: &str = "details ";
const DETAILS_SUFFIX: &str = " details";

/// A line typed into one of the interactive front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Clear,
    Help,
    /// `details` with nothing to evaluate.
    MissingExpression,
    Evaluate { expression: &'a str, detailed: bool },
}

impl<'a> Command<'a> {
    /// `None` for blank input.
    pub fn parse(input: &'a str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let lower = input.to_ascii_lowercase();
        let command = match lower.as_str() {
            "quit" | "exit" | "q" => Command::Quit,
            "clear" | "reset" => Command::Clear,
            "help" => Command::Help,
            "details" => Command::MissingExpression,
            _ if lower.starts_with(DETAILS_PREFIX) => Command::Evaluate {
                expression: input[DETAILS_PREFIX.len()..].trim(),
                detailed: true,
            },
            _ if lower.ends_with(DETAILS_SUFFIX) => Command::Evaluate {
                expression: input[..input.len() - DETAILS_SUFFIX.len()].trim(),
                detailed: true,
            },
            _ => Command::Evaluate { expression: input, detailed: false },
        };
        Some(command)
    }
}

/// Runs one evaluation and measures how long it took.
pub fn timed_evaluate(config: &EngineConfig, expression: &str, detailed: bool) -> (Evaluation, Duration) {
    let calc = Calculator::new(config.clone().with_trace(detailed));
    let start_time = Instant::now();
    let eval = calc.evaluate(expression);
    (eval, start_time.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsmcalc::Status;

    #[test]
    fn recognises_commands_case_insensitively() {
        assert_eq!(Command::parse(" QUIT "), Some(Command::Quit));
        assert_eq!(Command::parse("Reset"), Some(Command::Clear));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn details_prefix_and_suffix() {
        assert_eq!(
            Command::parse("details 1 + 2"),
            Some(Command::Evaluate { expression: "1 + 2", detailed: true })
        );
        assert_eq!(
            Command::parse("6/3 DETAILS"),
            Some(Command::Evaluate { expression: "6/3", detailed: true })
        );
        assert_eq!(Command::parse("details"), Some(Command::MissingExpression));
    }

    #[test]
    fn anything_else_is_an_expression() {
        assert_eq!(
            Command::parse("(3-2)5"),
            Some(Command::Evaluate { expression: "(3-2)5", detailed: false })
        );
    }

    #[test]
    fn timed_evaluation_honours_detail_flag() {
        let config = EngineConfig::default();
        let (eval, _) = timed_evaluate(&config, "2*3+1", true);
        assert_eq!(eval.status, Status::Success);
        assert_eq!(eval.steps.len(), 2);

        let (eval, _) = timed_evaluate(&config, "2*3+1", false);
        assert!(eval.steps.is_empty());
    }
}
