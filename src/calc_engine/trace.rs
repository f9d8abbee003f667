use super::ops::Operator;

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub operation: String,
    pub result: f64,
}

/// Applied folds of one evaluation, in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct EvaluationTrace {
    pub steps: Vec<Step>,
    pub detailed_mode: bool,
}

impl EvaluationTrace {
    pub fn new(detailed_mode: bool) -> Self {
        EvaluationTrace {
            steps: Vec::new(),
            detailed_mode,
        }
    }

    /// `b` is the left operand as written, `a` the right one.
    pub fn add_fold(&mut self, op: Operator, a: f64, b: f64, result: f64) {
        if self.detailed_mode {
            self.steps.push(Step {
                operation: format!("{} {} {}", b, op, a),
                result,
            });
        }
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_trace_records_nothing() {
        let mut trace = EvaluationTrace::new(false);
        trace.add_fold(Operator::Add, 1.0, 2.0, 3.0);
        assert!(trace.steps.is_empty());
    }

    #[test]
    fn fold_reads_left_to_right() {
        let mut trace = EvaluationTrace::new(true);
        trace.add_fold(Operator::Subtract, 2.0, 10.0, 8.0);
        assert_eq!(
            trace.into_steps(),
            vec![Step { operation: "10 - 2".to_string(), result: 8.0 }]
        );
    }
}
