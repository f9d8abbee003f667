use fsmcalc::calc_engine::Machine;
use fsmcalc::{evaluate, EngineConfig, Status};
use proptest::prelude::*;

const MAX_INPUT_CHARS: usize = 48;

/// Token lists of fully parenthesized expressions with unsigned literals.
fn grouped_expression() -> impl Strategy<Value = Vec<String>> {
    let literal = (0u32..1000, prop::option::of(0u32..100)).prop_map(|(int, frac)| match frac {
        Some(frac) => vec![format!("{int}.{frac}")],
        None => vec![int.to_string()],
    });
    literal.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "^"]), inner).prop_map(
            |(lhs, op, rhs)| {
                let mut tokens = vec!["(".to_string()];
                tokens.extend(lhs);
                tokens.push(op.to_string());
                tokens.extend(rhs);
                tokens.push(")".to_string());
                tokens
            },
        )
    })
}

fn same_outcome(lhs: (f64, Status), rhs: (f64, Status)) -> bool {
    lhs.1 == rhs.1 && (lhs.0.to_bits() == rhs.0.to_bits() || (lhs.0.is_nan() && rhs.0.is_nan()))
}

proptest! {
    #[test]
    fn whitespace_between_tokens_is_irrelevant(
        tokens in grouped_expression(),
        gaps in prop::collection::vec(0usize..4, 0..=64),
    ) {
        let compact = tokens.concat();
        let mut spaced = String::new();
        for (i, token) in tokens.iter().enumerate() {
            spaced.push_str(&" ".repeat(gaps.get(i).copied().unwrap_or(1)));
            spaced.push_str(token);
        }
        spaced.push_str("  ");

        let lhs = evaluate(&compact);
        let rhs = evaluate(&spaced);
        prop_assert!(same_outcome(lhs, rhs), "{compact:?} -> {lhs:?}, {spaced:?} -> {rhs:?}");
    }

    #[test]
    fn every_failure_yields_zero(input in "[0-9+*/^() .\t-]{0,48}") {
        let (value, status) = evaluate(&input);
        if status != Status::Success {
            prop_assert_eq!(value.to_bits(), 0.0f64.to_bits());
        }
    }

    #[test]
    fn arbitrary_text_always_terminates(input in any::<String>()) {
        let (value, status) = evaluate(&input);
        if status != Status::Success {
            prop_assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn earlier_calls_do_not_affect_later_ones(
        first in "[0-9+() -]{0,48}",
        second in "[0-9+() -]{0,48}",
    ) {
        let fresh = evaluate(&second);
        let _ = evaluate(&first);
        let after = evaluate(&second);
        prop_assert!(same_outcome(fresh, after));
    }

    #[test]
    fn cursor_never_moves_backwards(input in "[0-9+*/^() .-]{0,48}") {
        let mut machine = Machine::new(&input, &EngineConfig::default()).unwrap();
        let mut last = machine.position();
        for _ in 0..=MAX_INPUT_CHARS + 1 {
            if machine.step().is_terminal() {
                break;
            }
            prop_assert!(machine.position() > last);
            last = machine.position();
        }
        prop_assert!(machine.state().is_terminal());
    }
}
