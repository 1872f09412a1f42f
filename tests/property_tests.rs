//! Property-based tests for the calculator state machine.
//!
//! These tests verify invariants that should hold for every key sequence,
//! not just specific examples.

use pocketcalc::calculator::is_well_formed;
use pocketcalc::{CalculatorState, DecimalSeparator, Language, Operator, Phase, Translations};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Input {
    Digit(u8),
    Decimal,
    Backspace,
    ToggleSign,
    Clear,
    Operator(Operator),
    Evaluate,
}

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Multiply),
        Just(Operator::Divide),
        Just(Operator::Add),
        Just(Operator::Subtract),
    ]
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => (0u8..10).prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        1 => Just(Input::Backspace),
        1 => Just(Input::ToggleSign),
        1 => Just(Input::Clear),
        1 => operator().prop_map(Input::Operator),
        1 => Just(Input::Evaluate),
    ]
}

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![
        Just(Language::Russian),
        Just(Language::English),
        Just(Language::French),
    ]
}

fn apply(state: &mut CalculatorState, input: &Input, translations: &Translations) {
    match input {
        Input::Digit(d) => state.input_digit(*d),
        Input::Decimal => state.add_decimal_point(),
        Input::Backspace => state.backspace(),
        Input::ToggleSign => state.toggle_sign(),
        Input::Clear => state.clear(),
        Input::Operator(op) => state.select_operator(*op),
        Input::Evaluate => state.evaluate(translations),
    }
}

fn nonzero_buffer() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,6}(\\.[0-9]{0,4})?"
}

fn enter(state: &mut CalculatorState, literal: &str) {
    for c in literal.chars() {
        match c.to_digit(10) {
            Some(d) => state.input_digit(d as u8),
            None => state.add_decimal_point(),
        }
    }
}

proptest! {
    /// Property: digits alone never produce a leading zero
    #[test]
    fn test_digits_never_lead_with_zero(digits in prop::collection::vec(0u8..10, 0..30)) {
        let mut state = CalculatorState::default();
        for d in digits {
            state.input_digit(d);
        }
        let display = state.display();
        prop_assert!(display == "0" || !display.starts_with('0'));
    }

    /// Property: the display is always a well-formed literal unless in error
    #[test]
    fn test_display_stays_well_formed(
        language in language(),
        inputs in prop::collection::vec(input(), 0..60)
    ) {
        let translations = Translations::load(language).unwrap();
        let mut state = CalculatorState::for_language(language);
        for input in &inputs {
            apply(&mut state, input, &translations);
            if state.phase() != Phase::Error {
                prop_assert!(
                    is_well_formed(state.display(), language.separator()),
                    "{:?} after {:?}",
                    state.display(),
                    input
                );
            }
        }
    }

    /// Property: in error only clear changes anything
    #[test]
    fn test_error_only_accepts_clear(inputs in prop::collection::vec(input(), 0..20)) {
        let translations = Translations::load(Language::English).unwrap();
        let mut state = CalculatorState::default();
        enter(&mut state, "5");
        state.select_operator(Operator::Divide);
        enter(&mut state, "0");
        state.evaluate(&translations);
        prop_assert!(state.is_error());

        for input in inputs.iter().filter(|i| !matches!(i, Input::Clear)) {
            apply(&mut state, input, &translations);
            prop_assert!(state.is_error());
            prop_assert_eq!(state.display(), "Cannot divide by zero");
        }

        state.clear();
        prop_assert!(!state.is_error());
        prop_assert_eq!(state.display(), "0");
    }

    /// Property: toggling the sign twice restores any non-zero number
    #[test]
    fn test_toggle_sign_is_involution(literal in nonzero_buffer()) {
        let mut state = CalculatorState::default();
        enter(&mut state, &literal);
        let before = state.display().to_string();
        state.toggle_sign();
        prop_assert_ne!(state.display(), before.as_str());
        state.toggle_sign();
        prop_assert_eq!(state.display(), before.as_str());
    }

    /// Property: backspace on a single digit, signed or not, yields zero
    #[test]
    fn test_backspace_single_digit(d in 1u8..10, negative in any::<bool>()) {
        let mut state = CalculatorState::default();
        state.input_digit(d);
        if negative {
            state.toggle_sign();
        }
        state.backspace();
        prop_assert_eq!(state.display(), "0");
    }

    /// Property: a second decimal point changes nothing
    #[test]
    fn test_decimal_point_idempotent(literal in nonzero_buffer(), comma in any::<bool>()) {
        let separator = if comma { DecimalSeparator::Comma } else { DecimalSeparator::Period };
        let mut state = CalculatorState::new(separator);
        enter(&mut state, &literal);
        state.add_decimal_point();
        let once = state.display().to_string();
        state.add_decimal_point();
        prop_assert_eq!(state.display(), once.as_str());
    }

    /// Property: addition of integers matches integer arithmetic
    #[test]
    fn test_integer_addition(a in 0u32..1_000_000, b in 0u32..1_000_000, language in language()) {
        let translations = Translations::load(language).unwrap();
        let mut state = CalculatorState::for_language(language);
        enter(&mut state, &a.to_string());
        state.select_operator(Operator::Add);
        enter(&mut state, &b.to_string());
        state.evaluate(&translations);
        let expected = (u64::from(a) + u64::from(b)).to_string();
        prop_assert_eq!(state.display(), expected.as_str());
    }
}
