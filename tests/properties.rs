//! Property tests for the entry state machine.
//!
//! Run with: cargo test --test properties

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use spark_code_field::{
    code_field, tracked_focus, CellEvent, CodeFieldConfig, CodeFieldProps, CodeState, Effect,
    EntryState, FieldEvent, Matcher,
};

fn field_event(len: usize) -> impl Strategy<Value = FieldEvent> {
    // Indices may fall outside the field; those events must be ignored.
    let index = 0..len + 2;
    prop_oneof![
        4 => (proptest::char::range('0', 'z'), index.clone())
            .prop_map(|(ch, index)| FieldEvent::CharacterEntered { ch, index }),
        2 => Just(FieldEvent::BackspacePressed),
        2 => index.prop_map(FieldEvent::CellFocused),
        1 => Just(FieldEvent::Cleared),
    ]
}

fn scenario() -> impl Strategy<Value = (usize, Vec<FieldEvent>)> {
    (1usize..8).prop_flat_map(|len| (Just(len), prop::collection::vec(field_event(len), 0..60)))
}

proptest! {
    #[test]
    fn prop_filled_prefix_holds((len, events) in scenario()) {
        let matcher = Matcher::default();
        let mut state = CodeState::new(len);
        for event in events {
            state.step(event, &matcher);
            prop_assert!(state.holds_invariant());
            prop_assert_eq!(state.value().chars().count(), state.cursor());
        }
    }

    #[test]
    fn prop_complete_means_full((len, events) in scenario()) {
        let matcher = Matcher::default();
        let mut state = CodeState::new(len);
        for event in events {
            let effects = state.step(event, &matcher);
            let fulfilled = effects.iter().any(|e| matches!(e, Effect::Fulfilled(_)));
            if fulfilled {
                prop_assert_eq!(state.entry(), EntryState::Complete);
            }
            if state.is_complete() {
                prop_assert!(state.cells().iter().all(Option::is_some));
            }
        }
    }

    #[test]
    fn prop_mismatch_always_resets(
        code in "[a-z]{4}",
        target in "[A-Z]{4}",
    ) {
        let matcher = Matcher::new(Some(target), false);
        let mut state = CodeState::new(4);
        let effects = code
            .chars()
            .enumerate()
            .map(|(index, ch)| state.step(FieldEvent::CharacterEntered { ch, index }, &matcher))
            .last()
            .unwrap_or_default();
        prop_assert_eq!(state.entry(), EntryState::Entering(0));
        prop_assert_eq!(state.value(), "");
        prop_assert_eq!(effects.last(), Some(&Effect::Focus(0)));
    }

    #[test]
    fn prop_single_wrong_character_resets(
        (target, at) in "[A-Za-z0-9]{1,8}".prop_flat_map(|t| {
            let len = t.chars().count();
            (Just(t), 0..len)
        }),
        replacement in proptest::char::range('!', '~'),
    ) {
        let mut typed: Vec<char> = target.chars().collect();
        prop_assume!(typed[at] != replacement);
        typed[at] = replacement;

        let len = typed.len();
        let matcher = Matcher::new(Some(target), false);
        let mut state = CodeState::new(len);
        let mut fulfilled = Vec::new();
        for (index, ch) in typed.iter().copied().enumerate() {
            for effect in state.step(FieldEvent::CharacterEntered { ch, index }, &matcher) {
                if let Effect::Fulfilled(done) = effect {
                    fulfilled.push(done);
                }
            }
        }

        prop_assert_eq!(fulfilled.len(), 1);
        prop_assert_eq!(fulfilled[0].is_matching, Some(false));
        prop_assert_eq!(fulfilled[0].code.chars().collect::<Vec<_>>(), typed);
        prop_assert!(state.cells().iter().all(Option::is_none));
        prop_assert_eq!(state.entry(), EntryState::Entering(0));
    }

    #[test]
    fn prop_exact_target_matches(target in "[A-Za-z0-9]{1,8}") {
        let len = target.chars().count();
        let matcher = Matcher::new(Some(target.clone()), false);
        let mut state = CodeState::new(len);
        let mut effects = Vec::new();
        for (index, ch) in target.chars().enumerate() {
            effects.extend(state.step(FieldEvent::CharacterEntered { ch, index }, &matcher));
        }

        let matched: Vec<Option<bool>> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::Fulfilled(done) => Some(done.is_matching),
                _ => None,
            })
            .collect();
        prop_assert_eq!(matched, vec![Some(true)]);
        prop_assert_eq!(state.entry(), EntryState::Complete);
        prop_assert_eq!(state.value(), target);
        prop_assert!(state.cells().iter().all(Option::is_some));
    }

    #[test]
    fn prop_backspace_targets_previous_cell(len in 1usize..8, typed in 0usize..8) {
        let typed = typed.min(len.saturating_sub(1));
        let matcher = Matcher::default();
        let mut state = CodeState::new(len);
        for index in 0..typed {
            state.step(FieldEvent::CharacterEntered { ch: 'x', index }, &matcher);
        }
        let effects = state.step(FieldEvent::BackspacePressed, &matcher);
        let expected = typed.saturating_sub(1);
        prop_assert_eq!(state.entry(), EntryState::Entering(expected));
        prop_assert_eq!(effects.last(), Some(&Effect::Focus(expected)));
    }

    #[test]
    fn prop_fulfill_fires_once_per_entry(code in "[0-9]{1,8}") {
        let len = code.chars().count();
        let calls = Rc::new(Cell::new(0usize));
        let (handles, focused) = tracked_focus(len);
        let config = CodeFieldConfig { code_length: len, ..Default::default() };
        let props = CodeFieldProps::new(config).on_fulfill({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        let mut field = code_field(props, handles);

        for ch in code.chars() {
            let index = focused.get().unwrap_or(0);
            field.dispatch(index, CellEvent::TextChanged(ch.to_string()));
        }
        prop_assert_eq!(calls.get(), 1);
        prop_assert_eq!(field.value(), code);
    }
}
