//! Property-based tests for tables and machines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables and event sequences.

use proptest::prelude::*;
use std::collections::BTreeSet;
use switchyard::builder::{Declaration, TableBuilder};
use switchyard::core::TransitionTable;
use switchyard::fsm_enum;
use switchyard::machine::{Fsm, Machine, SyncMachine};
use switchyard::visualize::VisualizeFormat;

fsm_enum! {
    enum TestEvent {
        Start,
        Pause,
        Resume,
        Finish,
    }
}

fsm_enum! {
    enum TestState {
        Idle,
        Running,
        Paused,
        Done,
        Failed,
    }
}

const EVENTS: [TestEvent; 4] = [
    TestEvent::Start,
    TestEvent::Pause,
    TestEvent::Resume,
    TestEvent::Finish,
];

const STATES: [TestState; 5] = [
    TestState::Idle,
    TestState::Running,
    TestState::Paused,
    TestState::Done,
    TestState::Failed,
];

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> TestEvent {
        EVENTS[index]
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> TestState {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_declaration()(
        event in arbitrary_event(),
        sources in prop::collection::vec(arbitrary_state(), 1..3),
        destination in arbitrary_state(),
    ) -> Declaration<TestEvent, TestState> {
        Declaration::new(event, sources, destination)
    }
}

prop_compose! {
    fn arbitrary_table()(
        declarations in prop::collection::vec(arbitrary_declaration(), 0..8)
    ) -> TransitionTable<TestEvent, TestState> {
        TransitionTable::new(declarations)
    }
}

proptest! {
    #[test]
    fn available_events_are_exactly_the_successful_lookups(
        table in arbitrary_table(),
        state in arbitrary_state(),
    ) {
        let available = table.available_events(&state);
        let successful: BTreeSet<TestEvent> = EVENTS
            .iter()
            .filter(|event| table.transform(&state, event).is_ok())
            .copied()
            .collect();
        prop_assert_eq!(available, successful);
    }

    #[test]
    fn lookup_errors_are_classified_by_event_presence(
        table in arbitrary_table(),
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        match table.transform(&state, &event) {
            Ok(_) => {
                prop_assert!(table.match_occurs(&state, &event));
            }
            Err(err) if table.contains_event(&event) => {
                prop_assert!(err.is_inappropriate_event());
            }
            Err(err) => {
                prop_assert!(err.is_non_existent_event());
            }
        }
    }

    #[test]
    fn last_declaration_wins(
        event in arbitrary_event(),
        source in arbitrary_state(),
        first in arbitrary_state(),
        second in arbitrary_state(),
    ) {
        let table = TransitionTable::new(vec![
            Declaration::new(event, [source], first),
            Declaration::new(event, [source], second),
        ]);
        prop_assert_eq!(table.transform(&source, &event).unwrap(), &second);
        prop_assert_eq!(table.len(), 1);
    }

    #[test]
    fn trigger_is_transactional(
        table in arbitrary_table(),
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..12),
    ) {
        let mut machine = Machine::new(initial, table);

        for event in &events {
            let before = machine.current();
            let expected = machine.table().transform(&before, event).ok().copied();
            match machine.trigger(event) {
                Ok(()) => {
                    prop_assert_eq!(Some(machine.current()), expected);
                }
                Err(_) => {
                    prop_assert_eq!(expected, None);
                    prop_assert_eq!(machine.current(), before);
                }
            }
        }
    }

    #[test]
    fn both_variants_follow_the_same_path(
        table in arbitrary_table(),
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..12),
    ) {
        let mut plain = Machine::new(initial, table);
        let guarded = SyncMachine::new(initial, plain.shared_table().clone());

        for event in &events {
            let plain_result = plain.trigger(event).map_err(|err| err.kind());
            let guarded_result = guarded.trigger(event).map_err(|err| err.kind());
            prop_assert_eq!(plain_result, guarded_result);
            prop_assert_eq!(plain.current(), guarded.current());
        }
    }

    #[test]
    fn reads_are_idempotent(
        table in arbitrary_table(),
        state in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..4),
    ) {
        let machine = Machine::new(state, table);

        prop_assert_eq!(machine.available_current_events(), machine.available_current_events());
        prop_assert_eq!(
            machine.match_current_all_occur(&events),
            machine.match_current_all_occur(&events)
        );
        prop_assert_eq!(machine.table().sorted_states(), machine.table().sorted_states());
        prop_assert_eq!(machine.current(), state);
    }

    #[test]
    fn visualization_is_deterministic(
        declarations in prop::collection::vec(arbitrary_declaration(), 0..8),
        state in arbitrary_state(),
    ) {
        // Two builds get independently seeded hash maps.
        let build = |declarations: Vec<Declaration<TestEvent, TestState>>| {
            TableBuilder::new().name("generated").declarations(declarations).build()
        };
        let first = Machine::new(state, build(declarations.clone()));
        let second = Machine::new(state, build(declarations));

        for format in [
            VisualizeFormat::Graphviz,
            VisualizeFormat::MermaidStateDiagram,
            VisualizeFormat::MermaidFlowChart,
        ] {
            prop_assert_eq!(first.visualize(format).unwrap(), second.visualize(format).unwrap());
        }
    }

    #[test]
    fn clones_do_not_share_the_cursor(
        table in arbitrary_table(),
        initial in arbitrary_state(),
        moved_to in arbitrary_state(),
    ) {
        let original = SyncMachine::new(initial, table);
        let copy = original.clone();

        copy.set_current(moved_to);
        prop_assert_eq!(original.current(), initial);
        prop_assert_eq!(copy.current(), moved_to);
    }
}
