//! Immutable transition table.
//!
//! The table maps `(event, source state)` pairs to destination states and
//! answers every introspection query the machines and visualizers need.
//! It never changes after [`TableBuilder::build`](crate::builder::TableBuilder::build).

use super::error::{ErrorTranslator, TransitionError};
use super::state::{Event, State};
use crate::builder::{Declaration, TableBuilder};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Key of a single table entry: the event and the state it fires from.
///
/// Ordering compares the source state first and the event second, which is
/// the order diagrams list their edges in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerSource<E, S> {
    // Field order drives the derived `Ord`.
    source: S,
    event: E,
}

impl<E, S> TriggerSource<E, S> {
    pub fn new(event: E, source: S) -> Self {
        Self { source, event }
    }

    pub fn event(&self) -> &E {
        &self.event
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Immutable mapping from `(event, source)` to destination state.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::Declaration;
/// use switchyard::core::TransitionTable;
///
/// let table = TransitionTable::new(vec![
///     Declaration::new("open", ["closed"], "opened"),
///     Declaration::new("close", ["opened"], "closed"),
/// ]);
///
/// assert_eq!(table.transform(&"closed", &"open").unwrap(), &"opened");
/// assert!(table.transform(&"opened", &"open").unwrap_err().is_inappropriate_event());
/// assert!(table.transform(&"opened", &"lock").unwrap_err().is_non_existent_event());
/// ```
pub struct TransitionTable<E: Event, S: State> {
    name: String,
    events: HashMap<E, String>,
    states: HashMap<S, String>,
    // event -> source -> destination. An event is only present here when it
    // has at least one entry.
    routes: HashMap<E, HashMap<S, S>>,
    translator: Option<Arc<dyn ErrorTranslator>>,
}

impl<E: Event, S: State> TransitionTable<E, S> {
    /// Build an unnamed table from declarations, with default display names.
    pub fn new(declarations: Vec<Declaration<E, S>>) -> Self {
        TableBuilder::new().declarations(declarations).build()
    }

    pub(crate) fn from_parts(
        name: String,
        events: HashMap<E, String>,
        states: HashMap<S, String>,
        routes: HashMap<E, HashMap<S, S>>,
        translator: Option<Arc<dyn ErrorTranslator>>,
    ) -> Self {
        Self {
            name,
            events,
            states,
            routes,
            translator,
        }
    }

    /// Table title, empty when none was given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of `(event, source)` entries.
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve the destination reached from `source` through `event`.
    ///
    /// Fails with [`TransitionError::InappropriateEvent`] when the event has
    /// entries but none from `source`, and with
    /// [`TransitionError::NonExistentEvent`] when the event has no entries at
    /// all. Both pass through the configured translator.
    pub fn transform(&self, source: &S, event: &E) -> Result<&S, TransitionError> {
        match self.routes.get(event) {
            Some(targets) => targets.get(source).ok_or_else(|| {
                self.translate(TransitionError::InappropriateEvent {
                    event: self.event_display_name(event),
                    state: self.state_display_name(source),
                })
            }),
            None => Err(self.translate(TransitionError::NonExistentEvent {
                event: self.event_display_name(event),
            })),
        }
    }

    /// Destination of the transition, or `source` itself when the lookup fails.
    pub fn transform_or_stay(&self, source: &S, event: &E) -> S {
        self.transform(source, event)
            .map_or_else(|_| source.clone(), Clone::clone)
    }

    /// Whether `event` moves `source` to exactly `destination`.
    pub fn matches(&self, source: &S, destination: &S, event: &E) -> Result<bool, TransitionError> {
        let target = self.transform(source, event)?;
        Ok(target == destination)
    }

    /// Whether `event` can fire from `source`.
    pub fn match_occurs(&self, source: &S, event: &E) -> bool {
        self.routes
            .get(event)
            .is_some_and(|targets| targets.contains_key(source))
    }

    /// Whether every one of `events` can fire from `source`.
    pub fn match_all_occur(&self, source: &S, events: &[E]) -> bool {
        let available = self.available_events(source);
        events.iter().all(|event| available.contains(event))
    }

    /// Whether `event` was declared, regardless of source state.
    pub fn contains_event(&self, event: &E) -> bool {
        self.events.contains_key(event)
    }

    pub fn contains_all_events(&self, events: &[E]) -> bool {
        events.iter().all(|event| self.events.contains_key(event))
    }

    /// Whether `state` is part of the table's state universe.
    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Events that can fire from `source`.
    pub fn available_events(&self, source: &S) -> BTreeSet<E> {
        self.routes
            .iter()
            .filter(|(_, targets)| targets.contains_key(source))
            .map(|(event, _)| event.clone())
            .collect()
    }

    /// Source states `event` can fire from, in ascending order.
    pub fn available_source_states(&self, event: &E) -> Vec<S> {
        let mut sources: Vec<S> = self
            .routes
            .get(event)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default();
        sources.sort();
        sources
    }

    /// Every entry key, ordered by source state and then by event.
    pub fn sorted_trigger_sources(&self) -> Vec<TriggerSource<E, S>> {
        let mut keys: Vec<TriggerSource<E, S>> = self
            .routes
            .iter()
            .flat_map(|(event, targets)| {
                targets
                    .keys()
                    .map(move |source| TriggerSource::new(event.clone(), source.clone()))
            })
            .collect();
        keys.sort();
        keys
    }

    /// Every entry with its destination, in [`sorted_trigger_sources`](Self::sorted_trigger_sources) order.
    pub fn transitions(&self) -> Vec<(TriggerSource<E, S>, S)> {
        self.sorted_trigger_sources()
            .into_iter()
            .filter_map(|key| {
                let destination = self.routes.get(key.event())?.get(key.source())?.clone();
                Some((key, destination))
            })
            .collect()
    }

    pub fn sorted_states(&self) -> Vec<S> {
        let mut states: Vec<S> = self.states.keys().cloned().collect();
        states.sort();
        states
    }

    pub fn sorted_events(&self) -> Vec<E> {
        let mut events: Vec<E> = self.events.keys().cloned().collect();
        events.sort();
        events
    }

    /// Custom event name if one is set, otherwise the event's `Display` form.
    pub fn event_display_name(&self, event: &E) -> String {
        match self.events.get(event) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => event.to_string(),
        }
    }

    /// Custom state name if one is set, otherwise the state's `Display` form.
    pub fn state_display_name(&self, state: &S) -> String {
        match self.states.get(state) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => state.to_string(),
        }
    }

    fn translate(&self, error: TransitionError) -> TransitionError {
        match &self.translator {
            Some(translator) => translator.translate(error),
            None => error,
        }
    }
}

impl<E: Event, S: State> fmt::Debug for TransitionTable<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("name", &self.name)
            .field("entries", &self.len())
            .field("events", &self.sorted_events())
            .field("states", &self.sorted_states())
            .field("translator", &self.translator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Declaration;

    fn lamp() -> TransitionTable<&'static str, &'static str> {
        TransitionTable::new(vec![
            Declaration::new("open", ["closed"], "opened"),
            Declaration::new("close", ["opened"], "closed"),
            Declaration::new("partial-open", ["closed"], "intermediate"),
        ])
    }

    #[test]
    fn transform_finds_destination() {
        let table = lamp();
        assert_eq!(table.transform(&"closed", &"open").unwrap(), &"opened");
        assert_eq!(
            table.transform(&"closed", &"partial-open").unwrap(),
            &"intermediate"
        );
    }

    #[test]
    fn transform_classifies_failures() {
        let table = lamp();

        let err = table.transform(&"opened", &"open").unwrap_err();
        assert!(matches!(
            err,
            TransitionError::InappropriateEvent { ref event, ref state }
                if event == "open" && state == "opened"
        ));

        let err = table.transform(&"opened", &"lock").unwrap_err();
        assert!(matches!(
            err,
            TransitionError::NonExistentEvent { ref event } if event == "lock"
        ));
    }

    #[test]
    fn transform_or_stay_keeps_source_on_failure() {
        let table = lamp();
        assert_eq!(table.transform_or_stay(&"closed", &"open"), "opened");
        assert_eq!(table.transform_or_stay(&"opened", &"open"), "opened");
        assert_eq!(table.transform_or_stay(&"opened", &"lock"), "opened");
    }

    #[test]
    fn matches_compares_destination_and_propagates_errors() {
        let table = lamp();
        assert!(table.matches(&"opened", &"closed", &"close").unwrap());
        assert!(!table.matches(&"closed", &"closed", &"open").unwrap());
        assert!(table
            .matches(&"closed", &"closed", &"close")
            .unwrap_err()
            .is_inappropriate_event());
    }

    #[test]
    fn occurrence_queries() {
        let table = lamp();
        assert!(table.match_occurs(&"closed", &"open"));
        assert!(!table.match_occurs(&"opened", &"open"));
        assert!(table.match_all_occur(&"closed", &["open", "partial-open"]));
        assert!(!table.match_all_occur(&"closed", &["open", "close"]));
        assert!(table.match_all_occur(&"closed", &[]));
    }

    #[test]
    fn event_membership_ignores_source() {
        let table = lamp();
        assert!(table.contains_event(&"close"));
        assert!(!table.contains_event(&"lock"));
        assert!(table.contains_all_events(&["open", "close"]));
        assert!(!table.contains_all_events(&["open", "lock"]));
    }

    #[test]
    fn available_events_and_sources() {
        let table = lamp();
        let events: Vec<_> = table.available_events(&"closed").into_iter().collect();
        assert_eq!(events, vec!["open", "partial-open"]);
        assert!(table.available_events(&"intermediate").is_empty());
        assert_eq!(table.available_source_states(&"open"), vec!["closed"]);
        assert!(table.available_source_states(&"lock").is_empty());
    }

    #[test]
    fn sorted_enumerations() {
        let table = lamp();
        assert_eq!(table.sorted_states(), vec!["closed", "intermediate", "opened"]);
        assert_eq!(table.sorted_events(), vec!["close", "open", "partial-open"]);

        let keys: Vec<_> = table
            .sorted_trigger_sources()
            .into_iter()
            .map(|ts| (*ts.source(), *ts.event()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("closed", "open"),
                ("closed", "partial-open"),
                ("opened", "close"),
            ]
        );
    }

    #[test]
    fn transitions_pair_keys_with_destinations() {
        let table = lamp();
        let entries: Vec<_> = table
            .transitions()
            .into_iter()
            .map(|(ts, dst)| (*ts.source(), *ts.event(), dst))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("closed", "open", "opened"),
                ("closed", "partial-open", "intermediate"),
                ("opened", "close", "closed"),
            ]
        );
    }

    #[test]
    fn display_names_fall_back_to_value() {
        let table = lamp();
        assert_eq!(table.event_display_name(&"open"), "open");
        assert_eq!(table.state_display_name(&"closed"), "closed");
        assert_eq!(table.state_display_name(&"unknown"), "unknown");
    }

    #[test]
    fn empty_table_rejects_everything() {
        let table: TransitionTable<&str, &str> = TransitionTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table
            .transform(&"any", &"event")
            .unwrap_err()
            .is_non_existent_event());
        assert!(table.sorted_trigger_sources().is_empty());
        assert!(table.sorted_states().is_empty());
        assert!(table.sorted_events().is_empty());
        assert!(table.available_events(&"any").is_empty());
    }

    #[test]
    fn trigger_source_orders_by_source_then_event() {
        let a = TriggerSource::new("z", "a");
        let b = TriggerSource::new("a", "b");
        let c = TriggerSource::new("b", "b");
        let mut keys = vec![c.clone(), b.clone(), a.clone()];
        keys.sort();
        assert_eq!(keys, vec![a, b, c]);
    }
}
