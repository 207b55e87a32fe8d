//! Builder for constructing transition tables.

use crate::builder::declaration::{Declaration, DeclarationBuilder};
use crate::builder::error::BuildError;
use crate::core::{ErrorTranslator, Event, State, TransitionTable};
use crate::validation::{validate_declarations, DeclarationValidation};
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::{debug, warn};

/// Builder for constructing transition tables with a fluent API.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::{Declaration, TableBuilder};
///
/// let table = TableBuilder::new()
///     .name("Lamp FSM")
///     .declare(Declaration::new("open", ["closed"], "opened").named("<open>"))
///     .declare(Declaration::new("close", ["opened"], "closed"))
///     .state_name("opened", ">opened")
///     .build();
///
/// assert_eq!(table.name(), "Lamp FSM");
/// assert_eq!(table.event_display_name(&"open"), "<open>");
/// assert_eq!(table.state_display_name(&"opened"), ">opened");
/// assert_eq!(table.state_display_name(&"closed"), "closed");
/// ```
pub struct TableBuilder<E: Event, S: State> {
    name: String,
    declarations: Vec<Declaration<E, S>>,
    state_names: HashMap<S, String>,
    event_names: HashMap<E, String>,
    translator: Option<Arc<dyn ErrorTranslator>>,
}

impl<E: Event, S: State> TableBuilder<E, S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            declarations: Vec::new(),
            state_names: HashMap::new(),
            event_names: HashMap::new(),
            translator: None,
        }
    }

    /// Set the table title used by diagrams (optional).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a declaration using a builder.
    /// Returns an error if the builder fails validation.
    pub fn declaration(mut self, builder: DeclarationBuilder<E, S>) -> Result<Self, BuildError> {
        let declaration = builder.build()?;
        self.declarations.push(declaration);
        Ok(self)
    }

    /// Add a pre-built declaration.
    pub fn declare(mut self, declaration: Declaration<E, S>) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Add multiple declarations at once.
    pub fn declarations<I>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = Declaration<E, S>>,
    {
        self.declarations.extend(declarations);
        self
    }

    /// Set a custom display name for one state.
    pub fn state_name(mut self, state: S, name: impl Into<String>) -> Self {
        self.state_names.insert(state, name.into());
        self
    }

    /// Set custom display names for several states.
    ///
    /// Named states join the table's state universe even when no
    /// declaration mentions them.
    pub fn state_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = (S, String)>,
    {
        self.state_names.extend(names);
        self
    }

    /// Set a custom display name for one event.
    pub fn event_name(mut self, event: E, name: impl Into<String>) -> Self {
        self.event_names.insert(event, name.into());
        self
    }

    /// Set custom display names for several events.
    ///
    /// Names for events no declaration mentions are ignored.
    pub fn event_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = (E, String)>,
    {
        self.event_names.extend(names);
        self
    }

    /// Install a translator for lookup errors (optional).
    pub fn translator<T>(mut self, translator: T) -> Self
    where
        T: ErrorTranslator + 'static,
    {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Check the declarations collected so far, accumulating every issue.
    pub fn validate(&self) -> DeclarationValidation {
        validate_declarations(&self.declarations)
    }

    /// Build the table, rejecting declarations that [`validate`](Self::validate) flags.
    pub fn build_checked(self) -> Result<TransitionTable<E, S>, BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(self.build()),
            Validation::Failure(errors) => {
                let issues: Vec<_> = errors.iter().cloned().collect();
                warn!(issues = issues.len(), "rejected transition table declarations");
                Err(BuildError::InvalidDeclarations(issues))
            }
        }
    }

    /// Build the table.
    ///
    /// Every source of every declaration becomes one entry. A later
    /// declaration for the same `(event, source)` pair replaces the earlier
    /// destination.
    pub fn build(self) -> TransitionTable<E, S> {
        let mut events: HashMap<E, String> = HashMap::new();
        let mut states: HashMap<S, String> = HashMap::new();
        let mut routes: HashMap<E, HashMap<S, S>> = HashMap::new();

        for declaration in self.declarations {
            let Declaration {
                event,
                sources,
                destination,
                name,
            } = declaration;

            let display = events.entry(event.clone()).or_default();
            if let Some(name) = name.filter(|name| !name.is_empty()) {
                *display = name;
            }
            states.entry(destination.clone()).or_default();

            if sources.is_empty() {
                continue;
            }
            let targets = routes.entry(event).or_default();
            for source in sources {
                states.entry(source.clone()).or_default();
                targets.insert(source, destination.clone());
            }
        }

        states.extend(self.state_names);
        for (event, name) in self.event_names {
            if let Some(display) = events.get_mut(&event) {
                *display = name;
            }
        }

        let table = TransitionTable::from_parts(self.name, events, states, routes, self.translator);
        debug!(
            name = table.name(),
            entries = table.len(),
            events = table.sorted_events().len(),
            states = table.sorted_states().len(),
            "built transition table"
        );
        table
    }
}

impl<E: Event, S: State> Default for TableBuilder<E, S> {
    fn default() -> Self {
        Self::new()
    }
}
