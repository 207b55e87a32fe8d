//! Declaration checks using Validation.

use crate::builder::Declaration;
use crate::core::{Event, State};
use crate::validation::issues::DeclarationIssue;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating a set of declarations.
pub type DeclarationValidation = Validation<(), NonEmptyVec<DeclarationIssue>>;

/// Check declarations, accumulating ALL issues.
///
/// Returns `Validation::Success(())` when the declarations expand into a
/// table without surprises. Otherwise returns `Validation::Failure` with
/// every issue found, in declaration order.
pub fn validate_declarations<E: Event, S: State>(
    declarations: &[Declaration<E, S>],
) -> DeclarationValidation {
    let mut checks: Vec<DeclarationValidation> = Vec::new();
    let mut seen: HashMap<(&E, &S), &S> = HashMap::new();

    for declaration in declarations {
        checks.push(require_sources(declaration));

        for source in &declaration.sources {
            let key = (&declaration.event, source);
            if let Some(first) = seen.get(&key) {
                if *first != &declaration.destination {
                    checks.push(Validation::fail(DeclarationIssue::ConflictingDestination {
                        event: declaration.event.to_string(),
                        source_state: source.to_string(),
                        first: first.to_string(),
                        second: declaration.destination.to_string(),
                    }));
                }
            }
            seen.insert(key, &declaration.destination);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn require_sources<E: Event, S: State>(declaration: &Declaration<E, S>) -> DeclarationValidation {
    if declaration.sources.is_empty() {
        Validation::fail(DeclarationIssue::EmptySources {
            event: declaration.event.to_string(),
        })
    } else {
        Validation::success(())
    }
}
