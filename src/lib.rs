//! Switchyard: finite state machines driven by an immutable transition table
//!
//! A [`TransitionTable`] maps `(event, source state)` pairs to destination
//! states. Machines hold a current state over a shared table and move it
//! only when the table allows the requested event.
//!
//! # Core Concepts
//!
//! - **Table**: Immutable lookup built once from declarations
//! - **Machine**: A cursor over a table, either plain ([`Machine`]) or
//!   lock-guarded for sharing across threads ([`SyncMachine`])
//! - **Errors**: Lookup failures distinguish an unknown event from one that
//!   is known but not applicable, and may be rewritten by a translator
//! - **Visualization**: Deterministic Graphviz and Mermaid output
//!
//! # Example
//!
//! ```rust
//! use switchyard::{Declaration, Fsm, Machine, TableBuilder, VisualizeFormat};
//!
//! let table = TableBuilder::new()
//!     .name("door")
//!     .declare(Declaration::new("open", ["closed"], "open"))
//!     .declare(Declaration::new("close", ["open"], "closed"))
//!     .declare(Declaration::new("lock", ["closed"], "locked"))
//!     .declare(Declaration::new("unlock", ["locked"], "closed"))
//!     .build();
//!
//! let mut door = Machine::new("closed", table);
//! door.trigger(&"lock").unwrap();
//! assert!(door.is(&"locked"));
//!
//! let err = door.trigger(&"open").unwrap_err();
//! assert_eq!(err.to_string(), "fsm: event 'open' inappropriate in the state 'locked'");
//!
//! let diagram = door.visualize(VisualizeFormat::MermaidStateDiagram).unwrap();
//! assert!(diagram.starts_with("---\ntitle: door\n---\nstateDiagram-v2\n"));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod validation;
pub mod visualize;

#[doc(hidden)]
pub use serde as __serde;

// Re-export commonly used types
pub use builder::{BuildError, Declaration, DeclarationBuilder, TableBuilder, TableDefinition};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use self::core::{ErrorKind, ErrorTranslator, Event, State, TransitionError, TransitionTable};
pub use machine::{Fsm, Machine, SyncMachine};
pub use visualize::{visualize, visualize_str, VisualizeError, VisualizeFormat};
