//! Diagram rendering for transition tables.
//!
//! Every renderer walks [`TransitionTable::sorted_trigger_sources`] and
//! [`TransitionTable::sorted_states`], so the same table and current state
//! always produce byte-identical text.
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::Declaration;
//! use switchyard::core::TransitionTable;
//! use switchyard::machine::Machine;
//! use switchyard::visualize::{visualize, VisualizeFormat};
//!
//! let machine = Machine::new(
//!     "closed",
//!     TransitionTable::new(vec![
//!         Declaration::new("open", ["closed"], "open"),
//!         Declaration::new("close", ["open"], "closed"),
//!     ]),
//! );
//!
//! let diagram = visualize(&machine, VisualizeFormat::MermaidStateDiagram).unwrap();
//! assert_eq!(
//!     diagram,
//!     "stateDiagram-v2\n    [*] --> closed\n    closed --> open: open\n    open --> closed: close\n"
//! );
//! ```

mod error;
pub mod graphviz;
pub mod mermaid;

pub use error::VisualizeError;

use crate::core::{Event, State};
use crate::machine::Fsm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of [`visualize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualizeFormat {
    /// Graphviz DOT (<https://graphviz.org>)
    Graphviz,
    /// Mermaid `stateDiagram-v2`
    #[serde(alias = "mermaid")]
    MermaidStateDiagram,
    /// Mermaid flow chart with the current state highlighted
    MermaidFlowChart,
}

impl VisualizeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Graphviz => "graphviz",
            Self::MermaidStateDiagram => "mermaid-state-diagram",
            Self::MermaidFlowChart => "mermaid-flow-chart",
        }
    }
}

impl fmt::Display for VisualizeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisualizeFormat {
    type Err = VisualizeError;

    /// Parse a format name. Plain `mermaid` means the state diagram.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graphviz" => Ok(Self::Graphviz),
            "mermaid" | "mermaid-state-diagram" => Ok(Self::MermaidStateDiagram),
            "mermaid-flow-chart" => Ok(Self::MermaidFlowChart),
            other => Err(VisualizeError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render the machine's table in `format`, marking its current state.
pub fn visualize<E, S, F>(fsm: &F, format: VisualizeFormat) -> Result<String, VisualizeError>
where
    E: Event,
    S: State,
    F: Fsm<E, S> + ?Sized,
{
    let table = fsm.table();
    let current = fsm.current();
    let rendered = match format {
        VisualizeFormat::Graphviz => graphviz::render(table, &current)?,
        VisualizeFormat::MermaidStateDiagram => mermaid::render_state_diagram(table, &current)?,
        VisualizeFormat::MermaidFlowChart => mermaid::render_flow_chart(table, &current)?,
    };
    Ok(rendered)
}

/// Like [`visualize`], with the format given by name.
pub fn visualize_str<E, S, F>(fsm: &F, format: &str) -> Result<String, VisualizeError>
where
    E: Event,
    S: State,
    F: Fsm<E, S> + ?Sized,
{
    visualize(fsm, format.parse()?)
}
