//! Graphviz (DOT) rendering.

use crate::core::{Event, State, TransitionError, TransitionTable};

struct DotGraph {
    label: Option<String>,
    edges: Vec<DotEdge>,
    nodes: Vec<String>,
}

struct DotEdge {
    tail: String,
    head: String,
    label: String,
}

impl From<DotGraph> for String {
    fn from(graph: DotGraph) -> Self {
        let mut dot = String::new();

        dot.push_str("digraph fsm {\n");
        if let Some(label) = graph.label {
            dot.push_str(&format!("    label=\"{label}\"\n"));
        }

        for edge in graph.edges {
            dot.push_str(&format!(
                "    \"{}\" -> \"{}\" [ label = \"{}\" ];\n",
                edge.tail, edge.head, edge.label
            ));
        }
        dot.push('\n');

        for node in graph.nodes {
            dot.push_str(&format!("    \"{node}\";\n"));
        }

        dot.push_str("}\n");
        dot
    }
}

/// Render `table` as a DOT digraph.
///
/// Edges leaving `current` come first; each group keeps the sorted
/// trigger-source order. Nodes follow in sorted state order.
pub fn render<E: Event, S: State>(
    table: &TransitionTable<E, S>,
    current: &S,
) -> Result<String, TransitionError> {
    let mut leading = Vec::new();
    let mut trailing = Vec::new();

    for trigger in table.sorted_trigger_sources() {
        let destination = table.transform(trigger.source(), trigger.event())?;
        let edge = DotEdge {
            tail: table.state_display_name(trigger.source()),
            head: table.state_display_name(destination),
            label: table.event_display_name(trigger.event()),
        };
        if trigger.source() == current {
            leading.push(edge);
        } else {
            trailing.push(edge);
        }
    }
    leading.extend(trailing);

    let graph = DotGraph {
        label: Some(table.name().to_string()).filter(|name| !name.is_empty()),
        edges: leading,
        nodes: table
            .sorted_states()
            .iter()
            .map(|state| table.state_display_name(state))
            .collect(),
    };
    Ok(graph.into())
}
