//! Mermaid rendering, as a state diagram or as a flow chart.

use crate::core::{Event, State, TransitionError, TransitionTable};
use std::collections::HashMap;

/// Fill color of the current state's node in flow charts.
pub const HIGHLIGHT_COLOR: &str = "#00AA00";

/// Render `table` as a `stateDiagram-v2` entered at `current`.
pub fn render_state_diagram<E: Event, S: State>(
    table: &TransitionTable<E, S>,
    current: &S,
) -> Result<String, TransitionError> {
    let mut out = String::new();
    push_title(&mut out, table.name());

    out.push_str("stateDiagram-v2\n");
    out.push_str(&format!("    [*] --> {}\n", table.state_display_name(current)));

    for trigger in table.sorted_trigger_sources() {
        let destination = table.transform(trigger.source(), trigger.event())?;
        out.push_str(&format!(
            "    {} --> {}: {}\n",
            table.state_display_name(trigger.source()),
            table.state_display_name(destination),
            table.event_display_name(trigger.event()),
        ));
    }

    Ok(out)
}

/// Render `table` as a left-to-right flow chart with `current` highlighted.
///
/// Nodes get synthetic ids `id0`, `id1`, ... in sorted state order. The
/// output ends with a `style` line filling the current state's node with
/// [`HIGHLIGHT_COLOR`]. When `current` is outside the table's state
/// universe there is no node to fill, and that line is omitted, so the
/// output ends after the blank line following the edges.
pub fn render_flow_chart<E: Event, S: State>(
    table: &TransitionTable<E, S>,
    current: &S,
) -> Result<String, TransitionError> {
    let states = table.sorted_states();
    let ids: HashMap<&S, String> = states
        .iter()
        .enumerate()
        .map(|(index, state)| (state, format!("id{index}")))
        .collect();
    let id_of = |state: &S| ids.get(state).map(String::as_str).unwrap_or_default();

    let mut out = String::new();
    push_title(&mut out, table.name());
    out.push_str("graph LR\n");

    for state in &states {
        out.push_str(&format!(
            "    {}[{}]\n",
            id_of(state),
            table.state_display_name(state)
        ));
    }
    out.push('\n');

    for trigger in table.sorted_trigger_sources() {
        let destination = table.transform(trigger.source(), trigger.event())?;
        out.push_str(&format!(
            "    {} --> |{}| {}\n",
            id_of(trigger.source()),
            table.event_display_name(trigger.event()),
            id_of(destination),
        ));
    }
    out.push('\n');

    if let Some(id) = ids.get(current) {
        out.push_str(&format!("    style {id} fill:{HIGHLIGHT_COLOR}\n"));
    }

    Ok(out)
}

fn push_title(out: &mut String, title: &str) {
    if !title.is_empty() {
        out.push_str("---\n");
        out.push_str(&format!("title: {title}\n"));
        out.push_str("---\n");
    }
}
