//! Plain-text views of the client state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use client::Item;
use client::state::items::{ClientState, Draft, EditingItem};

pub const EMPTY_LIST: &str = "No items yet. Add some above!";

/// One list row: `[id] name - description (Completed|Pending)`.
pub fn item_line(item: &Item) -> String {
    let mut line = format!("[{}] {}", item.id, item.name);
    let description = item.description_text();
    if !description.is_empty() {
        line.push_str(" - ");
        line.push_str(description);
    }
    line.push_str(if item.completed { " (Completed)" } else { " (Pending)" });
    line
}

pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return EMPTY_LIST.to_owned();
    }
    items.iter().map(item_line).collect::<Vec<_>>().join("\n")
}

pub fn render_editing(editing: &EditingItem) -> String {
    format!(
        "Edit Item (ID: {})\n  name: {}\n  description: {}\n  completed: {}",
        editing.id,
        editing.name,
        editing.description,
        if editing.completed { "yes" } else { "no" }
    )
}

/// Draft summary, or `None` while both fields are blank.
pub fn render_draft(draft: &Draft) -> Option<String> {
    if draft.name.is_empty() && draft.description.is_empty() {
        return None;
    }
    Some(format!("New item: name={:?} description={:?}", draft.name, draft.description))
}

pub fn render_state(state: &ClientState) -> String {
    let mut sections = Vec::with_capacity(3);
    if let Some(draft) = render_draft(&state.draft_new) {
        sections.push(draft);
    }
    if let Some(editing) = &state.editing {
        sections.push(render_editing(editing));
    }
    sections.push(format!("Current Items\n{}", render_items(&state.items)));
    sections.join("\n\n")
}
