//! Plain-text rendering of the store.

use std::fmt::Write;

use todo_core::TodoStore;

/// The filtered list with a one-line summary on top.
pub fn list(store: &TodoStore) -> String {
    let counts = store.counts();
    let mut out = format!(
        "filter: {}  ({} total, {} completed, {} active)",
        store.filter(),
        counts.total,
        counts.completed,
        counts.active
    );
    let mut shown = 0;
    for todo in store.visible_items() {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = write!(out, "\n  [{mark}] {}  {}", todo.id, todo.title);
        shown += 1;
    }
    if shown == 0 {
        out.push_str("\n  (nothing to show)");
    }
    out
}
