//! Local mirror of the remote todo list.
//!
//! # Design
//! Every mutating action is split the way `TodoClient` splits a round-trip:
//! the request half (`initialize`, `create`, `update`, ...) only validates
//! against the current state and returns the `Command` to run, and
//! [`TodoStore::apply`] reconciles once an `Outcome` comes back. `items`
//! therefore only ever changes in response to a confirmed remote result.
//! There is no optimistic state, so a failed call leaves nothing to roll back.
//!
//! Outcomes are applied in arrival order. Two calls against the same id race,
//! and whichever reply is applied last decides the local state.
//!
//! # Invariants
//! - Ids in `items` are unique.
//! - `filter` and `draft` never influence `items`.
//! - `visible_items` is a pure projection of `(items, filter)`.

use tracing::{debug, warn};

use crate::command::{Command, Failure, Outcome, Reply};
use crate::error::Rejected;
use crate::types::{Filter, NewTodo, Todo, TodoId};

/// Summary of the list for a status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// State container for one todo list view.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    items: Vec<Todo>,
    filter: Filter,
    draft: String,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The "new todo" input buffer.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Returns whether the filter changed.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        let changed = self.filter != filter;
        self.filter = filter;
        changed
    }

    /// Items matching the current filter, in list order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Todo> + '_ {
        let filter = self.filter;
        self.items.iter().filter(move |todo| filter.matches(todo))
    }

    pub fn counts(&self) -> Counts {
        let completed = self.items.iter().filter(|todo| todo.completed).count();
        Counts {
            total: self.items.len(),
            completed,
            active: self.items.len() - completed,
        }
    }

    pub fn initialize(&self) -> Command {
        Command::List
    }

    /// Blank titles are rejected; anything else is sent exactly as typed.
    pub fn create(&self, title: &str) -> Result<Command, Rejected> {
        non_blank(title)?;
        Ok(Command::Create(NewTodo {
            title: title.to_string(),
            completed: false,
        }))
    }

    /// `create` with the contents of the input buffer.
    pub fn submit_draft(&self) -> Result<Command, Rejected> {
        self.create(&self.draft)
    }

    pub fn update(&self, id: &TodoId, new_title: &str) -> Result<Command, Rejected> {
        let existing = self.existing(id)?;
        non_blank(new_title)?;
        Ok(Command::Update(Todo {
            title: new_title.to_string(),
            ..existing.clone()
        }))
    }

    pub fn toggle_complete(&self, id: &TodoId) -> Result<Command, Rejected> {
        let existing = self.existing(id)?;
        Ok(Command::Update(Todo {
            completed: !existing.completed,
            ..existing.clone()
        }))
    }

    /// No local precondition: deleting an id we never saw is the server's call.
    pub fn delete(&self, id: TodoId) -> Command {
        Command::Delete(id)
    }

    /// Reconcile local state with a finished remote call.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Ok(reply) => self.apply_reply(reply),
            Err(Failure { command, error }) => {
                warn!(%command, %error, "remote call failed; keeping local state");
            }
        }
    }

    fn apply_reply(&mut self, reply: Reply) {
        match reply {
            Reply::Listed(todos) => {
                let received = todos.len();
                self.items = Vec::with_capacity(received);
                for todo in todos {
                    if self.get(&todo.id).is_some() {
                        warn!(id = %todo.id, "listing repeated an id; keeping the first");
                        continue;
                    }
                    self.items.push(todo);
                }
                debug!(received, kept = self.items.len(), "list loaded");
            }
            Reply::Created(todo) => {
                debug!(id = %todo.id, "todo created");
                match self.position(&todo.id) {
                    Some(index) => {
                        warn!(id = %todo.id, "server reused an existing id; replacing in place");
                        self.items[index] = todo;
                    }
                    None => self.items.push(todo),
                }
                self.draft.clear();
            }
            Reply::Updated(todo) => match self.position(&todo.id) {
                Some(index) => {
                    debug!(id = %todo.id, "todo updated");
                    self.items[index] = todo;
                }
                None => debug!(id = %todo.id, "update confirmed for an item no longer listed"),
            },
            Reply::Deleted(id) => {
                let before = self.items.len();
                self.items.retain(|todo| todo.id != id);
                debug!(%id, removed = before - self.items.len(), "todo deleted");
            }
        }
    }

    fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|todo| &todo.id == id)
    }

    fn existing(&self, id: &TodoId) -> Result<&Todo, Rejected> {
        self.get(id).ok_or_else(|| Rejected::UnknownId(id.clone()))
    }
}

fn non_blank(title: &str) -> Result<(), Rejected> {
    if title.trim().is_empty() {
        return Err(Rejected::EmptyTitle);
    }
    Ok(())
}
