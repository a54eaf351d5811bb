//! Owns the `TodoStore` and fans remote calls out to the blocking pool.
//!
//! # Design
//! Each command runs on its own `spawn_blocking` task and posts its
//! `Outcome` to an unbounded channel. The caller holds the receiving end and
//! feeds outcomes back through [`Session::apply`] on a single task, so the
//! store is never shared and needs no lock. Calls are not queued, merged or
//! cancelled; whichever outcome arrives last wins.

use std::sync::Arc;

use tokio::sync::mpsc;
use todo_core::{Command, Filter, Outcome, TodoStore};
use tracing::debug;

use crate::input::{Action, HELP};
use crate::render;
use crate::service::RemoteTodoService;

/// What the front-end should do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A remote call is in flight; output follows when it lands.
    Pending,
    /// Print this text.
    Show(String),
    Quit,
}

pub struct Session<S> {
    store: TodoStore,
    service: Arc<S>,
    outcomes: mpsc::UnboundedSender<Outcome>,
    in_flight: usize,
}

impl<S: RemoteTodoService> Session<S> {
    pub fn new(service: S) -> (Self, mpsc::UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            store: TodoStore::new(),
            service: Arc::new(service),
            outcomes: tx,
            in_flight: 0,
        };
        (session, rx)
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
    }

    /// Kick off the initial listing.
    pub fn start(&mut self) {
        let command = self.store.initialize();
        self.dispatch(command);
    }

    pub fn handle(&mut self, action: Action) -> Step {
        let command = match action {
            Action::Add(title) => {
                self.store.set_draft(title);
                self.store.submit_draft()
            }
            Action::Edit(id, title) => self.store.update(&id, &title),
            Action::Toggle(id) => self.store.toggle_complete(&id),
            Action::Remove(id) => Ok(self.store.delete(id)),
            Action::Filter(filter) => {
                self.store.set_filter(filter);
                return Step::Show(render::list(&self.store));
            }
            Action::List => return Step::Show(render::list(&self.store)),
            Action::Help => return Step::Show(HELP.to_string()),
            Action::Quit => return Step::Quit,
        };
        match command {
            Ok(command) => {
                self.dispatch(command);
                Step::Pending
            }
            Err(rejected) => Step::Show(format!("not sent: {rejected}")),
        }
    }

    /// Reconcile a finished call and return the text to show for it.
    pub fn apply(&mut self, outcome: Outcome) -> String {
        self.in_flight = self.in_flight.saturating_sub(1);
        let notice = outcome.as_ref().err().map(|failure| format!("failed: {failure}"));
        self.store.apply(outcome);
        match notice {
            Some(notice) => notice,
            None => render::list(&self.store),
        }
    }

    fn dispatch(&mut self, command: Command) {
        debug!(%command, "dispatching");
        self.in_flight += 1;
        let service = Arc::clone(&self.service);
        let tx = self.outcomes.clone();
        tokio::task::spawn_blocking(move || {
            let outcome = service.execute(command);
            // The receiver only goes away on shutdown.
            let _ = tx.send(outcome);
        });
    }
}
