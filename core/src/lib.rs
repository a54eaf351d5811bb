//! I/O-free core for a todo list mirrored from a REST API.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoStore` holds
//! the local list, the active filter and the input buffer, and only changes
//! the list when the host reports a confirmed remote result.
//!
//! # Design
//! - Store actions return a `Command`; the host executes it and feeds the
//!   `Outcome` back through `TodoStore::apply`.
//! - Validation (`Rejected`) happens before a command exists, so rejected
//!   actions never reach the network.
//! - Failures are logged with `tracing` and otherwise swallowed; local state
//!   stays at its last confirmed value.

pub mod client;
pub mod command;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::{TodoClient, JSONPLACEHOLDER_URL};
pub use command::{Command, Failure, Outcome, Reply};
pub use error::{ApiError, Rejected};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{Counts, TodoStore};
pub use types::{Filter, NewTodo, Todo, TodoId, UnknownFilter};
