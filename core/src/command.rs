//! Remote calls requested by the store, and what came back.
//!
//! # Design
//! A `Command` is the store's description of the one remote call an action
//! needs. The host turns it into an `HttpRequest` with [`Command::request`],
//! executes it however it likes, and hands the transport result to
//! [`Command::complete`], which produces the `Outcome` the store applies.
//! Commands are independent values: several may be in flight at once and
//! their outcomes may come back in any order.

use std::fmt;

use crate::client::{check_status, TodoClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoId};

/// A remote call the store wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Create(NewTodo),
    /// Carries the complete item to send; on success it is committed as is.
    Update(Todo),
    Delete(TodoId),
}

/// A confirmed remote result, ready for the store to reconcile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Listed(Vec<Todo>),
    Created(Todo),
    Updated(Todo),
    Deleted(TodoId),
}

/// A remote call that did not succeed, with the command for context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{command} failed: {error}")]
pub struct Failure {
    pub command: Command,
    #[source]
    pub error: ApiError,
}

pub type Outcome = Result<Reply, Failure>;

impl Command {
    pub fn request(&self, client: &TodoClient) -> Result<HttpRequest, ApiError> {
        match self {
            Command::List => Ok(client.build_list_todos()),
            Command::Create(input) => client.build_create_todo(input),
            Command::Update(todo) => client.build_update_todo(todo),
            Command::Delete(id) => Ok(client.build_delete_todo(id)),
        }
    }

    /// Interpret the result of executing this command's request.
    ///
    /// `response` is `Err` when the host could not complete the round-trip.
    pub fn complete(
        self,
        client: &TodoClient,
        response: Result<HttpResponse, ApiError>,
    ) -> Outcome {
        let reply = response.and_then(|response| self.parse(client, response));
        reply.map_err(|error| Failure {
            command: self,
            error,
        })
    }

    /// Build, execute through `send`, and interpret in one step. Convenient
    /// for hosts with a blocking transport.
    pub fn run<F>(self, client: &TodoClient, send: F) -> Outcome
    where
        F: FnOnce(HttpRequest) -> Result<HttpResponse, ApiError>,
    {
        let response = self.request(client).and_then(send);
        self.complete(client, response)
    }

    fn parse(&self, client: &TodoClient, response: HttpResponse) -> Result<Reply, ApiError> {
        match self {
            Command::List => client.parse_list_todos(response).map(Reply::Listed),
            Command::Create(_) => client.parse_create_todo(response).map(Reply::Created),
            // The echo is not trusted; only the status matters.
            Command::Update(todo) => {
                check_status(&response)?;
                Ok(Reply::Updated(todo.clone()))
            }
            Command::Delete(id) => client
                .parse_delete_todo(response)
                .map(|()| Reply::Deleted(id.clone())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::List => write!(f, "list"),
            Command::Create(input) => write!(f, "create {:?}", input.title),
            Command::Update(todo) => write!(f, "update {}", todo.id),
            Command::Delete(id) => write!(f, "delete {id}"),
        }
    }
}
