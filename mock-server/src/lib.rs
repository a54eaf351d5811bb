//! In-memory stand-in for the JSONPlaceholder `/todos` resource.
//!
//! Ids are sequential numbers, listings come back in id order, `PUT` replaces
//! the whole item and `DELETE` answers 200 with `{}`. Unlike JSONPlaceholder,
//! writes are actually kept, so a client can observe its own changes.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of a `PUT`. Any `id` in the body is ignored; the path wins.
#[derive(Deserialize)]
pub struct ReplaceTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug)]
pub struct Todos {
    next_id: u64,
    items: BTreeMap<u64, Todo>,
}

impl Todos {
    fn seeded(seed: Vec<Todo>) -> Self {
        let next_id = seed.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            next_id,
            items: seed.into_iter().map(|t| (t.id, t)).collect(),
        }
    }
}

pub type Db = Arc<RwLock<Todos>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-populated with `seed`. New ids continue after the largest seeded id.
pub fn app_with(seed: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(Todos::seeded(seed)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(replace_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn serve(listener: TcpListener, seed: Vec<Todo>) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, seeded = seed.len(), "mock todo server listening");
    }
    axum::serve(listener, app_with(seed)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.items.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut todos = db.write().await;
    let todo = Todo {
        id: todos.next_id,
        title: input.title,
        completed: input.completed,
    };
    todos.next_id += 1;
    todos.items.insert(todo.id, todo.clone());
    debug!(id = todo.id, "created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ReplaceTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.completed = input.completed;
    debug!(id, "replaced");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut todos = db.write().await;
    todos.items.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(id, "deleted");
    Ok(Json(serde_json::json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_numeric_id() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn replace_todo_ignores_body_id() {
        let input: ReplaceTodo =
            serde_json::from_str(r#"{"id":99,"title":"Full","completed":true}"#).unwrap();
        assert_eq!(input.title, "Full");
        assert!(input.completed);
    }

    #[test]
    fn seeding_continues_ids_after_the_largest() {
        let todos = Todos::seeded(vec![
            Todo {
                id: 4,
                title: "a".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                title: "b".to_string(),
                completed: true,
            },
        ]);
        assert_eq!(todos.next_id, 5);
        assert_eq!(todos.items.keys().copied().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn empty_seed_starts_at_one() {
        assert_eq!(Todos::seeded(Vec::new()).next_id, 1);
    }
}
