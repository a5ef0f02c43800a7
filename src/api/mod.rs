//! HTTP API for the task service.
//!
//! ## Endpoints
//!
//! - `GET /tasks` - List all tasks
//! - `POST /tasks` - Create a task (silently overwrites an existing id)
//! - `GET /tasks/{id}` - Get a task by id
//! - `DELETE /tasks/{id}` - Delete a task by id

mod routes;
mod tasks;

pub use routes::serve;
