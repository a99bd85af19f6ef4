//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod todo;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::{Todo, NewTodo, TodoPatch};
