//! Todo Entity
//!
//! A single todo item: a description plus two independent flags.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// A todo item as stored and as sent over IPC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque unique identifier, assigned by the store
    pub id: String,
    /// Set once at creation
    pub description: String,
    pub completed: bool,
    pub favorite: bool,
}

impl Entity for Todo {
    type Id = String;
    type Draft = NewTodo;
    type Patch = TodoPatch;
}

/// Fields accepted when creating a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub description: String,
}

impl NewTodo {
    /// Rejects the empty string. The description is not trimmed, so a lone
    /// space is accepted as-is.
    pub fn new(description: String) -> DomainResult<Self> {
        if description.is_empty() {
            return Err(DomainError::InvalidInput(
                "description must not be empty".to_string(),
            ));
        }
        Ok(Self { description })
    }
}

/// Flag changes for an existing todo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub completed: Option<bool>,
    pub favorite: Option<bool>,
}

impl TodoPatch {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Default::default()
        }
    }

    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Default::default()
        }
    }
}
