//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait
///
/// Generic over any Entity type. Every method is a single store operation,
/// and the affected row comes back from the store itself rather than being
/// re-read afterwards.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity; the store assigns its ID
    async fn insert(&self, draft: T::Draft) -> DomainResult<T>;

    /// Delete by ID, returning the removed entity
    ///
    /// Fails with `DomainError::NotFound` if no row has this ID.
    async fn delete(&self, id: &T::Id) -> DomainResult<T>;

    /// Apply a partial update by ID, returning the stored result
    ///
    /// Fails with `DomainError::NotFound` if no row has this ID.
    async fn update(&self, id: &T::Id, patch: T::Patch) -> DomainResult<T>;

    /// All entities in insertion order
    async fn find_all(&self) -> DomainResult<Vec<T>>;
}
