//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Handlers only see `dyn Repository<Task>`, so the backing store can be swapped.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity from a validated draft
    async fn create(&self, draft: &T::Draft) -> DomainResult<T>;

    /// List all entities in store iteration order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Apply a partial update. `NotFound` when the id does not exist.
    async fn update(&self, id: T::Id, patch: &T::Patch) -> DomainResult<T>;

    /// Delete entity by ID. `NotFound` when the id does not exist.
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
