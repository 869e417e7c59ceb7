//! Storage collaborator interface for event templates.

mod memory;

pub use memory::MemoryStore;

use std::future::Future;

use uuid::Uuid;

use crate::error::DbResult;
use crate::model::EventTemplate;
use crate::query::TemplateQuery;

/// Read/write access to stored event templates, always scoped to an owner.
///
/// A template owned by someone else is reported exactly like a missing one.
pub trait TemplateStore: Send + Sync {
    /// ## Summary
    /// Returns the owner's templates matching `query`, in storage order.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be reached.
    fn find_by_owner(
        &self,
        owner_id: Uuid,
        query: &TemplateQuery,
    ) -> impl Future<Output = DbResult<Vec<EventTemplate>>> + Send;

    /// ## Summary
    /// Looks up one template by id within the owner's templates.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be reached.
    fn find_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = DbResult<Option<EventTemplate>>> + Send;

    /// ## Summary
    /// Stores a new template.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be reached.
    fn insert(&self, template: EventTemplate) -> impl Future<Output = DbResult<()>> + Send;

    /// ## Summary
    /// Overwrites the stored template with the same owner and id.
    /// Returns `false` when there is no such template.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be reached.
    fn replace(&self, template: EventTemplate) -> impl Future<Output = DbResult<bool>> + Send;

    /// ## Summary
    /// Removes a template. Returns `false` when there is no such template.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be reached.
    fn delete(&self, owner_id: Uuid, id: Uuid) -> impl Future<Output = DbResult<bool>> + Send;
}
