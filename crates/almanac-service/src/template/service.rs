use almanac_db::model::{EventTemplate, NewEventTemplate, TemplateChanges};
use almanac_db::store::TemplateStore;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// Same message whether the template is missing or owned by someone else.
fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("event {id}"))
}

/// ## Summary
/// Creates a template for `owner_id`, applying defaults for omitted fields.
///
/// An interval whose `end` does not follow `start` is stored as given.
///
/// ## Side Effects
/// Inserts the template into the store.
///
/// ## Errors
/// Returns a validation error if the title is blank, or a storage error.
#[tracing::instrument(skip(store, new), fields(title = %new.title))]
pub async fn create_template<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    new: NewEventTemplate,
) -> ServiceResult<EventTemplate> {
    let template = EventTemplate::create(owner_id, new, Utc::now())?;

    if template.end <= template.start {
        tracing::warn!(
            template_id = %template.id,
            start = %template.start,
            end = %template.end,
            "Template interval does not end after it starts"
        );
    }

    store.insert(template.clone()).await?;
    tracing::debug!(template_id = %template.id, repeat = %template.repeat, "Template created");
    Ok(template)
}

/// ## Summary
/// Looks up one of the owner's templates.
///
/// ## Errors
/// Returns [`ServiceError::NotFound`] if the template does not exist or
/// belongs to another owner, or a storage error.
#[tracing::instrument(skip(store))]
pub async fn get_template<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    id: Uuid,
) -> ServiceResult<EventTemplate> {
    store
        .find_by_id(owner_id, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// ## Summary
/// Applies a partial update to one of the owner's templates and returns the result.
///
/// ## Side Effects
/// Replaces the stored template.
///
/// ## Errors
/// Returns [`ServiceError::NotFound`] if the template does not exist or
/// belongs to another owner, a validation error if the new title is blank,
/// or a storage error.
#[tracing::instrument(skip(store, changes))]
pub async fn update_template<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    id: Uuid,
    changes: TemplateChanges,
) -> ServiceResult<EventTemplate> {
    let mut template = get_template(store, owner_id, id).await?;
    template.apply(changes, Utc::now())?;

    if !store.replace(template.clone()).await? {
        // deleted between the read and the write
        return Err(not_found(id));
    }
    tracing::debug!(template_id = %id, "Template updated");
    Ok(template)
}

/// ## Summary
/// Deletes one of the owner's templates.
///
/// ## Side Effects
/// Removes the template from the store.
///
/// ## Errors
/// Returns [`ServiceError::NotFound`] if the template does not exist or
/// belongs to another owner, or a storage error.
#[tracing::instrument(skip(store))]
pub async fn delete_template<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    id: Uuid,
) -> ServiceResult<()> {
    if store.delete(owner_id, id).await? {
        tracing::debug!(template_id = %id, "Template deleted");
        Ok(())
    } else {
        Err(not_found(id))
    }
}
