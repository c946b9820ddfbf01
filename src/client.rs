//! Task list client: remote CRUD with a one-shot local fallback.
//!
//! Every operation first talks to the remote API. On success the collection
//! is re-fetched (or, for `list`, mirrored) so the view always reflects the
//! source of truth. On a transport failure the operation is applied to the
//! local mirror instead and the request is not retried. Transport errors are
//! logged, never returned; local store failures do propagate.

use crate::api::TaskApi;
use crate::error::{ClientError, Result};
use crate::store::TaskCache;
use crate::types::Task;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client over a remote task API with a local offline mirror.
///
/// Both collaborators are injected: the API seam so failure paths can be
/// scripted in tests, the cache so the fallback works against any
/// [`crate::store::KvStore`].
pub struct TaskClient {
    api: Arc<dyn TaskApi>,
    cache: TaskCache,
}

impl TaskClient {
    pub fn new(api: Arc<dyn TaskApi>, cache: TaskCache) -> Self {
        Self { api, cache }
    }

    /// Fetch the full collection, mirroring it locally on success.
    ///
    /// When the API is unreachable, returns whatever the mirror holds
    /// (empty if nothing was ever stored).
    pub async fn list(&self) -> Result<Vec<Task>> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                self.cache.save(&tasks)?;
                debug!(count = tasks.len(), "fetched tasks from server");
                Ok(tasks)
            }
            Err(err) if err.is_remote() => {
                warn!(error = %err, "failed to fetch from server, using local mirror");
                self.cache.load()
            }
            Err(err) => Err(err),
        }
    }

    /// Create a task with the given text.
    ///
    /// Success re-runs [`Self::list`] to refresh from the source of truth.
    /// When the API is unreachable, a task with a locally generated id is
    /// appended to the mirror instead; no re-fetch is attempted since the
    /// remote is known unreachable.
    pub async fn create(&self, text: &str) -> Result<Vec<Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::EmptyText);
        }

        match self.api.create_task(text).await {
            Ok(created) => {
                debug!(id = %created.id, "task created on server");
                self.list().await
            }
            Err(err) if err.is_remote() => {
                warn!(error = %err, "failed to add task on server, saving locally");
                let mut tasks = self.cache.load()?;
                tasks.push(Task::synthesized(text));
                self.cache.save(&tasks)?;
                Ok(tasks)
            }
            Err(err) => Err(err),
        }
    }

    /// Set the completion flag of the task with the given id.
    ///
    /// When the API is unreachable, the matching task in the mirror is
    /// flipped in place; an unknown id is silently a no-op.
    pub async fn toggle(&self, id: &str, completed: bool) -> Result<Vec<Task>> {
        match self.api.update_task(id, completed).await {
            Ok(()) => self.list().await,
            Err(err) if err.is_remote() => {
                warn!(error = %err, "failed to update task on server, updating locally");
                let mut tasks = self.cache.load()?;
                if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                    task.completed = completed;
                    self.cache.save(&tasks)?;
                }
                Ok(tasks)
            }
            Err(err) => Err(err),
        }
    }

    /// Delete the task with the given id.
    ///
    /// When the API is unreachable, the matching task is removed from the
    /// mirror; an unknown id leaves the collection unchanged.
    pub async fn delete(&self, id: &str) -> Result<Vec<Task>> {
        match self.api.delete_task(id).await {
            Ok(()) => self.list().await,
            Err(err) if err.is_remote() => {
                warn!(error = %err, "failed to delete task on server, removing locally");
                let mut tasks = self.cache.load()?;
                tasks.retain(|t| t.id != id);
                self.cache.save(&tasks)?;
                Ok(tasks)
            }
            Err(err) => Err(err),
        }
    }
}
