//! Remote task API adapter.
//!
//! The client talks to the remote endpoint through the [`TaskApi`] trait so
//! the fallback path can be exercised against a scripted double. The
//! production implementation is a thin `reqwest` wrapper over the four
//! endpoints; any transport error or non-2xx status counts uniformly as an
//! unreachable API.

use crate::error::Result;
use crate::types::{NewTask, Task, TaskPatch};
use async_trait::async_trait;

/// Operations the remote task API exposes.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full task collection.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Create a task with the given text; the server assigns the id.
    async fn create_task(&self, text: &str) -> Result<Task>;

    /// Set the completion flag of an existing task. The response body is
    /// ignored.
    async fn update_task(&self, id: &str, completed: bool) -> Result<()>;

    /// Delete a task. The response body is ignored.
    async fn delete_task(&self, id: &str) -> Result<()>;
}

/// HTTP implementation of [`TaskApi`].
///
/// No timeout, no retries: a single failed call is reported to the caller,
/// which decides whether to fall back to the local mirror.
#[derive(Clone)]
pub struct HttpTaskApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self
            .http
            .get(self.url("/tasks"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Task>>()
            .await?;
        Ok(tasks)
    }

    async fn create_task(&self, text: &str) -> Result<Task> {
        let task = self
            .http
            .post(self.url("/task"))
            .json(&NewTask {
                text: text.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json::<Task>()
            .await?;
        Ok(task)
    }

    async fn update_task(&self, id: &str, completed: bool) -> Result<()> {
        self.http
            .put(self.url(&format!("/task/{}", id)))
            .json(&TaskPatch { completed })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        self.http
            .delete(self.url(&format!("/task/{}", id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
