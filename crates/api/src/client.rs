//! Task API client implementation.
//!
//! This module provides the [`TaskClient`] struct for interacting with the
//! task-management REST API at a fixed base URL.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use reqwest::Response;
use tracing::{debug, instrument};
use url::Url;

use taskboard_protocol::{CompletionUpdate, Filter, NewTask, Task, TaskId};

use crate::error::{Error, Result};

/// Number of days the scheduled view looks ahead.
const SCHEDULED_WINDOW_DAYS: i64 = 7;

/// Computes the bounds of the scheduled view at call time.
///
/// Returns `(start, end)` with `start = now` and `end = now + 7 days`,
/// so `end - start` is exactly seven days.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use taskboard_api::scheduled_window;
///
/// let (start, end) = scheduled_window();
/// assert_eq!(end - start, Duration::days(7));
/// ```
#[must_use]
pub fn scheduled_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now();
    (start, start + Duration::days(SCHEDULED_WINDOW_DAYS))
}

/// HTTP client for the task-management REST API.
///
/// The client is bound to a base URL at construction (for example
/// `http://localhost:8080/api/tasks`) and addresses the item and filter
/// endpoints as sub-paths of it. It holds no task state of its own: every
/// view is freshly fetched and every mutation round-trips through the
/// server.
///
/// # Examples
///
/// ```no_run
/// use taskboard_api::TaskClient;
/// use taskboard_protocol::Filter;
/// use url::Url;
///
/// # async fn example() -> taskboard_api::Result<()> {
/// let base = Url::parse("http://localhost:8080/api/tasks").unwrap();
/// let client = TaskClient::new(base)?;
/// let tasks = client.list(Filter::All).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TaskClient {
    /// The underlying reqwest client.
    http: reqwest::Client,
    /// The fixed API base URL.
    base_url: Url,
}

impl TaskClient {
    /// Creates a new client bound to the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaseUrl`] if the URL cannot carry path segments
    /// (for example a `data:` or `mailto:` URL).
    pub fn new(base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::BaseUrl { url: base_url });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Returns the base URL this client is bound to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the tasks for the given filter view.
    ///
    /// The scheduled view computes its `[now, now + 7 days)` bounds at call
    /// time; the other views map directly onto their endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-2xx status.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: Filter) -> Result<Vec<Task>> {
        let url = match filter {
            Filter::All => self.base_url.clone(),
            Filter::Completed => self.sub_path("completed")?,
            Filter::Incomplete => self.sub_path("incomplete")?,
            Filter::Scheduled => {
                let (start, end) = scheduled_window();
                let mut url = self.sub_path("scheduled")?;
                url.query_pairs_mut()
                    .append_pair("start", &format_instant(start))
                    .append_pair("end", &format_instant(end));
                url
            }
        };

        let response = check_status(self.http.get(url).send().await?)?;
        let tasks: Vec<Task> = response.json().await?;
        debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    /// Creates a task from the given draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-2xx status.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create(&self, draft: &NewTask) -> Result<()> {
        let response = self
            .http
            .post(self.base_url.clone())
            .json(draft)
            .send()
            .await?;
        check_status(response)?;
        debug!("task created");
        Ok(())
    }

    /// Sets the completion state of the task with the given id.
    ///
    /// Sends a partial update `{completed}` to the item endpoint; the
    /// caller passes the logical negation of the task's current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-2xx status.
    #[instrument(skip(self))]
    pub async fn set_completed(&self, id: TaskId, completed: bool) -> Result<()> {
        let url = self.item_url(id)?;
        let response = self
            .http
            .put(url)
            .json(&CompletionUpdate { completed })
            .send()
            .await?;
        check_status(response)?;
        debug!("task completion updated");
        Ok(())
    }

    /// Deletes the task with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-2xx status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: TaskId) -> Result<()> {
        let url = self.item_url(id)?;
        let response = self.http.delete(url).send().await?;
        check_status(response)?;
        debug!("task deleted");
        Ok(())
    }

    /// Builds the URL of an item endpoint, `{base}/{id}`.
    fn item_url(&self, id: TaskId) -> Result<Url> {
        self.sub_path(&id.to_string())
    }

    /// Builds the URL of a sub-resource of the base endpoint.
    fn sub_path(&self, segment: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::BaseUrl {
                url: self.base_url.clone(),
            })?
            .push(segment);
        Ok(url)
    }
}

/// Maps a non-2xx response to [`Error::Status`].
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status { status })
    }
}

/// Formats an instant the way the API expects its query bounds: an
/// ISO-8601 UTC timestamp with millisecond precision.
fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
