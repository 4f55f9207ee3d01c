//! Event API operations.

use async_trait::async_trait;
use evently_core::event::EventCreateRequest;

use super::EventlyClient;
use crate::error::Result;

/// Remote event creation, as seen by the form controller.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// Create a remote event resource. One request, no retries.
    async fn create_event(&self, req: &EventCreateRequest) -> Result<()>;
}

#[async_trait]
impl EventsApi for EventlyClient {
    async fn create_event(&self, req: &EventCreateRequest) -> Result<()> {
        tracing::debug!(
            title = %req.title,
            organizer_id = %req.organizer_id,
            "POST /events"
        );
        let response = self
            .client
            .post(self.url("/events"))
            .json(req)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
