//! HTTP Room Repository 実装
//!
//! Talks to the hotel backend's room endpoints with `reqwest`. When a bearer
//! token is configured it is attached to every request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, info, warn};

use crate::{
    domain::{RepositoryError, Room, RoomId, RoomRepository},
    infrastructure::dto::http::{ErrorPayloadDto, RoomDto},
};

/// List-all-rooms endpoint, relative to the API base URL
pub const ALL_ROOMS_PATH: &str = "/room/all-rooms";

/// Delete-room-by-id endpoint, relative to the API base URL
pub fn delete_room_path(id: RoomId) -> String {
    format!("/room/delete/room/{id}")
}

/// Room repository backed by the hotel HTTP API
pub struct HttpRoomRepository {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRoomRepository {
    /// 新しい HttpRoomRepository を作成
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, token))
    }

    /// Create a repository around an existing `reqwest` client
    pub fn with_client(client: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RepositoryError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))
    }
}

/// Read a response body, mapping read failures to transport errors
async fn read_body(response: Response) -> Result<String, RepositoryError> {
    response
        .text()
        .await
        .map_err(|e| RepositoryError::Transport(e.to_string()))
}

/// Human readable message from an error body: its JSON `message` field,
/// else the raw body, else the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if let Ok(ErrorPayloadDto {
        message: Some(message),
    }) = serde_json::from_str::<ErrorPayloadDto>(body)
        && !message.trim().is_empty()
    {
        return message;
    }
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

fn status_error(status: StatusCode, body: &str) -> RepositoryError {
    RepositoryError::Status {
        status: status.as_u16(),
        message: error_message(status, body),
    }
}

#[async_trait]
impl RoomRepository for HttpRoomRepository {
    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        let url = self.url(ALL_ROOMS_PATH);
        debug!(%url, "GET room list");

        let response = self.send(self.client.get(&url)).await?;
        let status = response.status();
        let body = read_body(response).await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let dtos: Vec<RoomDto> =
            serde_json::from_str(&body).map_err(|e| RepositoryError::Decode(e.to_string()))?;
        let received = dtos.len();
        let rooms: Vec<Room> = dtos
            .into_iter()
            .filter_map(|dto| {
                let id = dto.id;
                Room::try_from(dto)
                    .inspect_err(|e| warn!(room_id = id, error = %e, "skipping invalid room record"))
                    .ok()
            })
            .collect();

        info!(count = rooms.len(), skipped = received - rooms.len(), "room list loaded");
        Ok(rooms)
    }

    async fn delete_room(&self, id: RoomId) -> Result<(), RepositoryError> {
        let url = self.url(&delete_room_path(id));
        debug!(%url, "DELETE room");

        let response = self.send(self.client.delete(&url)).await?;
        let status = response.status();
        let body = read_body(response).await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        // A successful delete answers with an empty body.
        if !body.trim().is_empty() {
            return Err(RepositoryError::Rejected(error_message(status, &body)));
        }
        Ok(())
    }
}
