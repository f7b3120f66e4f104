//! REST client for the lab backend.
//!
//! Screens talk to the backend through the [`AdminApi`] and [`BorrowApi`]
//! traits so their controllers can be exercised against in-memory fakes.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{AppError, BookingPayload, CreateUserRequest, Room, SupplyItem, User};

/// User management endpoints.
#[async_trait(?Send)]
pub trait AdminApi {
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), AppError>;
    async fn set_user_active(&self, user_id: i64, active: bool) -> Result<(), AppError>;
    async fn delete_user(&self, user_id: i64) -> Result<(), AppError>;
}

/// Room, catalogue and borrow request endpoints used by teachers.
#[async_trait(?Send)]
pub trait BorrowApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, AppError>;
    async fn list_supplies(&self) -> Result<Vec<SupplyItem>, AppError>;
    async fn submit_booking(&self, payload: &BookingPayload) -> Result<(), AppError>;
}

/// HTTP implementation of the API traits. Cheap to clone.
#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl PartialEq for RestClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl RestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and turn non-2xx answers into [`AppError`].
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::from_response(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.send(self.client.get(&url)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode(e.to_string()))
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.send(self.client.post(&url).json(body)).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl AdminApi for RestClient {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_json("/admin/users").await
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), AppError> {
        self.post_json("/admin/users", request).await
    }

    async fn set_user_active(&self, user_id: i64, active: bool) -> Result<(), AppError> {
        let url = self.url(&status_path(user_id, active));
        tracing::debug!(%url, "PUT");
        self.send(self.client.put(&url)).await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        let url = self.url(&format!("/admin/users/{user_id}"));
        tracing::debug!(%url, "DELETE");
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl BorrowApi for RestClient {
    async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        self.get_json("/rooms").await
    }

    async fn list_supplies(&self) -> Result<Vec<SupplyItem>, AppError> {
        self.get_json("/items").await
    }

    async fn submit_booking(&self, payload: &BookingPayload) -> Result<(), AppError> {
        self.post_json("/borrow-requests", payload).await
    }
}

fn status_path(user_id: i64, active: bool) -> String {
    format!("/admin/users/{user_id}/status?isActive={active}")
}
