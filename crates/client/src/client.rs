//! # HTTP Client
//!
//! [`ApiClient`] wraps `reqwest` the way the browser front end wrapped
//! `fetch`: every call carries the session cookie, and a `401` comes back as
//! [`ShiftError::Authentication`](shiftboard_core::errors::ShiftError) so the
//! caller can send the user to `login`.

use std::time::Duration;

use async_trait::async_trait;
use eyre::WrapErr;
use reqwest::{
    Method, RequestBuilder, Response,
    header::{COOKIE, SET_COOKIE},
};
use serde::{Serialize, de::DeserializeOwned};
use shiftboard_core::{
    errors::ShiftResult,
    models::{
        CreatedEntries, CreatedRequest, LoginRequest, NewEntry, NewRequest, Request, RequestDetail,
        SessionResponse, SessionUser,
    },
};
use tracing::{debug, info};

use crate::{api::ShiftApi, response::check_status};

/// Name of the cookie the API keeps the session in.
pub const SESSION_COOKIE: &str = "login_session";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<String>,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ShiftResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        })
    }

    /// Attaches a session cookie value to every following request.
    pub fn with_session(mut self, session: Option<String>) -> Self {
        self.session = session.filter(|value| !value.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "Sending API request");

        let builder = self.http.request(method, url);
        match &self.session {
            Some(session) => builder.header(COOKIE, format!("{SESSION_COOKIE}={session}")),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ShiftResult<Response> {
        let response = builder
            .send()
            .await
            .wrap_err("Failed to send request to shift API")?;
        check_status(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ShiftResult<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        let data = response
            .json::<T>()
            .await
            .wrap_err_with(|| format!("Failed to parse response of GET {path}"))?;
        Ok(data)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ShiftResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        let data = response
            .json::<T>()
            .await
            .wrap_err_with(|| format!("Failed to parse response of POST {path}"))?;
        Ok(data)
    }

    async fn delete(&self, path: &str) -> ShiftResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// Pulls the session value out of a `Set-Cookie` header.
pub fn session_from_set_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    (name.trim() == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
}

#[async_trait]
impl ShiftApi for ApiClient {
    async fn login(&self, login_id: &str, password: &str) -> ShiftResult<Option<String>> {
        let body = LoginRequest {
            login_id: login_id.to_string(),
            password: password.to_string(),
        };
        let response = self.send(self.request(Method::POST, "/login").json(&body)).await?;

        let session = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(session_from_set_cookie);

        info!(login_id, has_session = session.is_some(), "Logged in");
        Ok(session)
    }

    async fn session(&self) -> ShiftResult<SessionUser> {
        let response: SessionResponse = self.get("/session").await?;
        Ok(response.user)
    }

    async fn logout(&self) -> ShiftResult<()> {
        self.delete("/session").await
    }

    async fn list_requests(&self) -> ShiftResult<Vec<Request>> {
        // The server sends `null` when no request exists yet.
        let requests: Option<Vec<Request>> = self.get("/requests").await?;
        Ok(requests.unwrap_or_default())
    }

    async fn get_request(&self, id: i64) -> ShiftResult<RequestDetail> {
        self.get(&format!("/requests/{id}")).await
    }

    async fn create_request(&self, request: &NewRequest) -> ShiftResult<CreatedRequest> {
        let created: CreatedRequest = self.post("/requests", request).await?;
        info!(id = created.id, "Created request");
        Ok(created)
    }

    async fn submit_entries(&self, request_id: i64, entries: &[NewEntry]) -> ShiftResult<CreatedEntries> {
        let created: CreatedEntries = self
            .post(&format!("/requests/{request_id}/submissions"), entries)
            .await?;
        info!(request_id, count = created.entries.len(), "Submitted entries");
        Ok(created)
    }
}
