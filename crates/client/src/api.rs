use async_trait::async_trait;
use shiftboard_core::{
    errors::ShiftResult,
    models::{CreatedEntries, CreatedRequest, NewEntry, NewRequest, Request, RequestDetail, SessionUser},
};

/// Operations of the shift-request REST API.
///
/// [`crate::client::ApiClient`] talks HTTP; [`crate::mock::MockShiftApi`]
/// stands in for it in tests.
#[async_trait]
pub trait ShiftApi: Send + Sync {
    /// `POST /login`. Returns the session cookie value when the server set one.
    async fn login(&self, login_id: &str, password: &str) -> ShiftResult<Option<String>>;

    /// `GET /session`
    async fn session(&self) -> ShiftResult<SessionUser>;

    /// `DELETE /session`
    async fn logout(&self) -> ShiftResult<()>;

    /// `GET /requests`
    async fn list_requests(&self) -> ShiftResult<Vec<Request>>;

    /// `GET /requests/{id}`
    async fn get_request(&self, id: i64) -> ShiftResult<RequestDetail>;

    /// `POST /requests`
    async fn create_request(&self, request: &NewRequest) -> ShiftResult<CreatedRequest>;

    /// `POST /requests/{id}/submissions`
    async fn submit_entries(&self, request_id: i64, entries: &[NewEntry]) -> ShiftResult<CreatedEntries>;
}
