use async_trait::async_trait;
use mockall::mock;
use shiftboard_core::{
    errors::ShiftResult,
    models::{CreatedEntries, CreatedRequest, NewEntry, NewRequest, Request, RequestDetail, SessionUser},
};

use crate::api::ShiftApi;

// Mock API for testing code that drives the console without a server
mock! {
    pub ShiftApi {}

    #[async_trait]
    impl ShiftApi for ShiftApi {
        async fn login(&self, login_id: &str, password: &str) -> ShiftResult<Option<String>>;

        async fn session(&self) -> ShiftResult<SessionUser>;

        async fn logout(&self) -> ShiftResult<()>;

        async fn list_requests(&self) -> ShiftResult<Vec<Request>>;

        async fn get_request(&self, id: i64) -> ShiftResult<RequestDetail>;

        async fn create_request(&self, request: &NewRequest) -> ShiftResult<CreatedRequest>;

        async fn submit_entries(
            &self,
            request_id: i64,
            entries: &[NewEntry],
        ) -> ShiftResult<CreatedEntries>;
    }
}
